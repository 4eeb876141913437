//! Menu action handlers.
//!
//! Properties, vehicles and products share one add/edit/remove/list flow,
//! parameterized by [`EntityScreen`]. Calculation, ledger and export have their
//! own modules.

pub mod calculate;
pub mod export;
pub mod ledger;
mod products;
mod properties;
mod vehicles;

use freight_core::registry::{Editable, Referenced};
use freight_core::{FreightError, Product, Property, Registry, Vehicle};

use crate::app::App;
use crate::config::AppConfig;
use crate::prompt::{positive_id, Prompter};
use crate::shell::EntityKind;
use crate::ui::{header, kv, print_success, table, UiContext};

/// Prompts and display text for one entity type.
pub trait EntityScreen: Editable + Referenced {
    /// Heading of the record list, e.g. `Lista de Veículos`.
    const LIST_TITLE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const ADDED_MESSAGE: &'static str;
    const UPDATED_MESSAGE: &'static str;
    const REMOVED_MESSAGE: &'static str;
    const EDIT_ID_PROMPT: &'static str;
    const REMOVE_ID_PROMPT: &'static str;
    const COLUMNS: &'static [&'static str];

    /// First line of a record in plain output, after `ID n: `.
    fn title(&self) -> String;

    /// Labelled detail lines in plain output.
    fn details(&self) -> Vec<(&'static str, String)>;

    /// Table cells, one per entry of `COLUMNS`.
    fn row(&self) -> Vec<String>;

    fn prompt_draft(prompter: &mut dyn Prompter) -> anyhow::Result<Self::Draft>;

    fn prompt_patch(
        &self,
        prompter: &mut dyn Prompter,
        config: &AppConfig,
    ) -> anyhow::Result<Self::Patch>;
}

pub fn add(app: &mut App, kind: EntityKind) -> anyhow::Result<()> {
    match kind {
        EntityKind::Property => add_record::<Property>(app),
        EntityKind::Vehicle => add_record::<Vehicle>(app),
        EntityKind::Product => add_record::<Product>(app),
    }
}

pub fn edit(app: &mut App, kind: EntityKind) -> anyhow::Result<()> {
    match kind {
        EntityKind::Property => edit_record::<Property>(app),
        EntityKind::Vehicle => edit_record::<Vehicle>(app),
        EntityKind::Product => edit_record::<Product>(app),
    }
}

pub fn remove(app: &mut App, kind: EntityKind) -> anyhow::Result<()> {
    match kind {
        EntityKind::Property => remove_record::<Property>(app),
        EntityKind::Vehicle => remove_record::<Vehicle>(app),
        EntityKind::Product => remove_record::<Product>(app),
    }
}

pub fn list(app: &mut App, kind: EntityKind) -> anyhow::Result<()> {
    match kind {
        EntityKind::Property => {
            show_records::<Property>(app);
        }
        EntityKind::Vehicle => {
            show_records::<Vehicle>(app);
        }
        EntityKind::Product => {
            show_records::<Product>(app);
        }
    }
    Ok(())
}

fn add_record<R: EntityScreen>(app: &mut App) -> anyhow::Result<()> {
    let draft = R::prompt_draft(app.prompter.as_mut())?;
    Registry::<R>::new(&app.store).add(draft)?;
    print_success(&app.ui, R::ADDED_MESSAGE);
    Ok(())
}

fn edit_record<R: EntityScreen>(app: &mut App) -> anyhow::Result<()> {
    let records = show_records::<R>(app);
    if records.is_empty() {
        return Ok(());
    }

    let id = positive_id(app.prompter.as_mut(), R::EDIT_ID_PROMPT)?;
    let current = records
        .into_iter()
        .find(|record| record.id() == id)
        .ok_or(FreightError::NotFound {
            collection: R::COLLECTION,
            id,
        })?;
    let patch = current.prompt_patch(app.prompter.as_mut(), &app.config)?;
    Registry::<R>::new(&app.store).edit(id, patch)?;
    print_success(&app.ui, R::UPDATED_MESSAGE);
    Ok(())
}

fn remove_record<R: EntityScreen>(app: &mut App) -> anyhow::Result<()> {
    let records = show_records::<R>(app);
    if records.is_empty() {
        return Ok(());
    }

    let id = positive_id(app.prompter.as_mut(), R::REMOVE_ID_PROMPT)?;
    Registry::<R>::new(&app.store).remove(id)?;
    print_success(&app.ui, R::REMOVED_MESSAGE);
    Ok(())
}

/// Print every record of `R` and hand them back for id selection.
pub(crate) fn show_records<R: EntityScreen>(app: &App) -> Vec<R> {
    let records = Registry::<R>::new(&app.store).list();
    if records.is_empty() {
        println!("{}", R::EMPTY_MESSAGE);
    } else {
        println!("{}", render_records(&app.ui, &records));
    }
    records
}

fn render_records<R: EntityScreen>(ctx: &UiContext, records: &[R]) -> String {
    let mut lines = vec![header(ctx, R::LIST_TITLE)];
    if ctx.mode.is_pretty() {
        let rows: Vec<Vec<String>> = records.iter().map(R::row).collect();
        lines.push(table(ctx, R::COLUMNS, &rows));
    } else {
        for record in records {
            lines.push(format!("ID {}: {}", record.id(), record.title()));
            lines.extend(
                record
                    .details()
                    .into_iter()
                    .map(|(key, value)| kv(ctx, key, &value)),
            );
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_core::Timestamp;

    fn vehicle(id: u32, kind: &str) -> Vehicle {
        Vehicle {
            id,
            kind: kind.to_string(),
            capacity_kg: 1000.0,
            cost_per_km: 2.5,
            registered_at: Timestamp::parse("01/03/2024 08:15").unwrap(),
        }
    }

    #[test]
    fn test_render_plain_lists_each_record() {
        let text = render_records(
            &UiContext::plain(),
            &[vehicle(1, "Caminhão"), vehicle(2, "Van")],
        );
        let expected = [
            "",
            "--- Lista de Veículos ---",
            "ID 1: Caminhão",
            "  Capacidade: 1000.0 kg",
            "  Custo por km: R$ 2.5",
            "  Data de cadastro: 01/03/2024 08:15",
            "ID 2: Van",
            "  Capacidade: 1000.0 kg",
            "  Custo por km: R$ 2.5",
            "  Data de cadastro: 01/03/2024 08:15",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_pretty_uses_table() {
        let ctx = UiContext {
            mode: crate::ui::mode::OutputMode::Pretty,
            unicode: false,
            ..UiContext::plain()
        };
        let text = render_records(&ctx, &[vehicle(3, "Trator")]);
        assert!(text.contains("| ID"));
        assert!(text.contains("Trator"));
    }
}
