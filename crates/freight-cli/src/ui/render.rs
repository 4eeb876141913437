//! Menu headers, record tables and status lines.

use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL_CONDENSED};
use comfy_table::{ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{label_style, paint, title_style, Badge};

const RULE_MAX: usize = 60;

/// Section header. Plain output keeps the `--- Title ---` form.
pub fn header(ctx: &UiContext, title: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("\n--- {} ---", title);
    }
    let glyph = if ctx.unicode { "\u{2500}" } else { "-" };
    format!(
        "\n{}\n{}",
        paint(title, title_style(), ctx.color),
        glyph.repeat(ctx.width.min(RULE_MAX))
    )
}

/// Indented `key: value` line under a record heading.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    format!(
        "  {} {}",
        paint(&format!("{}:", key), label_style(), ctx.color),
        value
    )
}

/// Records as a table, one header per column.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(if ctx.unicode {
            UTF8_FULL_CONDENSED
        } else {
            ASCII_MARKDOWN
        })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

/// Message with its badge in pretty mode, bare in plain mode.
fn tagged(ctx: &UiContext, badge: Badge, message: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = paint(badge.label(ctx.unicode), badge.style(), ctx.color);
        format!("{} {}", label, message)
    } else {
        message.to_string()
    }
}

pub fn print_success(ctx: &UiContext, message: &str) {
    println!("{}", tagged(ctx, Badge::Ok, message));
}

pub fn print_info(ctx: &UiContext, message: &str) {
    println!("{}", tagged(ctx, Badge::Info, message));
}

fn error_text(ctx: &UiContext, message: &str, hint: Option<&str>) -> String {
    let mut text = tagged(ctx, Badge::Err, message);
    if let Some(hint) = hint {
        text.push('\n');
        if ctx.mode.is_pretty() {
            text.push_str(&paint("Dica:", label_style(), ctx.color));
            text.push(' ');
        }
        text.push_str(hint);
    }
    text
}

/// Errors that end an action go to stdout, in line with the menu transcript.
pub fn print_error(ctx: &UiContext, message: &str, hint: Option<&str>) {
    println!("{}", error_text(ctx, message, hint));
}

/// Warnings go to stderr.
pub fn print_warning(ctx: &UiContext, message: &str) {
    if ctx.mode.is_pretty() {
        eprintln!("{}", tagged(ctx, Badge::Warn, message));
    } else {
        eprintln!("Aviso: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn terminal(unicode: bool) -> UiContext {
        UiContext {
            mode: OutputMode::Pretty,
            unicode,
            ..UiContext::plain()
        }
    }

    #[test]
    fn test_plain_header_matches_menu_style() {
        assert_eq!(
            header(&UiContext::plain(), "Exportar Dados"),
            "\n--- Exportar Dados ---"
        );
    }

    #[test]
    fn test_pretty_header_draws_rule() {
        let text = header(&terminal(true), "Exportar Dados");
        assert!(text.starts_with("\nExportar Dados\n"));
        assert!(text.ends_with(&"\u{2500}".repeat(RULE_MAX)));
    }

    #[test]
    fn test_tagged_by_mode() {
        assert_eq!(tagged(&UiContext::plain(), Badge::Ok, "Salvo"), "Salvo");
        assert_eq!(tagged(&terminal(false), Badge::Ok, "Salvo"), "[OK] Salvo");
    }

    #[test]
    fn test_error_text_hint() {
        assert_eq!(
            error_text(&UiContext::plain(), "Falhou", Some("tente de novo")),
            "Falhou\ntente de novo"
        );
        assert_eq!(
            error_text(&terminal(false), "Falhou", Some("tente de novo")),
            "[ERR] Falhou\nDica: tente de novo"
        );
    }

    #[test]
    fn test_kv_line() {
        assert_eq!(
            kv(&UiContext::plain(), "Capacidade", "1000.0 kg"),
            "  Capacidade: 1000.0 kg"
        );
    }

    #[test]
    fn test_ascii_table() {
        let rows = vec![vec!["1".to_string(), "Milho".to_string()]];
        let text = table(&terminal(false), &["ID", "Nome"], &rows);
        assert!(text.contains("| ID"));
        assert!(text.contains("Milho"));
    }
}
