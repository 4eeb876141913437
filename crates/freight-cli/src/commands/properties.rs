use freight_core::model::{NewProperty, PropertyPatch};
use freight_core::Property;

use super::EntityScreen;
use crate::config::AppConfig;
use crate::prompt::{
    number_optional, number_required, text_optional, text_required, Bound, Prompter,
};
use crate::ui::format::{quantity, truncate};

const LOCATION_CELL_WIDTH: usize = 32;

impl EntityScreen for Property {
    const LIST_TITLE: &'static str = "Lista de Propriedades";
    const EMPTY_MESSAGE: &'static str = "Nenhuma propriedade encontrada.";
    const ADDED_MESSAGE: &'static str = "Propriedade adicionada com sucesso!";
    const UPDATED_MESSAGE: &'static str = "Propriedade atualizada com sucesso!";
    const REMOVED_MESSAGE: &'static str = "Propriedade removida com sucesso!";
    const EDIT_ID_PROMPT: &'static str = "Escolha o ID da propriedade para alterar";
    const REMOVE_ID_PROMPT: &'static str = "Escolha o ID da propriedade para remover";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Nome",
        "Localização",
        "Área (ha)",
        "Distância (km)",
        "Cadastro",
    ];

    fn title(&self) -> String {
        self.name.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Localização", self.location.clone()),
            ("Área", format!("{} ha", quantity(self.production_area))),
            (
                "Distância para o próximo centro de distribuição",
                format!("{} km", quantity(self.distance_km)),
            ),
            ("Data de cadastro", self.registered_at.to_string()),
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            truncate(&self.location, LOCATION_CELL_WIDTH),
            quantity(self.production_area),
            quantity(self.distance_km),
            self.registered_at.to_string(),
        ]
    }

    fn prompt_draft(prompter: &mut dyn Prompter) -> anyhow::Result<NewProperty> {
        Ok(NewProperty {
            name: text_required(prompter, "Nome da propriedade")?,
            location: text_required(prompter, "Localização")?,
            production_area: number_required(prompter, "Área de produção (ha)", Bound::NonNegative)?,
            distance_km: number_required(
                prompter,
                "Distância até o centro de distribuição (km)",
                Bound::NonNegative,
            )?,
        })
    }

    fn prompt_patch(
        &self,
        prompter: &mut dyn Prompter,
        config: &AppConfig,
    ) -> anyhow::Result<PropertyPatch> {
        let zero_keeps = config.zero_keeps_previous;
        Ok(PropertyPatch {
            name: text_optional(prompter, &format!("Novo nome [{}]", self.name))?,
            location: text_optional(prompter, &format!("Nova localização [{}]", self.location))?,
            production_area: number_optional(
                prompter,
                &format!(
                    "Nova área de produção (ha) [{}]",
                    quantity(self.production_area)
                ),
                Bound::NonNegative,
                zero_keeps,
            )?,
            distance_km: number_optional(
                prompter,
                &format!("Nova distância (km) [{}]", quantity(self.distance_km)),
                Bound::NonNegative,
                zero_keeps,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use freight_core::Timestamp;
    use std::path::PathBuf;

    fn config(zero_keeps_previous: bool) -> AppConfig {
        AppConfig {
            data_dir: PathBuf::from("/tmp/dados"),
            export_dir: PathBuf::from("/tmp/export"),
            export_default_name: "export".to_string(),
            zero_keeps_previous,
        }
    }

    fn fazenda() -> Property {
        Property {
            id: 1,
            name: "Fazenda Azul".to_string(),
            location: "Rio Verde".to_string(),
            production_area: 120.0,
            distance_km: 100.0,
            registered_at: Timestamp::parse("05/02/2024 10:00").unwrap(),
        }
    }

    #[test]
    fn test_prompt_draft_reads_all_fields() {
        let mut p = ScriptedPrompter::new(&["Sítio Bom", "Goiás (GO)", "12,5", "40"]);
        let draft = Property::prompt_draft(&mut p).unwrap();
        assert_eq!(draft.name, "Sítio Bom");
        assert_eq!(draft.location, "Goiás (GO)");
        assert_eq!(draft.production_area, 12.5);
        assert_eq!(draft.distance_km, 40.0);
    }

    #[test]
    fn test_prompt_patch_blank_keeps_everything() {
        let mut p = ScriptedPrompter::new(&["", "", "", ""]);
        let patch = fazenda().prompt_patch(&mut p, &config(false)).unwrap();
        assert!(patch.name.is_none());
        assert!(patch.location.is_none());
        assert!(patch.production_area.is_none());
        assert!(patch.distance_km.is_none());
        assert_eq!(p.prompts[0], "Novo nome [Fazenda Azul]");
        assert_eq!(p.prompts[3], "Nova distância (km) [100.0]");
    }

    #[test]
    fn test_prompt_patch_zero_area() {
        let mut p = ScriptedPrompter::new(&["", "", "0", ""]);
        let patch = fazenda().prompt_patch(&mut p, &config(false)).unwrap();
        assert_eq!(patch.production_area, Some(0.0));

        let mut p = ScriptedPrompter::new(&["", "", "0", ""]);
        let patch = fazenda().prompt_patch(&mut p, &config(true)).unwrap();
        assert_eq!(patch.production_area, None);
    }

    #[test]
    fn test_details_lines() {
        let details = fazenda().details();
        assert_eq!(details[1], ("Área", "120.0 ha".to_string()));
        assert_eq!(details[3].1, "05/02/2024 10:00");
    }
}
