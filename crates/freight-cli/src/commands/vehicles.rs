use freight_core::model::{NewVehicle, VehiclePatch};
use freight_core::Vehicle;

use super::EntityScreen;
use crate::config::AppConfig;
use crate::prompt::{
    number_optional, number_required, text_optional, text_required, Bound, Prompter,
};
use crate::ui::format::quantity;

impl EntityScreen for Vehicle {
    const LIST_TITLE: &'static str = "Lista de Veículos";
    const EMPTY_MESSAGE: &'static str = "Nenhum veículo encontrado.";
    const ADDED_MESSAGE: &'static str = "Veículo adicionado com sucesso!";
    const UPDATED_MESSAGE: &'static str = "Veículo atualizado com sucesso!";
    const REMOVED_MESSAGE: &'static str = "Veículo removido com sucesso!";
    const EDIT_ID_PROMPT: &'static str = "Escolha o ID do veículo para alterar";
    const REMOVE_ID_PROMPT: &'static str = "Escolha o ID do veículo para remover";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Tipo",
        "Capacidade (kg)",
        "Custo por km (R$)",
        "Cadastro",
    ];

    fn title(&self) -> String {
        self.kind.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Capacidade", format!("{} kg", quantity(self.capacity_kg))),
            ("Custo por km", format!("R$ {}", quantity(self.cost_per_km))),
            ("Data de cadastro", self.registered_at.to_string()),
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.clone(),
            quantity(self.capacity_kg),
            quantity(self.cost_per_km),
            self.registered_at.to_string(),
        ]
    }

    fn prompt_draft(prompter: &mut dyn Prompter) -> anyhow::Result<NewVehicle> {
        Ok(NewVehicle {
            kind: text_required(prompter, "Tipo de veículo")?,
            capacity_kg: number_required(prompter, "Capacidade de carga (kg)", Bound::Positive)?,
            cost_per_km: number_required(prompter, "Custo por km (R$)", Bound::NonNegative)?,
        })
    }

    fn prompt_patch(
        &self,
        prompter: &mut dyn Prompter,
        config: &AppConfig,
    ) -> anyhow::Result<VehiclePatch> {
        let zero_keeps = config.zero_keeps_previous;
        Ok(VehiclePatch {
            kind: text_optional(prompter, &format!("Novo tipo [{}]", self.kind))?,
            capacity_kg: number_optional(
                prompter,
                &format!("Nova capacidade (kg) [{}]", quantity(self.capacity_kg)),
                Bound::Positive,
                zero_keeps,
            )?,
            cost_per_km: number_optional(
                prompter,
                &format!("Novo custo por km (R$) [{}]", quantity(self.cost_per_km)),
                Bound::NonNegative,
                zero_keeps,
            )?,
        })
    }
}
