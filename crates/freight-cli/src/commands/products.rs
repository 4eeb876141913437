use freight_core::model::{NewProduct, ProductPatch};
use freight_core::Product;

use super::EntityScreen;
use crate::config::AppConfig;
use crate::prompt::{
    number_optional, number_required, text_optional, text_required, Bound, Prompter,
};
use crate::ui::format::quantity;

impl EntityScreen for Product {
    const LIST_TITLE: &'static str = "Lista de Produtos";
    const EMPTY_MESSAGE: &'static str = "Nenhum produto encontrado.";
    const ADDED_MESSAGE: &'static str = "Produto adicionado com sucesso!";
    const UPDATED_MESSAGE: &'static str = "Produto atualizado com sucesso!";
    const REMOVED_MESSAGE: &'static str = "Produto removido com sucesso!";
    const EDIT_ID_PROMPT: &'static str = "Escolha o ID do produto para alterar";
    const REMOVE_ID_PROMPT: &'static str = "Escolha o ID do produto para remover";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Nome",
        "Peso por cesto/unidade (kg)",
        "Cadastro",
    ];

    fn title(&self) -> String {
        self.name.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Peso por cesto/unidade",
                format!("{} kg", quantity(self.unit_weight)),
            ),
            ("Data de cadastro", self.registered_at.to_string()),
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            quantity(self.unit_weight),
            self.registered_at.to_string(),
        ]
    }

    fn prompt_draft(prompter: &mut dyn Prompter) -> anyhow::Result<NewProduct> {
        Ok(NewProduct {
            name: text_required(prompter, "Nome do produto")?,
            unit_weight: number_required(
                prompter,
                "Peso por cesto/unidade (kg)",
                Bound::NonNegative,
            )?,
        })
    }

    fn prompt_patch(
        &self,
        prompter: &mut dyn Prompter,
        config: &AppConfig,
    ) -> anyhow::Result<ProductPatch> {
        Ok(ProductPatch {
            name: text_optional(prompter, &format!("Novo nome [{}]", self.name))?,
            unit_weight: number_optional(
                prompter,
                &format!(
                    "Novo peso por cesto/unidade (kg) [{}]",
                    quantity(self.unit_weight)
                ),
                Bound::NonNegative,
                config.zero_keeps_previous,
            )?,
        })
    }
}
