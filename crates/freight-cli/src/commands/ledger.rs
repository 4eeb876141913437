//! Listing of stored calculations.

use freight_core::{CalculationLedger, LedgerEntry};

use crate::app::App;
use crate::ui::format::{decimal, quantity};
use crate::ui::{header, kv, table, UiContext};

const COLUMNS: &[&str] = &[
    "ID",
    "Produto",
    "Propriedade",
    "Veículo",
    "Peso (kg)",
    "Viagens",
    "Distância (km)",
    "Custo (R$)",
    "Tempo (h)",
    "Data",
];

pub fn run(app: &mut App) -> anyhow::Result<()> {
    let entries = CalculationLedger::new(&app.store).entries();
    if entries.is_empty() {
        println!("Nenhum cálculo encontrado.");
    } else {
        println!("{}", render(&app.ui, &entries));
    }
    Ok(())
}

fn render(ctx: &UiContext, entries: &[LedgerEntry]) -> String {
    let mut lines = vec![header(ctx, "Lista de Cálculos")];
    if ctx.mode.is_pretty() {
        let rows: Vec<Vec<String>> = entries.iter().map(row).collect();
        lines.push(table(ctx, COLUMNS, &rows));
        return lines.join("\n");
    }

    for entry in entries {
        let calc = &entry.calculation;
        lines.push(format!(
            "ID {}: {} de {} com {}",
            calc.id, entry.product_name, entry.property_name, entry.vehicle_kind
        ));
        lines.push(format!(
            "  Peso: {} kg, Viagens: {}, Distância total: {} km",
            quantity(calc.total_weight),
            calc.trips,
            decimal(calc.total_distance, 2)
        ));
        lines.push(format!(
            "  Custo: R$ {}, Tempo: {} h",
            decimal(calc.total_cost, 2),
            decimal(calc.total_hours, 2)
        ));
        if let Some(at) = &calc.calculated_at {
            lines.push(kv(ctx, "Data do cálculo", &at.to_string()));
        }
    }
    lines.join("\n")
}

fn row(entry: &LedgerEntry) -> Vec<String> {
    let calc = &entry.calculation;
    vec![
        calc.id.to_string(),
        entry.product_name.clone(),
        entry.property_name.clone(),
        entry.vehicle_kind.clone(),
        quantity(calc.total_weight),
        calc.trips.to_string(),
        decimal(calc.total_distance, 2),
        decimal(calc.total_cost, 2),
        decimal(calc.total_hours, 2),
        calc.calculated_at.map(|at| at.to_string()).unwrap_or_default(),
    ]
}
