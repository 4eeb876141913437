//! Transport cost calculation flow.

use freight_core::{
    CalculationRequest, CostModel, FreightError, Product, Property, TransportCalculator,
    TripEstimate, Vehicle,
};

use super::{show_records, EntityScreen};
use crate::app::App;
use crate::prompt::{number_required, positive_id, Bound};
use crate::ui::format::{decimal, money};
use crate::ui::print_success;

pub fn run(app: &mut App) -> anyhow::Result<()> {
    let Some(property_id) = select::<Property>(app, "ID da propriedade")? else {
        return Ok(());
    };
    let Some(vehicle_id) = select::<Vehicle>(app, "ID do veículo")? else {
        return Ok(());
    };
    let Some(product_id) = select::<Product>(app, "ID do produto")? else {
        return Ok(());
    };
    let total_weight = number_required(
        app.prompter.as_mut(),
        "Peso total a ser transportado (kg)",
        Bound::Positive,
    )?;

    let calculator = TransportCalculator::new(&app.store);
    let (_, estimate) = calculator.calculate(CalculationRequest {
        property_id,
        vehicle_id,
        product_id,
        total_weight,
    })?;

    println!("{}", report(calculator.model(), &estimate));
    println!();
    print_success(&app.ui, "Cálculo salvo com sucesso!");
    Ok(())
}

/// List `R`, ask for an id and check it exists.
///
/// `None` when there is nothing to choose from.
fn select<R: EntityScreen>(app: &mut App, prompt: &str) -> anyhow::Result<Option<u32>> {
    let records = show_records::<R>(app);
    if records.is_empty() {
        return Ok(None);
    }
    let id = positive_id(app.prompter.as_mut(), prompt)?;
    if !records.iter().any(|record| record.id() == id) {
        return Err(FreightError::NotFound {
            collection: R::COLLECTION,
            id,
        }
        .into());
    }
    Ok(Some(id))
}

/// Human-readable breakdown of one estimate.
pub fn report(model: &CostModel, estimate: &TripEstimate) -> String {
    [
        String::new(),
        format!("Número de viagens: {}", estimate.trips),
        format!(
            "Distância total: {} km",
            decimal(estimate.total_distance, 2)
        ),
        format!(
            "Velocidade média: {} km/h | {}h de estrada + {}h de paradas por dia",
            model.average_speed_kmh, model.driving_hours_per_day, model.stopped_hours_per_day
        ),
        format!(
            "Tempo estimado total de transporte: {} horas (~{} dias)",
            decimal(estimate.total_hours, 2),
            decimal(estimate.travel_days, 1)
        ),
        String::new(),
        "Cálculo do custo:".to_string(),
        format!("  - Combustível: {}", money(estimate.fuel_cost)),
        format!(
            "  - Manutenção ({}x combustível): {}",
            model.maintenance_ratio,
            money(estimate.maintenance_cost)
        ),
        format!(
            "  - Motorista ({}x R${} por dia): {}",
            model.drivers,
            model.driver_daily_rate,
            money(estimate.driver_cost)
        ),
        format!("Custo total estimado: {}", money(estimate.total_cost)),
    ]
    .join("\n")
}
