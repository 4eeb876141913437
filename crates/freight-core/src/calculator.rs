//! Transport cost and time estimation.
//!
//! The model is deliberately simple: every trip is a full round trip between
//! the property and the distribution center, travel is spread over working days
//! of fixed length, and costs are fuel, maintenance and driver wages.

use crate::error::{FreightError, Result};
use crate::model::{Calculation, Product, Property, Timestamp, Vehicle};
use crate::registry::Registry;
use crate::storage::{next_id, JsonStore};

/// Fixed constants of the estimation formula.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    pub average_speed_kmh: f64,
    pub driving_hours_per_day: f64,
    pub stopped_hours_per_day: f64,
    pub drivers: u32,
    pub driver_daily_rate: f64,
    /// Maintenance cost as a multiple of fuel cost.
    // TODO: replace with a per-vehicle maintenance rate once vehicles carry one.
    pub maintenance_ratio: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            average_speed_kmh: 55.0,
            driving_hours_per_day: 8.0,
            stopped_hours_per_day: 3.0,
            drivers: 2,
            driver_daily_rate: 250.0,
            maintenance_ratio: 1.0,
        }
    }
}

/// Derived figures for one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TripEstimate {
    pub trips: u32,
    pub total_distance: f64,
    pub travel_days: f64,
    pub total_hours: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub driver_cost: f64,
    pub total_cost: f64,
}

impl CostModel {
    pub fn km_per_day(&self) -> f64 {
        self.average_speed_kmh * self.driving_hours_per_day
    }

    pub fn hours_per_day(&self) -> f64 {
        self.driving_hours_per_day + self.stopped_hours_per_day
    }

    /// Estimate moving `total_weight` kg from `property` with `vehicle`.
    pub fn estimate(
        &self,
        property: &Property,
        vehicle: &Vehicle,
        total_weight: f64,
    ) -> Result<TripEstimate> {
        if !vehicle.capacity_kg.is_finite() || vehicle.capacity_kg <= 0.0 {
            return Err(FreightError::InvalidInput(format!(
                "capacidade do veículo {} deve ser maior que zero",
                vehicle.id
            )));
        }
        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(FreightError::InvalidInput(
                "peso total deve ser maior que zero".to_string(),
            ));
        }

        let trips = (total_weight / vehicle.capacity_kg).ceil();
        if trips > f64::from(u32::MAX) {
            return Err(FreightError::InvalidInput(format!(
                "{} viagens excedem o limite suportado",
                trips
            )));
        }
        let total_distance = trips * 2.0 * property.distance_km;
        let travel_days = total_distance / self.km_per_day();
        let total_hours = travel_days * self.hours_per_day();

        let fuel_cost = vehicle.cost_per_km * total_distance;
        let maintenance_cost = fuel_cost * self.maintenance_ratio;
        let driver_cost = f64::from(self.drivers) * self.driver_daily_rate * travel_days;

        Ok(TripEstimate {
            trips: trips as u32,
            total_distance,
            travel_days,
            total_hours,
            fuel_cost,
            maintenance_cost,
            driver_cost,
            total_cost: fuel_cost + maintenance_cost + driver_cost,
        })
    }
}

/// Ids and weight for one calculation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub property_id: u32,
    pub vehicle_id: u32,
    pub product_id: u32,
    pub total_weight: f64,
}

/// Resolves the three source records, estimates, and appends a calculation.
pub struct TransportCalculator<'s> {
    store: &'s JsonStore,
    model: CostModel,
}

impl<'s> TransportCalculator<'s> {
    pub fn new(store: &'s JsonStore) -> Self {
        Self::with_model(store, CostModel::default())
    }

    pub fn with_model(store: &'s JsonStore, model: CostModel) -> Self {
        Self { store, model }
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }

    /// Run and persist one calculation.
    ///
    /// Nothing is written unless all three records resolve and the estimate
    /// succeeds.
    pub fn calculate(&self, request: CalculationRequest) -> Result<(Calculation, TripEstimate)> {
        self.calculate_at(request, Timestamp::now())
    }

    pub fn calculate_at(
        &self,
        request: CalculationRequest,
        calculated_at: Timestamp,
    ) -> Result<(Calculation, TripEstimate)> {
        let property = Registry::<Property>::new(self.store).get(request.property_id)?;
        let vehicle = Registry::<Vehicle>::new(self.store).get(request.vehicle_id)?;
        Registry::<Product>::new(self.store).get(request.product_id)?;

        let estimate = self
            .model
            .estimate(&property, &vehicle, request.total_weight)?;

        let mut calculations: Vec<Calculation> = self.store.load();
        let calculation = Calculation {
            id: next_id(&calculations),
            property_id: property.id,
            vehicle_id: vehicle.id,
            product_id: request.product_id,
            total_weight: request.total_weight,
            trips: estimate.trips,
            total_distance: estimate.total_distance,
            total_cost: estimate.total_cost,
            total_hours: estimate.total_hours,
            calculated_at: Some(calculated_at),
        };
        calculations.push(calculation.clone());
        self.store.save(&calculations)?;

        Ok((calculation, estimate))
    }
}
