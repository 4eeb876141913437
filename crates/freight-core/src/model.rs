//! Data model for the four collections.
//!
//! Field names in Rust are English; the serde renames keep the JSON keys of the
//! documents already on disk.

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FreightError, Result};
use crate::registry::{Editable, Referenced};
use crate::storage::{Collection, Record};

/// Maximum stored length of a property location, in characters.
pub const MAX_LOCATION_CHARS: usize = 128;

/// Registration/calculation time, minute precision, local time.
///
/// Serialized as `DD/MM/YYYY HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub const FORMAT: &'static str = "%d/%m/%Y %H:%M";

    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Truncates to whole minutes so a stored value reloads unchanged.
    pub fn from_naive(value: NaiveDateTime) -> Self {
        let truncated = value
            .with_second(0)
            .and_then(|v| v.with_nanosecond(0))
            .unwrap_or(value);
        Self(truncated)
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::parse_raw(value).map_err(FreightError::Validation)
    }

    fn parse_raw(value: &str) -> std::result::Result<Self, String> {
        NaiveDateTime::parse_from_str(value.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|e| format!("data inválida '{}': {}", value, e))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse_raw(&raw).map_err(serde::de::Error::custom)
    }
}

/// Remove every `( ... )` group, trim, and cap at [`MAX_LOCATION_CHARS`].
///
/// A group closes at the first `)` after its `(`; an unmatched `(` is kept.
pub fn clean_location(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out.trim().chars().take(MAX_LOCATION_CHARS).collect()
}

fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FreightError::InvalidInput(format!(
            "{} não pode ser vazio",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn require_non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(FreightError::InvalidInput(format!(
            "{} deve ser um número não negativo",
            field
        )));
    }
    Ok(value)
}

fn require_positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FreightError::InvalidInput(format!(
            "{} deve ser maior que zero",
            field
        )));
    }
    Ok(value)
}

/// A rural property (farm) shipping goods to a distribution center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    /// Hectares
    #[serde(rename = "area_producao")]
    pub production_area: f64,
    /// Kilometers to the distribution center, one way
    #[serde(rename = "distancia")]
    pub distance_km: f64,
    #[serde(rename = "data_cadastro")]
    pub registered_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub struct NewProperty {
    pub name: String,
    pub location: String,
    pub production_area: f64,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub production_area: Option<f64>,
    pub distance_km: Option<f64>,
}

impl Record for Property {
    const COLLECTION: Collection = Collection::Properties;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Editable for Property {
    type Draft = NewProperty;
    type Patch = PropertyPatch;

    fn create(id: u32, draft: NewProperty, registered_at: Timestamp) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("Nome", &draft.name)?,
            location: clean_location(&draft.location),
            production_area: require_non_negative("Área de produção", draft.production_area)?,
            distance_km: require_non_negative("Distância", draft.distance_km)?,
            registered_at,
        })
    }

    fn apply(&mut self, patch: PropertyPatch) -> Result<()> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = require_text("Nome", &name)?;
        }
        if let Some(location) = patch.location {
            let cleaned = clean_location(&location);
            if !cleaned.is_empty() {
                next.location = cleaned;
            }
        }
        if let Some(area) = patch.production_area {
            next.production_area = require_non_negative("Área de produção", area)?;
        }
        if let Some(distance) = patch.distance_km {
            next.distance_km = require_non_negative("Distância", distance)?;
        }
        *self = next;
        Ok(())
    }
}

impl Referenced for Property {
    const IN_USE_MESSAGE: &'static str =
        "Não é possível remover. Existem cálculos associados a esta propriedade.";

    fn referenced_by(calculation: &Calculation) -> u32 {
        calculation.property_id
    }
}

/// A transport vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Cargo capacity in kilograms, always positive
    #[serde(rename = "capacidade")]
    pub capacity_kg: f64,
    /// Currency per kilometer driven
    #[serde(rename = "custo_km")]
    pub cost_per_km: f64,
    #[serde(rename = "data_cadastro")]
    pub registered_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub struct NewVehicle {
    pub kind: String,
    pub capacity_kg: f64,
    pub cost_per_km: f64,
}

#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub kind: Option<String>,
    pub capacity_kg: Option<f64>,
    pub cost_per_km: Option<f64>,
}

impl Record for Vehicle {
    const COLLECTION: Collection = Collection::Vehicles;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Editable for Vehicle {
    type Draft = NewVehicle;
    type Patch = VehiclePatch;

    fn create(id: u32, draft: NewVehicle, registered_at: Timestamp) -> Result<Self> {
        Ok(Self {
            id,
            kind: require_text("Tipo", &draft.kind)?,
            capacity_kg: require_positive("Capacidade", draft.capacity_kg)?,
            cost_per_km: require_non_negative("Custo por km", draft.cost_per_km)?,
            registered_at,
        })
    }

    fn apply(&mut self, patch: VehiclePatch) -> Result<()> {
        let mut next = self.clone();
        if let Some(kind) = patch.kind {
            next.kind = require_text("Tipo", &kind)?;
        }
        if let Some(capacity) = patch.capacity_kg {
            next.capacity_kg = require_positive("Capacidade", capacity)?;
        }
        if let Some(cost) = patch.cost_per_km {
            next.cost_per_km = require_non_negative("Custo por km", cost)?;
        }
        *self = next;
        Ok(())
    }
}

impl Referenced for Vehicle {
    const IN_USE_MESSAGE: &'static str =
        "Não é possível remover. Existem cálculos associados a este veículo.";

    fn referenced_by(calculation: &Calculation) -> u32 {
        calculation.vehicle_id
    }
}

/// An agricultural product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Kilograms per basket or unit
    #[serde(rename = "peso_cesto")]
    pub unit_weight: f64,
    #[serde(rename = "data_cadastro")]
    pub registered_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub unit_weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub unit_weight: Option<f64>,
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Editable for Product {
    type Draft = NewProduct;
    type Patch = ProductPatch;

    fn create(id: u32, draft: NewProduct, registered_at: Timestamp) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("Nome", &draft.name)?,
            unit_weight: require_non_negative("Peso", draft.unit_weight)?,
            registered_at,
        })
    }

    fn apply(&mut self, patch: ProductPatch) -> Result<()> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = require_text("Nome", &name)?;
        }
        if let Some(weight) = patch.unit_weight {
            next.unit_weight = require_non_negative("Peso", weight)?;
        }
        *self = next;
        Ok(())
    }
}

impl Referenced for Product {
    const IN_USE_MESSAGE: &'static str =
        "Não é possível remover. Existem cálculos associados a este produto.";

    fn referenced_by(calculation: &Calculation) -> u32 {
        calculation.product_id
    }
}

/// A stored transport estimate. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: u32,
    #[serde(rename = "propriedade_id")]
    pub property_id: u32,
    #[serde(rename = "veiculo_id")]
    pub vehicle_id: u32,
    #[serde(rename = "produto_id")]
    pub product_id: u32,
    #[serde(rename = "peso_total")]
    pub total_weight: f64,
    #[serde(rename = "viagens")]
    pub trips: u32,
    #[serde(rename = "distancia_total")]
    pub total_distance: f64,
    #[serde(rename = "custo_total")]
    pub total_cost: f64,
    #[serde(rename = "tempo_total")]
    pub total_hours: f64,
    #[serde(
        rename = "data_calculo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub calculated_at: Option<Timestamp>,
}

impl Record for Calculation {
    const COLLECTION: Collection = Collection::Calculations;

    fn id(&self) -> u32 {
        self.id
    }
}
