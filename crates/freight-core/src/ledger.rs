//! Calculation listing with resolved names.

use crate::model::{Calculation, Product, Property, Vehicle};
use crate::storage::JsonStore;

/// Display name used when a calculation points at a record that no longer exists.
pub const UNKNOWN_NAME: &str = "Desconhecido";

/// One calculation with the names of its source records.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub calculation: Calculation,
    pub property_name: String,
    pub vehicle_kind: String,
    pub product_name: String,
}

pub struct CalculationLedger<'s> {
    store: &'s JsonStore,
}

impl<'s> CalculationLedger<'s> {
    pub fn new(store: &'s JsonStore) -> Self {
        Self { store }
    }

    /// All calculations in stored order. Dangling references resolve to
    /// [`UNKNOWN_NAME`].
    pub fn entries(&self) -> Vec<LedgerEntry> {
        let calculations: Vec<Calculation> = self.store.load();
        if calculations.is_empty() {
            return Vec::new();
        }
        let properties: Vec<Property> = self.store.load();
        let vehicles: Vec<Vehicle> = self.store.load();
        let products: Vec<Product> = self.store.load();

        calculations
            .into_iter()
            .map(|calculation| LedgerEntry {
                property_name: name_or_unknown(
                    properties.iter().map(|p| (p.id, p.name.as_str())),
                    calculation.property_id,
                ),
                vehicle_kind: name_or_unknown(
                    vehicles.iter().map(|v| (v.id, v.kind.as_str())),
                    calculation.vehicle_id,
                ),
                product_name: name_or_unknown(
                    products.iter().map(|p| (p.id, p.name.as_str())),
                    calculation.product_id,
                ),
                calculation,
            })
            .collect()
    }
}

fn name_or_unknown<'a>(mut names: impl Iterator<Item = (u32, &'a str)>, id: u32) -> String {
    names
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewProperty, NewVehicle};
    use crate::registry::Registry;
    use tempfile::tempdir;

    fn calculation(id: u32, property_id: u32, vehicle_id: u32, product_id: u32) -> Calculation {
        Calculation {
            id,
            property_id,
            vehicle_id,
            product_id,
            total_weight: 100.0,
            trips: 1,
            total_distance: 20.0,
            total_cost: 45.0,
            total_hours: 0.5,
            calculated_at: None,
        }
    }

    #[test]
    fn test_empty_ledger() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert!(CalculationLedger::new(&store).entries().is_empty());
    }

    #[test]
    fn test_resolves_names_and_tolerates_dangling() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        Registry::<Property>::new(&store)
            .add(NewProperty {
                name: "Fazenda Azul".to_string(),
                location: "Sul".to_string(),
                production_area: 1.0,
                distance_km: 10.0,
            })
            .unwrap();
        Registry::<Vehicle>::new(&store)
            .add(NewVehicle {
                kind: "Caminhão".to_string(),
                capacity_kg: 500.0,
                cost_per_km: 1.0,
            })
            .unwrap();
        store.save(&[calculation(1, 1, 1, 7)]).unwrap();

        let entries = CalculationLedger::new(&store).entries();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].property_name, "Fazenda Azul");
        assert_eq!(entries[0].vehicle_kind, "Caminhão");
        assert_eq!(entries[0].product_name, UNKNOWN_NAME);
    }
}
