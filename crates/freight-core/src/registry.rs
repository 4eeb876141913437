//! Entity managers.
//!
//! `Registry<R>` provides add/edit/remove/list over one collection. Every
//! operation reads the document, applies the change, and writes it back.
//! Removal is refused while any calculation still points at the record.

use std::marker::PhantomData;

use crate::error::{FreightError, Result};
use crate::model::{Calculation, Timestamp};
use crate::storage::{next_id, JsonStore, Record};

/// A record type that can be created from a draft and updated with a patch.
pub trait Editable: Record {
    type Draft;
    type Patch;

    fn create(id: u32, draft: Self::Draft, registered_at: Timestamp) -> Result<Self>;

    /// Apply every set field of `patch`; unset fields keep their value.
    /// On error the record is left unchanged.
    fn apply(&mut self, patch: Self::Patch) -> Result<()>;
}

/// A record type that calculations hold a foreign key to.
pub trait Referenced: Record {
    /// Shown when removal is refused because a calculation points here.
    const IN_USE_MESSAGE: &'static str;

    /// The id this calculation holds for `Self`'s collection.
    fn referenced_by(calculation: &Calculation) -> u32;
}

pub struct Registry<'s, R> {
    store: &'s JsonStore,
    _record: PhantomData<R>,
}

impl<'s, R: Record> Registry<'s, R> {
    pub fn new(store: &'s JsonStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// All records in stored order.
    pub fn list(&self) -> Vec<R> {
        self.store.load()
    }

    pub fn find(&self, id: u32) -> Option<R> {
        self.list().into_iter().find(|record| record.id() == id)
    }

    pub fn get(&self, id: u32) -> Result<R> {
        self.find(id).ok_or(FreightError::NotFound {
            collection: R::COLLECTION,
            id,
        })
    }
}

impl<R: Editable> Registry<'_, R> {
    /// Append a new record built from `draft` and persist the collection.
    pub fn add(&self, draft: R::Draft) -> Result<R> {
        self.add_at(draft, Timestamp::now())
    }

    pub fn add_at(&self, draft: R::Draft, registered_at: Timestamp) -> Result<R> {
        let mut records: Vec<R> = self.store.load();
        let record = R::create(next_id(&records), draft, registered_at)?;
        records.push(record.clone());
        self.store.save(&records)?;
        Ok(record)
    }

    pub fn edit(&self, id: u32, patch: R::Patch) -> Result<R> {
        let mut records: Vec<R> = self.store.load();
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(FreightError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        record.apply(patch)?;
        let updated = record.clone();
        self.store.save(&records)?;
        Ok(updated)
    }
}

impl<R: Referenced> Registry<'_, R> {
    pub fn is_referenced(&self, id: u32) -> bool {
        self.store
            .load::<Calculation>()
            .iter()
            .any(|calculation| R::referenced_by(calculation) == id)
    }

    /// Remove the record with `id`, unless a calculation references it.
    pub fn remove(&self, id: u32) -> Result<R> {
        if self.is_referenced(id) {
            return Err(FreightError::InUse {
                collection: R::COLLECTION,
                id,
                message: R::IN_USE_MESSAGE,
            });
        }

        let mut records: Vec<R> = self.store.load();
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(FreightError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        let removed = records.remove(position);
        self.store.save(&records)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewProduct, NewVehicle, Product, ProductPatch, Vehicle};
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn milho() -> NewProduct {
        NewProduct {
            name: "Milho".to_string(),
            unit_weight: 25.0,
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_dir, store) = store();
        let products = Registry::<Product>::new(&store);

        let first = products.add(milho()).unwrap();
        let second = products.add(milho()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(products.list().len(), 2);
    }

    #[test]
    fn test_ids_below_max_not_reused() {
        let (_dir, store) = store();
        let products = Registry::<Product>::new(&store);
        for _ in 0..3 {
            products.add(milho()).unwrap();
        }

        products.remove(2).unwrap();
        let next = products.add(milho()).unwrap();

        assert_eq!(next.id, 4);
        let ids: Vec<u32> = products.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_edit_blank_patch_keeps_record() {
        let (_dir, store) = store();
        let products = Registry::<Product>::new(&store);
        let added = products.add(milho()).unwrap();

        let edited = products.edit(added.id, ProductPatch::default()).unwrap();

        assert_eq!(edited, added);
    }

    #[test]
    fn test_edit_replaces_given_field() {
        let (_dir, store) = store();
        let products = Registry::<Product>::new(&store);
        let added = products.add(milho()).unwrap();

        products
            .edit(
                added.id,
                ProductPatch {
                    name: Some("Feijão".to_string()),
                    unit_weight: None,
                },
            )
            .unwrap();

        let stored = products.get(added.id).unwrap();
        assert_eq!(stored.name, "Feijão");
        assert_eq!(stored.unit_weight, 25.0);
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let (_dir, store) = store();
        let products = Registry::<Product>::new(&store);

        let result = products.edit(42, ProductPatch::default());

        assert!(matches!(
            result,
            Err(FreightError::NotFound { id: 42, .. })
        ));
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let (_dir, store) = store();
        let vehicles = Registry::<Vehicle>::new(&store);

        assert!(matches!(
            vehicles.remove(3),
            Err(FreightError::NotFound { .. })
        ));
    }

    #[test]
    fn test_remove_blocked_by_calculation() {
        let (_dir, store) = store();
        let vehicles = Registry::<Vehicle>::new(&store);
        let vehicle = vehicles
            .add(NewVehicle {
                kind: "Caminhão".to_string(),
                capacity_kg: 1000.0,
                cost_per_km: 2.0,
            })
            .unwrap();
        store
            .save(&[Calculation {
                id: 1,
                property_id: 10,
                vehicle_id: vehicle.id,
                product_id: 20,
                total_weight: 500.0,
                trips: 1,
                total_distance: 10.0,
                total_cost: 50.0,
                total_hours: 1.0,
                calculated_at: None,
            }])
            .unwrap();

        let result = vehicles.remove(vehicle.id);

        let err = result.unwrap_err();
        assert!(matches!(err, FreightError::InUse { id, .. } if id == vehicle.id));
        assert_eq!(
            err.to_string(),
            "Não é possível remover. Existem cálculos associados a este veículo."
        );
        assert!(vehicles.find(vehicle.id).is_some());
    }
}
