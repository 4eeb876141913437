//! Record trait and collection catalogue.
//!
//! A `Record` is one element of a JSON array document. Every record carries a
//! positive integer id that is unique within its collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The four backing documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Properties,
    Vehicles,
    Products,
    Calculations,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Properties,
        Collection::Vehicles,
        Collection::Products,
        Collection::Calculations,
    ];

    /// Document file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Properties => "propriedades.json",
            Self::Vehicles => "veiculos.json",
            Self::Products => "produtos.json",
            Self::Calculations => "calculos.json",
        }
    }

    /// Key of this collection in the consolidated export document.
    pub fn export_key(&self) -> &'static str {
        match self {
            Self::Properties => "propriedades",
            Self::Vehicles => "veiculos",
            Self::Products => "produtos",
            Self::Calculations => "calculos_realizados",
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::Properties => "Propriedade não encontrada.",
            Self::Vehicles => "Veículo não encontrado.",
            Self::Products => "Produto não encontrado.",
            Self::Calculations => "Cálculo não encontrado.",
        }
    }
}

/// A typed element of one collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection this record type is stored in.
    const COLLECTION: Collection;

    fn id(&self) -> u32;
}

/// Next identifier for a collection: one past the highest id, or 1 when empty.
pub fn next_id<R: Record>(records: &[R]) -> u32 {
    records.iter().map(Record::id).max().map_or(1, |max| max + 1)
}
