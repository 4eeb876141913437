//! Consolidated export of every collection into one JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FreightError, Result};
use crate::fs::write_atomic;
use crate::model::{Calculation, Product, Property, Vehicle};
use crate::storage::JsonStore;

pub const DEFAULT_EXPORT_NAME: &str = "dados_transporte_rural_export";
const EXPORT_EXTENSION: &str = ".json";

/// Snapshot of all four collections, keyed as in the export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "propriedades")]
    pub properties: Vec<Property>,
    #[serde(rename = "veiculos")]
    pub vehicles: Vec<Vehicle>,
    #[serde(rename = "produtos")]
    pub products: Vec<Product>,
    #[serde(rename = "calculos_realizados")]
    pub calculations: Vec<Calculation>,
}

impl ExportDocument {
    pub fn snapshot(store: &JsonStore) -> Self {
        Self {
            properties: store.load(),
            vehicles: store.load(),
            products: store.load(),
            calculations: store.load(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FreightError::Storage(format!("JSON error: {}", e)))
    }

    /// Write the document as `dir/file_name`, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| {
            FreightError::Storage(format!("não foi possível criar {}: {}", dir.display(), e))
        })?;
        let path = dir.join(file_name);
        write_atomic(&path, self.to_json()?.as_bytes())?;
        Ok(path)
    }
}

/// Resolve the user's answer to the file name prompt.
///
/// Blank input selects `default_name`; `.json` is appended when missing.
pub fn export_file_name(input: &str, default_name: &str) -> String {
    let trimmed = input.trim();
    let mut name = if trimmed.is_empty() {
        default_name.to_string()
    } else {
        trimmed.to_string()
    };
    if !name.ends_with(EXPORT_EXTENSION) {
        name.push_str(EXPORT_EXTENSION);
    }
    name
}
