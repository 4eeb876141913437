//! JSON document store.
//!
//! One pretty-printed JSON array per collection. Writes go through
//! [`crate::fs::write_atomic`]. Lenient loads never fail: a missing, malformed
//! or mis-shaped document yields an empty collection and queues a warning that
//! the caller drains with [`JsonStore::take_warnings`]. A document that exists
//! but failed to load is copied to `<file>.bak` before the next save replaces it.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{Collection, Record};
use crate::error::{FreightError, Result};
use crate::fs::write_atomic;

/// Store rooted at a data directory holding the four collection documents.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    warnings: RefCell<Vec<String>>,
    unreadable: RefCell<HashSet<Collection>>,
}

impl JsonStore {
    /// Open a store, creating the directory and any missing document as `[]`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            data_dir: data_dir.into(),
            warnings: RefCell::new(Vec::new()),
            unreadable: RefCell::new(HashSet::new()),
        };
        store.ensure_layout()?;
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Where an unreadable document is copied before it is overwritten.
    pub fn backup_path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.bak", collection.file_name()))
    }

    /// Create the data directory and seed absent documents with an empty list.
    ///
    /// Existing documents are left untouched, even when malformed.
    pub fn ensure_layout(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            FreightError::Storage(format!(
                "não foi possível criar {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;
        for collection in Collection::ALL {
            let path = self.path_for(collection);
            if !path.exists() {
                write_atomic(&path, b"[]")?;
            }
        }
        Ok(())
    }

    /// Strict read: fails when the document is absent, not JSON, not a list, or
    /// holds a record that does not match the record type.
    pub fn read<R: Record>(&self) -> Result<Vec<R>> {
        let path = self.path_for(R::COLLECTION);
        let contents = fs::read_to_string(&path).map_err(|e| {
            FreightError::Storage(format!("Erro ao carregar {}: {}", path.display(), e))
        })?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        if !value.is_array() {
            return Err(FreightError::Validation(format!(
                "Dados em {} não estão no formato esperado.",
                path.display()
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Lenient read used by every menu action.
    pub fn load<R: Record>(&self) -> Vec<R> {
        match self.read() {
            Ok(records) => {
                self.unreadable.borrow_mut().remove(&R::COLLECTION);
                records
            }
            Err(err) => {
                if self.path_for(R::COLLECTION).exists() {
                    self.unreadable.borrow_mut().insert(R::COLLECTION);
                }
                self.warn(format!(
                    "{} Inicializando {} como lista vazia.",
                    err,
                    R::COLLECTION.file_name()
                ));
                Vec::new()
            }
        }
    }

    /// Overwrite a collection document with `records`, preserving their order.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<()> {
        let path = self.path_for(R::COLLECTION);
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| FreightError::Storage(format!("JSON error: {}", e)))?;
        if self.unreadable.borrow().contains(&R::COLLECTION) {
            self.back_up(R::COLLECTION)?;
        }
        write_atomic(&path, json.as_bytes())
    }

    fn back_up(&self, collection: Collection) -> Result<()> {
        let path = self.path_for(collection);
        let backup = self.backup_path_for(collection);
        fs::copy(&path, &backup).map_err(|e| {
            FreightError::Storage(format!(
                "não foi possível copiar {} para {}: {}",
                path.display(),
                backup.display(),
                e
            ))
        })?;
        self.unreadable.borrow_mut().remove(&collection);
        self.warn(format!(
            "Conteúdo anterior de {} preservado em {}.",
            collection.file_name(),
            backup.display()
        ));
        Ok(())
    }

    /// Drain warnings queued by lenient loads since the last call.
    pub fn take_warnings(&self) -> Vec<String> {
        self.warnings.borrow_mut().drain(..).collect()
    }

    fn warn(&self, message: String) {
        self.warnings.borrow_mut().push(message);
    }
}
