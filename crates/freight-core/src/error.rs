//! Error types for freight core operations.
//!
//! Messages are written for the end user in the same language as the
//! interactive menus; the CLI prints them as-is.

use thiserror::Error;

use crate::storage::Collection;

/// Result type alias for freight operations.
pub type Result<T> = std::result::Result<T, FreightError>;

/// Core error type for freight operations.
#[derive(Debug, Error)]
pub enum FreightError {
    /// Filesystem or document write failure
    #[error("Erro de armazenamento: {0}")]
    Storage(String),

    /// Document or record failed validation
    #[error("Dados inválidos: {0}")]
    Validation(String),

    /// No record with this id in the collection
    #[error("{}", .collection.not_found_message())]
    NotFound { collection: Collection, id: u32 },

    /// Record still referenced by at least one calculation
    #[error("{message}")]
    InUse {
        collection: Collection,
        id: u32,
        message: &'static str,
    },

    /// Invalid user input
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for FreightError {
    fn from(err: std::io::Error) -> Self {
        FreightError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FreightError {
    fn from(err: serde_json::Error) -> Self {
        FreightError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = FreightError::NotFound {
            collection: Collection::Vehicles,
            id: 9,
        };
        assert_eq!(err.to_string(), "Veículo não encontrado.");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FreightError = io.into();
        assert!(matches!(err, FreightError::Storage(_)));
    }
}
