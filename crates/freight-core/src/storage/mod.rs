//! Record storage.
//!
//! Each collection lives in its own JSON document inside the data directory.

mod json_store;
mod traits;

pub use json_store::JsonStore;
pub use traits::{next_id, Collection, Record};
