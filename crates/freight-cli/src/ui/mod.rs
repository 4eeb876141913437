//! Terminal output: environment detection, plain/pretty layout, badges,
//! tables and number formatting.

mod context;
pub mod format;
pub mod mode;
mod render;
mod theme;

pub use context::{TermEnv, UiContext};
pub use render::{header, kv, print_error, print_info, print_success, print_warning, table};
