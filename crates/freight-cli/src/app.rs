//! Application state shared by every menu handler.

use freight_core::JsonStore;

use crate::config::AppConfig;
use crate::prompt::Prompter;
use crate::ui::{print_warning, UiContext};

/// Resolved configuration, the open store, and the terminal.
///
/// Fields are public so a handler can borrow the store and the prompter at
/// the same time.
pub struct App {
    pub config: AppConfig,
    pub store: JsonStore,
    pub ui: UiContext,
    pub prompter: Box<dyn Prompter>,
}

impl App {
    /// Open the data directory, seeding any missing document.
    pub fn open(
        config: AppConfig,
        ui: UiContext,
        prompter: Box<dyn Prompter>,
    ) -> anyhow::Result<Self> {
        let store = JsonStore::open(config.data_dir.clone())?;
        Ok(Self {
            config,
            store,
            ui,
            prompter,
        })
    }

    /// Print warnings queued by lenient document loads.
    pub fn flush_warnings(&self) {
        for warning in self.store.take_warnings() {
            print_warning(&self.ui, &warning);
        }
    }
}
