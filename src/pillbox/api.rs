//! # API Facade
//!
//! The single entry point for all pillbox operations. The facade dispatches
//! to the command layer and returns structured `Result<CmdResult>` values; it
//! holds no business logic and performs no terminal I/O, so any UI (the CLI
//! binary, a future web layer) can sit on top of it.
//!
//! `PillboxApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{DrawerId, Medicine};
use crate::store::DataStore;
use std::path::Path;

pub struct PillboxApi<S: DataStore> {
    store: S,
    paths: commands::PillboxPaths,
}

impl<S: DataStore> PillboxApi<S> {
    pub fn new(store: S, paths: commands::PillboxPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_medicine(
        &mut self,
        name: String,
        weight: f64,
        quantity: u32,
        cost: f64,
        drawer: DrawerId,
    ) -> Result<commands::CmdResult> {
        let medicine = Medicine::new(name, weight, quantity, cost, drawer);
        commands::add::run(&mut self.store, medicine)
    }

    pub fn remove_medicine(&mut self, name: &str, quantity: u32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name, quantity)
    }

    pub fn search_medicines(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn list_inventory(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn export_inventory(&self, output: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn import_inventory(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::PillboxPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PillboxPaths};
