//! # Storage Layer
//!
//! Persistence for the two inventory collections. The [`DataStore`] trait
//! abstracts the backend so the command layer never touches the filesystem
//! directly:
//!
//! - [`fs::FileStore`]: production file-based storage. Each collection is one
//!   JSON document in the data directory: `medicinesData.json` for the
//!   ledger and `drawersData.json` for the drawer registry.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! Both collections are always rewritten in full; there are no partial or
//! incremental writes. Loading drawers distinguishes "never stored" (`None`,
//! which triggers first-run seeding) from "stored but empty".

use crate::error::Result;
use crate::model::{Drawer, Medicine};

pub mod fs;
pub mod memory;

/// Abstract interface for inventory storage.
pub trait DataStore {
    /// Load the medicine ledger. An absent collection reads as empty.
    fn load_medicines(&self) -> Result<Vec<Medicine>>;

    /// Replace the medicine ledger.
    fn save_medicines(&mut self, medicines: &[Medicine]) -> Result<()>;

    /// Load the drawer registry. `None` means drawers were never stored.
    fn load_drawers(&self) -> Result<Option<Vec<Drawer>>>;

    /// Replace the drawer registry.
    fn save_drawers(&mut self, drawers: &[Drawer]) -> Result<()>;
}
