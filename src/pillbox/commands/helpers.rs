use crate::error::Result;
use crate::model::{seed_drawers, Drawer};
use crate::store::DataStore;

/// Load the drawer registry, seeding the three default drawers on first run.
///
/// The seed is not persisted here; it lands on disk with the next mutating
/// operation, which always rewrites both collections.
pub fn drawers_or_seed<S: DataStore>(store: &S) -> Result<Vec<Drawer>> {
    match store.load_drawers()? {
        Some(drawers) => Ok(drawers),
        None => Ok(seed_drawers()),
    }
}
