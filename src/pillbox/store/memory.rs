use super::DataStore;
use crate::error::Result;
use crate::model::{Drawer, Medicine};

/// In-memory store with the same semantics as the file store, minus the
/// filesystem. `drawers` starts as `None` to model a first run.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    medicines: Vec<Medicine>,
    drawers: Option<Vec<Drawer>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_medicines(&self) -> Result<Vec<Medicine>> {
        Ok(self.medicines.clone())
    }

    fn save_medicines(&mut self, medicines: &[Medicine]) -> Result<()> {
        self.medicines = medicines.to_vec();
        Ok(())
    }

    fn load_drawers(&self) -> Result<Option<Vec<Drawer>>> {
        Ok(self.drawers.clone())
    }

    fn save_drawers(&mut self, drawers: &[Drawer]) -> Result<()> {
        self.drawers = Some(drawers.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{seed_drawers, DrawerId};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Store with the three default drawers already persisted.
        pub fn seeded(mut self) -> Self {
            self.store.save_drawers(&seed_drawers()).unwrap();
            self
        }

        pub fn with_drawer(mut self, id: &str, capacity: f64, current_weight: f64) -> Self {
            let mut drawers = self.store.load_drawers().unwrap().unwrap_or_default();
            let mut drawer = Drawer::new(DrawerId::new(id), capacity);
            drawer.current_weight = current_weight;
            drawers.push(drawer);
            self.store.save_drawers(&drawers).unwrap();
            self
        }

        pub fn with_medicine(mut self, name: &str, weight: f64, quantity: u32, drawer: &str) -> Self {
            let mut medicines = self.store.load_medicines().unwrap();
            medicines.push(Medicine::new(
                name.to_string(),
                weight,
                quantity,
                1.0,
                DrawerId::new(drawer),
            ));
            self.store.save_medicines(&medicines).unwrap();
            self
        }
    }
}
