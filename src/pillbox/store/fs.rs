use super::DataStore;
use crate::error::Result;
use crate::model::{Drawer, Medicine};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const MEDICINES_FILE: &str = "medicinesData.json";
const DRAWERS_FILE: &str = "drawersData.json";

/// File-backed store: one JSON document per collection under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Option<Vec<T>>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let records: Vec<T> = serde_json::from_str(&content)?;
        Ok(Some(records))
    }

    fn write_collection<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(records)?;
        fs::write(self.root.join(file), content)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_medicines(&self) -> Result<Vec<Medicine>> {
        Ok(self.read_collection(MEDICINES_FILE)?.unwrap_or_default())
    }

    fn save_medicines(&mut self, medicines: &[Medicine]) -> Result<()> {
        self.write_collection(MEDICINES_FILE, medicines)
    }

    fn load_drawers(&self) -> Result<Option<Vec<Drawer>>> {
        self.read_collection(DRAWERS_FILE)
    }

    fn save_drawers(&mut self, drawers: &[Drawer]) -> Result<()> {
        self.write_collection(DRAWERS_FILE, drawers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrawerId;

    #[test]
    fn missing_files_read_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        assert!(store.load_medicines().unwrap().is_empty());
        assert!(store.load_drawers().unwrap().is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let medicines = vec![Medicine::new(
            "Aspirin".into(),
            2.0,
            100,
            5.0,
            DrawerId::new("1"),
        )];
        let drawers = vec![Drawer::new(DrawerId::new("1"), 1000.0)];

        store.save_medicines(&medicines).unwrap();
        store.save_drawers(&drawers).unwrap();

        assert_eq!(store.load_medicines().unwrap(), medicines);
        assert_eq!(store.load_drawers().unwrap(), Some(drawers));
    }

    #[test]
    fn stored_empty_drawers_are_not_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save_drawers(&[]).unwrap();
        assert_eq!(store.load_drawers().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn save_creates_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.save_medicines(&[]).unwrap();
        assert!(root.join("medicinesData.json").exists());
    }

    #[test]
    fn uses_wire_field_names_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store
            .save_drawers(&[Drawer::new(DrawerId::new("1"), 1000.0)])
            .unwrap();

        let raw = fs::read_to_string(dir.path().join("drawersData.json")).unwrap();
        assert!(raw.contains("drawerNumber"));
        assert!(raw.contains("currentWeight"));
    }
}
