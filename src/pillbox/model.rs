use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a physical storage drawer.
///
/// Drawer ids are free-form strings in the stored data, but carrying them as
/// a distinct type keeps them from being compared against medicine names or
/// other strings by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawerId(String);

impl DrawerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrawerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DrawerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for DrawerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single inventory line item, assigned to exactly one drawer.
///
/// Identity is by `name`; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    /// Weight of a single unit.
    pub weight: f64,
    pub quantity: u32,
    pub cost: f64,
    pub drawer: DrawerId,
}

impl Medicine {
    pub fn new(name: String, weight: f64, quantity: u32, cost: f64, drawer: DrawerId) -> Self {
        Self {
            name,
            weight,
            quantity,
            cost,
            drawer,
        }
    }

    /// Total mass of this line item (`weight * quantity`).
    pub fn total_mass(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }
}

/// A storage drawer with a weight capacity and its current load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawer {
    pub drawer_number: DrawerId,
    pub current_weight: f64,
    pub capacity: f64,
}

impl Drawer {
    pub fn new(drawer_number: DrawerId, capacity: f64) -> Self {
        Self {
            drawer_number,
            current_weight: 0.0,
            capacity,
        }
    }

    /// Remaining free space. Can go negative if the stored load has drifted
    /// past the capacity; callers must treat that as "no space".
    pub fn free_space(&self) -> f64 {
        self.capacity - self.current_weight
    }
}

/// The three drawers every fresh store starts with.
pub fn seed_drawers() -> Vec<Drawer> {
    vec![
        Drawer::new(DrawerId::new("1"), 1000.0),
        Drawer::new(DrawerId::new("2"), 1500.0),
        Drawer::new(DrawerId::new("3"), 2000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_drawers_match_defaults() {
        let drawers = seed_drawers();
        assert_eq!(drawers.len(), 3);
        assert_eq!(drawers[0].drawer_number, DrawerId::new("1"));
        assert_eq!(drawers[0].capacity, 1000.0);
        assert_eq!(drawers[1].capacity, 1500.0);
        assert_eq!(drawers[2].capacity, 2000.0);
        assert!(drawers.iter().all(|d| d.current_weight == 0.0));
    }

    #[test]
    fn free_space_reflects_load() {
        let mut drawer = Drawer::new(DrawerId::new("1"), 1000.0);
        assert_eq!(drawer.free_space(), 1000.0);
        drawer.current_weight = 200.0;
        assert_eq!(drawer.free_space(), 800.0);
    }

    #[test]
    fn total_mass_is_weight_times_quantity() {
        let med = Medicine::new("Aspirin".into(), 2.0, 100, 5.0, DrawerId::new("1"));
        assert_eq!(med.total_mass(), 200.0);
    }

    #[test]
    fn drawer_serializes_with_camel_case_fields() {
        let drawer = Drawer::new(DrawerId::new("1"), 1000.0);
        let json = serde_json::to_string(&drawer).unwrap();
        assert!(json.contains("\"drawerNumber\":\"1\""));
        assert!(json.contains("\"currentWeight\":0.0"));
        assert!(json.contains("\"capacity\":1000.0"));
    }

    #[test]
    fn medicine_serializes_with_plain_field_names() {
        let med = Medicine::new("Aspirin".into(), 2.0, 100, 5.0, DrawerId::new("1"));
        let json = serde_json::to_string(&med).unwrap();
        assert!(json.contains("\"name\":\"Aspirin\""));
        assert!(json.contains("\"drawer\":\"1\""));
    }
}
