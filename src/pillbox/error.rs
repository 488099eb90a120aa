use crate::model::DrawerId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PillboxError>;

#[derive(Debug, Error)]
pub enum PillboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Medicine not found: {0}")]
    MedicineNotFound(String),

    #[error("Drawer not found: {0}")]
    DrawerNotFound(DrawerId),

    #[error("No space available in drawer {drawer}: {needed} needed, {available} free")]
    NoSpace {
        drawer: DrawerId,
        needed: f64,
        available: f64,
    },

    #[error("Cannot remove {requested} of {name}: only {available} in stock")]
    InsufficientQuantity {
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Invalid inventory file: {0}")]
    Format(String),
}
