use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PillboxError, Result};
use crate::store::DataStore;

use super::helpers::drawers_or_seed;

pub fn run<S: DataStore>(store: &mut S, name: &str, quantity: u32) -> Result<CmdResult> {
    if quantity == 0 {
        return Err(PillboxError::Validation(
            "Quantity to remove must be at least 1".into(),
        ));
    }

    let mut medicines = store.load_medicines()?;
    let position = medicines
        .iter()
        .position(|m| m.name == name)
        .ok_or_else(|| PillboxError::MedicineNotFound(name.to_string()))?;

    if medicines[position].quantity < quantity {
        return Err(PillboxError::InsufficientQuantity {
            name: name.to_string(),
            requested: quantity,
            available: medicines[position].quantity,
        });
    }

    medicines[position].quantity -= quantity;
    let removed_mass = medicines[position].weight * f64::from(quantity);
    let affected = medicines[position].clone();

    if medicines[position].quantity == 0 {
        medicines.remove(position);
    }

    let mut result = CmdResult::default();

    let mut drawers = drawers_or_seed(store)?;
    match drawers
        .iter_mut()
        .find(|d| d.drawer_number == affected.drawer)
    {
        Some(drawer) => drawer.current_weight -= removed_mass,
        // The record pointed at a drawer that no longer exists. The removal
        // still goes through, but the stale reference is reported instead of
        // being skipped silently.
        None => result.add_message(CmdMessage::warning(format!(
            "Drawer {} not found; stored weight not adjusted.",
            affected.drawer
        ))),
    }

    store.save_medicines(&medicines)?;
    store.save_drawers(&drawers)?;

    result.add_message(CmdMessage::success(format!(
        "Removed {} x {}.",
        quantity, name
    )));
    result.affected_medicines.push(affected);
    Ok(result)
}
