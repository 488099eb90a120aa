use crate::alloc;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PillboxError, Result};
use crate::model::Medicine;
use crate::store::DataStore;

use super::helpers::drawers_or_seed;

pub fn run<S: DataStore>(store: &mut S, medicine: Medicine) -> Result<CmdResult> {
    validate(&medicine)?;

    let mut drawers = drawers_or_seed(store)?;
    let drawer = drawers
        .iter_mut()
        .find(|d| d.drawer_number == medicine.drawer)
        .ok_or_else(|| PillboxError::DrawerNotFound(medicine.drawer.clone()))?;

    let free = drawer.free_space();
    if !alloc::fits(medicine.weight, medicine.quantity, free) {
        return Err(PillboxError::NoSpace {
            drawer: medicine.drawer.clone(),
            needed: medicine.total_mass(),
            available: free,
        });
    }

    drawer.current_weight += medicine.total_mass();

    let mut medicines = store.load_medicines()?;
    medicines.push(medicine.clone());
    store.save_medicines(&medicines)?;
    store.save_drawers(&drawers)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} x {} to drawer {}.",
        medicine.quantity, medicine.name, medicine.drawer
    )));
    result.affected_medicines.push(medicine);
    Ok(result)
}

fn validate(medicine: &Medicine) -> Result<()> {
    if medicine.name.trim().is_empty() {
        return Err(PillboxError::Validation(
            "Medicine name cannot be empty".into(),
        ));
    }
    if !medicine.weight.is_finite() || medicine.weight <= 0.0 {
        return Err(PillboxError::Validation(
            "Weight must be a positive number".into(),
        ));
    }
    if medicine.quantity == 0 {
        return Err(PillboxError::Validation(
            "Quantity must be at least 1".into(),
        ));
    }
    if !medicine.cost.is_finite() || medicine.cost < 0.0 {
        return Err(PillboxError::Validation(
            "Cost must be a non-negative number".into(),
        ));
    }
    Ok(())
}
