use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Drawer, Medicine};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

use super::helpers::drawers_or_seed;

pub(crate) const MEDICINE_HEADER: &str = "name,weight,quantity,cost,drawer";
pub(crate) const DRAWER_HEADER: &str = "drawerNumber,currentWeight,capacity";

pub fn run<S: DataStore>(store: &S, output: &Path) -> Result<CmdResult> {
    let medicines = store.load_medicines()?;
    let drawers = drawers_or_seed(store)?;

    fs::write(output, render(&medicines, &drawers))?;

    let mut result = CmdResult::default().with_export_path(output.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Exported {} medicines and {} drawers to {}.",
        medicines.len(),
        drawers.len(),
        output.display()
    )));
    Ok(result)
}

/// Renders the two-section export document.
///
/// Field values are written verbatim, comma-joined; embedded commas or quotes
/// in names break the format. Known limitation of the file format.
pub(crate) fn render(medicines: &[Medicine], drawers: &[Drawer]) -> String {
    format!(
        "Medicines:\n{}\n\nDrawers:\n{}",
        medicines_csv(medicines),
        drawers_csv(drawers)
    )
}

fn medicines_csv(medicines: &[Medicine]) -> String {
    let mut lines = vec![MEDICINE_HEADER.to_string()];
    lines.extend(medicines.iter().map(|m| {
        format!(
            "{},{},{},{},{}",
            m.name, m.weight, m.quantity, m.cost, m.drawer
        )
    }));
    lines.join("\n")
}

fn drawers_csv(drawers: &[Drawer]) -> String {
    let mut lines = vec![DRAWER_HEADER.to_string()];
    lines.extend(
        drawers
            .iter()
            .map(|d| format!("{},{},{}", d.drawer_number, d.current_weight, d.capacity)),
    );
    lines.join("\n")
}
