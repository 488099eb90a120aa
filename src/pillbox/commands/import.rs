use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PillboxError, Result};
use crate::model::{Drawer, DrawerId, Medicine};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

use super::export::{DRAWER_HEADER, MEDICINE_HEADER};

pub fn run<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path)?;
    let (medicines, drawers) = parse(&content)?;

    store.save_medicines(&medicines)?;
    store.save_drawers(&drawers)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} medicines and {} drawers from {}.",
        medicines.len(),
        drawers.len(),
        path.display()
    )));
    Ok(result)
}

/// Parses the two-section export document back into the collections.
///
/// The format has no quoting, so a field value containing a comma cannot be
/// recovered; such rows are rejected as malformed.
pub(crate) fn parse(content: &str) -> Result<(Vec<Medicine>, Vec<Drawer>)> {
    let rest = content
        .strip_prefix("Medicines:\n")
        .ok_or_else(|| PillboxError::Format("missing Medicines section".into()))?;

    let (medicine_block, drawer_block) = rest
        .split_once("\n\nDrawers:\n")
        .ok_or_else(|| PillboxError::Format("missing Drawers section".into()))?;

    let medicines = parse_section(medicine_block, MEDICINE_HEADER, parse_medicine)?;
    let drawers = parse_section(drawer_block, DRAWER_HEADER, parse_drawer)?;
    Ok((medicines, drawers))
}

fn parse_section<T>(
    block: &str,
    header: &str,
    parse_row: fn(&str) -> Result<T>,
) -> Result<Vec<T>> {
    let mut lines = block.lines();
    match lines.next() {
        Some(first) if first == header => {}
        other => {
            return Err(PillboxError::Format(format!(
                "expected header '{}', found '{}'",
                header,
                other.unwrap_or("")
            )))
        }
    }
    lines
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

fn parse_medicine(line: &str) -> Result<Medicine> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return Err(PillboxError::Format(format!(
            "expected 5 medicine fields, found {}: '{}'",
            fields.len(),
            line
        )));
    }
    Ok(Medicine::new(
        fields[0].to_string(),
        parse_number(fields[1], "weight")?,
        parse_quantity(fields[2])?,
        parse_number(fields[3], "cost")?,
        DrawerId::new(fields[4]),
    ))
}

fn parse_drawer(line: &str) -> Result<Drawer> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(PillboxError::Format(format!(
            "expected 3 drawer fields, found {}: '{}'",
            fields.len(),
            line
        )));
    }
    let mut drawer = Drawer::new(DrawerId::new(fields[0]), parse_number(fields[2], "capacity")?);
    drawer.current_weight = parse_number(fields[1], "currentWeight")?;
    Ok(drawer)
}

fn parse_number(field: &str, what: &str) -> Result<f64> {
    field
        .parse()
        .map_err(|_| PillboxError::Format(format!("invalid {}: '{}'", what, field)))
}

fn parse_quantity(field: &str) -> Result<u32> {
    field
        .parse()
        .map_err(|_| PillboxError::Format(format!("invalid quantity: '{}'", field)))
}
