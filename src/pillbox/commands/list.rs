use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::drawers_or_seed;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut medicines = store.load_medicines()?;
    medicines.sort_by(|a, b| a.name.cmp(&b.name));

    let drawers = drawers_or_seed(store)?;

    Ok(CmdResult::default()
        .with_listed_medicines(medicines)
        .with_listed_drawers(drawers))
}
