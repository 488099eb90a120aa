use crate::commands::{CmdMessage, CmdResult, PillboxPaths};
use crate::error::Result;
use crate::model::seed_drawers;
use crate::store::DataStore;
use std::fs;

pub fn run<S: DataStore>(store: &mut S, paths: &PillboxPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;

    let mut result = CmdResult::default();
    match store.load_drawers()? {
        Some(_) => {
            result.add_message(CmdMessage::info(format!(
                "Store at {} is already initialized.",
                paths.data_dir.display()
            )));
        }
        None => {
            store.save_drawers(&seed_drawers())?;
            result.add_message(CmdMessage::success(format!(
                "Initialized pillbox store at {} with {} drawers.",
                paths.data_dir.display(),
                seed_drawers().len()
            )));
        }
    }
    Ok(result)
}
