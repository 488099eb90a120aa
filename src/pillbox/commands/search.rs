use crate::commands::CmdResult;
use crate::error::{PillboxError, Result};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(PillboxError::Validation(
            "Search term cannot be empty".into(),
        ));
    }

    let term_lower = term.to_lowercase();
    let mut matches: Vec<_> = store
        .load_medicines()?
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&term_lower))
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(CmdResult::default().with_listed_medicines(matches))
}
