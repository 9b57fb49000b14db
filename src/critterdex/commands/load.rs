use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::Roster;
use std::path::Path;

/// Replaces the roster with the records in `path`.
///
/// The file is read and parsed in full before the roster is touched, so any
/// I/O or format error leaves the current records in place.
pub fn run<B: StorageBackend>(roster: &mut Roster, backend: &B, path: &Path) -> Result<CmdResult> {
    let text = backend.read(path)?;
    let creatures = codec::parse(&text)?;
    let count = creatures.len();
    roster.replace_all(creatures);
    log::info!("loaded {} record(s) from {}", count, path.display());

    let mut result = CmdResult {
        loaded_count: Some(count),
        ..CmdResult::default()
    };
    result.add_message(CmdMessage::success(format!(
        "Database loaded successfully. {} creature(s) are now in memory.",
        count
    )));
    Ok(result)
}
