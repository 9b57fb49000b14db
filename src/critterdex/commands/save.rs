use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::Roster;
use std::path::Path;

pub fn run<B: StorageBackend>(roster: &Roster, backend: &B, path: &Path) -> Result<CmdResult> {
    let text = codec::serialize(roster.creatures());
    backend.write(path, &text)?;
    log::info!("saved {} record(s) to {}", roster.len(), path.display());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Database written successfully to '{}'.",
        path.display()
    )));
    Ok(result)
}
