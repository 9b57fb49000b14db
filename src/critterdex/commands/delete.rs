use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Handle;
use crate::store::{Entry, Roster};

use super::helpers::{label, not_found};

/// Removes a record. A handle that is not in the roster is a no-op with a warning.
pub fn run(roster: &mut Roster, handle: Handle) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match roster.remove(handle) {
        Some(creature) => {
            result.add_message(CmdMessage::success(format!("Removed {}.", label(&creature))));
            result.affected.push(Entry { handle, creature });
        }
        None => result.add_message(not_found(handle)),
    }
    Ok(result)
}
