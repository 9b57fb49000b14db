use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CaughtStatus, Handle};
use crate::store::{Entry, Roster};

use super::helpers::{label, not_found};

pub fn run(roster: &mut Roster, handle: Handle, caught: CaughtStatus) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(creature) = roster.get_mut(handle) else {
        result.add_message(not_found(handle));
        return Ok(result);
    };
    creature.set_caught(caught);
    let creature = creature.clone();

    let status = if caught.is_caught() {
        "caught"
    } else {
        "not caught"
    };
    result.add_message(CmdMessage::success(format!(
        "{} marked as {}.",
        label(&creature),
        status
    )));
    result.affected.push(Entry { handle, creature });
    Ok(result)
}
