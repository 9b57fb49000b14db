use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CaughtStatus, Creature, CreatureId};
use crate::store::{Entry, Roster};

use super::helpers::{duplicate_id_warning, label};

pub fn run(
    roster: &mut Roster,
    id: CreatureId,
    name: &str,
    primary_type: &str,
    secondary_type: &str,
    caught: CaughtStatus,
) -> Result<CmdResult> {
    let creature = Creature::new(id, name, primary_type, secondary_type, caught)?;
    let handle = roster.add(creature.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {}. Remember to save your changes.",
        label(&creature)
    )));
    if let Some(warning) = duplicate_id_warning(roster, &creature) {
        result.add_message(warning);
    }
    result.affected.push(Entry { handle, creature });
    Ok(result)
}
