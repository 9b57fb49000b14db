use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CreatureId, Handle};
use crate::store::{Entry, Roster};

use super::helpers::{duplicate_id_warning, label, not_found};

/// Rewrites id, name and types. The caught status is left alone.
pub fn run(
    roster: &mut Roster,
    handle: Handle,
    id: CreatureId,
    name: &str,
    primary_type: &str,
    secondary_type: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(creature) = roster.get_mut(handle) else {
        result.add_message(not_found(handle));
        return Ok(result);
    };
    creature.set_details(id, name, primary_type, secondary_type)?;
    let creature = creature.clone();

    result.add_message(CmdMessage::success(format!("Updated {}.", label(&creature))));
    if let Some(warning) = duplicate_id_warning(roster, &creature) {
        result.add_message(warning);
    }
    result.affected.push(Entry { handle, creature });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::model::CaughtStatus;

    fn id(n: u64) -> CreatureId {
        CreatureId::new(n).unwrap()
    }

    #[test]
    fn updates_in_place_keeping_caught_status() {
        let mut roster = Roster::new();
        let created = create::run(&mut roster, id(25), "Pikachu", "Electric", "", CaughtStatus::Caught).unwrap();
        let handle = created.affected[0].handle;

        let result = run(&mut roster, handle, id(26), "Raichu", "Electric", "Psychic").unwrap();
        assert!(result.has_level(MessageLevel::Success));

        let entry = roster.get(handle).unwrap();
        assert_eq!(entry.creature.id().value(), 26);
        assert_eq!(entry.creature.name(), "Raichu");
        assert_eq!(entry.creature.secondary_type(), "Psychic");
        assert_eq!(entry.creature.caught(), CaughtStatus::Caught);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn invalid_values_leave_record_unchanged() {
        let mut roster = Roster::new();
        let created = create::run(&mut roster, id(1), "Bulbasaur", "Grass", "Poison", CaughtStatus::NotCaught).unwrap();
        let handle = created.affected[0].handle;

        assert!(run(&mut roster, handle, id(2), "Ivysaur", "Gr|ass", "").is_err());
        assert_eq!(roster.get(handle).unwrap().creature.name(), "Bulbasaur");
    }

    #[test]
    fn missing_handle_warns() {
        let mut roster = Roster::new();
        let result = run(&mut roster, Handle::new(), id(1), "Mew", "Psychic", "").unwrap();
        assert!(result.affected.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
    }
}
