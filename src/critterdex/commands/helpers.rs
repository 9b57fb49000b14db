use crate::commands::CmdMessage;
use crate::model::Creature;
use crate::store::Roster;

/// Short label used in messages, e.g. `#25 Pikachu`.
pub fn label(creature: &Creature) -> String {
    format!("#{} {}", creature.id(), creature.name())
}

/// Warn when more than one record carries `creature`'s id.
pub fn duplicate_id_warning(roster: &Roster, creature: &Creature) -> Option<CmdMessage> {
    let shared = roster.count_id(creature.id().value());
    if shared > 1 {
        Some(CmdMessage::warning(format!(
            "{} records now share id {}; lookups by id return the first one",
            shared,
            creature.id()
        )))
    } else {
        None
    }
}

pub fn not_found(handle: crate::model::Handle) -> CmdMessage {
    CmdMessage::warning(format!("No record with handle {} in memory", handle))
}
