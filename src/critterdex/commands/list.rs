use crate::commands::{CmdMessage, CmdResult};
use crate::model::SortKey;
use crate::store::Roster;

pub fn run(roster: &Roster, key: SortKey) -> CmdResult {
    let listed = roster.list_sorted(key).into_iter().cloned().collect();
    let mut result = CmdResult::default().with_listed(listed);
    if roster.is_empty() {
        result.add_message(CmdMessage::info(
            "No creatures in memory. Load a database or add one first.",
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{CaughtStatus, CreatureId};

    fn add(roster: &mut Roster, id: u64, name: &str) {
        create::run(
            roster,
            CreatureId::new(id).unwrap(),
            name,
            "Normal",
            "",
            CaughtStatus::NotCaught,
        )
        .unwrap();
    }

    #[test]
    fn lists_in_requested_order() {
        let mut roster = Roster::new();
        add(&mut roster, 25, "Pikachu");
        add(&mut roster, 1, "Bulbasaur");
        add(&mut roster, 6, "Charizard");

        let by_id = run(&roster, SortKey::Id);
        let ids: Vec<_> = by_id
            .listed
            .iter()
            .map(|e| e.creature.id().value())
            .collect();
        assert_eq!(ids, vec![1, 6, 25]);

        let by_name = run(&roster, SortKey::Name);
        let names: Vec<_> = by_name.listed.iter().map(|e| e.creature.name()).collect();
        assert_eq!(names, vec!["Bulbasaur", "Charizard", "Pikachu"]);
        assert!(by_name.messages.is_empty());
    }

    #[test]
    fn empty_roster_gets_a_hint() {
        let result = run(&Roster::new(), SortKey::Id);
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
