use colored::Colorize;
use critterdex::api::{CmdMessage, MessageLevel};
use critterdex::config::DexConfig;
use critterdex::model::{Creature, SortKey};
use critterdex::store::Entry;

/// `25. Pikachu (Electric), caught`
pub fn format_creature(creature: &Creature) -> String {
    let mut types = creature.primary_type().to_string();
    if !creature.secondary_type().is_empty() {
        types.push_str(" / ");
        types.push_str(creature.secondary_type());
    }
    let caught = if creature.caught().is_caught() {
        "caught"
    } else {
        "not caught yet"
    };
    format!(
        "{}. {} ({}), {}",
        creature.id(),
        creature.name(),
        types,
        caught
    )
}

pub fn render_listing(entries: &[Entry], key: SortKey) -> String {
    let mut out = format!("Here are your creatures, sorted by {}:\n", key);
    for entry in entries {
        let line = format_creature(&entry.creature);
        if entry.creature.caught().is_caught() {
            out.push_str(&line.green().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_config(config: &DexConfig) -> String {
    DexConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}
