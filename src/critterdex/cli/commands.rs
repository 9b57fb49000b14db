use super::render::{print_messages, render_config, render_listing};
use super::session::Session;
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use critterdex::api::{CmdMessage, ConfigAction, DexApi};
use critterdex::config::{config_dir, DexConfig};
use critterdex::error::Result;
use critterdex::model::{CaughtStatus, CreatureId, SortKey};
use critterdex::store::fs_backend::FsBackend;
use critterdex::store::Roster;
use std::io::Write;
use std::path::{Path, PathBuf};

struct AppContext {
    api: DexApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config_dir();

    // Config does not need a database
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_dir);

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::List { sort }) => handle_list(&mut ctx, sort),
        Some(Commands::Add {
            id,
            name,
            primary,
            secondary,
            caught,
        }) => handle_add(&mut ctx, id, name, primary, secondary, caught.into()),
        Some(Commands::Edit {
            query,
            id,
            name,
            primary,
            secondary,
        }) => handle_edit(&mut ctx, &query, id, name, primary, secondary),
        Some(Commands::Remove { query }) => handle_remove(&mut ctx, &query),
        Some(Commands::Caught { query, status }) => handle_caught(&mut ctx, &query, status),
        Some(Commands::Check) => handle_check(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_context(cli: &Cli, config_dir: &Path) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut config = DexConfig::load(config_dir).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config in {}: {}", config_dir.display(), e);
        DexConfig::default()
    });
    config = config.with_env_overrides();
    if let Some(db) = &cli.db {
        config.database = db.clone();
    }
    log::debug!("using database {}", config.database.display());

    AppContext {
        api: DexApi::new(FsBackend::new(cwd), config),
    }
}

/// Loads the database for a batch command. A missing file is an empty database.
fn load_existing(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.database_exists(None) {
        ctx.api.load_from_path(None)?;
    } else {
        log::info!(
            "{} does not exist yet, starting empty",
            ctx.api.config().database.display()
        );
    }
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = Session::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()?;
    out.flush()?;
    Ok(())
}

fn handle_list(ctx: &mut AppContext, sort: SortKey) -> Result<()> {
    load_existing(ctx)?;
    let result = ctx.api.list_sorted(sort);
    if !result.listed.is_empty() {
        print!("{}", render_listing(&result.listed, sort));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    id: CreatureId,
    name: String,
    primary: String,
    secondary: String,
    caught: CaughtStatus,
) -> Result<()> {
    load_existing(ctx)?;
    let result = ctx
        .api
        .create_record(id, &name, &primary, &secondary, caught)?;
    print_messages(&result.messages);
    save(ctx)
}

fn handle_edit(
    ctx: &mut AppContext,
    query: &str,
    id: Option<CreatureId>,
    name: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
) -> Result<()> {
    load_existing(ctx)?;
    let Some(entry) = ctx.api.query(query).cloned() else {
        return not_found(query);
    };

    let current = &entry.creature;
    let id = id.unwrap_or_else(|| current.id().clone());
    let name = name.unwrap_or_else(|| current.name().to_string());
    let primary = primary.unwrap_or_else(|| current.primary_type().to_string());
    let secondary = secondary.unwrap_or_else(|| current.secondary_type().to_string());

    let result = ctx
        .api
        .update_record(entry.handle, id, &name, &primary, &secondary)?;
    print_messages(&result.messages);
    save(ctx)
}

fn handle_remove(ctx: &mut AppContext, query: &str) -> Result<()> {
    load_existing(ctx)?;
    let Some(handle) = ctx.api.query(query).map(|e| e.handle) else {
        return not_found(query);
    };
    let result = ctx.api.delete_record(handle)?;
    print_messages(&result.messages);
    save(ctx)
}

fn handle_caught(ctx: &mut AppContext, query: &str, status: CaughtStatus) -> Result<()> {
    load_existing(ctx)?;
    let Some(handle) = ctx.api.query(query).map(|e| e.handle) else {
        return not_found(query);
    };
    let result = ctx.api.update_caught_status(handle, status)?;
    print_messages(&result.messages);
    save(ctx)
}

fn handle_check(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.load_from_path(None)?;
    let count = result.loaded_count.unwrap_or_default();
    let db = ctx.api.config().database.display().to_string();

    let duplicates = duplicate_ids(ctx.api.roster());
    if duplicates.is_empty() {
        println!("{}: {} record(s), no problems found.", db, count);
        return Ok(());
    }

    println!("{}: {} record(s).", db, count);
    let warnings: Vec<_> = duplicates
        .iter()
        .map(|(id, n)| CmdMessage::warning(format!("ID {} is shared by {} records.", id, n)))
        .collect();
    print_messages(&warnings);
    Ok(())
}

/// Ids used by more than one record, in order of first appearance.
fn duplicate_ids(roster: &Roster) -> Vec<(u64, usize)> {
    let mut duplicates: Vec<(u64, usize)> = Vec::new();
    for creature in roster.creatures() {
        let id = creature.id().value();
        if duplicates.iter().any(|(seen, _)| *seen == id) {
            continue;
        }
        let n = roster.count_id(id);
        if n > 1 {
            duplicates.push((id, n));
        }
    }
    duplicates
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = critterdex::commands::config::run(dir, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

fn save(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.save_to_path(None)?;
    print_messages(&result.messages);
    Ok(())
}

fn not_found(query: &str) -> Result<()> {
    print_messages(&[CmdMessage::warning(format!(
        "Could not find a creature by the name or ID '{}'.",
        query
    ))]);
    Ok(())
}
