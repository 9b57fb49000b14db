//! The interactive command loop.
//!
//! One single-character command per line, case-insensitive. Each command runs
//! to completion (including any field prompts) before the next one is read.
//! End of input behaves like the quit command.

use super::prompt::Prompter;
use super::render::{format_creature, render_listing, render_messages};
use critterdex::api::{CmdResult, DexApi};
use critterdex::error::{DexError, Result};
use critterdex::store::backend::StorageBackend;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const APP_NAME: &str = "Critterdex";

enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a, B: StorageBackend, R, W> {
    api: &'a mut DexApi<B>,
    prompt: Prompter<R, W>,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Session<'a, B, R, W> {
    pub fn new(api: &'a mut DexApi<B>, input: R, output: W) -> Self {
        Self {
            api,
            prompt: Prompter::new(input, output),
        }
    }

    /// Runs until the quit command or end of input. Returns the output sink.
    pub fn run(mut self) -> Result<W> {
        self.prompt.say(&format!("Welcome to {}!\n", APP_NAME))?;
        self.startup_load()?;
        self.instructions()?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) | Err(DexError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        self.prompt
            .say(&format!("Thanks for using {}. Goodbye!", APP_NAME))?;
        Ok(self.prompt.into_output())
    }

    fn startup_load(&mut self) -> Result<()> {
        if !self.api.config().load_on_start {
            return Ok(());
        }
        let path = self.api.config().database.clone();
        match self.api.load_from_path(None) {
            Ok(result) => self.report(&result),
            Err(e) => {
                log::warn!("startup load of {} failed: {}", path.display(), e);
                self.warn(&format!(
                    "Could not load '{}': {}. Starting with an empty database.\n",
                    path.display(),
                    e
                ))
            }
        }
    }

    fn step(&mut self) -> Result<Flow> {
        let command = self
            .prompt
            .line("Command ('X' for list of commands): ")?
            .to_uppercase();
        self.prompt.say("")?;

        match command.as_str() {
            "X" => self.instructions()?,
            "L" => self.list()?,
            "E" => self.edit()?,
            "C" => self.change_caught()?,
            "A" => self.add()?,
            "R" => self.remove()?,
            "1" => self.load()?,
            "2" => self.save()?,
            "3" => return Ok(Flow::Quit),
            _ => self
                .prompt
                .say("Unknown command. Type 'X' to see the list of available commands.\n")?,
        }
        Ok(Flow::Continue)
    }

    fn instructions(&mut self) -> Result<()> {
        self.prompt.say(
            "Please choose a command\n\
             \n\
             A: Add a new creature\n\
             R: Remove an existing creature\n\
             \n\
             E: Edit an existing creature\n\
             C: Change a creature's caught-status\n\
             \n\
             L: List all creatures (list order will be asked)\n\
             \n\
             1: Load the database from an existing file (replaces the records in memory)\n\
             2: Save the database to a file\n\
             \n\
             3: Quit\n",
        )
    }

    fn add(&mut self) -> Result<()> {
        self.prompt.say("Adding a new creature")?;
        let id = self.prompt.ask_id()?;
        let name = self.prompt.ask_name()?;
        let primary = self.prompt.ask_primary_type()?;
        let secondary = self.prompt.ask_secondary_type()?;
        let caught = self.prompt.ask_caught()?;

        let result = self
            .api
            .create_record(id, &name, &primary, &secondary, caught);
        self.finish(result)
    }

    fn edit(&mut self) -> Result<()> {
        self.prompt.say("Editing a creature")?;
        let query = self.prompt.ask_query()?;
        let Some(entry) = self.api.query(&query).cloned() else {
            return self.warn(
                "Could not find a creature by that name or ID, so can't make changes to it.\n",
            );
        };

        let c = &entry.creature;
        self.prompt.say(&format!(
            "Current values: ID={}, name={}, type1={}, type2={}",
            c.id(),
            c.name(),
            c.primary_type(),
            c.secondary_type()
        ))?;

        let id = self.prompt.ask_id()?;
        let name = self.prompt.ask_name()?;
        let primary = self.prompt.ask_primary_type()?;
        let secondary = self.prompt.ask_secondary_type()?;

        let result = self
            .api
            .update_record(entry.handle, id, &name, &primary, &secondary);
        self.finish(result)
    }

    fn change_caught(&mut self) -> Result<()> {
        let query = self.prompt.ask_query()?;
        let Some(handle) = self.api.query(&query).map(|e| e.handle) else {
            return self.warn(
                "Could not find a creature by that name or ID, so can't change its caught-status.\n",
            );
        };

        let caught = self.prompt.ask_caught()?;
        let result = self.api.update_caught_status(handle, caught);
        self.finish(result)
    }

    fn remove(&mut self) -> Result<()> {
        self.prompt.say("Removing a creature")?;
        let query = self.prompt.ask_query()?;
        let Some(entry) = self.api.query(&query).cloned() else {
            return self
                .warn("Could not find a creature by that name or ID, so can't remove it.\n");
        };

        self.prompt
            .say(&format!("Removing {}", format_creature(&entry.creature)))?;
        let result = self.api.delete_record(entry.handle);
        self.finish(result)
    }

    fn list(&mut self) -> Result<()> {
        self.prompt.say("Listing creatures")?;
        if self.api.count() == 0 {
            return self.prompt.say(
                "No creatures in the database. Perhaps you'd like to load a database or add a new creature?\n",
            );
        }

        let key = self.prompt.ask_sort_key()?;
        let result = self.api.list_sorted(key);
        let listing = render_listing(&result.listed, key);
        self.prompt.say(&listing)
    }

    fn load(&mut self) -> Result<()> {
        let path = self.ask_path("Which database to load")?;
        let result = self.api.load_from_path(Some(&path));
        if result.is_err() {
            self.prompt.say("Couldn't load that database.")?;
        }
        self.finish(result)
    }

    fn save(&mut self) -> Result<()> {
        let path = self.ask_path("Where to save the database")?;
        let result = self.api.save_to_path(Some(&path));
        if result.is_err() {
            self.prompt.say("Couldn't save to that database.")?;
        }
        self.finish(result)
    }

    /// Blank answers resolve to the configured database inside the API.
    fn ask_path(&mut self, question: &str) -> Result<PathBuf> {
        let prompt = format!(
            "{} (default '{}'): ",
            question,
            self.api.config().database.display()
        );
        Ok(PathBuf::from(self.prompt.line(&prompt)?))
    }

    /// Prints the outcome of an API call. Only I/O on the terminal itself is fatal.
    fn finish(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => {
                self.report(&result)?;
                self.prompt.say("")
            }
            Err(DexError::InputClosed) => Err(DexError::InputClosed),
            Err(e) => {
                let line = critterdex::api::CmdMessage::error(format!("Error: {}", e));
                write!(self.prompt.output(), "{}", render_messages(&[line]))?;
                self.prompt.say("")
            }
        }
    }

    fn report(&mut self, result: &CmdResult) -> Result<()> {
        write!(self.prompt.output(), "{}", render_messages(&result.messages))?;
        Ok(())
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        let line = critterdex::api::CmdMessage::warning(text.trim_end());
        write!(self.prompt.output(), "{}", render_messages(&[line]))?;
        self.prompt.say("")
    }
}
