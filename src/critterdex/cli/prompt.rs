//! Line-based prompts that keep asking until the answer is valid.
//!
//! Every prompt trims the input. End of input surfaces as
//! [`DexError::InputClosed`] so the session can wind down cleanly.

use critterdex::error::{DexError, Result, ValidationError};
use critterdex::model::{validate_text, CaughtStatus, CreatureId, Field, SortKey};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt`, read one line, return it trimmed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// read, so a stray byte is just a bad answer.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Err(DexError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    pub fn ask_id(&mut self) -> Result<CreatureId> {
        loop {
            let answer = self.line("ID: ")?;
            match answer.parse::<CreatureId>() {
                Ok(id) => return Ok(id),
                Err(ValidationError::NotAnInteger(_)) => self.say("Please enter an integer.")?,
                Err(_) => self.say("Please give a positive integer.")?,
            }
        }
    }

    fn ask_text(
        &mut self,
        prompt: &str,
        field: Field,
        required: bool,
        empty_hint: &str,
    ) -> Result<String> {
        loop {
            let answer = self.line(prompt)?;
            match validate_text(field, &answer, required) {
                Ok(value) => return Ok(value),
                Err(ValidationError::Empty(_)) => self.say(empty_hint)?,
                Err(ValidationError::ForbiddenCharacter { found, .. }) => {
                    self.say(&format!("The {:?} character is not allowed.", found))?
                }
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    pub fn ask_name(&mut self) -> Result<String> {
        self.ask_text("Name: ", Field::Name, true, "Please enter a name for the creature.")
    }

    pub fn ask_primary_type(&mut self) -> Result<String> {
        self.ask_text(
            "Main type: ",
            Field::PrimaryType,
            true,
            "Please enter a main (primary) type for the creature.",
        )
    }

    pub fn ask_secondary_type(&mut self) -> Result<String> {
        self.ask_text(
            "Secondary type (leave blank for none): ",
            Field::SecondaryType,
            false,
            "",
        )
    }

    pub fn ask_caught(&mut self) -> Result<CaughtStatus> {
        loop {
            let answer = self.line("Have you caught this creature [Y/N]? ")?;
            match CaughtStatus::from_answer(&answer) {
                Some(status) => return Ok(status),
                None => self.say("Please either enter 'Y' for yes or 'N' for no.")?,
            }
        }
    }

    pub fn ask_sort_key(&mut self) -> Result<SortKey> {
        self.say(
            "Would you like the list sorted by ID (1), name (2), primary type (3) or secondary type (4)?",
        )?;
        loop {
            let answer = self.line("Please enter your choice: ")?;
            match answer.parse::<usize>() {
                Ok(choice) => match SortKey::from_choice(choice) {
                    Some(key) => return Ok(key),
                    None => self.say("Please give a valid choice (1-4).")?,
                },
                Err(_) => self.say("That wasn't an integer.")?,
            }
        }
    }

    pub fn ask_query(&mut self) -> Result<String> {
        self.line("Please enter the creature's name or ID: ")
    }
}
