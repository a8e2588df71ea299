// server/src/cli/prompts.rs

//! Line input for the interactive shell and the typed prompts built on it.
//!
//! End of input (Ctrl-D, or Ctrl-C at a prompt) surfaces as an
//! [`InputClosed`] error so the menu loop can unwind and exit cleanly.

use std::collections::VecDeque;
use std::io::Write;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use models::validation::parse_date;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

/// Source of raw input lines.
pub trait Prompter {
    /// Shows `prompt` and returns the entered line without its newline.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

pub struct RustylinePrompter {
    editor: DefaultEditor,
}

impl RustylinePrompter {
    pub fn new() -> Result<Self> {
        Ok(RustylinePrompter {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for RustylinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Err(InputClosed.into()),
            Err(e) => Err(anyhow!("Failed to read line: {}", e)),
        }
    }
}

/// Replays a fixed list of answers; runs out as [`InputClosed`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| InputClosed.into())
    }
}

/// Pairs a prompter with the output stream the session writes to.
pub struct Console<'a> {
    prompter: &'a mut dyn Prompter,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, out: &'a mut dyn Write) -> Self {
        Console { prompter, out }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    /// Trimmed line. Emptiness is left to the record constructors to judge.
    pub fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(self.prompter.read_line(prompt)?.trim().to_string())
    }

    /// Asks until the answer parses as an integer. `what` names the value
    /// in the retry message.
    pub fn int(&mut self, prompt: &str, what: &str) -> Result<i64> {
        loop {
            let answer = self.text(prompt)?;
            match answer.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(&format!("Invalid input. Please enter a valid {}.", what))?,
            }
        }
    }

    /// Asks until the answer is a `yyyy-MM-dd` date. Blank means no date.
    pub fn optional_date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        loop {
            let answer = self.text(prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse_date(&answer) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => self.say("Invalid date format. Please enter a valid date in the format yyyy-mm-dd.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reask_until_integer_parses() {
        let mut prompter = ScriptedPrompter::new(["abc", "4.5", " 42 "]);
        let mut out = Vec::new();
        let value = Console::new(&mut prompter, &mut out).int("Enter Patient Age: ", "age").unwrap();
        assert_eq!(value, 42);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Invalid input. Please enter a valid age.").count(), 2);
        assert_eq!(prompter.prompts().len(), 3);
    }

    #[test]
    fn should_accept_negative_integers_for_core_validation() {
        let mut prompter = ScriptedPrompter::new(["-3"]);
        let mut out = Vec::new();
        assert_eq!(Console::new(&mut prompter, &mut out).int("Age: ", "age").unwrap(), -3);
    }

    #[test]
    fn should_parse_optional_date() {
        let mut prompter = ScriptedPrompter::new(["31/01/2030", "2030-01-31", ""]);
        let mut out = Vec::new();
        let mut console = Console::new(&mut prompter, &mut out);
        assert_eq!(console.optional_date("Expiry: ").unwrap(), NaiveDate::from_ymd_opt(2030, 1, 31));
        assert_eq!(console.optional_date("Expiry: ").unwrap(), None);
        assert!(String::from_utf8(out).unwrap().contains("Invalid date format"));
    }

    #[test]
    fn should_signal_closed_input_when_script_runs_out() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let mut out = Vec::new();
        let err = Console::new(&mut prompter, &mut out).text("Name: ").unwrap_err();
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }
}
