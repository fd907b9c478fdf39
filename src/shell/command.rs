//! Shell command parsing.
//!
//! Every input line is parsed by clap in multicall mode: the first word is
//! the subcommand, so arity checks, usage errors and `help` come from the
//! derive below.

use crate::error::CommandResult;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// A single parsed shell command.
///
/// Arguments are kept as raw strings; names and phones are validated when
/// the command runs against the address book.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a contact, replacing any contact with the same name
    Add {
        /// Contact name
        name: String,
        /// Phones to add; invalid ones are skipped
        phones: Vec<String>,
    },

    /// Add a phone to a contact
    AddPhone {
        /// Contact name
        name: String,
        /// Phone of exactly 10 digits
        phone: String,
    },

    /// Remove a phone from a contact
    RemovePhone {
        /// Contact name
        name: String,
        /// Phone to remove
        phone: String,
    },

    /// Replace a contact's phone, keeping its position
    #[command(visible_alias = "change")]
    EditPhone {
        /// Contact name
        name: String,
        /// Phone to replace
        old: String,
        /// Replacement phone of exactly 10 digits
        new: String,
    },

    /// Look up a phone on a contact
    FindPhone {
        /// Contact name
        name: String,
        /// Phone to look up
        phone: String,
    },

    /// Show one contact
    #[command(visible_alias = "phone")]
    Find {
        /// Contact name
        name: String,
    },

    /// Delete a contact
    Delete {
        /// Contact name
        name: String,
    },

    /// Show all contacts
    #[command(visible_alias = "all")]
    Show,

    /// Show all contacts as JSON
    Json,

    /// Leave the shell
    #[command(visible_aliases = ["close", "quit"])]
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. The command word is
    /// case-insensitive; arguments are passed through untouched. `help`
    /// surfaces as a clap error of kind [`ErrorKind::DisplayHelp`], see
    /// [`help_text`].
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some(keyword) = words.first_mut() else {
            return Ok(None);
        };
        keyword.make_ascii_lowercase();

        let parsed = CommandLine::try_parse_from(words)?;
        Ok(Some(parsed.command))
    }
}

/// The rendered help when `err` is a help request rather than a failure.
pub fn help_text(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Some(err.render().to_string().trim_end().to_string())
        }
        _ => None,
    }
}
