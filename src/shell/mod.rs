//! Line-oriented command shell over an [`AddressBook`].
//!
//! Each input line is parsed into a [`Command`] and executed against the
//! book. Command failures are written back as `Error: ...` lines and never
//! stop the loop; only `exit` or end of input does.

pub mod command;

pub use command::{help_text, Command};

use crate::config::Config;
use crate::error::{CommandError, CommandResult, RecordError};
use crate::models::{AddressBook, Record};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Output(String),
    /// The user asked to leave
    Exit,
}

/// Interactive address book session.
pub struct Shell {
    book: AddressBook,
    config: Config,
}

impl Shell {
    /// Create a shell with an empty address book.
    pub fn new(config: Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create a shell over an existing address book.
    pub fn with_book(book: AddressBook, config: Config) -> Self {
        Self { book, config }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// Lines are decoded one at a time, so a line that is not valid UTF-8
    /// is reported like any other failed command. Only I/O failures on
    /// `input`/`output` are returned as errors.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("Address book shell started");
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let result = String::from_utf8(buf.clone())
                .map_err(CommandError::from)
                .and_then(|line| self.execute_line(&line));

            match result {
                Ok(Some(Outcome::Output(text))) => writeln!(output, "{}", text)?,
                Ok(Some(Outcome::Exit)) => {
                    writeln!(output, "Good bye!")?;
                    break;
                }
                Ok(None) => {}
                Err(e) => {
                    let line = String::from_utf8_lossy(&buf);
                    debug!(line = %line.trim_end(), error = %e, "Command failed");
                    match e {
                        CommandError::Parse(_) => writeln!(output, "{}", e)?,
                        _ => writeln!(output, "Error: {}", e)?,
                    }
                }
            }
        }

        info!(records = self.book.len(), "Address book shell stopped");
        Ok(())
    }

    /// Parse and execute a single line.
    ///
    /// Blank lines yield `Ok(None)`; `help` yields the rendered help text.
    pub fn execute_line(&mut self, line: &str) -> CommandResult<Option<Outcome>> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(None),
            Err(CommandError::Parse(err)) => {
                return match help_text(&err) {
                    Some(help) => Ok(Some(Outcome::Output(help))),
                    None => Err(CommandError::Parse(err)),
                };
            }
            Err(e) => return Err(e),
        };

        self.execute(command).map(Some)
    }

    /// Execute one parsed command against the book.
    pub fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        let text = match command {
            Command::Add { name, phones } => {
                let mut record = Record::new(name)?;
                let mut rejected = Vec::new();
                for phone in phones {
                    if let Err(e) = record.add_phone(phone.as_str()) {
                        rejected.push(format!("Skipped {}: {}", phone, e));
                    }
                }

                let message = match self.book.add_record(record) {
                    Some(_) => "Contact updated.",
                    None => "Contact added.",
                };
                if rejected.is_empty() {
                    message.to_string()
                } else {
                    format!("{}\n{}", rejected.join("\n"), message)
                }
            }
            Command::AddPhone { name, phone } => {
                self.record_mut(&name)?.add_phone(phone)?;
                "Phone added.".to_string()
            }
            Command::RemovePhone { name, phone } => {
                if !self.record_mut(&name)?.remove_phone(&phone) {
                    return Err(RecordError::PhoneNotFound(phone).into());
                }
                "Phone removed.".to_string()
            }
            Command::EditPhone { name, old, new } => {
                self.record_mut(&name)?.edit_phone(&old, &new)?;
                "Phone updated.".to_string()
            }
            Command::FindPhone { name, phone } => {
                let record = self.record(&name)?;
                match record.find_phone(&phone) {
                    Some(found) => found.to_string(),
                    None => return Err(RecordError::PhoneNotFound(phone).into()),
                }
            }
            Command::Find { name } => self.record(&name)?.to_string(),
            Command::Delete { name } => match self.book.delete(&name) {
                Some(_) => "Contact deleted.".to_string(),
                None => return Err(CommandError::RecordNotFound(name)),
            },
            Command::Show => {
                if self.book.is_empty() {
                    "No contacts.".to_string()
                } else {
                    self.book.to_string()
                }
            }
            Command::Json => {
                if self.config.json_pretty {
                    serde_json::to_string_pretty(&self.book)?
                } else {
                    serde_json::to_string(&self.book)?
                }
            }
            Command::Exit => return Ok(Outcome::Exit),
        };

        Ok(Outcome::Output(text))
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book.find(name).ok_or_else(|| {
            warn!(contact = %name, "Record not found");
            CommandError::RecordNotFound(name.to_string())
        })
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        match self.book.find_mut(name) {
            Some(record) => Ok(record),
            None => {
                warn!(contact = %name, "Record not found");
                Err(CommandError::RecordNotFound(name.to_string()))
            }
        }
    }
}
