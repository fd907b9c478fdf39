//! Address Book - an in-memory contact directory.
//!
//! Contacts are stored as named records, each holding an ordered list of
//! validated 10-digit phone numbers. Records are added, looked up and deleted
//! by exact name.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: `Record` and the `AddressBook` that owns records
//! - **error**: Error types for records, configuration and the shell
//! - **config**: Configuration management from environment variables
//! - **shell**: Line-oriented command interpreter used by the binary

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::{AddressBook, Record};
pub use shell::{Command, Outcome, Shell};
