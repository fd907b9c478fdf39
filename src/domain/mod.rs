//! Domain value objects.
//!
//! Contact names and phone numbers are validated at construction time, so an
//! invalid value can never be stored in a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
