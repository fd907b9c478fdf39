//! Record model: one contact with its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates; every lookup matches the first phone whose digits are
/// exactly equal to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// On failure the record is left unchanged and the validation error is
    /// returned to the caller.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> RecordResult<&Phone> {
        let phone = Phone::new(phone).map_err(|e| {
            warn!(contact = %self.name, error = %e, "Couldn't add the phone");
            RecordError::from(e)
        })?;

        debug!(contact = %self.name, phone = %phone, "Phone added");
        let index = self.phones.len();
        self.phones.push(phone);
        Ok(&self.phones[index])
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `false` when there is no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position(phone) {
            Some(index) => {
                self.phones.remove(index);
                debug!(contact = %self.name, phone = %phone, "Phone removed");
                true
            }
            None => {
                warn!(contact = %self.name, phone = %phone, "Phone not found");
                false
            }
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The lookup happens first: a missing `old` is reported as
    /// `PhoneNotFound` even when `new` is invalid too. Neither failure
    /// mutates the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let Some(index) = self.position(old) else {
            warn!(contact = %self.name, phone = %old, "Phone not found");
            return Err(RecordError::PhoneNotFound(old.to_string()));
        };

        let replacement = Phone::new(new).map_err(|e| {
            warn!(contact = %self.name, phone = %old, error = %e, "Couldn't edit the phone");
            RecordError::from(e)
        })?;

        debug!(contact = %self.name, old = %old, new = %replacement, "Phone edited");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        let found = self.phones.iter().find(|p| p.as_str() == phone);
        if found.is_none() {
            warn!(contact = %self.name, phone = %phone, "Phone not found");
        }
        found
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    fn digits(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_record_requires_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_new_record_has_no_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.name().as_str(), "Jane");
        assert!(record.phones().is_empty());
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let record = john();
        assert_eq!(digits(&record), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_add_phone_returns_added_phone() {
        let mut record = Record::new("John").unwrap();
        let phone = record.add_phone("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            digits(&record),
            vec!["1234567890", "5555555555", "1234567890"]
        );
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = john();
        let before = record.clone();

        for candidate in ["12345", "", "123456789a", "12345678901"] {
            let result = record.add_phone(candidate);
            assert_eq!(
                result.unwrap_err(),
                RecordError::Validation(ValidationError::InvalidPhone(candidate.to_string()))
            );
        }
        assert_eq!(record, before);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();
        assert!(record.remove_phone("1234567890"));
        assert_eq!(digits(&record), vec!["5555555555"]);
    }

    #[test]
    fn test_remove_phone_removes_first_duplicate_only() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert!(record.remove_phone("1234567890"));
        assert_eq!(digits(&record), vec!["5555555555", "1234567890"]);
    }

    #[test]
    fn test_remove_missing_phone() {
        let mut record = john();
        assert!(!record.remove_phone("0000000000"));
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut record = john();
        assert!(record.edit_phone("1234567890", "1112223333").is_ok());
        assert_eq!(digits(&record), vec!["1112223333", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_value() {
        let mut record = john();
        let result = record.edit_phone("1234567890", "111");
        assert_eq!(
            result,
            Err(RecordError::Validation(ValidationError::InvalidPhone(
                "111".to_string()
            )))
        );
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_missing_old_value() {
        let mut record = john();
        let result = record.edit_phone("0000000000", "1112223333");
        assert_eq!(
            result,
            Err(RecordError::PhoneNotFound("0000000000".to_string()))
        );
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_reports_missing_before_invalid() {
        let mut record = john();
        let result = record.edit_phone("0000000000", "bad");
        assert_eq!(
            result,
            Err(RecordError::PhoneNotFound("0000000000".to_string()))
        );
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        let phone = record.find_phone("5555555555").unwrap();
        assert_eq!(phone.as_str(), "5555555555");
    }

    #[test]
    fn test_find_phone_exact_match_only() {
        let record = john();
        assert!(record.find_phone("555555555").is_none());
        assert!(record.find_phone("55555555550").is_none());
        assert!(record.find_phone(" 5555555555").is_none());
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            john().to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_string(&john()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John","phones":["1234567890","5555555555"]}"#
        );
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let record: Record = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert!(record.phones().is_empty());

        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name":"Jane","phones":["123"]}"#);
        assert!(result.is_err());

        let result: Result<Record, _> = serde_json::from_str(r#"{"name":"","phones":[]}"#);
        assert!(result.is_err());
    }
}
