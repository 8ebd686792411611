//! Responsible record.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// A person accountable for executing tasks, with a contact address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsible {
    pub id: i64,
    pub name: String,
    pub contact: String,
}

impl Responsible {
    pub fn new(id: i64, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyResponsibleName { id: self.id });
        }
        if self.contact.trim().is_empty() {
            return Err(ValidationError::EmptyContact { id: self.id });
        }
        Ok(())
    }
}
