//! Directory entity types.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use venturebook_shared::types::{ActivityFieldId, CompanyId, Money, UserId};

/// A company owned by a user and operating in one activity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company ID.
    pub id: CompanyId,
    /// Owner of the company.
    pub owner_id: UserId,
    /// Activity field of the company.
    pub activity_field_id: ActivityFieldId,
    /// Company name.
    pub name: String,
    /// City of registration.
    pub city: String,
}

/// An industry sector with a favorability weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityField {
    /// Activity field ID.
    pub id: ActivityFieldId,
    /// Sector name.
    pub name: String,
    /// Sector description.
    pub description: String,
    /// Favorability weight, normalized by the maximum over all fields.
    pub cost: Money,
}

/// Invalid directory entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A required text field is blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Activity field weight of zero.
    #[error("Activity field cost cannot be zero")]
    ZeroCost,
}

impl ActivityField {
    /// Checks name, description and cost.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` for a blank name or description, or a zero cost.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.name.trim().is_empty() {
            return Err(DirectoryError::EmptyField("name"));
        }
        if self.description.trim().is_empty() {
            return Err(DirectoryError::EmptyField("description"));
        }
        if self.cost.is_zero() {
            return Err(DirectoryError::ZeroCost);
        }
        Ok(())
    }
}
