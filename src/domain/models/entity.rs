//! Entity Abstractions
//!
//! The shape shared by every record type the registry stores. Customers and
//! drivers both implement [`Entity`], which lets one repository and one set of
//! use cases serve both collections.

use std::fmt;
use std::str::FromStr;

use crate::domain::models::password::Password;
use crate::shared::errors::DomainError;

/// Client-chosen primary key of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(i64);

impl EntityId {
    /// Create an EntityId, rejecting negative values
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if `value` is negative.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::InvalidId(format!(
                "id must be a non-negative integer, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Get the underlying integer
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for EntityId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidId(format!("id must be an integer, got '{s}'")))?;
        Self::new(value)
    }
}

/// Input carried into create and update operations
///
/// Exposes the fields the generic use cases need to inspect without knowing
/// the concrete entity type.
pub trait EntityInput: Send + 'static {
    /// Email being assigned, if any
    fn email(&self) -> Option<&str>;

    /// Plaintext password being assigned, if any
    fn password(&self) -> Option<&Password>;
}

/// A record type stored by the registry
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Data required to create the entity
    type CreateData: EntityInput;

    /// Data for a partial update; `Default` means "change nothing"
    type UpdateData: EntityInput + Default;

    /// Human readable resource name used in errors and logs
    const RESOURCE: &'static str;

    /// Build a new entity; the password, if any, has already been hashed
    fn new(id: EntityId, data: Self::CreateData, password_hash: Option<String>) -> Self;

    /// Apply the supplied fields, leaving everything else unchanged
    #[must_use]
    fn with_updates(self, data: Self::UpdateData, password_hash: Option<String>) -> Self;

    fn id(&self) -> EntityId;

    fn email(&self) -> &str;

    fn password_hash(&self) -> Option<&str>;
}
