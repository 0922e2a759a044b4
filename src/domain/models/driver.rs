//! Driver Domain Model
//!
//! Represents a driver offering rides.

use crate::domain::models::entity::{Entity, EntityId, EntityInput};
use crate::domain::models::password::Password;

/// Data required to create a new Driver
#[derive(Debug, Clone)]
pub struct CreateDriverData {
    pub image_url: Option<String>,
    pub name: String,
    pub email: String,
    pub password: Option<Password>,
    pub rating: i32,
    pub status: String,
    pub location: String,
    pub destination: String,
}

/// Data for updating an existing Driver (absent fields are left unchanged)
#[derive(Debug, Clone, Default)]
pub struct UpdateDriverData {
    pub image_url: Option<Option<String>>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Password>,
    pub rating: Option<i32>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub destination: Option<String>,
}

impl EntityInput for CreateDriverData {
    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }
}

impl EntityInput for UpdateDriverData {
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }
}

/// Driver domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: EntityId,
    image_url: Option<String>,
    name: String,
    email: String,
    password_hash: Option<String>,
    rating: i32,
    status: String,
    location: String,
    destination: String,
}

impl Driver {
    /// Restore a Driver from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EntityId,
        image_url: Option<String>,
        name: String,
        email: String,
        password_hash: Option<String>,
        rating: i32,
        status: String,
        location: String,
        destination: String,
    ) -> Self {
        Self {
            id,
            image_url,
            name,
            email,
            password_hash,
            rating,
            status,
            location,
            destination,
        }
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rating(&self) -> i32 {
        self.rating
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl Entity for Driver {
    type CreateData = CreateDriverData;
    type UpdateData = UpdateDriverData;

    const RESOURCE: &'static str = "Driver";

    fn new(id: EntityId, data: CreateDriverData, password_hash: Option<String>) -> Self {
        Self {
            id,
            image_url: data.image_url,
            name: data.name,
            email: data.email,
            password_hash,
            rating: data.rating,
            status: data.status,
            location: data.location,
            destination: data.destination,
        }
    }

    fn with_updates(self, data: UpdateDriverData, password_hash: Option<String>) -> Self {
        Self {
            id: self.id,
            image_url: data.image_url.unwrap_or(self.image_url),
            name: data.name.unwrap_or(self.name),
            email: data.email.unwrap_or(self.email),
            password_hash: password_hash.or(self.password_hash),
            rating: data.rating.unwrap_or(self.rating),
            status: data.status.unwrap_or(self.status),
            location: data.location.unwrap_or(self.location),
            destination: data.destination.unwrap_or(self.destination),
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}
