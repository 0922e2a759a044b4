//! Customer Domain Model
//!
//! Represents a rider registered with the service.

use crate::domain::models::entity::{Entity, EntityId, EntityInput};
use crate::domain::models::password::Password;

/// Data required to create a new Customer
#[derive(Debug, Clone)]
pub struct CreateCustomerData {
    pub image_url: Option<String>,
    pub name: String,
    pub email: String,
    pub password: Option<Password>,
    pub rating: i32,
    pub balance: i64,
    pub location: String,
    pub destination: String,
}

/// Data for updating an existing Customer (absent fields are left unchanged)
///
/// `image_url` is tri-state: `None` keeps the current value, `Some(None)`
/// clears it and `Some(Some(url))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerData {
    pub image_url: Option<Option<String>>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Password>,
    pub rating: Option<i32>,
    pub balance: Option<i64>,
    pub location: Option<String>,
    pub destination: Option<String>,
}

impl EntityInput for CreateCustomerData {
    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }
}

impl EntityInput for UpdateCustomerData {
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }
}

/// Customer domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: EntityId,
    image_url: Option<String>,
    name: String,
    email: String,
    password_hash: Option<String>,
    rating: i32,
    balance: i64,
    location: String,
    destination: String,
}

impl Customer {
    /// Restore a Customer from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EntityId,
        image_url: Option<String>,
        name: String,
        email: String,
        password_hash: Option<String>,
        rating: i32,
        balance: i64,
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
            balance,
            location,
            destination,
        }
    }

    // Getters

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
    pub fn balance(&self) -> i64 {
        self.balance
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

impl Entity for Customer {
    type CreateData = CreateCustomerData;
    type UpdateData = UpdateCustomerData;

    const RESOURCE: &'static str = "Customer";

    fn new(id: EntityId, data: CreateCustomerData, password_hash: Option<String>) -> Self {
        Self {
            id,
            image_url: data.image_url,
            name: data.name,
            email: data.email,
            password_hash,
            rating: data.rating,
            balance: data.balance,
            location: data.location,
            destination: data.destination,
        }
    }

    fn with_updates(self, data: UpdateCustomerData, password_hash: Option<String>) -> Self {
        Self {
            id: self.id,
            image_url: data.image_url.unwrap_or(self.image_url),
            name: data.name.unwrap_or(self.name),
            email: data.email.unwrap_or(self.email),
            password_hash: password_hash.or(self.password_hash),
            rating: data.rating.unwrap_or(self.rating),
            balance: data.balance.unwrap_or(self.balance),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_customer() -> Customer {
        Customer::new(
            EntityId::new(1).unwrap(),
            CreateCustomerData {
                image_url: Some("https://img.example.com/a.png".to_string()),
                name: "A".to_string(),
                email: "a@example.com".to_string(),
                password: None,
                rating: 5,
                balance: 100,
                location: "New York".to_string(),
                destination: "Los Angeles".to_string(),
            },
            None,
        )
    }

    #[test]
    fn test_customer_new() {
        let customer = create_test_customer();
        assert_eq!(customer.id().value(), 1);
        assert_eq!(customer.name(), "A");
        assert_eq!(customer.email(), "a@example.com");
        assert_eq!(customer.rating(), 5);
        assert_eq!(customer.balance(), 100);
        assert!(customer.password_hash().is_none());
    }

    #[test]
    fn test_with_updates_leaves_unspecified_fields() {
        let updated = create_test_customer().with_updates(
            UpdateCustomerData {
                rating: Some(4),
                ..Default::default()
            },
            None,
        );

        assert_eq!(updated.rating(), 4);
        assert_eq!(updated.name(), "A");
        assert_eq!(updated.location(), "New York");
        assert_eq!(updated.image_url(), Some("https://img.example.com/a.png"));
    }

    #[test]
    fn test_with_updates_applies_zero_values() {
        let updated = create_test_customer().with_updates(
            UpdateCustomerData {
                rating: Some(0),
                balance: Some(0),
                ..Default::default()
            },
            None,
        );

        assert_eq!(updated.rating(), 0);
        assert_eq!(updated.balance(), 0);
    }

    #[test]
    fn test_with_updates_clears_image_url() {
        let updated = create_test_customer().with_updates(
            UpdateCustomerData {
                image_url: Some(None),
                ..Default::default()
            },
            None,
        );

        assert!(updated.image_url().is_none());
    }

    #[test]
    fn test_with_updates_replaces_password_hash_only_when_given() {
        let customer = create_test_customer().with_updates(UpdateCustomerData::default(), Some("h1".to_string()));
        assert_eq!(customer.password_hash(), Some("h1"));

        let unchanged = customer.with_updates(UpdateCustomerData::default(), None);
        assert_eq!(unchanged.password_hash(), Some("h1"));
    }
}
