//! Customer DTOs
//!
//! Data transfer objects for customer API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::customer::{CreateCustomerData, Customer, UpdateCustomerData};
use crate::domain::models::entity::Entity;
use crate::domain::models::password::Password;
use crate::shared::errors::ApiError;

use super::fields::{ensure_url, present, required};

/// DTO for creating a customer (PUT /customers/{id})
///
/// Fields are optional at the serde level so that a missing field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct CreateCustomerDto {
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,

    #[validate(required(message = "rating is required"))]
    pub rating: Option<i32>,

    #[validate(required(message = "balance is required"))]
    pub balance: Option<i64>,

    #[validate(
        required(message = "location is required"),
        length(min = 1, max = 100, message = "location must be between 1 and 100 characters")
    )]
    pub location: Option<String>,

    #[validate(
        required(message = "destination is required"),
        length(min = 1, max = 100, message = "destination must be between 1 and 100 characters")
    )]
    pub destination: Option<String>,
}

impl TryFrom<CreateCustomerDto> for CreateCustomerData {
    type Error = ApiError;

    fn try_from(dto: CreateCustomerDto) -> Result<Self, Self::Error> {
        Ok(Self {
            image_url: dto.image_url,
            name: required("name", dto.name)?,
            email: required("email", dto.email)?,
            password: dto.password.map(Password::new),
            rating: required("rating", dto.rating)?,
            balance: required("balance", dto.balance)?,
            location: required("location", dto.location)?,
            destination: required("destination", dto.destination)?,
        })
    }
}

/// DTO for partial customer update (PATCH)
///
/// Absent fields are left unchanged; present fields are applied even when
/// zero. `image_url: null` clears the image.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct PatchCustomerDto {
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,

    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(
        email(message = "email must be a valid address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,

    pub rating: Option<i32>,

    pub balance: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "location must be between 1 and 100 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 100, message = "destination must be between 1 and 100 characters"))]
    pub destination: Option<String>,
}

impl TryFrom<PatchCustomerDto> for UpdateCustomerData {
    type Error = ApiError;

    fn try_from(dto: PatchCustomerDto) -> Result<Self, Self::Error> {
        ensure_url("image_url", dto.image_url.as_ref().and_then(Option::as_deref))?;

        Ok(Self {
            image_url: dto.image_url,
            name: dto.name,
            email: dto.email,
            password: dto.password.map(Password::new),
            rating: dto.rating,
            balance: dto.balance,
            location: dto.location,
            destination: dto.destination,
        })
    }
}

/// Customer response DTO; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponseDto {
    pub id: i64,
    pub image_url: Option<String>,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub balance: i64,
    pub location: String,
    pub destination: String,
}

impl From<Customer> for CustomerResponseDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id().value(),
            image_url: customer.image_url().map(str::to_string),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            rating: customer.rating(),
            balance: customer.balance(),
            location: customer.location().to_string(),
            destination: customer.destination().to_string(),
        }
    }
}
