//! Driver DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::driver::{CreateDriverData, Driver, UpdateDriverData};
use crate::domain::models::entity::Entity;
use crate::domain::models::password::Password;
use crate::shared::errors::ApiError;

use super::fields::{ensure_url, present, required};

/// DTO for creating a driver (PUT /drivers/{id})
#[derive(Clone, Default, Deserialize, Validate)]
pub struct CreateDriverDto {
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

    #[validate(
        required(message = "status is required"),
        length(min = 1, max = 100, message = "status must be between 1 and 100 characters")
    )]
    pub status: Option<String>,

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

impl TryFrom<CreateDriverDto> for CreateDriverData {
    type Error = ApiError;

    fn try_from(dto: CreateDriverDto) -> Result<Self, Self::Error> {
        Ok(Self {
            image_url: dto.image_url,
            name: required("name", dto.name)?,
            email: required("email", dto.email)?,
            password: dto.password.map(Password::new),
            rating: required("rating", dto.rating)?,
            status: required("status", dto.status)?,
            location: required("location", dto.location)?,
            destination: required("destination", dto.destination)?,
        })
    }
}

/// DTO for partial driver update (PATCH)
#[derive(Clone, Default, Deserialize, Validate)]
pub struct PatchDriverDto {
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

    #[validate(length(min = 1, max = 100, message = "status must be between 1 and 100 characters"))]
    pub status: Option<String>,

    #[validate(length(min = 1, max = 100, message = "location must be between 1 and 100 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 100, message = "destination must be between 1 and 100 characters"))]
    pub destination: Option<String>,
}

impl TryFrom<PatchDriverDto> for UpdateDriverData {
    type Error = ApiError;

    fn try_from(dto: PatchDriverDto) -> Result<Self, Self::Error> {
        ensure_url("image_url", dto.image_url.as_ref().and_then(Option::as_deref))?;

        Ok(Self {
            image_url: dto.image_url,
            name: dto.name,
            email: dto.email,
            password: dto.password.map(Password::new),
            rating: dto.rating,
            status: dto.status,
            location: dto.location,
            destination: dto.destination,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverResponseDto {
    pub id: i64,
    pub image_url: Option<String>,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub status: String,
    pub location: String,
    pub destination: String,
}

impl From<Driver> for DriverResponseDto {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id().value(),
            image_url: driver.image_url().map(str::to_string),
            name: driver.name().to_string(),
            email: driver.email().to_string(),
            rating: driver.rating(),
            status: driver.status().to_string(),
            location: driver.location().to_string(),
            destination: driver.destination().to_string(),
        }
    }
}
