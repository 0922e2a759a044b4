//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod auth;
pub mod customer;
pub mod driver;
pub(crate) mod fields;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

pub use auth::{LoginRequestDto, TokenResponseDto};
pub use customer::{CreateCustomerDto, CustomerResponseDto, PatchCustomerDto};
pub use driver::{CreateDriverDto, DriverResponseDto, PatchDriverDto};

use crate::domain::models::customer::Customer;
use crate::domain::models::driver::Driver;
use crate::domain::models::entity::Entity;
use crate::shared::errors::ApiError;

/// Binds an entity to the DTOs its REST collection speaks
pub trait RestResource: Entity {
    type CreateDto: DeserializeOwned + Validate + TryInto<Self::CreateData, Error = ApiError> + Send + 'static;
    type PatchDto: DeserializeOwned + Validate + TryInto<Self::UpdateData, Error = ApiError> + Send + 'static;
    type ResponseDto: Serialize + From<Self> + Send + 'static;
}

impl RestResource for Customer {
    type CreateDto = CreateCustomerDto;
    type PatchDto = PatchCustomerDto;
    type ResponseDto = CustomerResponseDto;
}

impl RestResource for Driver {
    type CreateDto = CreateDriverDto;
    type PatchDto = PatchDriverDto;
    type ResponseDto = DriverResponseDto;
}
