//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod customer;
pub mod driver;
pub mod entity;
pub mod password;
pub mod principal;

pub use customer::{CreateCustomerData, Customer, UpdateCustomerData};
pub use driver::{CreateDriverData, Driver, UpdateDriverData};
pub use entity::{Entity, EntityId, EntityInput};
pub use password::Password;
pub use principal::{Credential, Principal, Role};
