//! Principal Domain Model
//!
//! The authenticated identity carried inside access tokens, and the stored
//! credential a login attempt is checked against.

use std::fmt;
use std::str::FromStr;

use crate::domain::models::entity::EntityId;

/// Kind of account a principal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
    Driver,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
            Self::Driver => "driver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            "driver" => Ok(Self::Driver),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Authenticated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub email: String,
    pub role: Role,
}

impl Principal {
    /// Principal of the configured bootstrap administrator
    #[must_use]
    pub fn admin(username: &str) -> Self {
        Self {
            subject: Role::Admin.as_str().to_string(),
            email: username.to_string(),
            role: Role::Admin,
        }
    }

    /// Principal of a stored customer or driver
    #[must_use]
    pub fn account(role: Role, id: EntityId, email: &str) -> Self {
        Self {
            subject: format!("{role}:{id}"),
            email: email.to_string(),
            role,
        }
    }
}

/// Stored credential a login attempt is verified against
#[derive(Debug, Clone)]
pub struct Credential {
    pub principal: Principal,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_subject_combines_role_and_id() {
        let principal = Principal::account(Role::Driver, EntityId::new(3).unwrap(), "d@example.com");
        assert_eq!(principal.subject, "driver:3");
        assert_eq!(principal.role, Role::Driver);
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::Customer, Role::Driver] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("root".parse::<Role>().is_err());
    }
}
