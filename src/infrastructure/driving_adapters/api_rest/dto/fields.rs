//! Shared field helpers for request DTOs.

use serde::{Deserialize, Deserializer};
use validator::ValidateUrl;

use crate::shared::errors::{ApiError, UseCaseError};

/// Deserialize a present field (including `null`) as `Some`, so that
/// `Option<Option<T>>` can tell "absent" from "explicitly null".
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Check a nullable URL that sits outside the derived validation
pub(crate) fn ensure_url(field: &str, value: Option<&str>) -> Result<(), ApiError> {
    match value {
        Some(url) if !url.validate_url() => Err(ApiError::UseCase(UseCaseError::Validation(vec![format!(
            "{field}: {field} must be a valid URL"
        )]))),
        _ => Ok(()),
    }
}

/// Unwrap a field whose presence was already enforced by `#[validate(required)]`
pub(crate) fn required<T>(field: &str, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::UseCase(UseCaseError::Validation(vec![format!("{field}: {field} is required")])))
}
