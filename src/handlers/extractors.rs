//! Path parameter helpers shared by handlers.

use crate::error::{ApiError, ErrorCode};

/// Validated integer identifier helper
///
/// Use this to parse and validate numeric ids from path segments.
///
/// # Example
/// ```ignore
/// let id = ValidatedId::parse(&raw_id)?;
/// ```
pub struct ValidatedId;

impl ValidatedId {
    /// Parse a path segment into an `i64`, returning an ApiError on failure
    pub fn parse(s: &str) -> Result<i64, ApiError> {
        s.parse::<i64>().map_err(|e| {
            ApiError::with_details(
                ErrorCode::InvalidIdentifier,
                format!("Invalid id: {}", s),
                e.to_string(),
            )
        })
    }
}
