use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Inventory item as returned by the item service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Immutable identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Updated")]
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Partial update for an item.
///
/// Each field is tri-state: absent (`None`, or JSON `null`) leaves the stored
/// value untouched, present-but-empty is rejected by validation, and
/// present-and-valid replaces the stored value. An update must carry at
/// least one field. Keys other than the known fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Updated")]
    pub name: Option<String>,
}

impl UpdateItemInput {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Body of `POST /items`. The id is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemInput {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Widget")]
    pub name: String,
}

impl CreateItemInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn validate_has_changes(input: &UpdateItemInput) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::new("empty_update")
            .with_message(Cow::Borrowed("At least one field must be provided")));
    }
    Ok(())
}

/// Failures reported by an [`ItemService`](crate::services::ItemService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item not found")]
    NotFound,

    #[error("invalid item input")]
    InvalidInput,

    /// Anything else the service could not handle.
    #[error("unexpected item service failure: {0}")]
    Unexpected(String),
}
