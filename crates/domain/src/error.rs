//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]` or an explicit `From` impl.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A client-supplied value broke an invariant.
///
/// The `Display` output is sent verbatim to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is absent, malformed, not an object, or an empty object.
    #[error("Not a JSON")]
    NotJson,

    #[error("Missing {0}")]
    MissingField(&'static str),

    /// The field is present with the wrong JSON type.
    #[error("Invalid {0}")]
    InvalidField(&'static str),

    #[error("Empty {0}")]
    EmptyField(&'static str),
}

/// A lookup by id returned nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}
