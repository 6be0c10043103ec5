//! User: owns places and writes reviews.

use serde::Serialize;

use crate::error::{HbnbError, ValidationError};
use crate::id::UserId;
use crate::payload::Payload;
use crate::time::{Timestamp, now, serialize_iso};

/// A registered user.
///
/// `password` is kept for persistence but never serialized into responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_iso")]
    pub updated_at: Timestamp,
}

impl User {
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `email` or `password` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyField("password").into());
        }
        Ok(())
    }

    /// Copy `email`, `password`, `first_name` and `last_name` when present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] on a mistyped field.
    pub fn apply(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(email) = payload.optional_str("email")? {
            self.email = email;
        }
        if let Some(password) = payload.optional_str("password")? {
            self.password = password;
        }
        if let Some(first_name) = payload.optional_str("first_name")? {
            self.first_name = first_name;
        }
        if let Some(last_name) = payload.optional_str("last_name")? {
            self.last_name = last_name;
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `email` or `password` is missing.
    pub fn build(self) -> Result<User, HbnbError> {
        let created_at = now();
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        };
        user.validate()?;
        Ok(user)
    }
}
