//! User — an API account. The password is stored as given and never
//! leaves the process through serialization.

use serde::Serialize;

use crate::error::{HolonetError, ValidationError};
use crate::id::UserId;

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
    pub firts_name: String,
    pub second_name: String,
}

impl User {
    /// Create a builder for a user that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::default()
    }
}

/// A validated user awaiting an id from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub firts_name: String,
    pub second_name: String,
}

impl NewUser {
    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), HolonetError> {
        let required = [
            ("email", &self.email),
            ("password", &self.password),
            ("firts_name", &self.firts_name),
            ("second_name", &self.second_name),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field).into());
            }
        }
        Ok(())
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            is_active: self.is_active,
            firts_name: self.firts_name,
            second_name: self.second_name,
        }
    }
}

/// Step-by-step builder for [`NewUser`].
#[derive(Debug, Default)]
pub struct NewUserBuilder {
    email: Option<String>,
    password: Option<String>,
    is_active: Option<bool>,
    firts_name: Option<String>,
    second_name: Option<String>,
}

impl NewUserBuilder {
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
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    #[must_use]
    pub fn firts_name(mut self, firts_name: impl Into<String>) -> Self {
        self.firts_name = Some(firts_name.into());
        self
    }

    #[must_use]
    pub fn second_name(mut self, second_name: impl Into<String>) -> Self {
        self.second_name = Some(second_name.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewUser`].
    ///
    /// `is_active` defaults to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if a required field is missing or empty.
    pub fn build(self) -> Result<NewUser, HolonetError> {
        let user = NewUser {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
            firts_name: self.firts_name.unwrap_or_default(),
            second_name: self.second_name.unwrap_or_default(),
        };
        user.validate()?;
        Ok(user)
    }
}
