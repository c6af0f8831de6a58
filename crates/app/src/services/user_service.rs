//! User service — use-cases for managing users.

use holonet_domain::error::{HolonetError, NotFoundError};
use holonet_domain::id::UserId;
use holonet_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user accounts.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if a required field is missing, or
    /// a storage error (including a duplicate email) from the repository.
    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, HolonetError> {
        user.validate()?;
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, HolonetError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HolonetError> {
        self.repo.get_all().await
    }
}
