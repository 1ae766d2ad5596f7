use async_trait::async_trait;

use crate::contract::error::UsersStoreError;
use crate::contract::filter::UserFilter;
use crate::contract::model::{Metadata, User, UserPage};

/// Port for callers: persistence operations over user entities.
/// Object-safe and async-friendly via `async_trait`.
///
/// Every operation is stateless and safe to invoke concurrently from any
/// number of callers sharing one repository value.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Persist a new user and return the identifier the store confirmed.
    ///
    /// Fails with `MalformedEntity` before any I/O when `id` or `email` is
    /// empty, and with `Conflict` when either collides with an existing row.
    async fn save(&self, user: User) -> Result<String, UsersStoreError>;

    /// Load a full user row, password included. Missing id is `NotFound`.
    async fn retrieve_by_id(&self, id: &str) -> Result<User, UsersStoreError>;

    /// One page of users matching every filter, ordered by email ascending.
    ///
    /// The page's `total` is computed over the same predicate and bound
    /// values as the page itself. Listed users carry no password. A decode
    /// failure fails the whole call; partial pages are never returned.
    async fn retrieve_page(
        &self,
        limit: u64,
        offset: u64,
        filters: &[UserFilter],
    ) -> Result<UserPage, UsersStoreError>;

    /// Point update of the unique email. Duplicate email is `Conflict`;
    /// missing id is `NotFound`.
    async fn update_email(&self, id: &str, email: &str) -> Result<(), UsersStoreError>;

    /// Replace the whole metadata map. Missing id is `NotFound`.
    async fn update_metadata(&self, id: &str, metadata: &Metadata)
        -> Result<(), UsersStoreError>;

    /// Overwrite the stored password value. Missing id is `NotFound`.
    async fn update_password(&self, id: &str, password: &str) -> Result<(), UsersStoreError>;

    /// Delete by id. Removing an absent id is not an error.
    async fn remove(&self, id: &str) -> Result<(), UsersStoreError>;
}
