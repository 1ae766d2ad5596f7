//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a
//! `DatabaseConnection` **or** a transactional connection. The value holds
//! no mutable state; one instance may serve any number of concurrent
//! callers, and dropping an in-flight call cancels its round-trip at the
//! next await point.

use async_trait::async_trait;
use db_errors::{ErrorClassifier, SqlStateClassifier, StorageErrorKind};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::{debug, instrument};

use super::entity::{Column, Entity as UserEntity, ListRow};
use super::{mapper, query};
use crate::contract::error::UsersStoreError;
use crate::contract::filter::UserFilter;
use crate::contract::model::{Metadata, PageMetadata, User, UserPage};
use crate::domain::repo::UsersRepository;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
    classifier: Box<dyn ErrorClassifier>,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    /// Repository with the default SQLSTATE-based classifier.
    pub fn new(conn: C) -> Self {
        Self::with_classifier(conn, SqlStateClassifier)
    }

    /// Repository with a custom storage-error classifier, for drivers whose
    /// failures the default tables do not cover.
    pub fn with_classifier(conn: C, classifier: impl ErrorClassifier + 'static) -> Self {
        Self {
            conn,
            classifier: Box::new(classifier),
        }
    }

    /// Fold a write failure into the domain taxonomy.
    fn write_error(&self, op: &'static str, err: DbErr) -> UsersStoreError {
        match self.classifier.classify(&err) {
            StorageErrorKind::Duplicate => UsersStoreError::conflict(err),
            StorageErrorKind::Malformed => {
                UsersStoreError::malformed_by("the store rejected a field value", err)
            }
            StorageErrorKind::Other => UsersStoreError::storage(op, err),
        }
    }
}

#[async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    #[instrument(name = "users_store.save", skip(self, user), fields(user_id = %user.id))]
    async fn save(&self, user: User) -> Result<String, UsersStoreError> {
        // Validation happens before any I/O.
        if user.id.is_empty() {
            return Err(UsersStoreError::malformed("id must not be empty"));
        }
        if user.email.is_empty() {
            return Err(UsersStoreError::malformed("email must not be empty"));
        }

        let row = mapper::to_row(&user)?;
        let inserted = UserEntity::insert(row)
            .exec(&self.conn)
            .await
            .map_err(|e| self.write_error("save user", e))?;

        debug!("saved user");
        Ok(inserted.last_insert_id)
    }

    #[instrument(name = "users_store.retrieve_by_id", skip(self))]
    async fn retrieve_by_id(&self, id: &str) -> Result<User, UsersStoreError> {
        let row = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|e| UsersStoreError::storage("retrieve user", e))?
            .ok_or_else(|| UsersStoreError::not_found(id))?;
        mapper::to_user(row)
    }

    #[instrument(name = "users_store.retrieve_page", skip(self, filters))]
    async fn retrieve_page(
        &self,
        limit: u64,
        offset: u64,
        filters: &[UserFilter],
    ) -> Result<UserPage, UsersStoreError> {
        let predicate = query::build_conditions(filters);

        let rows = UserEntity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Email)
            .column(Column::Metadata)
            .filter(predicate.clone())
            .order_by_asc(Column::Email)
            .limit(limit)
            .offset(offset)
            .into_model::<ListRow>()
            .all(&self.conn)
            .await
            .map_err(|e| UsersStoreError::storage("select users", e))?;

        // A single decode failure fails the whole call; partial pages are
        // never returned.
        let users = rows
            .into_iter()
            .map(mapper::list_row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        // Count over the same predicate value, so the total always
        // describes the set the page was cut from.
        let total = UserEntity::find()
            .filter(predicate)
            .count(&self.conn)
            .await
            .map_err(|e| UsersStoreError::storage("count users", e))?;

        debug!(total, returned = users.len(), "listed users");
        Ok(UserPage {
            users,
            page: PageMetadata {
                total,
                offset,
                limit,
            },
        })
    }

    #[instrument(name = "users_store.update_email", skip(self))]
    async fn update_email(&self, id: &str, email: &str) -> Result<(), UsersStoreError> {
        if email.is_empty() {
            return Err(UsersStoreError::malformed("email must not be empty"));
        }

        let res = UserEntity::update_many()
            .col_expr(Column::Email, Expr::value(email))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|e| self.write_error("update email", e))?;
        if res.rows_affected == 0 {
            return Err(UsersStoreError::not_found(id));
        }
        Ok(())
    }

    #[instrument(name = "users_store.update_metadata", skip(self, metadata))]
    async fn update_metadata(
        &self,
        id: &str,
        metadata: &Metadata,
    ) -> Result<(), UsersStoreError> {
        let encoded = mapper::encode_metadata(metadata)?;

        let res = UserEntity::update_many()
            .col_expr(Column::Metadata, Expr::value(encoded))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|e| self.write_error("update metadata", e))?;
        if res.rows_affected == 0 {
            return Err(UsersStoreError::not_found(id));
        }
        Ok(())
    }

    #[instrument(name = "users_store.update_password", skip(self, password))]
    async fn update_password(&self, id: &str, password: &str) -> Result<(), UsersStoreError> {
        let res = UserEntity::update_many()
            .col_expr(Column::Password, Expr::value(password))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|e| self.write_error("update password", e))?;
        if res.rows_affected == 0 {
            return Err(UsersStoreError::not_found(id));
        }
        Ok(())
    }

    #[instrument(name = "users_store.remove", skip(self))]
    async fn remove(&self, id: &str) -> Result<(), UsersStoreError> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|e| UsersStoreError::storage("remove user", e))?;
        debug!(rows = res.rows_affected, "removed user");
        Ok(())
    }
}
