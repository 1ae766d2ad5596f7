use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    /// JSON-encoded metadata object; `{}` when the user has none.
    pub metadata: String,
    /// Populated by the store on insert.
    pub created_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Projection decoded by the page query, which selects only these columns.
/// Passwords never appear in listings.
#[derive(Debug, FromQueryResult)]
pub struct ListRow {
    pub id: String,
    pub email: String,
    pub metadata: String,
}
