//! Pure conversions between the domain `User` and the stored row shape.
//! Each direction fails only on metadata (de)serialization.

use sea_orm::Set;

use super::entity::{ActiveModel, ListRow, Model};
use crate::contract::error::UsersStoreError;
use crate::contract::model::{Metadata, User};

const EMPTY_METADATA: &str = "{}";

/// Encode a metadata map for storage. An empty map is stored as `{}`, never
/// as null or an empty string.
pub(crate) fn encode_metadata(metadata: &Metadata) -> Result<String, UsersStoreError> {
    if metadata.is_empty() {
        return Ok(EMPTY_METADATA.to_owned());
    }
    serde_json::to_string(metadata).map_err(UsersStoreError::serialization)
}

fn decode_metadata(raw: &str) -> Result<Metadata, UsersStoreError> {
    serde_json::from_str(raw).map_err(UsersStoreError::serialization)
}

/// Convert a domain user into an insertable row. `created_at` is left unset;
/// the store assigns it.
pub(crate) fn to_row(user: &User) -> Result<ActiveModel, UsersStoreError> {
    Ok(ActiveModel {
        id: Set(user.id.clone()),
        email: Set(user.email.clone()),
        password: Set(user.password.clone()),
        metadata: Set(encode_metadata(&user.metadata)?),
        ..Default::default()
    })
}

/// Convert a full row back into a domain user.
pub(crate) fn to_user(row: Model) -> Result<User, UsersStoreError> {
    Ok(User {
        metadata: decode_metadata(&row.metadata)?,
        id: row.id,
        email: row.email,
        password: row.password,
    })
}

/// Convert a listing row into a domain user. The page query does not load
/// passwords, so the field stays empty.
pub(crate) fn list_row_to_user(row: ListRow) -> Result<User, UsersStoreError> {
    Ok(User {
        metadata: decode_metadata(&row.metadata)?,
        id: row.id,
        email: row.email,
        password: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;
    use serde_json::json;

    fn sample_user() -> User {
        let mut metadata = Metadata::new();
        metadata.insert("plan".into(), json!("pro"));
        metadata.insert("seats".into(), json!(12));
        metadata.insert("tags".into(), json!(["a", "b"]));
        User {
            id: "u-1".into(),
            email: "ann@example.com".into(),
            password: "secret".into(),
            metadata,
        }
    }

    #[test]
    fn metadata_round_trips_exactly() {
        let user = sample_user();
        let row = to_row(&user).unwrap();

        let encoded = match row.metadata {
            ActiveValue::Set(s) => s,
            _ => panic!("metadata must be set"),
        };
        let decoded = decode_metadata(&encoded).unwrap();
        assert_eq!(decoded, user.metadata);
    }

    #[test]
    fn empty_metadata_is_stored_as_empty_object() {
        let user = User {
            id: "u-2".into(),
            email: "bo@example.com".into(),
            ..Default::default()
        };
        let row = to_row(&user).unwrap();
        assert_eq!(row.metadata, ActiveValue::Set("{}".into()));

        let decoded = decode_metadata("{}").unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn created_at_is_left_for_the_store() {
        let row = to_row(&sample_user()).unwrap();
        assert_eq!(row.created_at, ActiveValue::NotSet);
    }

    #[test]
    fn full_row_decodes_with_password() {
        let row = Model {
            id: "u-3".into(),
            email: "cy@example.com".into(),
            password: "hunter2".into(),
            metadata: r#"{"k":true}"#.into(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        let user = to_user(row).unwrap();
        assert_eq!(user.password, "hunter2");
        assert_eq!(user.metadata.get("k"), Some(&json!(true)));
    }

    #[test]
    fn list_row_decodes_without_password() {
        let row = ListRow {
            id: "u-4".into(),
            email: "di@example.com".into(),
            metadata: "{}".into(),
        };
        let user = list_row_to_user(row).unwrap();
        assert!(user.password.is_empty());
        assert!(user.metadata.is_empty());
    }

    #[test]
    fn garbage_metadata_is_a_serialization_error() {
        let row = ListRow {
            id: "u-5".into(),
            email: "ed@example.com".into(),
            metadata: "not-json".into(),
        };
        let err = list_row_to_user(row).unwrap_err();
        assert!(matches!(err, UsersStoreError::Serialization { .. }));
    }
}
