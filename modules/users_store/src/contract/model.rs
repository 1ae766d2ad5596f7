use serde_json::Value;

/// Open-ended user attributes, keyed by name, holding arbitrary JSON values.
pub type Metadata = serde_json::Map<String, Value>;

/// Pure user model for callers (no serde on contract types).
///
/// `id` is caller-assigned and unique. `password` is persisted as provided;
/// hashing is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub metadata: Metadata,
}

/// Pagination descriptor.
///
/// `total` counts every row matching the filter set, ignoring
/// `limit`/`offset`, and is always computed over the same predicate that
/// produced the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// One page of users, ordered by email ascending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPage {
    pub users: Vec<User>,
    pub page: PageMetadata,
}
