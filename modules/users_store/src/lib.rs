// === PUBLIC CONTRACT ===
// Stable surface for callers: models, filters, errors and the repository
// port.
pub mod contract;

pub use contract::{error, filter, model};

pub mod domain;
pub use domain::repo::UsersRepository;

// === INTERNAL MODULES ===
// Storage internals are exposed only so integration tests can reach the
// entity and migrations; callers should stick to `contract` and the
// repository type below.
#[doc(hidden)]
pub mod infra;

pub use infra::storage::sea_orm_repo::SeaOrmUsersRepository;
