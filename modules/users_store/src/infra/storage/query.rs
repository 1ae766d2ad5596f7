//! `UserFilter` → `sea_orm::Condition` compiler (filters in, SQL out).
//!
//! A `Condition` carries the predicate fragment and its bound values
//! together; every filter value is bound, never interpolated.

use sea_orm::{ColumnTrait, Condition};

use super::entity::Column;
use crate::contract::filter::UserFilter;

/// Combine every filter into one AND-joined condition.
///
/// An empty slice yields an empty condition, which renders without a
/// `WHERE` clause.
pub(crate) fn build_conditions(filters: &[UserFilter]) -> Condition {
    let mut cond = Condition::all();
    for filter in filters {
        cond = match filter {
            UserFilter::EmailContains(needle) => {
                cond.add(Column::Email.like(like_contains(needle)))
            }
            UserFilter::CreatedAfter(date) => cond.add(Column::CreatedAt.gt(*date)),
            UserFilter::IdIn(ids) => cond.add(Column::Id.is_in(ids.iter().map(String::as_str))),
        };
    }
    cond
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}
