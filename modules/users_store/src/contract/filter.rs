use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::contract::error::UsersStoreError;

/// Closed set of listing filters.
///
/// Constructing a variant directly cannot fail; the loose condition-map
/// boundary lives in [`UserFilter::from_condition_map`]. Filters combine
/// with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    /// `email` contains the given needle as a literal, case-sensitive
    /// substring.
    EmailContains(String),
    /// Creation date strictly after the given day.
    CreatedAfter(NaiveDate),
    /// `id` is a member of the given set.
    IdIn(Vec<String>),
}

impl UserFilter {
    /// Parse the legacy condition-map shape.
    ///
    /// Recognized keys: `email` (string), `startTime` (`YYYY-MM-DD` string)
    /// and `ids` (array of strings). Unrecognized keys are ignored. A
    /// recognized key whose value has the wrong shape, including a
    /// malformed `startTime` date, is an
    /// [`InvalidFilter`](UsersStoreError::InvalidFilter) error.
    pub fn from_condition_map(
        conditions: &Map<String, Value>,
    ) -> Result<Vec<UserFilter>, UsersStoreError> {
        let mut filters = Vec::with_capacity(conditions.len());
        for (field, value) in conditions {
            match field.as_str() {
                "email" => {
                    let needle = value
                        .as_str()
                        .ok_or_else(|| UsersStoreError::invalid_filter(field, "a string"))?;
                    filters.push(UserFilter::EmailContains(needle.to_owned()));
                }
                "startTime" => {
                    let raw = value
                        .as_str()
                        .ok_or_else(|| UsersStoreError::invalid_filter(field, "a string"))?;
                    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                        UsersStoreError::invalid_filter(field, "a YYYY-MM-DD date")
                    })?;
                    filters.push(UserFilter::CreatedAfter(date));
                }
                "ids" => {
                    let items = value.as_array().ok_or_else(|| {
                        UsersStoreError::invalid_filter(field, "an array of strings")
                    })?;
                    let ids = items
                        .iter()
                        .map(|item| {
                            item.as_str().map(str::to_owned).ok_or_else(|| {
                                UsersStoreError::invalid_filter(field, "an array of strings")
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    filters.push(UserFilter::IdIn(ids));
                }
                _ => {}
            }
        }
        Ok(filters)
    }
}
