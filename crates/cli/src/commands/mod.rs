//! CLI command implementations, one module per dashboard area.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod guide;
pub mod minutes;
pub mod profile;
pub mod student;

use crate::error::ViewError;

/// Find `id` in a freshly loaded list, or report it as missing.
pub(crate) fn find_by_id<'a, T>(
    items: &'a [T],
    id: &str,
    what: &str,
    id_of: impl Fn(&T) -> &str,
) -> Result<&'a T, ViewError> {
    items
        .iter()
        .find(|item| id_of(item) == id)
        .ok_or_else(|| ViewError::MissingItem(format!("{what} '{id}'")))
}
