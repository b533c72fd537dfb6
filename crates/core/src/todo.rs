//! The todo record and its field rules.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One todo item.
///
/// `id` is assigned by the database on creation and immutable afterwards.
/// Stored records always carry a non-empty title and description; the
/// exception is bulk import, which writes rows as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// Check the non-empty invariant on title and description.
///
/// A `false` result means the caller should treat the request as a silent
/// no-op (redirect as if it succeeded), not as an error.
pub fn fields_present(title: &str, description: &str) -> bool {
    !title.is_empty() && !description.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_present() {
        assert!(fields_present("Buy milk", "2%"));
    }

    #[test]
    fn empty_title_rejected() {
        assert!(!fields_present("", "2%"));
    }

    #[test]
    fn empty_description_rejected() {
        assert!(!fields_present("Buy milk", ""));
    }

    #[test]
    fn whitespace_counts_as_present() {
        // Matches the original behaviour: only the empty string is rejected.
        assert!(fields_present(" ", " "));
    }
}
