use thiserror::Error;

/// The ways a [`Tree`][crate::Tree] operation can be rejected.
///
/// Every fallible operation checks its precondition before touching the
/// tree, so an `Err` always leaves the tree exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Returned by [`Tree::insert`][crate::Tree::insert] when the value is
    /// already stored in the tree. Values in a tree are unique.
    #[error("value is already present in the tree")]
    DuplicateValue,

    /// Returned by [`Tree::delete`][crate::Tree::delete] and
    /// [`Tree::depth`][crate::Tree::depth] when no node holds the requested
    /// value.
    #[error("value is not present in the tree")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition() {
        assert_eq!(
            Error::DuplicateValue.to_string(),
            "value is already present in the tree"
        );
        assert_eq!(
            Error::NotFound.to_string(),
            "value is not present in the tree"
        );
    }
}
