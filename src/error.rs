use thiserror::Error;

/// Failures reported by `LinkedList` operations. None of them leave the list in a modified state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `find` / `find_prev` found no node holding the value.
    #[error("no node holds the requested value")]
    NotFound,

    /// `insert_after` / `insert_before` could not locate the anchor value.
    #[error("anchor value is not in the list")]
    OperationFailed,

    /// `delete` was asked to remove a value the list does not hold.
    #[error("value not present")]
    ValueAbsent,
}
