//! Error types for composition and constraint declaration.

use thiserror::Error;

/// Error taxonomy.
///
/// Every hierarchy failure is a caller error that leaves the tree untouched,
/// so there is only one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidState,
}

/// Errors raised by the registry, the composition builder and the constraint
/// phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("view {view} is not allocated")]
    UnknownView { view: usize },

    #[error("view {view} is already attached to view {parent}")]
    AlreadyAttached { view: usize, parent: usize },

    #[error("view {view} is listed more than once in the same composition")]
    DuplicateEntry { view: usize },

    #[error("view {view} would become its own ancestor")]
    Cycle { view: usize },

    #[error("view {view} has no parent; compose it before declaring constraints")]
    NotAttached { view: usize },

    #[error("constraints for view {view} were already declared")]
    AlreadyConstrained { view: usize },

    #[error("constraints cannot be declared while a composition is in progress")]
    CompositionInProgress,

    #[error("view {view} cannot anchor to view {anchor}: {reason}")]
    InvalidAnchor {
        view: usize,
        anchor: usize,
        reason: &'static str,
    },

    #[error("id {id:?} already names live view {view}")]
    DuplicateId { id: String, view: usize },

    #[error("declaration for view {view} is empty")]
    EmptyDeclaration { view: usize },

    #[error("view {view} is owned by view {parent} and is destroyed with it")]
    NotARoot { view: usize, parent: usize },
}

impl HierarchyError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidState
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = HierarchyError::AlreadyAttached { view: 3, parent: 1 };
        assert_eq!(err.to_string(), "view 3 is already attached to view 1");
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        let err = HierarchyError::Cycle { view: 0 };
        assert_eq!(err.to_string(), "view 0 would become its own ancestor");

        let err = HierarchyError::DuplicateId {
            id: "title".to_string(),
            view: 2,
        };
        assert_eq!(err.to_string(), "id \"title\" already names live view 2");
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}
