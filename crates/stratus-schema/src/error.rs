use crate::path::NodePath;
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// ErrorTree
///
/// Flat aggregation of validation failures, each tagged with the route of
/// the node it was raised against. Validation walks the whole graph and
/// reports everything at once instead of stopping at the first failure.
///

#[derive(Debug, Default)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Push a single error message.
    pub fn add(&mut self, err: impl Display) {
        self.errors.push(err.to_string());
    }

    /// Merge another tree, prefixing its entries with a route key.
    pub fn merge(&mut self, route: &str, other: Self) {
        for err in other.errors {
            self.errors.push(format!("{route}: {err}"));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Collapse into a `Result`, returning `self` if any error was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted error onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("node not found: `{0}`")]
    NotFound(NodePath),

    #[error("node `{path}` is not a {expected}")]
    WrongKind {
        path: NodePath,
        expected: &'static str,
    },
}

///
/// StackError
///

#[derive(Debug, ThisError)]
pub enum StackError {
    #[error("duplicate logical id `{0}`")]
    DuplicateLogicalId(NodePath),

    #[error("logical id is empty")]
    EmptyLogicalId,

    #[error("stack name is empty")]
    EmptyStackName,

    #[error("unknown scope `{0}`")]
    UnknownScope(NodePath),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_resolves_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn merge_prefixes_entries_with_route() {
        let mut inner = ErrorTree::new();
        err!(inner, "timeout must be positive");

        let mut outer = ErrorTree::new();
        outer.merge("stack/TestLambda-Resource", inner);

        let rendered = outer.result().expect_err("merged errors must surface").to_string();
        assert_eq!(rendered, "stack/TestLambda-Resource: timeout must be positive");
    }

    #[test]
    fn tree_collects_multiple_errors() {
        let mut errs = ErrorTree::new();
        err!(errs, "first");
        err!(errs, "second {}", 2);

        assert_eq!(errs.len(), 2);
        assert_eq!(errs.to_string(), "first; second 2");
    }
}
