use derive_more::Display;
use serde::Serialize;

///
/// NodePath
///
/// Fully qualified logical path of a node within a stack, formed by joining
/// the owning scope and the node's logical id with `/`. Paths are the stable
/// identity the external engine keys its state on, so they must be
/// deterministic across re-synthesis.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NodePath(String);

impl NodePath {
    /// Root path for a stack scope.
    #[must_use]
    pub fn root(stack_name: &str) -> Self {
        Self(stack_name.to_string())
    }

    /// Path of a child logical id under this scope.
    #[must_use]
    pub fn child(&self, ident: &str) -> Self {
        Self(format!("{}/{ident}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path segment (the logical id).
    #[must_use]
    pub fn ident(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// The enclosing scope, if this path is not a root.
    #[must_use]
    pub fn scope(&self) -> Option<Self> {
        self.0
            .rsplit_once('/')
            .map(|(scope, _)| Self(scope.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_paths_join_with_slash() {
        let root = NodePath::root("http-test");
        let child = root.child("TestLambda-Resource");

        assert_eq!(child.as_str(), "http-test/TestLambda-Resource");
        assert_eq!(child.ident(), "TestLambda-Resource");
        assert_eq!(child.scope(), Some(root));
    }

    #[test]
    fn root_has_no_scope() {
        assert_eq!(NodePath::root("stack").scope(), None);
    }
}
