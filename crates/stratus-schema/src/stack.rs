use crate::{
    error::{NodeError, StackError},
    node::{Node, NodeKind},
    path::NodePath,
    visit::Visitor,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

///
/// Stack
///
/// The in-memory graph being built: an arena of nodes keyed by logical
/// path, plus a parent index. Created once per build, threaded explicitly
/// through every construction call, and consumed by synth. Not safe for
/// concurrent mutation; a build is single-writer by design.
///

#[derive(Clone, Debug, Serialize)]
pub struct Stack {
    name: String,
    nodes: BTreeMap<NodePath, Node>,

    #[serde(skip)]
    parents: BTreeMap<NodePath, NodePath>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Result<Self, StackError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StackError::EmptyStackName);
        }

        Ok(Self {
            name,
            nodes: BTreeMap::new(),
            parents: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root scope path of the stack.
    #[must_use]
    pub fn root(&self) -> NodePath {
        NodePath::root(&self.name)
    }

    /// Register a node under its declared scope. This is the single
    /// registration point; logical-id uniqueness is enforced here.
    pub fn attach(&mut self, node: impl Into<Node>) -> Result<NodePath, StackError> {
        let node = node.into();
        let def = node.def();

        if def.ident.is_empty() {
            return Err(StackError::EmptyLogicalId);
        }

        let scope = def.scope.clone();
        if scope != self.root() && !self.nodes.contains_key(&scope) {
            return Err(StackError::UnknownScope(scope));
        }

        let path = def.path();
        if self.nodes.contains_key(&path) {
            return Err(StackError::DuplicateLogicalId(path));
        }

        self.parents.insert(path.clone(), scope);
        self.nodes.insert(path.clone(), node);

        Ok(path)
    }

    #[must_use]
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        self.nodes.get(path)
    }

    /// All nodes in path order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodePath, &Node)> {
        self.nodes.iter()
    }

    /// Resolve a path to a concrete node kind.
    pub fn cast_node<T: NodeKind>(&self, path: &NodePath) -> Result<&T, NodeError> {
        let node = self
            .nodes
            .get(path)
            .ok_or_else(|| NodeError::NotFound(path.clone()))?;

        T::from_node(node).ok_or_else(|| NodeError::WrongKind {
            path: path.clone(),
            expected: T::KIND,
        })
    }

    /// All nodes of one kind, in path order.
    pub fn get_nodes<'a, T: NodeKind + 'a>(&'a self) -> impl Iterator<Item = (&'a NodePath, &'a T)> {
        self.nodes
            .iter()
            .filter_map(|(path, node)| T::from_node(node).map(|n| (path, n)))
    }

    /// Nodes of one kind matching a predicate.
    pub fn filter_nodes<'a, T: NodeKind + 'a>(
        &'a self,
        pred: impl Fn(&T) -> bool,
    ) -> impl Iterator<Item = (&'a NodePath, &'a T)> {
        self.get_nodes::<T>().filter(move |(_, node)| pred(node))
    }

    #[must_use]
    pub fn count_nodes<T: NodeKind>(&self) -> usize {
        self.get_nodes::<T>().count()
    }

    #[must_use]
    pub fn parent(&self, path: &NodePath) -> Option<&NodePath> {
        self.parents.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk every node in path order.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        for (path, node) in &self.nodes {
            visitor.visit(path, node);
        }
    }

    /// The full dependency edge set: field references plus explicit
    /// `depends_on` entries. Provisioning order is a topological sort over
    /// these edges, performed by the external engine.
    #[must_use]
    pub fn edges(&self) -> BTreeSet<(NodePath, NodePath)> {
        let mut edges = BTreeSet::new();

        for (path, node) in &self.nodes {
            for target in node.references() {
                edges.insert((path.clone(), target));
            }
            for target in &node.def().depends_on {
                edges.insert((path.clone(), target.clone()));
            }
        }

        edges
    }
}
