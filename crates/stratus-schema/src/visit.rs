use crate::{error::ErrorTree, node::Node, path::NodePath, stack::Stack};

///
/// Visitor
///

pub trait Visitor {
    fn visit(&mut self, path: &NodePath, node: &Node);
}

///
/// ValidateVisitor
///
/// Runs each node's local validation, aggregating failures under the
/// node's path so one pass reports everything.
///

pub struct ValidateVisitor<'a> {
    stack: &'a Stack,
    pub errors: ErrorTree,
}

impl<'a> ValidateVisitor<'a> {
    #[must_use]
    pub const fn new(stack: &'a Stack) -> Self {
        Self {
            stack,
            errors: ErrorTree::new(),
        }
    }
}

impl Visitor for ValidateVisitor<'_> {
    fn visit(&mut self, path: &NodePath, node: &Node) {
        if let Err(errs) = node.validate(self.stack) {
            self.errors.merge(path.as_str(), errs);
        }
    }
}
