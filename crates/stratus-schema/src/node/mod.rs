mod api;
mod artifact;
mod deployment;
mod function;
mod integration;
mod output;
mod permission;
mod provider;
mod role;
mod route;
mod stage;

pub use api::Api;
pub use artifact::Artifact;
pub use deployment::Deployment;
pub use function::{DEFAULT_TIMEOUT_SECS, Function};
pub use integration::Integration;
pub use output::Output;
pub use permission::{APIGATEWAY_PRINCIPAL, INVOKE_ACTION, Permission};
pub use provider::{DEFAULT_REGION, Provider};
pub use role::{BASIC_EXECUTION_POLICY_ARN, LAMBDA_TRUST_PRINCIPAL, Role};
pub use route::Route;
pub use stage::Stage;

use crate::{error::ErrorTree, path::NodePath, stack::Stack};
use serde::Serialize;

///
/// Def
///
/// Identity shared by every node: the scope it was attached under, its
/// logical id within that scope, and any explicit dependency edges beyond
/// the references its fields already carry.
///

#[derive(Clone, Debug, Serialize)]
pub struct Def {
    pub scope: NodePath,
    pub ident: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<NodePath>,
}

impl Def {
    #[must_use]
    pub fn new(scope: &NodePath, ident: impl Into<String>) -> Self {
        Self {
            scope: scope.clone(),
            ident: ident.into(),
            depends_on: Vec::new(),
        }
    }

    /// Add an explicit dependency edge to another node.
    #[must_use]
    pub fn depends_on(mut self, path: NodePath) -> Self {
        self.depends_on.push(path);
        self
    }

    /// Fully qualified path of this node.
    #[must_use]
    pub fn path(&self) -> NodePath {
        self.scope.child(&self.ident)
    }
}

///
/// ValidateNode
///
/// Local structural invariants plus resolution of any node references the
/// fields carry. Set-level invariants live in the `validate` module.
///

pub trait ValidateNode {
    fn validate(&self, _stack: &Stack) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// NodeKind
///
/// Downcast support for the arena: every concrete node names its kind and
/// can be recovered from the `Node` enum.
///

pub trait NodeKind: Sized {
    const KIND: &'static str;

    fn from_node(node: &Node) -> Option<&Self>;
}

///
/// Node
///
/// Closed enum over every resource kind the graph can hold. The arena
/// stores these directly; there is no construct inheritance hierarchy.
///

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[remain::sorted]
pub enum Node {
    Api(Api),
    Artifact(Artifact),
    Deployment(Deployment),
    Function(Function),
    Integration(Integration),
    Output(Output),
    Permission(Permission),
    Provider(Provider),
    Role(Role),
    Route(Route),
    Stage(Stage),
}

impl Node {
    #[must_use]
    pub const fn def(&self) -> &Def {
        match self {
            Self::Api(n) => &n.def,
            Self::Artifact(n) => &n.def,
            Self::Deployment(n) => &n.def,
            Self::Function(n) => &n.def,
            Self::Integration(n) => &n.def,
            Self::Output(n) => &n.def,
            Self::Permission(n) => &n.def,
            Self::Provider(n) => &n.def,
            Self::Role(n) => &n.def,
            Self::Route(n) => &n.def,
            Self::Stage(n) => &n.def,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Api(_) => Api::KIND,
            Self::Artifact(_) => Artifact::KIND,
            Self::Deployment(_) => Deployment::KIND,
            Self::Function(_) => Function::KIND,
            Self::Integration(_) => Integration::KIND,
            Self::Output(_) => Output::KIND,
            Self::Permission(_) => Permission::KIND,
            Self::Provider(_) => Provider::KIND,
            Self::Role(_) => Role::KIND,
            Self::Route(_) => Route::KIND,
            Self::Stage(_) => Stage::KIND,
        }
    }

    pub fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        match self {
            Self::Api(n) => n.validate(stack),
            Self::Artifact(n) => n.validate(stack),
            Self::Deployment(n) => n.validate(stack),
            Self::Function(n) => n.validate(stack),
            Self::Integration(n) => n.validate(stack),
            Self::Output(n) => n.validate(stack),
            Self::Permission(n) => n.validate(stack),
            Self::Provider(n) => n.validate(stack),
            Self::Role(n) => n.validate(stack),
            Self::Route(n) => n.validate(stack),
            Self::Stage(n) => n.validate(stack),
        }
    }

    /// Paths this node references through its fields. Together with
    /// `def.depends_on` these form the dependency edge set the engine
    /// topologically sorts over.
    #[must_use]
    pub fn references(&self) -> Vec<NodePath> {
        match self {
            Self::Api(_) | Self::Artifact(_) | Self::Provider(_) | Self::Role(_) => Vec::new(),
            Self::Deployment(n) => vec![n.api.clone()],
            Self::Function(n) => vec![n.role.clone(), n.artifact.clone()],
            Self::Integration(n) => vec![n.api.clone(), n.integration_uri.producer.clone()],
            Self::Output(n) => vec![n.value.producer.clone()],
            Self::Permission(n) => vec![n.function.clone()],
            Self::Route(n) => vec![n.api.clone(), n.integration.clone()],
            Self::Stage(n) => vec![n.api.clone()],
        }
    }
}

macro_rules! impl_node_kind {
    ($ty:ident, $kind:literal) => {
        impl NodeKind for $ty {
            const KIND: &'static str = $kind;

            fn from_node(node: &Node) -> Option<&Self> {
                match node {
                    Node::$ty(n) => Some(n),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Node {
            fn from(node: $ty) -> Self {
                Self::$ty(node)
            }
        }
    };
}

impl_node_kind!(Api, "api");
impl_node_kind!(Artifact, "artifact");
impl_node_kind!(Deployment, "deployment");
impl_node_kind!(Function, "function");
impl_node_kind!(Integration, "integration");
impl_node_kind!(Output, "output");
impl_node_kind!(Permission, "permission");
impl_node_kind!(Provider, "provider");
impl_node_kind!(Role, "role");
impl_node_kind!(Route, "route");
impl_node_kind!(Stage, "stage");
