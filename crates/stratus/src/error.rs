use stratus_schema::error::{ErrorTree, NodeError, StackError};
use thiserror::Error as ThisError;

///
/// Error
/// Public error taxonomy for graph construction and wiring.
///
/// Every failure is deterministic and raised before anything is emitted;
/// provisioning-time failures belong to the external engine and are never
/// caught or retried here.
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid or missing required field: empty name, non-positive timeout,
    /// malformed trust policy, duplicate logical id, duplicate stage name.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Wiring that crosses ownership boundaries: a route whose integration
    /// belongs to another surface, or a target outside the stack.
    #[error("reference error: {0}")]
    Reference(String),

    /// The same wiring registered twice: duplicate route key on one surface.
    #[error("duplicate wiring: {0}")]
    DuplicateWiring(String),

    /// Aggregated whole-graph validation failures, raised at synth time.
    #[error("validation failed: {0}")]
    Validation(ErrorTree),

    /// The engine document could not be serialized.
    #[error("emit failed: {0}")]
    Emit(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub(crate) fn reference(msg: impl Into<String>) -> Self {
        Self::Reference(msg.into())
    }

    pub(crate) fn duplicate_wiring(msg: impl Into<String>) -> Self {
        Self::DuplicateWiring(msg.into())
    }
}

impl From<StackError> for Error {
    fn from(err: StackError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<NodeError> for Error {
    fn from(err: NodeError) -> Self {
        Self::Reference(err.to_string())
    }
}

impl From<stratus_schema::Error> for Error {
    fn from(err: stratus_schema::Error) -> Self {
        match err {
            stratus_schema::Error::NodeError(e) => e.into(),
            stratus_schema::Error::StackError(e) => e.into(),
            stratus_schema::Error::Validation(tree) => Self::Validation(tree),
        }
    }
}
