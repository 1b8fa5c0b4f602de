pub mod error;
pub mod node;
pub mod path;
pub mod stack;
pub mod token;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for resource names (functions, apis, stages).
pub const MAX_NAME_LEN: usize = 64;

use crate::error::{ErrorTree, NodeError, StackError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        path::NodePath,
        stack::Stack,
        token::{Attr, Ref, RefPattern},
        types::{HttpMethod, IntegrationType, Protocol, Runtime},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NodeError(#[from] NodeError),

    #[error(transparent)]
    StackError(#[from] StackError),

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
