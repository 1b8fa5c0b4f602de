//! ## Crate layout
//! - `compose`: the orchestrator that builds a whole stack from one config.
//! - `config`: the configuration surface accepted by the orchestrator.
//! - `construct`: the compute-function and api-surface constructs.
//! - `error`: the public error taxonomy.
//! - `synth`: validation + emission of the engine's input document.
//!
//! The graph model itself (nodes, tokens, validation passes) lives in
//! `stratus-schema`, re-exported here as `schema`.

pub use stratus_schema as schema;

pub mod compose;
pub mod config;
pub mod construct;
pub mod error;
pub mod synth;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compose::compose;
pub use error::Error;
pub use synth::{synth, synth_value};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        compose::compose,
        config::{ApiConfig, FunctionConfig, RouteConfig, StackConfig, StageConfig},
        construct::{
            ApiConstruct, ApiProps, FunctionConstruct, FunctionProps, RouteProps, StageProps,
        },
        error::Error,
        synth::{synth, synth_value},
    };
    pub use stratus_schema::{
        node::{
            Api, Artifact, Deployment, Function, Integration, Node, Output, Permission, Provider,
            Role, Route, Stage,
        },
        path::NodePath,
        stack::Stack,
        token::{Attr, Ref},
        types::{HttpMethod, IntegrationType, Protocol, Runtime},
    };
}
