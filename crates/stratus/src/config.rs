use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stratus_schema::types::{HttpMethod, Protocol, Runtime};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

///
/// StackConfig
///
/// The whole configuration surface the orchestrator accepts: stack
/// identity, provider region, the functions to build, the routing surface,
/// and the stage that finalizes it. Pure data; all wiring decisions are
/// made by `compose`.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StackConfig {
    pub name: String,

    #[serde(default)]
    pub region: Option<String>,

    pub api: ApiConfig,

    #[serde(default)]
    pub functions: Vec<FunctionConfig>,

    pub stage: StageConfig,
}

impl StackConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

///
/// ApiConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    pub name: String,

    #[serde(default)]
    pub protocol: Protocol,
}

///
/// FunctionConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FunctionConfig {
    pub name: String,
    pub handler: String,
    pub runtime: Runtime,
    pub source_path: String,

    #[serde(default)]
    pub timeout_secs: Option<u32>,

    /// Custom trust policy document; overrides the default verbatim.
    #[serde(default)]
    pub trust_policy: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    /// Routing for this function. A function without a route is built but
    /// not externally reachable.
    #[serde(default)]
    pub route: Option<RouteConfig>,
}

///
/// RouteConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteConfig {
    pub method: HttpMethod,
    pub path: String,
    pub route_name: String,
}

///
/// StageConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StageConfig {
    pub name: String,

    #[serde(default = "default_auto_deploy")]
    pub auto_deploy: bool,
}

const fn default_auto_deploy() -> bool {
    true
}
