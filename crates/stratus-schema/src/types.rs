use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// ParseEnumError
///
/// Raised when a wire identifier is outside one of the closed sets below.
/// Closed sets keep invalid identifiers out of the graph at construction
/// time instead of passing free-form strings through to the engine.
///

#[derive(Debug, ThisError)]
#[error("unknown {kind} identifier `{value}`")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

///
/// Runtime
///
/// Closed set of compute-function runtime identifiers. Wire form follows
/// the provider's versioned naming, e.g. `nodejs14.x`.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Runtime {
    #[serde(rename = "dotnetcore1.0")]
    DotnetCore1_0,
    #[serde(rename = "dotnetcore2.0")]
    DotnetCore2_0,
    #[serde(rename = "dotnetcore2.1")]
    DotnetCore2_1,
    #[serde(rename = "dotnetcore3.1")]
    DotnetCore3_1,
    #[serde(rename = "go1.x")]
    Go1X,
    #[serde(rename = "java8")]
    Java8,
    #[serde(rename = "java8.al2")]
    Java8Al2,
    #[serde(rename = "java11")]
    Java11,
    #[serde(rename = "nodejs")]
    Nodejs,
    #[serde(rename = "nodejs12.x")]
    Nodejs12X,
    #[serde(rename = "nodejs14.x")]
    Nodejs14X,
    #[serde(rename = "provided")]
    Provided,
    #[serde(rename = "provided.al2")]
    ProvidedAl2,
    #[serde(rename = "python2.7")]
    Python2_7,
    #[serde(rename = "python3.6")]
    Python3_6,
    #[serde(rename = "python3.7")]
    Python3_7,
    #[serde(rename = "python3.8")]
    Python3_8,
    #[serde(rename = "python3.9")]
    Python3_9,
    #[serde(rename = "ruby2.5")]
    Ruby2_5,
    #[serde(rename = "ruby2.7")]
    Ruby2_7,
}

impl Runtime {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DotnetCore1_0 => "dotnetcore1.0",
            Self::DotnetCore2_0 => "dotnetcore2.0",
            Self::DotnetCore2_1 => "dotnetcore2.1",
            Self::DotnetCore3_1 => "dotnetcore3.1",
            Self::Go1X => "go1.x",
            Self::Java8 => "java8",
            Self::Java8Al2 => "java8.al2",
            Self::Java11 => "java11",
            Self::Nodejs => "nodejs",
            Self::Nodejs12X => "nodejs12.x",
            Self::Nodejs14X => "nodejs14.x",
            Self::Provided => "provided",
            Self::ProvidedAl2 => "provided.al2",
            Self::Python2_7 => "python2.7",
            Self::Python3_6 => "python3.6",
            Self::Python3_7 => "python3.7",
            Self::Python3_8 => "python3.8",
            Self::Python3_9 => "python3.9",
            Self::Ruby2_5 => "ruby2.5",
            Self::Ruby2_7 => "ruby2.7",
        }
    }

    #[must_use]
    pub const fn family(self) -> RuntimeFamily {
        match self {
            Self::DotnetCore1_0 | Self::DotnetCore2_0 | Self::DotnetCore2_1 | Self::DotnetCore3_1 => {
                RuntimeFamily::Dotnet
            }
            Self::Go1X => RuntimeFamily::Go,
            Self::Java8 | Self::Java8Al2 | Self::Java11 => RuntimeFamily::Java,
            Self::Nodejs | Self::Nodejs12X | Self::Nodejs14X => RuntimeFamily::Node,
            Self::Provided | Self::ProvidedAl2 => RuntimeFamily::Provided,
            Self::Python2_7 | Self::Python3_6 | Self::Python3_7 | Self::Python3_8 | Self::Python3_9 => {
                RuntimeFamily::Python
            }
            Self::Ruby2_5 | Self::Ruby2_7 => RuntimeFamily::Ruby,
        }
    }

    const ALL: &'static [Self] = &[
        Self::DotnetCore1_0,
        Self::DotnetCore2_0,
        Self::DotnetCore2_1,
        Self::DotnetCore3_1,
        Self::Go1X,
        Self::Java8,
        Self::Java8Al2,
        Self::Java11,
        Self::Nodejs,
        Self::Nodejs12X,
        Self::Nodejs14X,
        Self::Provided,
        Self::ProvidedAl2,
        Self::Python2_7,
        Self::Python3_6,
        Self::Python3_7,
        Self::Python3_8,
        Self::Python3_9,
        Self::Ruby2_5,
        Self::Ruby2_7,
    ];
}

impl Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Runtime {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|rt| rt.as_str() == s)
            .copied()
            .ok_or_else(|| ParseEnumError::new("runtime", s))
    }
}

///
/// RuntimeFamily
///

#[derive(Clone, Copy, Debug, derive_more::Display, Eq, PartialEq)]
#[remain::sorted]
pub enum RuntimeFamily {
    Dotnet,
    Go,
    Java,
    Node,
    Provided,
    Python,
    Ruby,
}

///
/// Protocol
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Protocol {
    #[default]
    Http,
    Websocket,
}

impl Protocol {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Websocket => "WEBSOCKET",
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP" => Ok(Self::Http),
            "WEBSOCKET" => Ok(Self::Websocket),
            _ => Err(ParseEnumError::new("protocol", s)),
        }
    }
}

///
/// HttpMethod
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[remain::sorted]
pub enum HttpMethod {
    Any,
    Delete,
    Get,
    Post,
    Put,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Delete => "DELETE",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANY" => Ok(Self::Any),
            "DELETE" => Ok(Self::Delete),
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            _ => Err(ParseEnumError::new("http method", s)),
        }
    }
}

///
/// IntegrationType
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[remain::sorted]
pub enum IntegrationType {
    #[default]
    AwsProxy,
    Http,
    HttpProxy,
    Mock,
    VpcLink,
}

impl IntegrationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwsProxy => "AWS_PROXY",
            Self::Http => "HTTP",
            Self::HttpProxy => "HTTP_PROXY",
            Self::Mock => "MOCK",
            Self::VpcLink => "VPC_LINK",
        }
    }
}

impl Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
