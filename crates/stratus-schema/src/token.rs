use crate::path::NodePath;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

///
/// Attr
///
/// Closed set of resource attributes that only exist after the external
/// engine applies the graph. A symbolic reference names one of these.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum Attr {
    ArchivePath,
    Arn,
    ContentHash,
    ExecutionArn,
    Id,
    InvokeArn,
    InvokeUrl,
    Name,
}

impl Attr {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArchivePath => "archive_path",
            Self::Arn => "arn",
            Self::ContentHash => "content_hash",
            Self::ExecutionArn => "execution_arn",
            Self::Id => "id",
            Self::InvokeArn => "invoke_arn",
            Self::InvokeUrl => "invoke_url",
            Self::Name => "name",
        }
    }
}

impl Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Ref
///
/// Symbolic reference to an attribute of a producing node. Never resolved
/// in-core; it serializes as an engine-understood placeholder of the form
/// `${<producer-path>#<attr>}`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ref {
    pub producer: NodePath,
    pub attr: Attr,
}

impl Ref {
    #[must_use]
    pub const fn new(producer: NodePath, attr: Attr) -> Self {
        Self { producer, attr }
    }

    /// The engine-facing placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("${{{}#{}}}", self.producer, self.attr)
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.placeholder())
    }
}

impl Serialize for Ref {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.placeholder())
    }
}

///
/// RefPattern
///
/// A symbolic reference widened with a literal suffix, e.g. an execution
/// scope reference widened to all stages and methods with `/*/*`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefPattern {
    pub base: Ref,
    pub suffix: String,
}

impl RefPattern {
    #[must_use]
    pub fn new(base: Ref, suffix: impl Into<String>) -> Self {
        Self {
            base,
            suffix: suffix.into(),
        }
    }
}

impl Display for RefPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.suffix)
    }
}

impl Serialize for RefPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_renders_engine_placeholder() {
        let path = NodePath::root("stack").child("TestLambda-Resource");
        let token = Ref::new(path, Attr::InvokeArn);

        assert_eq!(
            token.placeholder(),
            "${stack/TestLambda-Resource#invoke_arn}"
        );
    }

    #[test]
    fn ref_serializes_as_placeholder_string() {
        let token = Ref::new(NodePath::root("s").child("api-resource"), Attr::Id);
        let json = serde_json::to_value(&token).expect("ref must serialize");

        assert_eq!(json, serde_json::json!("${s/api-resource#id}"));
    }

    #[test]
    fn pattern_appends_literal_suffix() {
        let base = Ref::new(NodePath::root("s").child("TestApi-resource"), Attr::ExecutionArn);
        let pattern = RefPattern::new(base, "/*/*");

        assert_eq!(pattern.to_string(), "${s/TestApi-resource#execution_arn}/*/*");
    }
}
