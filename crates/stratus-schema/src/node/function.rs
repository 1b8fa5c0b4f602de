use crate::{prelude::*, validate::naming};

/// Timeout applied when the props omit one.
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;

///
/// Function
///
/// The invocable compute resource. Owns exactly one artifact and one role,
/// referenced by path; the invoke target is exposed as a symbolic token
/// consumed by integration wiring.
///

#[derive(Clone, Debug, Serialize)]
pub struct Function {
    pub def: Def,
    pub name: String,
    pub handler: String,
    pub runtime: Runtime,
    pub timeout_secs: u32,
    pub role: NodePath,
    pub artifact: NodePath,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Function {
    /// Symbolic reference to this function's invocation target.
    #[must_use]
    pub fn invoke_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::InvokeArn)
    }

    #[must_use]
    pub fn arn_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::Arn)
    }

    #[must_use]
    pub fn name_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::Name)
    }
}

impl ValidateNode for Function {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_name(&self.name) {
            errs.add(e);
        }
        if self.handler.is_empty() {
            err!(errs, "handler entry point is empty");
        }
        if self.timeout_secs == 0 {
            err!(errs, "timeout_secs must be greater than zero");
        }

        // role
        if let Err(e) = stack.cast_node::<Role>(&self.role) {
            errs.add(e);
        }

        // artifact
        if let Err(e) = stack.cast_node::<Artifact>(&self.artifact) {
            errs.add(e);
        }

        errs.result()
    }
}
