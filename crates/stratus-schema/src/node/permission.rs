use crate::prelude::*;

/// Invocation action granted to the routing surface.
pub const INVOKE_ACTION: &str = "lambda:InvokeFunction";

/// Principal of the routing service.
pub const APIGATEWAY_PRINCIPAL: &str = "apigateway.amazonaws.com";

///
/// Permission
///
/// Grants a principal invocation rights on one function, scoped by a
/// source pattern. Must exist before any integration that targets the same
/// (function, api) pair; the integration records that edge explicitly.
///

#[derive(Clone, Debug, Serialize)]
pub struct Permission {
    pub def: Def,
    pub function: NodePath,
    pub action: String,
    pub principal: String,
    pub source_arn: RefPattern,
}

impl ValidateNode for Permission {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.action.is_empty() {
            err!(errs, "action is empty");
        }
        if self.principal.is_empty() {
            err!(errs, "principal is empty");
        }

        // function
        if let Err(e) = stack.cast_node::<Function>(&self.function) {
            errs.add(e);
        }

        errs.result()
    }
}
