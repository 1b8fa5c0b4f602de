use crate::{prelude::*, validate::naming};

///
/// Api
///
/// The routing surface. Integrations, routes, deployments, and stages all
/// key back to this node by path.
///

#[derive(Clone, Debug, Serialize)]
pub struct Api {
    pub def: Def,
    pub name: String,
    pub protocol: Protocol,
}

impl Api {
    /// Symbolic reference to the surface's execution scope, widened by
    /// callers when granting invocation permission.
    #[must_use]
    pub fn execution_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::ExecutionArn)
    }

    #[must_use]
    pub fn id_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::Id)
    }
}

impl ValidateNode for Api {
    fn validate(&self, _stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_name(&self.name) {
            errs.add(e);
        }

        errs.result()
    }
}
