use crate::prelude::*;

///
/// Deployment
///
/// A point-in-time snapshot of a surface's configuration. Stages created
/// with auto-deploy manage their own deployments engine-side, so the
/// orchestrator only registers these explicitly.
///

#[derive(Clone, Debug, Serialize)]
pub struct Deployment {
    pub def: Def,
    pub api: NodePath,
}

impl ValidateNode for Deployment {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = stack.cast_node::<Api>(&self.api) {
            errs.add(e);
        }

        errs.result()
    }
}
