use crate::prelude::*;

///
/// Integration
///
/// Binds a routing surface to an invocable target through its symbolic
/// invoke reference. The target must be a function owned by the same stack,
/// and `def.depends_on` must carry the permission that authorizes it.
///

#[derive(Clone, Debug, Serialize)]
pub struct Integration {
    pub def: Def,
    pub api: NodePath,
    pub integration_type: IntegrationType,
    pub integration_uri: Ref,
}

impl Integration {
    #[must_use]
    pub fn id_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::Id)
    }
}

impl ValidateNode for Integration {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // api
        if let Err(e) = stack.cast_node::<Api>(&self.api) {
            errs.add(e);
        }

        // the invoke target must resolve to a function in this stack
        if let Err(e) = stack.cast_node::<Function>(&self.integration_uri.producer) {
            errs.add(e);
        }

        errs.result()
    }
}
