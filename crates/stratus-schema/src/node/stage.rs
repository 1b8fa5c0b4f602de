use crate::{prelude::*, validate::naming};

///
/// Stage
///
/// A named, independently promotable snapshot of a surface. An auto-deploy
/// stage is paired with exactly one output carrying its invoke URL token;
/// a manual stage has none.
///

#[derive(Clone, Debug, Serialize)]
pub struct Stage {
    pub def: Def,
    pub api: NodePath,
    pub name: String,
    pub auto_deploy: bool,
}

impl Stage {
    /// Symbolic reference to the stage's externally reachable URL.
    #[must_use]
    pub fn invoke_url_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::InvokeUrl)
    }
}

impl ValidateNode for Stage {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_name(&self.name) {
            errs.add(e);
        }

        if let Err(e) = stack.cast_node::<Api>(&self.api) {
            errs.add(e);
        }

        errs.result()
    }
}
