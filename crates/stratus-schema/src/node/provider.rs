use crate::prelude::*;

/// Region used when the stack configuration does not name one.
pub const DEFAULT_REGION: &str = "us-west-2";

///
/// Provider
///
/// The provider/region binding for the whole stack. Exactly one per stack;
/// every other node is provisioned within this context.
///

#[derive(Clone, Debug, Serialize)]
pub struct Provider {
    pub def: Def,
    pub region: String,
}

impl ValidateNode for Provider {
    fn validate(&self, _stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.region.is_empty() {
            err!(errs, "region is empty");
        }

        errs.result()
    }
}
