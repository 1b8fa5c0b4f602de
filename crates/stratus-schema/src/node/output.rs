use crate::prelude::*;

///
/// Output
///
/// A named value surfaced to the caller after apply. The value is always a
/// symbolic reference; the engine substitutes the real value once the
/// producing resource exists.
///

#[derive(Clone, Debug, Serialize)]
pub struct Output {
    pub def: Def,
    pub name: String,
    pub value: Ref,
}

impl ValidateNode for Output {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.name.is_empty() {
            err!(errs, "output name is empty");
        }

        if stack.get(&self.value.producer).is_none() {
            err!(errs, "value producer `{}` is not in the stack", self.value.producer);
        }

        errs.result()
    }
}
