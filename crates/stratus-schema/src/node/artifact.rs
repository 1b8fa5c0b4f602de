use crate::prelude::*;

///
/// Artifact
///
/// Content-addressed deployable archive for one function. The archive path
/// and content hash are symbolic: packaging and hashing happen in the
/// external engine at apply time, never in-process. The source directory is
/// likewise not checked here; a missing or empty directory surfaces from
/// the engine, not from graph construction.
///

#[derive(Clone, Debug, Serialize)]
pub struct Artifact {
    pub def: Def,
    pub source_path: String,
    pub archive_path: Ref,
    pub content_hash: Ref,
}

impl Artifact {
    #[must_use]
    pub fn new(def: Def, source_path: impl Into<String>) -> Self {
        let path = def.path();

        Self {
            def,
            source_path: source_path.into(),
            archive_path: Ref::new(path.clone(), Attr::ArchivePath),
            content_hash: Ref::new(path, Attr::ContentHash),
        }
    }
}

impl ValidateNode for Artifact {
    fn validate(&self, _stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.source_path.is_empty() {
            err!(errs, "source path is empty");
        }

        // both tokens must point back at this artifact
        let path = self.def.path();
        if self.archive_path.producer != path {
            err!(errs, "archive_path token produced by `{}`", self.archive_path.producer);
        }
        if self.content_hash.producer != path {
            err!(errs, "content_hash token produced by `{}`", self.content_hash.producer);
        }

        errs.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_binds_tokens_to_own_path() {
        let root = NodePath::root("stack");
        let artifact = Artifact::new(Def::new(&root, "TestLambda-Asset-Resource"), "../handlers/lib");

        assert_eq!(
            artifact.archive_path.placeholder(),
            "${stack/TestLambda-Asset-Resource#archive_path}"
        );
        assert_eq!(
            artifact.content_hash.placeholder(),
            "${stack/TestLambda-Asset-Resource#content_hash}"
        );
    }
}
