use crate::prelude::*;
use std::str::FromStr;

///
/// Route
///
/// Maps a `"<METHOD> <path>"` route key on one surface to an integration.
/// The key is unique per surface; the integration must belong to the same
/// surface as the route.
///

#[derive(Clone, Debug, Serialize)]
pub struct Route {
    pub def: Def,
    pub api: NodePath,
    pub integration: NodePath,
    pub route_key: String,
    pub target: String,
}

impl Route {
    /// Compose the route key from its method and path parts.
    #[must_use]
    pub fn key(method: HttpMethod, path: &str) -> String {
        format!("{method} {path}")
    }
}

impl ValidateNode for Route {
    fn validate(&self, stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // key shape: "<METHOD> <path>"
        match self.route_key.split_once(' ') {
            Some((method, path)) => {
                if HttpMethod::from_str(method).is_err() {
                    err!(errs, "route key method `{method}` is not a known http method");
                }
                if !path.starts_with('/') {
                    err!(errs, "route key path `{path}` must start with `/`");
                }
            }
            None => err!(errs, "route key `{}` is not `<METHOD> <path>`", self.route_key),
        }

        // api
        if let Err(e) = stack.cast_node::<Api>(&self.api) {
            errs.add(e);
        }

        // integration, and it must hang off the same surface
        match stack.cast_node::<Integration>(&self.integration) {
            Ok(integration) => {
                if integration.api != self.api {
                    err!(
                        errs,
                        "integration `{}` belongs to surface `{}`, not `{}`",
                        self.integration,
                        integration.api,
                        self.api,
                    );
                }
            }
            Err(e) => errs.add(e),
        }

        errs.result()
    }
}
