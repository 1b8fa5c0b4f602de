use crate::error::Error;
use stratus_schema::{
    node::{Api, Deployment, Def, Integration, Output, Route, Stage},
    path::NodePath,
    stack::Stack,
    types::{HttpMethod, Protocol},
};

///
/// ApiProps
///

#[derive(Clone, Debug)]
pub struct ApiProps {
    pub name: String,
    pub protocol: Protocol,
}

///
/// StageProps
///

#[derive(Clone, Debug)]
pub struct StageProps {
    pub name: String,
    pub auto_deploy: bool,
}

impl StageProps {
    /// Stage props with auto-deploy on, the common case.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_deploy: true,
        }
    }
}

///
/// RouteProps
///

#[derive(Clone, Debug)]
pub struct RouteProps {
    pub http_method: HttpMethod,
    pub path: String,
    pub route_name: String,
}

///
/// ApiConstruct
///
/// Registers the routing surface and owns the operations that hang
/// deployments, stages, and routes off it.
///

#[derive(Clone, Debug)]
pub struct ApiConstruct {
    name: String,
    api: NodePath,
}

impl ApiConstruct {
    pub fn new(stack: &mut Stack, props: ApiProps) -> Result<Self, Error> {
        if props.name.is_empty() {
            return Err(Error::configuration("api name is empty"));
        }

        let root = stack.root();
        let api = stack.attach(Api {
            def: Def::new(&root, format!("{}-resource", props.name)),
            name: props.name.clone(),
            protocol: props.protocol,
        })?;

        Ok(Self {
            name: props.name,
            api,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn path(&self) -> &NodePath {
        &self.api
    }

    /// Register an explicit deployment snapshot of this surface.
    pub fn add_deployment(&self, stack: &mut Stack, name: &str) -> Result<NodePath, Error> {
        let root = stack.root();

        let deployment = stack.attach(Deployment {
            def: Def::new(&root, name),
            api: self.api.clone(),
        })?;

        Ok(deployment)
    }

    /// Register a stage. An auto-deploy stage also registers exactly one
    /// output carrying the stage's symbolic invoke URL; a manual stage
    /// registers none.
    pub fn add_stage(&self, stack: &mut Stack, props: StageProps) -> Result<NodePath, Error> {
        // same stage name twice on one surface is a duplicate logical id
        let duplicate = stack
            .filter_nodes::<Stage>(|stage| stage.api == self.api && stage.name == props.name)
            .next()
            .is_some();
        if duplicate {
            return Err(Error::configuration(format!(
                "stage '{}' already exists on surface '{}'",
                props.name, self.name
            )));
        }

        let root = stack.root();
        let stage = stack.attach(Stage {
            def: Def::new(&root, format!("{}-resource", props.name)),
            api: self.api.clone(),
            name: props.name.clone(),
            auto_deploy: props.auto_deploy,
        })?;

        if props.auto_deploy {
            let invoke_url = stack.cast_node::<Stage>(&stage)?.invoke_url_ref();
            let output_name = format!("{}-stage-output", props.name);

            stack.attach(Output {
                def: Def::new(&root, output_name.clone()),
                name: output_name,
                value: invoke_url,
            })?;
        }

        Ok(stage)
    }

    /// Register a route binding a `"<METHOD> <path>"` key to an
    /// integration on this surface.
    pub fn add_route(
        &self,
        stack: &mut Stack,
        integration: &NodePath,
        props: RouteProps,
    ) -> Result<NodePath, Error> {
        let integration_node = stack.cast_node::<Integration>(integration)?;

        // cross-surface wiring is a reference error, not a deferred
        // engine failure
        if integration_node.api != self.api {
            return Err(Error::reference(format!(
                "integration '{integration}' belongs to surface '{}', not '{}'",
                integration_node.api, self.api
            )));
        }

        let target = format!("integrations/{}", integration_node.id_ref().placeholder());
        let route_key = Route::key(props.http_method, &props.path);

        let duplicate = stack
            .filter_nodes::<Route>(|route| route.api == self.api && route.route_key == route_key)
            .next()
            .is_some();
        if duplicate {
            return Err(Error::duplicate_wiring(format!(
                "route key '{route_key}' already registered on surface '{}'",
                self.name
            )));
        }

        let root = stack.root();
        let route = stack.attach(Route {
            def: Def::new(&root, format!("{}-{}-route", props.route_name, self.name)),
            api: self.api.clone(),
            integration: integration.clone(),
            route_key,
            target,
        })?;

        Ok(route)
    }
}
