use crate::{
    config::StackConfig,
    construct::{ApiConstruct, ApiProps, FunctionConstruct, FunctionProps, RouteProps, StageProps},
    error::Error,
};
use stratus_schema::{
    node::{DEFAULT_REGION, Def, Provider},
    stack::Stack,
};

///
/// compose
///
/// Build the full resource graph from one configuration: provider context
/// first, then every function (artifact, role, function), then the routing
/// surface, then per routed function the integration wiring (permission
/// before integration) and its route, and finally exactly one stage.
///
/// The declaration order here fixes which dependency edges are registered,
/// not the provisioning order; the engine topologically sorts the edges.
///

pub fn compose(config: &StackConfig) -> Result<Stack, Error> {
    let mut stack = Stack::new(&config.name)?;

    let root = stack.root();
    stack.attach(Provider {
        def: Def::new(&root, "aws-provider"),
        region: config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    })?;

    let mut functions = Vec::with_capacity(config.functions.len());
    for function_config in &config.functions {
        let construct = FunctionConstruct::new(
            &mut stack,
            FunctionProps {
                name: function_config.name.clone(),
                handler: function_config.handler.clone(),
                runtime: function_config.runtime,
                source_path: function_config.source_path.clone(),
                timeout_secs: function_config.timeout_secs,
                trust_policy: function_config.trust_policy.clone(),
                region: function_config.region.clone(),
            },
        )?;

        functions.push(construct);
    }

    let api = ApiConstruct::new(
        &mut stack,
        ApiProps {
            name: config.api.name.clone(),
            protocol: config.api.protocol,
        },
    )?;

    for (construct, function_config) in functions.iter().zip(&config.functions) {
        let Some(route) = &function_config.route else {
            continue;
        };

        let integration = construct.integrate(&mut stack, &api)?;
        api.add_route(
            &mut stack,
            &integration,
            RouteProps {
                http_method: route.method,
                path: route.path.clone(),
                route_name: route.route_name.clone(),
            },
        )?;
    }

    api.add_stage(
        &mut stack,
        StageProps {
            name: config.stage.name.clone(),
            auto_deploy: config.stage.auto_deploy,
        },
    )?;

    Ok(stack)
}
