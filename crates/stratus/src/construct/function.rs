use crate::{construct::ApiConstruct, error::Error};
use stratus_schema::{
    node::{
        APIGATEWAY_PRINCIPAL, Api, Artifact, BASIC_EXECUTION_POLICY_ARN, DEFAULT_TIMEOUT_SECS,
        Def, Function, INVOKE_ACTION, Integration, Permission, Role,
    },
    path::NodePath,
    stack::Stack,
    token::{Attr, Ref, RefPattern},
    types::{IntegrationType, Runtime},
};

///
/// FunctionProps
///

#[derive(Clone, Debug)]
pub struct FunctionProps {
    pub name: String,
    pub handler: String,
    pub runtime: Runtime,
    pub source_path: String,
    pub timeout_secs: Option<u32>,
    pub trust_policy: Option<String>,
    pub region: Option<String>,
}

///
/// FunctionConstruct
///
/// Registers the artifact, role, and function nodes for one compute
/// function, and owns the wiring operations that connect it to a routing
/// surface. Logical ids are derived from the function name, so re-running
/// construction with the same inputs yields the same graph.
///

#[derive(Clone, Debug)]
pub struct FunctionConstruct {
    name: String,
    artifact: NodePath,
    role: NodePath,
    function: NodePath,
}

impl FunctionConstruct {
    pub fn new(stack: &mut Stack, props: FunctionProps) -> Result<Self, Error> {
        if props.name.is_empty() {
            return Err(Error::configuration("function name is empty"));
        }

        let timeout_secs = props.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::configuration(format!(
                "function '{}' timeout must be greater than zero",
                props.name
            )));
        }

        // a supplied trust policy overrides the default verbatim, but it
        // still has to be a JSON document
        let assume_role_policy = match &props.trust_policy {
            Some(doc) => serde_json::from_str(doc).map_err(|e| {
                Error::configuration(format!(
                    "function '{}' trust policy is not valid JSON: {e}",
                    props.name
                ))
            })?,
            None => Role::default_trust_policy(),
        };

        let root = stack.root();

        let artifact = stack.attach(Artifact::new(
            Def::new(&root, format!("{}-Asset-Resource", props.name)),
            props.source_path,
        ))?;

        let role = stack.attach(Role {
            def: Def::new(&root, format!("{}-Role-Resource", props.name)),
            assume_role_policy,
            managed_policy_arns: vec![BASIC_EXECUTION_POLICY_ARN.to_string()],
        })?;

        let function = stack.attach(Function {
            def: Def::new(&root, format!("{}-Resource", props.name)),
            name: props.name.clone(),
            handler: props.handler,
            runtime: props.runtime,
            timeout_secs,
            role: role.clone(),
            artifact: artifact.clone(),
            region: props.region,
        })?;

        Ok(Self {
            name: props.name,
            artifact,
            role,
            function,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn artifact(&self) -> &NodePath {
        &self.artifact
    }

    #[must_use]
    pub const fn role(&self) -> &NodePath {
        &self.role
    }

    #[must_use]
    pub const fn function(&self) -> &NodePath {
        &self.function
    }

    /// Symbolic reference to this function's invocation target.
    #[must_use]
    pub fn invoke_ref(&self) -> Ref {
        Ref::new(self.function.clone(), Attr::InvokeArn)
    }

    /// Grant the routing surface invocation rights on this function. The
    /// source pattern widens the surface's execution scope to all stages
    /// and methods.
    ///
    /// Not idempotent: calling twice for the same (function, api) pair
    /// registers two permissions and fails on the duplicate logical id.
    /// Callers wire each pair once; `integrate` does this for them.
    pub fn grant_invoke(&self, stack: &mut Stack, api: &ApiConstruct) -> Result<NodePath, Error> {
        let source_arn = RefPattern::new(
            stack.cast_node::<Api>(api.path())?.execution_ref(),
            "/*/*",
        );
        let root = stack.root();

        let permission = stack.attach(Permission {
            def: Def::new(
                &root,
                format!("{}-{}-lambda-permission", self.name, api.name()),
            ),
            function: self.function.clone(),
            action: INVOKE_ACTION.to_string(),
            principal: APIGATEWAY_PRINCIPAL.to_string(),
            source_arn,
        })?;

        Ok(permission)
    }

    /// Wire this function to a surface with the default proxy integration.
    pub fn integrate(&self, stack: &mut Stack, api: &ApiConstruct) -> Result<NodePath, Error> {
        self.integrate_typed(stack, api, IntegrationType::default())
    }

    /// Wire this function to a surface: grant invocation permission first,
    /// then register the integration with an explicit dependency edge on
    /// the permission, so the engine orders the grant before the binding.
    pub fn integrate_typed(
        &self,
        stack: &mut Stack,
        api: &ApiConstruct,
        integration_type: IntegrationType,
    ) -> Result<NodePath, Error> {
        let permission = self.grant_invoke(stack, api)?;
        let root = stack.root();

        let integration = stack.attach(Integration {
            def: Def::new(
                &root,
                format!("{}-{}-integration", self.name, api.name()),
            )
            .depends_on(permission),
            api: api.path().clone(),
            integration_type,
            integration_uri: self.invoke_ref(),
        })?;

        Ok(integration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_schema::types::Protocol;

    fn props(name: &str) -> FunctionProps {
        FunctionProps {
            name: name.to_string(),
            handler: "index.handler".to_string(),
            runtime: Runtime::Nodejs14X,
            source_path: "../handlers/testHandler/lib".to_string(),
            timeout_secs: None,
            trust_policy: None,
            region: None,
        }
    }

    fn api(stack: &mut Stack) -> ApiConstruct {
        ApiConstruct::new(
            stack,
            crate::construct::ApiProps {
                name: "TestApi".to_string(),
                protocol: Protocol::Http,
            },
        )
        .expect("api construct builds")
    }

    #[test]
    fn new_registers_artifact_role_and_function() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let construct =
            FunctionConstruct::new(&mut stack, props("TestLambda")).expect("construct builds");

        assert_eq!(stack.count_nodes::<Artifact>(), 1);
        assert_eq!(stack.count_nodes::<Role>(), 1);
        assert_eq!(stack.count_nodes::<Function>(), 1);
        assert_eq!(construct.function().as_str(), "http-test/TestLambda-Resource");

        let function = stack
            .cast_node::<Function>(construct.function())
            .expect("function resolves");
        assert_eq!(function.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn new_rejects_empty_name() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let mut p = props("TestLambda");
        p.name = String::new();

        let err = FunctionConstruct::new(&mut stack, p).expect_err("empty name must fail");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn new_rejects_zero_timeout() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let mut p = props("TestLambda");
        p.timeout_secs = Some(0);

        let err = FunctionConstruct::new(&mut stack, p).expect_err("zero timeout must fail");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn new_rejects_malformed_trust_policy() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let mut p = props("TestLambda");
        p.trust_policy = Some("{ not json".to_string());

        let err = FunctionConstruct::new(&mut stack, p).expect_err("bad policy must fail");
        assert!(
            err.to_string().contains("not valid JSON"),
            "expected malformed-policy error, got: {err}"
        );
    }

    #[test]
    fn custom_trust_policy_overrides_default_verbatim() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let custom = r#"{ "Version": "2012-10-17", "Statement": [ { "Action": "sts:AssumeRole" } ] }"#;
        let mut p = props("TestLambda");
        p.trust_policy = Some(custom.to_string());

        let construct = FunctionConstruct::new(&mut stack, p).expect("construct builds");
        let role = stack.cast_node::<Role>(construct.role()).expect("role resolves");

        let expected: serde_json::Value = serde_json::from_str(custom).expect("fixture is JSON");
        assert_eq!(role.assume_role_policy, expected);
    }

    #[test]
    fn grant_invoke_widens_execution_scope() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let construct =
            FunctionConstruct::new(&mut stack, props("TestLambda")).expect("construct builds");
        let api = api(&mut stack);

        let permission = construct
            .grant_invoke(&mut stack, &api)
            .expect("grant succeeds");
        let permission = stack
            .cast_node::<Permission>(&permission)
            .expect("permission resolves");

        assert_eq!(permission.action, INVOKE_ACTION);
        assert_eq!(permission.principal, APIGATEWAY_PRINCIPAL);
        assert_eq!(
            permission.source_arn.to_string(),
            "${http-test/TestApi-resource#execution_arn}/*/*"
        );
    }

    #[test]
    fn integrate_registers_permission_before_integration() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let construct =
            FunctionConstruct::new(&mut stack, props("TestLambda")).expect("construct builds");
        let api = api(&mut stack);

        let integration = construct.integrate(&mut stack, &api).expect("integrate succeeds");

        assert_eq!(stack.count_nodes::<Permission>(), 1);
        assert_eq!(stack.count_nodes::<Integration>(), 1);

        let integration = stack
            .cast_node::<Integration>(&integration)
            .expect("integration resolves");
        assert_eq!(integration.integration_type, IntegrationType::AwsProxy);
        assert_eq!(
            integration.integration_uri.placeholder(),
            "${http-test/TestLambda-Resource#invoke_arn}"
        );

        // the grant is an explicit edge, not just an ordering accident
        let (permission_path, _) = stack
            .get_nodes::<Permission>()
            .next()
            .expect("permission exists");
        assert!(integration.def.depends_on.contains(permission_path));
    }

    #[test]
    fn two_functions_integrate_one_surface_without_collision() {
        let mut stack = Stack::new("http-test").expect("stack name is valid");
        let a = FunctionConstruct::new(&mut stack, props("TestLambda")).expect("a builds");
        let b = FunctionConstruct::new(&mut stack, {
            let mut p = props("TestPythonLambda");
            p.runtime = Runtime::Python3_8;
            p.handler = "main.handler".to_string();
            p
        })
        .expect("b builds");
        let api = api(&mut stack);

        a.integrate(&mut stack, &api).expect("first integration succeeds");
        b.integrate(&mut stack, &api).expect("second integration succeeds");

        assert_eq!(stack.count_nodes::<Permission>(), 2);
        assert_eq!(stack.count_nodes::<Integration>(), 2);
    }
}
