use crate::prelude::*;
use serde_json::{Value, json};

/// Trust principal of the function-execution service.
pub const LAMBDA_TRUST_PRINCIPAL: &str = "lambda.amazonaws.com";

/// Baseline execution permission set attached when none is supplied.
pub const BASIC_EXECUTION_POLICY_ARN: &str =
    "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole";

///
/// Role
///
/// Execution identity for one function. Never shared: each function owns
/// exactly one role.
///

#[derive(Clone, Debug, Serialize)]
pub struct Role {
    pub def: Def,
    pub assume_role_policy: Value,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_policy_arns: Vec<String>,
}

impl Role {
    /// The default trust document: grants `sts:AssumeRole` to the
    /// function-execution service.
    #[must_use]
    pub fn default_trust_policy() -> Value {
        json!({
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Action": "sts:AssumeRole",
                    "Principal": {
                        "Service": LAMBDA_TRUST_PRINCIPAL
                    },
                    "Effect": "Allow",
                    "Sid": ""
                }
            ]
        })
    }

    #[must_use]
    pub fn arn_ref(&self) -> Ref {
        Ref::new(self.def.path(), Attr::Arn)
    }
}

impl ValidateNode for Role {
    fn validate(&self, _stack: &Stack) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // a trust document is always a JSON object with a Statement array;
        // anything beyond that shape is the engine's concern
        match self.assume_role_policy.get("Statement") {
            Some(Value::Array(statements)) if !statements.is_empty() => {}
            Some(_) => err!(errs, "trust policy `Statement` must be a non-empty array"),
            None => err!(errs, "trust policy has no `Statement`"),
        }

        errs.result()
    }
}
