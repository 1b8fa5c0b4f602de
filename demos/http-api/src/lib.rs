//! Demo stack: two functions on one HTTP surface.
//!
//! A node function answers `GET /` and a python function answers
//! `GET /home`, both wired through proxy integrations and finalized with a
//! single auto-deployed stage. The entry point that would synth and hand
//! the document to the engine is intentionally not part of this crate.

use stratus::prelude::*;

/// The demo stack configuration, equivalent to the TOML below.
#[must_use]
pub fn demo_config() -> StackConfig {
    StackConfig::from_toml(
        r#"
        name = "http-test"

        [api]
        name = "TestApi"
        protocol = "HTTP"

        [stage]
        name = "TestAPIStage"

        [[functions]]
        name = "TestLambda"
        handler = "index.handler"
        runtime = "nodejs14.x"
        source_path = "../handlers/testHandler/lib"
        timeout_secs = 90

        [functions.route]
        method = "GET"
        path = "/"
        route_name = "Root"

        [[functions]]
        name = "TestPythonLambda"
        handler = "main.handler"
        runtime = "python3.8"
        source_path = "../handlers/testPython"
        timeout_secs = 90

        [functions.route]
        method = "GET"
        path = "/home"
        route_name = "Home"
        "#,
    )
    .expect("demo config is valid TOML")
}

/// Build the demo stack graph.
pub fn build() -> Result<Stack, Error> {
    compose(&demo_config())
}
