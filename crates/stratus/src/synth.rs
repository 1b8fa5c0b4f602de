use crate::error::Error;
use serde_json::{Map, Value, json};
use stratus_schema::{node::Output, stack::Stack, validate::validate_stack};

///
/// synth
///
/// Validate the finished graph and emit the engine's input document.
/// Called once after the graph is fully built; the symbolic references in
/// the document are resolved by the engine at apply time, never here.
///

pub fn synth(stack: &Stack) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&synth_value(stack)?)?)
}

/// The engine document as a JSON value.
pub fn synth_value(stack: &Stack) -> Result<Value, Error> {
    validate_stack(stack).map_err(Error::Validation)?;

    let mut resources = Map::new();
    for (path, node) in stack.nodes() {
        resources.insert(path.to_string(), serde_json::to_value(node)?);
    }

    let mut outputs = Map::new();
    for (_, output) in stack.get_nodes::<Output>() {
        outputs.insert(output.name.clone(), json!(output.value.placeholder()));
    }

    Ok(json!({
        "stack": stack.name(),
        "resources": resources,
        "outputs": outputs,
    }))
}
