use crate::{
    MAX_NAME_LEN, err,
    error::ErrorTree,
    node::{Api, Function},
    stack::Stack,
};
use std::collections::BTreeMap;

/// Ensure a resource name is non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("name '{name}' exceeds max length {MAX_NAME_LEN}"));
    }
    if !name.is_ascii() {
        return Err(format!("name '{name}' must be ASCII"));
    }

    Ok(())
}

/// Function and api names must be unique across the stack.
pub(crate) fn validate_unique_names(stack: &Stack, errs: &mut ErrorTree) {
    let mut functions = BTreeMap::new();
    for (path, function) in stack.get_nodes::<Function>() {
        if let Some(prev) = functions.insert(function.name.clone(), path.clone()) {
            err!(
                errs,
                "duplicate function name '{}' for '{prev}' and '{path}'",
                function.name
            );
        }
    }

    let mut apis = BTreeMap::new();
    for (path, api) in stack.get_nodes::<Api>() {
        if let Some(prev) = apis.insert(api.name.clone(), path.clone()) {
            err!(
                errs,
                "duplicate api name '{}' for '{prev}' and '{path}'",
                api.name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_names() {
        assert!(validate_name("").is_err(), "empty names should fail");
        assert!(
            validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err(),
            "oversized names should fail"
        );
    }

    #[test]
    fn accepts_ascii_name() {
        assert!(validate_name("TestLambda").is_ok());
    }
}
