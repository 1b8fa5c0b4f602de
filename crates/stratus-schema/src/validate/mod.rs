//! Whole-graph validation orchestration and shared helpers.

pub mod naming;
pub mod wiring;

use crate::{error::ErrorTree, stack::Stack, visit::ValidateVisitor};

/// Run full stack validation in a staged, deterministic order.
pub fn validate_stack(stack: &Stack) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(stack);

    // Phase 2: enforce stack-wide invariants.
    validate_global(stack, &mut errors);

    errors.result()
}

// Validate all nodes via a visitor to retain route-aware error aggregation.
fn validate_nodes(stack: &Stack) -> ErrorTree {
    let mut visitor = ValidateVisitor::new(stack);
    stack.accept(&mut visitor);

    visitor.errors
}

// Run global validation passes that require a full stack view.
fn validate_global(stack: &Stack, errors: &mut ErrorTree) {
    naming::validate_unique_names(stack, errors);
    wiring::validate_integration_permissions(stack, errors);
    wiring::validate_route_keys(stack, errors);
    wiring::validate_stage_outputs(stack, errors);
}
