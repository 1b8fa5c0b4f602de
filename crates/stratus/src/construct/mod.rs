pub mod api;
pub mod function;

pub use api::{ApiConstruct, ApiProps, RouteProps, StageProps};
pub use function::{FunctionConstruct, FunctionProps};
