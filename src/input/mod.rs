//! Projection inputs, amount parsing and batch loading

mod data;
pub mod loader;

pub use data::{parse_amount, LabeledInput, ProjectionInput};
pub use loader::{load_inputs, load_inputs_from_reader};
