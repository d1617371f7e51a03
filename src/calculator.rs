//! Four-function arithmetic behind a name-keyed calculation registry

mod calculation;
pub mod format;
pub mod operations;
mod registry;

pub use calculation::{Calculation, Kind};
pub use registry::{Constructor, Evaluate, Registry};
