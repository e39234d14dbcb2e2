//! Command implementations for the churn CLI.

mod check;
mod predict;

pub use check::CheckCommand;
pub use predict::PredictCommand;
