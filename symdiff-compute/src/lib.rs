//! Construction, simplification, and symbolic differentiation of expression trees.
//!
//! See the [`symbolic`] module for an overview.

pub mod error;
pub mod primitive;
pub mod step_collector;
pub mod symbolic;

pub use step_collector::StepCollector;
pub use symdiff_error::Error;
