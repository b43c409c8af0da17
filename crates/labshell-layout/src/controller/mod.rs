//! The SplitLayoutController: owns the optional split between the
//! instructions region and the tool region.

mod lifecycle;
mod operations;
mod types;
mod viewport;


pub use types::*;
