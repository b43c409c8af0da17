//! Tab bookkeeping for the tool pane.

mod operations;
mod types;

pub use types::*;
