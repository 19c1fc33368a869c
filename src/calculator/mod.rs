//! Calculator: input tuple in, catch estimate (or a distinguished absent
//! state) out.

pub mod engine;
pub mod types;

pub use engine::*;
pub use types::*;
