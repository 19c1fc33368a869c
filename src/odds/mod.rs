//! Odds parsing and resolution of catalog vs. manual odds.

pub mod parser;
pub mod types;

pub use parser::*;
pub use types::*;
