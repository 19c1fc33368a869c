//! Fish catalog: the records the calculator picks base odds from.

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
