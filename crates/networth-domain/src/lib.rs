//! networth-domain
//!
//! Pure data types for net-worth projections (flows, inputs, series points).
//! No I/O, no CLI, no randomness. Only data types and calendar helpers.

pub mod common;
pub mod flow;
pub mod input;
pub mod series;

pub use common::*;
pub use flow::*;
pub use input::*;
pub use series::*;
