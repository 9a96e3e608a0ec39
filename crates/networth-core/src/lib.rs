//! networth-core
//!
//! Projection engine, goal ETA search and range windows.
//! Depends on networth-domain. No CLI, no terminal I/O, no storage.

pub mod error;
pub mod eta_service;
pub mod noise;
pub mod projection_service;
pub mod time;
pub mod zoom_service;

pub use error::CoreError;
pub use eta_service::*;
pub use noise::*;
pub use projection_service::*;
pub use time::*;
pub use zoom_service::*;
