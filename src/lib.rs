#![doc(test(attr(deny(warnings))))]

//! Net worth projection dashboard: month-by-month series generation, goal ETA
//! lookup and chart range windows, with locale-aware formatting and a CLI host.

pub mod cli;
pub mod currency;
pub mod dashboard;
pub mod errors;
pub mod utils;

pub use networth_config;
pub use networth_core;
pub use networth_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("networth tracing initialized.");
    });
}
