#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use tempfile::TempDir;

use networth::networth_config::ConfigManager;
use networth::networth_core::{FixedClock, FixedNoise, NoiseSource, ProjectionEngine};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Instant every deterministic scenario starts from.
pub static REFERENCE_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 10, 14, 12, 0, 0).unwrap());

/// Engine pinned to [`REFERENCE_NOW`] with the given noise.
pub fn fixed_engine(noise: impl NoiseSource + 'static) -> ProjectionEngine {
    ProjectionEngine::new(Arc::new(FixedClock(*REFERENCE_NOW)), Box::new(noise))
}

/// Engine whose fluctuation term is always zero.
pub fn flat_noise_engine() -> ProjectionEngine {
    fixed_engine(FixedNoise(0.45))
}

/// Creates an isolated config manager backed by a unique directory.
pub fn setup_config_env() -> (ConfigManager, std::path::PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (manager, base)
}
