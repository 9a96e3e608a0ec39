//! Display windows for the named projection ranges.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Assumed sampling density: two points per month.
pub const POINTS_PER_YEAR: f64 = 24.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ZoomRange {
    #[default]
    #[serde(rename = "1A")]
    OneYear,
    #[serde(rename = "3A")]
    ThreeYears,
    #[serde(rename = "5A")]
    FiveYears,
    #[serde(rename = "Todo")]
    All,
}

impl ZoomRange {
    pub const ALL: [ZoomRange; 4] = [
        ZoomRange::OneYear,
        ZoomRange::ThreeYears,
        ZoomRange::FiveYears,
        ZoomRange::All,
    ];

    /// Years covered by the range; `None` for the full series.
    pub fn years(self) -> Option<u32> {
        match self {
            ZoomRange::OneYear => Some(1),
            ZoomRange::ThreeYears => Some(3),
            ZoomRange::FiveYears => Some(5),
            ZoomRange::All => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ZoomRange::OneYear => "1A",
            ZoomRange::ThreeYears => "3A",
            ZoomRange::FiveYears => "5A",
            ZoomRange::All => "Todo",
        }
    }
}

impl fmt::Display for ZoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ZoomRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1a" => Ok(ZoomRange::OneYear),
            "3a" => Ok(ZoomRange::ThreeYears),
            "5a" => Ok(ZoomRange::FiveYears),
            "todo" | "all" => Ok(ZoomRange::All),
            _ => Err(CoreError::UnknownRange(s.to_string())),
        }
    }
}

/// Percent bounds of the visible slice of a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ZoomWindow {
    pub start_pct: f64,
    pub end_pct: f64,
}

impl ZoomWindow {
    pub const FULL: ZoomWindow = ZoomWindow {
        start_pct: 0.0,
        end_pct: 100.0,
    };
}

/// Window for `range` over a series with `total_points` intervals.
///
/// Non-positive counts show the whole (degenerate) series.
pub fn compute_zoom_window(range: ZoomRange, total_points: i64) -> ZoomWindow {
    if total_points <= 0 {
        return ZoomWindow::FULL;
    }
    let end_pct = match range.years() {
        Some(years) => {
            let points_per_range = POINTS_PER_YEAR * f64::from(years);
            (points_per_range / total_points as f64 * 100.0).min(100.0)
        }
        None => 100.0,
    };
    ZoomWindow {
        start_pct: 0.0,
        end_pct,
    }
}
