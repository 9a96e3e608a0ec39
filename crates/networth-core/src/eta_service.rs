//! Goal ETA search over a generated series.

use networth_domain::{PeriodLabel, Series, SeriesPoint};

/// Net-worth target used by the dashboard when none is configured.
pub const DEFAULT_GOAL_NET_WORTH: f64 = 100_000.0;

pub struct GoalEtaFinder;

impl GoalEtaFinder {
    /// First point, in series order, whose value meets or exceeds `goal`.
    pub fn first_reaching(series: &Series, goal: f64) -> Option<&SeriesPoint> {
        series.iter().find(|point| point.net_worth >= goal)
    }

    /// Month in which `goal` is first reached; `None` means not within the horizon.
    pub fn find_eta(series: &Series, goal: f64) -> Option<PeriodLabel> {
        Self::first_reaching(series, goal).map(|point| PeriodLabel::of(point.timestamp))
    }
}
