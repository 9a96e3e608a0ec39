//! Month-stepping net-worth projection with mid-month fluctuation samples.

use std::{cmp::Ordering, sync::Arc};

use chrono::{DateTime, Duration, Months, Utc};
use tracing::{debug, warn};

use networth_domain::{days_in_month_of, round2, ProjectionInput, Series, SeriesPoint};

use crate::{
    noise::{NoiseSource, ThreadNoise},
    time::{Clock, SystemClock},
};

/// Offset subtracted from each uniform draw. Below `0.5`, so noise leans toward growth.
pub const FLUCTUATION_BIAS: f64 = 0.45;
/// Share of the monthly net change the fluctuation may swing by.
pub const FLUCTUATION_SCALE: f64 = 0.7;
/// Horizons beyond this are clamped to keep calendar arithmetic in range.
pub const MAX_HORIZON_YEARS: i32 = 200;
/// Samples emitted per projected month (mid-month plus end-of-month).
pub const POINTS_PER_MONTH: usize = 2;

/// Regenerates projection series from a clock and a noise source supplied by the host.
pub struct ProjectionEngine {
    clock: Arc<dyn Clock>,
    noise: Box<dyn NoiseSource>,
}

impl ProjectionEngine {
    pub fn new(clock: Arc<dyn Clock>, noise: Box<dyn NoiseSource>) -> Self {
        Self { clock, noise }
    }

    /// System time with unseeded noise.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Box::new(ThreadNoise))
    }

    /// Builds the full series from scratch. Never cached: every call draws fresh noise.
    pub fn generate_series(&mut self, input: &ProjectionInput) -> Series {
        let now = self.clock.now();
        project_from(now, input, self.noise.as_mut())
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::system()
    }
}

/// Projects `input` starting at `now`.
///
/// Each month emits a fluctuation point halfway through the month (when it falls
/// before the horizon) and an end-of-month point carrying the accumulated net
/// change. Month steps are taken from `now` so short months never drift the
/// day-of-month of later steps.
pub fn project_from(
    now: DateTime<Utc>,
    input: &ProjectionInput,
    noise: &mut dyn NoiseSource,
) -> Series {
    let monthly_net_change = input.monthly_net_change();
    let horizon_years = clamp_horizon(input.horizon_years);
    let end_date = horizon_end(now, horizon_years);

    let capacity = 1 + horizon_years.max(0) as usize * 12 * POINTS_PER_MONTH;
    let mut points = Vec::with_capacity(capacity);
    let mut current_net_worth = input.start_net_worth;
    let mut current_date = now;
    let mut step = 0u32;

    points.push(SeriesPoint::new(current_date, round2(current_net_worth)));

    while current_date < end_date {
        let days_in_month = days_in_month_of(current_date.date_naive());
        let mid_month_date = current_date + Duration::days(i64::from(days_in_month / 2));

        if mid_month_date < end_date {
            let fluctuation =
                (noise.sample() - FLUCTUATION_BIAS) * monthly_net_change * FLUCTUATION_SCALE;
            let value = current_net_worth + monthly_net_change / 2.0 + fluctuation;
            points.push(SeriesPoint::new(mid_month_date, round2(value)));
        }

        step += 1;
        current_date = match now.checked_add_months(Months::new(step)) {
            Some(next) => next,
            None => break,
        };
        current_net_worth += monthly_net_change;

        if current_date < end_date {
            points.push(SeriesPoint::new(current_date, round2(current_net_worth)));
        }
    }

    let series = Series::from_points(points);
    debug!(
        points = series.len(),
        monthly_net_change, horizon_years, "projection series generated"
    );
    series
}

fn clamp_horizon(years: i32) -> i32 {
    if years > MAX_HORIZON_YEARS {
        warn!(
            requested = years,
            max = MAX_HORIZON_YEARS,
            "projection horizon clamped"
        );
        MAX_HORIZON_YEARS
    } else {
        years
    }
}

/// `now` shifted by whole calendar years; non-positive horizons end at or before `now`.
fn horizon_end(now: DateTime<Utc>, years: i32) -> DateTime<Utc> {
    let months = Months::new(years.unsigned_abs() * 12);
    let shifted = match years.cmp(&0) {
        Ordering::Greater => now.checked_add_months(months),
        Ordering::Less => now.checked_sub_months(months),
        Ordering::Equal => Some(now),
    };
    shifted.unwrap_or(now)
}
