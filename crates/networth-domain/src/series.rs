//! Projected net-worth time series.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One projected sample. Serializes as `[epoch_millis, net_worth]` for chart hosts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(into = "(i64, f64)", try_from = "(i64, f64)")]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub net_worth: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, net_worth: f64) -> Self {
        Self {
            timestamp,
            net_worth,
        }
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

impl From<SeriesPoint> for (i64, f64) {
    fn from(point: SeriesPoint) -> Self {
        (point.timestamp_millis(), point.net_worth)
    }
}

impl TryFrom<(i64, f64)> for SeriesPoint {
    type Error = String;

    fn try_from((millis, net_worth): (i64, f64)) -> Result<Self, Self::Error> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|timestamp| SeriesPoint::new(timestamp, net_worth))
            .ok_or_else(|| format!("timestamp {millis} is out of range"))
    }
}

/// Ordered projection output, always sorted ascending by timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<SeriesPoint>", into = "Vec<SeriesPoint>")]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Builds a series, stably sorting the points by timestamp.
    pub fn from_points(mut points: Vec<SeriesPoint>) -> Self {
        points.sort_by_key(|point| point.timestamp);
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    pub fn max_net_worth(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| point.net_worth)
            .reduce(f64::max)
    }

    /// Point count used by range windows: intervals rather than samples.
    pub fn zoom_point_count(&self) -> i64 {
        self.points.len() as i64 - 1
    }
}

impl From<Vec<SeriesPoint>> for Series {
    fn from(points: Vec<SeriesPoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<Series> for Vec<SeriesPoint> {
    fn from(series: Series) -> Self {
        series.points
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Calendar month in which a goal is first reached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodLabel {
    pub year: i32,
    pub month: u32,
}

impl PeriodLabel {
    pub fn of(timestamp: DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        *self == Self::of(timestamp)
    }

    /// Whole months from `origin`'s month to this period.
    pub fn months_after(&self, origin: DateTime<Utc>) -> i32 {
        (self.year - origin.year()) * 12 + self.month as i32 - origin.month() as i32
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", english_month(self.month), self.year)
    }
}

fn english_month(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn from_points_sorts_by_timestamp() {
        let early = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let series = Series::from_points(vec![
            SeriesPoint::new(late, 2.0),
            SeriesPoint::new(early, 1.0),
        ]);

        assert_eq!(series.first().map(|p| p.timestamp), Some(early));
        assert_eq!(series.max_net_worth(), Some(2.0));
        assert_eq!(series.zoom_point_count(), 1);
    }

    #[test]
    fn point_serializes_as_millis_pair() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let point = SeriesPoint::new(ts, 7500.5);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, format!("[{},7500.5]", ts.timestamp_millis()));

        let back: SeriesPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn deserialized_series_is_sorted() {
        let early = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let json = format!(
            "[[{},2.0],[{},1.0]]",
            late.timestamp_millis(),
            early.timestamp_millis()
        );

        let series: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(series.first().map(|p| p.timestamp), Some(early));
        assert_eq!(series.last().map(|p| p.net_worth), Some(2.0));
        assert_eq!(
            serde_json::to_string(&series).unwrap(),
            format!("[[{},1.0],[{},2.0]]", early.timestamp_millis(), late.timestamp_millis())
        );
    }

    #[test]
    fn period_label_renders_month_and_year() {
        let ts = Utc.with_ymd_and_hms(2033, 3, 2, 0, 0, 0).unwrap();
        let label = PeriodLabel::of(ts);
        assert_eq!(label.to_string(), "March 2033");
        assert!(label.contains(ts));
        let origin = Utc.with_ymd_and_hms(2025, 10, 14, 0, 0, 0).unwrap();
        assert_eq!(label.months_after(origin), 89);
    }
}
