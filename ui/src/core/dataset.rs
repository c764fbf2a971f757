//! Static sample tables shown by the dashboard.
//!
//! Built once at startup and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{macros::datetime, Duration, PrimitiveDateTime};

/// A metric value is either free text or a number, rendered as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub name: String,
    pub value: MetricValue,
}

impl MetricRow {
    fn new(name: &str, value: MetricValue) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCount {
    pub event_type: String,
    pub count: u32,
}

impl EventCount {
    pub fn new<T: Into<String>>(event_type: T, count: u32) -> Self {
        Self {
            event_type: event_type.into(),
            count,
        }
    }
}

/// One row of the wide events-over-time table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    pub timestamp: PrimitiveDateTime,
    /// Per event type counts, in column order.
    pub counts: Vec<(String, u32)>,
}

impl TimeSeriesPoint {
    pub fn count(&self, event_type: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|(name, _)| name == event_type)
            .map(|(_, count)| *count)
    }
}

/// Wide table: a timestamp column followed by one count column per event type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventTimeline {
    pub columns: Vec<String>,
    pub points: Vec<TimeSeriesPoint>,
}

impl EventTimeline {
    /// Build the table from per-column value sequences sharing one timestamp axis.
    /// Columns shorter than the axis leave the remaining cells empty.
    pub fn from_columns(timestamps: &[PrimitiveDateTime], columns: &[(&str, Vec<u32>)]) -> Self {
        let points = timestamps
            .iter()
            .enumerate()
            .map(|(row, timestamp)| TimeSeriesPoint {
                timestamp: *timestamp,
                counts: columns
                    .iter()
                    .filter_map(|(name, values)| {
                        values.get(row).map(|value| (name.to_string(), *value))
                    })
                    .collect(),
            })
            .collect();

        Self {
            columns: columns.iter().map(|(name, _)| name.to_string()).collect(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub metrics: Vec<MetricRow>,
    pub event_counts: Vec<EventCount>,
    pub timeline: EventTimeline,
}

/// Days covered by the sample timeline.
const TIMELINE_DAYS: i64 = 5;
/// Hours between consecutive samples.
const TIMELINE_STEP_HOURS: i64 = 6;

impl Dataset {
    /// The fixed sample dataset rendered by the dashboard.
    pub fn sample() -> Self {
        Self {
            metrics: sample_metrics(),
            event_counts: sample_event_counts(),
            timeline: sample_timeline(),
        }
    }
}

fn sample_metrics() -> Vec<MetricRow> {
    use MetricValue::{Decimal, Integer, Text};

    vec![
        MetricRow::new(
            "First seen",
            Text("Oct 29, 2024 from Miami, United States".into()),
        ),
        MetricRow::new("Event count", Integer(1326)),
        MetricRow::new("Purchase revenue", Decimal(2243.58)),
        MetricRow::new("Transactions", Integer(2)),
        MetricRow::new("User engagement", Text("4h 08m".into())),
        MetricRow::new("click", Integer(24)),
        MetricRow::new("begin_checkout", Integer(17)),
        MetricRow::new("purchase", Integer(15)),
    ]
}

fn sample_event_counts() -> Vec<EventCount> {
    [
        ("user_engagement", 408),
        ("page_view", 400),
        ("scroll", 318),
        ("view_item", 86),
        ("view_cart", 25),
        ("click", 24),
        ("begin_checkout", 17),
        ("purchase", 15),
    ]
    .into_iter()
    .map(|(event_type, count)| EventCount::new(event_type, count))
    .collect()
}

/// Timestamps every six hours starting 2024-10-29 08:00, four per day.
pub fn sample_timestamps() -> Vec<PrimitiveDateTime> {
    let start = datetime!(2024-10-29 08:00);
    (0..TIMELINE_DAYS)
        .flat_map(|day| {
            (0..24 / TIMELINE_STEP_HOURS).map(move |tick| {
                start + Duration::days(day) + Duration::hours(tick * TIMELINE_STEP_HOURS)
            })
        })
        .collect()
}

fn sample_timeline() -> EventTimeline {
    const PATTERNS: [(&str, [u32; 10]); 8] = [
        ("user_engagement", [100, 105, 98, 92, 80, 75, 89, 95, 78, 66]),
        ("page_view", [90, 92, 88, 85, 79, 76, 83, 90, 72, 65]),
        ("scroll", [70, 69, 68, 66, 61, 64, 67, 65, 63, 57]),
        ("view_item", [20, 18, 19, 20, 22, 21, 20, 19, 18, 16]),
        ("view_cart", [5, 4, 4, 5, 6, 6, 5, 4, 5, 3]),
        ("click", [12, 10, 11, 13, 9, 8, 10, 12, 11, 9]),
        ("begin_checkout", [7, 7, 6, 8, 9, 8, 6, 7, 5, 5]),
        ("purchase", [3, 2, 3, 4, 3, 2, 4, 3, 3, 2]),
    ];

    let timestamps = sample_timestamps();
    // Whole repetitions of each pattern only.
    let repeats = timestamps.len() / 10;
    let columns: Vec<(&str, Vec<u32>)> = PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, pattern.repeat(repeats)))
        .collect();

    EventTimeline::from_columns(&timestamps, &columns)
}
