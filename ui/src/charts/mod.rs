//! Chart builders (pure data → chart description) and their SVG components.

pub mod axis;

mod bar;
pub use bar::{build_event_counts_chart, Bar, BarChart, BarChartView, EVENT_COUNTS_TITLE};

mod timeseries;
pub use timeseries::{
    build_events_over_time_chart, LineSeries, TimeSeriesChart, TimeSeriesChartView,
    EVENTS_OVER_TIME_TITLE,
};

use crate::core::format;
use axis::{LinearScale, PlotFrame};

pub mod palette {
    /// Categorical colours, cycled per series.
    const SERIES: [&str; 10] = [
        "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
        "#ff97ff", "#fecb52",
    ];

    pub fn series_color(index: usize) -> &'static str {
        SERIES[index % SERIES.len()]
    }
}

/// Horizontal gridline with its value label.
#[derive(Debug, Clone, PartialEq)]
struct Gridline {
    y: f64,
    label_x: f64,
    label_y: f64,
    label: String,
}

fn gridlines(scale: &LinearScale, frame: &PlotFrame) -> Vec<Gridline> {
    scale
        .ticks
        .iter()
        .map(|tick| {
            let y = frame.y_at(scale.ratio(*tick));
            Gridline {
                y,
                label_x: frame.left - 8.0,
                label_y: y + 4.0,
                label: format::format_tick(*tick),
            }
        })
        .collect()
}
