use dioxus::prelude::*;
use time::PrimitiveDateTime;

use crate::core::{dataset::EventTimeline, format};

use super::axis::{LinearScale, PlotFrame};
use super::palette;

pub const EVENTS_OVER_TIME_TITLE: &str = "Events Over Time";

/// Roughly how many timestamps get a label on the x axis.
const TARGET_TIME_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    /// One entry per timestamp; `None` where the table has no value.
    pub values: Vec<Option<u32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub index: usize,
    pub label: String,
}

/// Overlaid line+marker series sharing one time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesChart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// Ascending.
    pub timestamps: Vec<PrimitiveDateTime>,
    pub series: Vec<LineSeries>,
    pub scale: LinearScale,
    pub x_ticks: Vec<TimeTick>,
}

impl TimeSeriesChart {
    pub fn legend(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|series| series.name.as_str())
    }

    /// Horizontal position of timestamp `index`, proportional to elapsed time.
    pub fn x_fraction(&self, index: usize) -> f64 {
        let (Some(first), Some(last)) = (self.timestamps.first(), self.timestamps.last()) else {
            return 0.0;
        };
        let span = (*last - *first).whole_minutes();
        if span <= 0 {
            return 0.5;
        }
        self.timestamps
            .get(index)
            .map(|stamp| (*stamp - *first).whole_minutes() as f64 / span as f64)
            .unwrap_or(0.0)
    }
}

/// One series per non-timestamp column, in column order, plotted against
/// timestamps sorted ascending.
pub fn build_events_over_time_chart(timeline: &EventTimeline) -> TimeSeriesChart {
    let mut rows: Vec<_> = timeline.points.iter().collect();
    rows.sort_by_key(|point| point.timestamp);

    let series: Vec<LineSeries> = timeline
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| LineSeries {
            name: column.clone(),
            color: palette::series_color(index),
            values: rows.iter().map(|point| point.count(column)).collect(),
        })
        .collect();

    let peak = series
        .iter()
        .flat_map(|s| s.values.iter().flatten())
        .copied()
        .max()
        .unwrap_or(0);

    let timestamps: Vec<PrimitiveDateTime> = rows.iter().map(|point| point.timestamp).collect();
    let x_ticks = time_ticks(&timestamps);

    TimeSeriesChart {
        title: EVENTS_OVER_TIME_TITLE,
        x_title: "Date and Time",
        y_title: "Event Count",
        timestamps,
        series,
        scale: LinearScale::covering(peak as f64, 5),
        x_ticks,
    }
}

fn time_ticks(timestamps: &[PrimitiveDateTime]) -> Vec<TimeTick> {
    let step = timestamps.len().div_ceil(TARGET_TIME_TICKS).max(1);
    timestamps
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(index, stamp)| TimeTick {
            index,
            label: format::format_timestamp(*stamp),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct SeriesLayout {
    name: String,
    color: &'static str,
    /// Polyline point lists; a missing value starts a new segment.
    segments: Vec<String>,
    markers: Vec<(f64, f64)>,
}

fn layout_series(chart: &TimeSeriesChart, frame: &PlotFrame) -> Vec<SeriesLayout> {
    chart
        .series
        .iter()
        .map(|series| {
            let mut segments = Vec::new();
            let mut current: Vec<String> = Vec::new();
            let mut markers = Vec::new();

            for (index, value) in series.values.iter().enumerate() {
                match value {
                    Some(value) => {
                        let x = frame.x_at(chart.x_fraction(index));
                        let y = frame.y_at(chart.scale.ratio(*value as f64));
                        current.push(format!("{x:.1},{y:.1}"));
                        markers.push((x, y));
                    }
                    None if !current.is_empty() => {
                        segments.push(current.join(" "));
                        current.clear();
                    }
                    None => {}
                }
            }
            if !current.is_empty() {
                segments.push(current.join(" "));
            }

            SeriesLayout {
                name: series.name.clone(),
                color: series.color,
                segments,
                markers,
            }
        })
        .collect()
}

#[component]
pub fn TimeSeriesChartView(chart: TimeSeriesChart) -> Element {
    let frame = PlotFrame::STANDARD;
    let lines = layout_series(&chart, &frame);
    let gridlines = super::gridlines(&chart.scale, &frame);
    let baseline = frame.baseline();
    let tick_end = baseline + 6.0;
    let tick_label_y = baseline + 22.0;
    let plot_right = frame.width - frame.right;
    let title_x = frame.width / 2.0;
    let x_title_y = frame.height - 12.0;
    let y_title_y = frame.y_at(0.5);
    let ticks: Vec<(f64, String)> = chart
        .x_ticks
        .iter()
        .map(|tick| (frame.x_at(chart.x_fraction(tick.index)), tick.label.clone()))
        .collect();
    let legend: Vec<(String, &'static str)> = chart
        .series
        .iter()
        .map(|series| (series.name.clone(), series.color))
        .collect();

    rsx! {
        figure { class: "chart chart--timeseries",
            svg {
                class: "chart__canvas",
                "viewBox": frame.view_box(),
                "role": "img",
                "aria-label": chart.title,

                text { class: "chart__title", x: "{title_x}", y: "28", "text-anchor": "middle", "{chart.title}" }

                for grid in gridlines {
                    g { class: "chart__gridline",
                        line { x1: "{frame.left}", x2: "{plot_right}", y1: "{grid.y}", y2: "{grid.y}" }
                        text {
                            class: "chart__tick",
                            x: "{grid.label_x}",
                            y: "{grid.label_y}",
                            "text-anchor": "end",
                            "{grid.label}"
                        }
                    }
                }

                for (x, label) in ticks {
                    g { class: "chart__time-tick",
                        line { x1: "{x}", x2: "{x}", y1: "{baseline}", y2: "{tick_end}" }
                        text {
                            class: "chart__tick",
                            x: "{x}",
                            y: "{tick_label_y}",
                            "text-anchor": "middle",
                            "{label}"
                        }
                    }
                }

                line { class: "chart__axis", x1: "{frame.left}", x2: "{plot_right}", y1: "{baseline}", y2: "{baseline}" }

                for series in lines {
                    g { class: "chart__series", "data-series": "{series.name}",
                        for points in series.segments {
                            polyline {
                                points: "{points}",
                                fill: "none",
                                stroke: "{series.color}",
                                "stroke-width": "2",
                            }
                        }
                        for (cx, cy) in series.markers {
                            circle { cx: "{cx}", cy: "{cy}", r: "3.5", fill: "{series.color}" }
                        }
                    }
                }

                text { class: "chart__axis-title", x: "{title_x}", y: "{x_title_y}", "text-anchor": "middle", "{chart.x_title}" }
                text {
                    class: "chart__axis-title",
                    x: "18",
                    y: "{y_title_y}",
                    "text-anchor": "middle",
                    transform: "rotate(-90 18 {y_title_y})",
                    "{chart.y_title}"
                }
            }

            figcaption { class: "chart__legend",
                span { class: "chart__legend-title", {crate::t!("chart-legend-label")} }
                ul {
                    for (name, color) in legend {
                        li { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background:{color}" }
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{sample_timestamps, Dataset, EventTimeline, TimeSeriesPoint};
    use time::{macros::datetime, Duration};

    fn sample_chart() -> TimeSeriesChart {
        build_events_over_time_chart(&Dataset::sample().timeline)
    }

    #[test]
    fn one_series_per_non_timestamp_column() {
        let chart = sample_chart();
        let legend: Vec<_> = chart.legend().collect();
        assert_eq!(
            legend,
            [
                "user_engagement",
                "page_view",
                "scroll",
                "view_item",
                "view_cart",
                "click",
                "begin_checkout",
                "purchase"
            ]
        );
        assert!(chart.series.iter().all(|s| s.values.len() == 20));
        assert!(chart.series.iter().all(|s| s.values.iter().all(Option::is_some)));
    }

    #[test]
    fn points_cover_the_sample_window_without_gaps() {
        let chart = sample_chart();
        assert_eq!(chart.timestamps.len(), 20);
        assert_eq!(chart.timestamps.first(), Some(&datetime!(2024-10-29 08:00)));
        assert_eq!(chart.timestamps[16], datetime!(2024-11-02 08:00));
        assert_eq!(chart.timestamps.last(), Some(&datetime!(2024-11-03 02:00)));
        assert!(chart
            .timestamps
            .windows(2)
            .all(|pair| pair[1] - pair[0] == Duration::hours(6)));
    }

    #[test]
    fn rows_are_sorted_by_timestamp() {
        let stamps = sample_timestamps();
        let timeline = EventTimeline {
            columns: vec!["click".into()],
            points: vec![
                TimeSeriesPoint {
                    timestamp: stamps[2],
                    counts: vec![("click".into(), 3)],
                },
                TimeSeriesPoint {
                    timestamp: stamps[0],
                    counts: vec![("click".into(), 1)],
                },
                TimeSeriesPoint {
                    timestamp: stamps[1],
                    counts: vec![("click".into(), 2)],
                },
            ],
        };
        let chart = build_events_over_time_chart(&timeline);
        assert_eq!(chart.timestamps, stamps[..3].to_vec());
        assert_eq!(chart.series[0].values, [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn time_axis_labels_use_minute_format() {
        let chart = sample_chart();
        let labels: Vec<_> = chart.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "2024-10-29 08:00",
                "2024-10-30 08:00",
                "2024-10-31 08:00",
                "2024-11-01 08:00",
                "2024-11-02 08:00"
            ]
        );
    }

    #[test]
    fn x_positions_are_proportional_to_time() {
        let chart = sample_chart();
        assert_eq!(chart.x_fraction(0), 0.0);
        assert_eq!(chart.x_fraction(19), 1.0);
        assert!((chart.x_fraction(1) - 1.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn missing_values_split_the_line() {
        let stamps = sample_timestamps();
        let timeline = EventTimeline {
            columns: vec!["click".into()],
            points: vec![
                TimeSeriesPoint {
                    timestamp: stamps[0],
                    counts: vec![("click".into(), 4)],
                },
                TimeSeriesPoint {
                    timestamp: stamps[1],
                    counts: Vec::new(),
                },
                TimeSeriesPoint {
                    timestamp: stamps[2],
                    counts: vec![("click".into(), 6)],
                },
            ],
        };
        let chart = build_events_over_time_chart(&timeline);
        assert_eq!(chart.series[0].values, [Some(4), None, Some(6)]);

        let layout = layout_series(&chart, &PlotFrame::STANDARD);
        assert_eq!(layout[0].segments.len(), 2);
        assert_eq!(layout[0].markers.len(), 2);
    }
}
