use dioxus::prelude::*;

use crate::core::dataset::EventCount;

use super::axis::{LinearScale, PlotFrame};
use super::palette;

pub const EVENT_COUNTS_TITLE: &str = "Event Counts by Type";

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub value: u32,
}

/// Single-series categorical bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub bars: Vec<Bar>,
    pub scale: LinearScale,
    pub color: &'static str,
}

impl BarChart {
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.bars.iter().map(|bar| bar.category.as_str())
    }
}

/// Bars appear exactly in input order; nothing is sorted or merged.
pub fn build_event_counts_chart(counts: &[EventCount]) -> BarChart {
    let peak = counts.iter().map(|c| c.count).max().unwrap_or(0);

    BarChart {
        title: EVENT_COUNTS_TITLE,
        x_title: "Event Type",
        y_title: "Count",
        bars: counts
            .iter()
            .map(|c| Bar {
                category: c.event_type.clone(),
                value: c.count,
            })
            .collect(),
        scale: LinearScale::covering(peak as f64, 5),
        color: palette::series_color(0),
    }
}

/// Pixel geometry for one bar and its category label.
#[derive(Debug, Clone, PartialEq)]
struct BarLayout {
    category: String,
    x: f64,
    top: f64,
    width: f64,
    height: f64,
    label_x: f64,
    label_y: f64,
}

fn layout_bars(chart: &BarChart, frame: &PlotFrame) -> Vec<BarLayout> {
    let slot = frame.inner_width() / chart.bars.len().max(1) as f64;
    let width = slot * 0.8;
    let baseline = frame.baseline();

    chart
        .bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let x = frame.left + index as f64 * slot + (slot - width) / 2.0;
            let top = frame.y_at(chart.scale.ratio(bar.value as f64));
            BarLayout {
                category: bar.category.clone(),
                x,
                top,
                width,
                height: baseline - top,
                label_x: x + width / 2.0,
                label_y: baseline + 16.0,
            }
        })
        .collect()
}

#[component]
pub fn BarChartView(chart: BarChart) -> Element {
    let frame = PlotFrame::STANDARD;
    let bars = layout_bars(&chart, &frame);
    let gridlines = super::gridlines(&chart.scale, &frame);
    let baseline = frame.baseline();
    let plot_right = frame.width - frame.right;
    let title_x = frame.width / 2.0;
    let x_title_y = frame.height - 12.0;
    let y_title_y = frame.y_at(0.5);

    rsx! {
        figure { class: "chart chart--bar",
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

                for bar in bars {
                    g { class: "chart__bar", "data-category": "{bar.category}",
                        rect {
                            x: "{bar.x}",
                            y: "{bar.top}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: "{chart.color}",
                        }
                        text {
                            class: "chart__category",
                            x: "{bar.label_x}",
                            y: "{bar.label_y}",
                            "text-anchor": "end",
                            transform: "rotate(-30 {bar.label_x} {bar.label_y})",
                            "{bar.category}"
                        }
                    }
                }

                line { class: "chart__axis", x1: "{frame.left}", x2: "{plot_right}", y1: "{baseline}", y2: "{baseline}" }

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
        }
    }
}
