use dioxus::prelude::*;

use super::selectors::widget_label;
use super::state::WidgetKind;
use crate::charts::{
    build_event_counts_chart, build_events_over_time_chart, BarChartView, TimeSeriesChartView,
};
use crate::core::DashboardContext;
use crate::t;

/// Shared section chrome: heading plus a marker identifying the widget.
#[component]
fn WidgetSection(kind: WidgetKind, children: Element) -> Element {
    rsx! {
        section { class: "dashboard-widget dashboard-widget--{kind}", "data-widget": kind.id(),
            h2 { class: "dashboard-widget__title", {widget_label(kind)} }
            {children}
        }
    }
}

#[component]
pub fn MetricsWidget() -> Element {
    let context = use_context::<DashboardContext>();
    let rows = context.dataset().metrics.clone();

    rsx! {
        WidgetSection { kind: WidgetKind::Metrics,
            table { class: "metrics-table",
                thead {
                    tr {
                        th { {t!("metrics-header-metric")} }
                        th { {t!("metrics-header-value")} }
                    }
                }
                tbody {
                    for row in rows {
                        tr { class: "metrics-table__row",
                            td { class: "metrics-table__name", "{row.name}" }
                            td { class: "metrics-table__value", "{row.value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScreenshotWidget() -> Element {
    let context = use_context::<DashboardContext>();
    let image = context.screenshot();
    let alt = t!("screenshot-alt", width = image.width(), height = image.height());

    rsx! {
        WidgetSection { kind: WidgetKind::Screenshot,
            img {
                class: "screenshot",
                src: image.data_uri(),
                alt: "{alt}",
                style: "width: 80%; height: auto;",
            }
        }
    }
}

#[component]
pub fn EventCountsWidget() -> Element {
    let context = use_context::<DashboardContext>();
    let chart = build_event_counts_chart(&context.dataset().event_counts);

    rsx! {
        WidgetSection { kind: WidgetKind::EventCounts,
            BarChartView { chart }
        }
    }
}

#[component]
pub fn EventsOverTimeWidget() -> Element {
    let context = use_context::<DashboardContext>();
    let chart = build_events_over_time_chart(&context.dataset().timeline);

    rsx! {
        WidgetSection { kind: WidgetKind::EventsOverTime,
            TimeSeriesChartView { chart }
        }
    }
}
