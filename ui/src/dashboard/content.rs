use dioxus::prelude::*;

use super::selectors::WidgetSelector;
use super::state::{ViewEvent, ViewState, WidgetKind};
use super::widgets::{EventCountsWidget, EventsOverTimeWidget, MetricsWidget, ScreenshotWidget};

/// Widget selector as shown in individual mode: every option, exactly one
/// selected, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorPlan {
    pub options: [WidgetKind; 4],
    pub selected: WidgetKind,
}

/// What the content area shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPlan {
    /// Every widget, in display order.
    Stacked([WidgetKind; 4]),
    /// A selector plus the one widget it points at.
    Individual {
        selector: SelectorPlan,
        slot: WidgetKind,
    },
}

impl ContentPlan {
    /// Widgets that end up on screen, in order.
    pub fn widgets(&self) -> Vec<WidgetKind> {
        match self {
            ContentPlan::Stacked(widgets) => widgets.to_vec(),
            ContentPlan::Individual { slot, .. } => vec![*slot],
        }
    }
}

pub fn render_content(state: &ViewState) -> ContentPlan {
    match *state {
        ViewState::Stacked => ContentPlan::Stacked(WidgetKind::ALL),
        ViewState::Individual(selected) => ContentPlan::Individual {
            selector: SelectorPlan {
                options: WidgetKind::ALL,
                selected,
            },
            slot: selected,
        },
    }
}

/// The single widget for `kind`. Pure; the tables it reads never change.
pub fn render_widget(kind: WidgetKind) -> Element {
    match kind {
        WidgetKind::Metrics => rsx! { MetricsWidget {} },
        WidgetKind::Screenshot => rsx! { ScreenshotWidget {} },
        WidgetKind::EventCounts => rsx! { EventCountsWidget {} },
        WidgetKind::EventsOverTime => rsx! { EventsOverTimeWidget {} },
    }
}

#[component]
pub fn ContentArea(state: ViewState, on_event: EventHandler<ViewEvent>) -> Element {
    match render_content(&state) {
        ContentPlan::Stacked(widgets) => rsx! {
            div { id: "content-area", class: "content-area content-area--stacked",
                for kind in widgets {
                    div { key: "{kind}", class: "content-area__item", {render_widget(kind)} }
                }
            }
        },
        ContentPlan::Individual { selector, slot } => rsx! {
            div { id: "content-area", class: "content-area content-area--individual",
                WidgetSelector {
                    options: selector.options.to_vec(),
                    selected: selector.selected,
                    on_select: move |kind| on_event.call(ViewEvent::WidgetSelected(kind)),
                }
                div { id: "individual-chart", class: "content-area__item", {render_widget(slot)} }
            }
        },
    }
}
