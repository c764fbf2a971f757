use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use super::state::{ViewMode, WidgetKind};
use crate::t;

pub fn mode_label(mode: ViewMode) -> String {
    match mode {
        ViewMode::Stacked => t!("view-mode-stacked"),
        ViewMode::Individual => t!("view-mode-individual"),
    }
}

pub fn widget_label(kind: WidgetKind) -> String {
    match kind {
        WidgetKind::Metrics => t!("widget-metrics"),
        WidgetKind::Screenshot => t!("widget-screenshot"),
        WidgetKind::EventCounts => t!("widget-event-counts"),
        WidgetKind::EventsOverTime => t!("widget-events-over-time"),
    }
}

/// Inline radio group choosing between the stacked and individual views.
#[component]
pub fn ModeSelector(mode: ViewMode, on_select: EventHandler<ViewMode>) -> Element {
    rsx! {
        div { class: "mode-selector", "data-mode": mode.id(),
            span { class: "mode-selector__label", {t!("view-mode-label")} }
            for candidate in ViewMode::ALL {
                label { key: "{candidate}", class: "mode-selector__option",
                    input {
                        r#type: "radio",
                        name: "view-mode",
                        value: candidate.id(),
                        checked: candidate == mode,
                        onchange: move |evt: FormEvent| {
                            // Values come from our own radio buttons; anything else is a bug.
                            match evt.value().parse::<ViewMode>() {
                                Ok(selected) => on_select.call(selected),
                                Err(err) => error!("rejected view mode selection: {err}"),
                            }
                        },
                    }
                    {mode_label(candidate)}
                }
            }
        }
    }
}

/// Dropdown for individual mode. It has no empty option, so exactly one
/// widget is always selected.
#[component]
pub fn WidgetSelector(
    options: Vec<WidgetKind>,
    selected: WidgetKind,
    on_select: EventHandler<WidgetKind>,
) -> Element {
    rsx! {
        div { class: "widget-selector",
            label { class: "visually-hidden", r#for: "widget-selector", {t!("widget-selector-label")} }
            select {
                id: "widget-selector",
                class: "widget-selector__input",
                "data-selected": selected.id(),
                value: selected.id(),
                oninput: move |evt: FormEvent| {
                    match evt.value().parse::<WidgetKind>() {
                        Ok(kind) => on_select.call(kind),
                        Err(err) => error!("rejected widget selection: {err}"),
                    }
                },
                for kind in options {
                    option {
                        key: "{kind}",
                        value: kind.id(),
                        selected: kind == selected,
                        {widget_label(kind)}
                    }
                }
            }
        }
    }
}
