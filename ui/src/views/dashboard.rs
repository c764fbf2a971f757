use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::dashboard::{ContentArea, ModeSelector, ViewEvent, ViewState};

/// The whole dashboard page. Owns the view state for this session; every
/// selector event is applied synchronously before the next render.
#[component]
pub fn DashboardPage() -> Element {
    let state = use_signal(ViewState::default);

    rsx! {
        section { class: "page page-dashboard",
            h1 { {crate::t!("app-title")} }

            ModeSelector {
                mode: state().mode(),
                on_select: move |mode| dispatch(state, ViewEvent::ModeSelected(mode)),
            }

            ContentArea {
                state: state(),
                on_event: move |event| dispatch(state, event),
            }
        }
    }
}

fn dispatch(mut state: Signal<ViewState>, event: ViewEvent) {
    let changed = state.with_mut(|current| current.apply(event));
    if changed {
        debug!(?event, state = ?state(), "view state changed");
    }
}
