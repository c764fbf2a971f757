//! View controller: selection state, content planning and the widgets it
//! hands to the renderer.

pub mod state;
pub use state::{ViewEvent, ViewMode, ViewState, WidgetKind};

mod content;
pub use content::{render_content, render_widget, ContentArea, ContentPlan, SelectorPlan};

mod selectors;
pub use selectors::{mode_label, widget_label, ModeSelector, WidgetSelector};

mod widgets;
pub use widgets::{EventCountsWidget, EventsOverTimeWidget, MetricsWidget, ScreenshotWidget};
