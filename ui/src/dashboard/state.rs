//! View selection state machine.
//!
//! Two inputs drive it: the mode selector and, while in individual mode, the
//! widget selector. Nothing else changes the state.

use std::fmt;
use std::str::FromStr;

use crate::core::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Stacked,
    Individual,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Stacked, ViewMode::Individual];

    /// Value carried by the mode selector.
    pub fn id(self) -> &'static str {
        match self {
            ViewMode::Stacked => "stacked",
            ViewMode::Individual => "individual",
        }
    }
}

impl FromStr for ViewMode {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.id() == value)
            .ok_or_else(|| DashboardError::UnknownViewMode(value.to_string()))
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetKind {
    #[default]
    Metrics,
    Screenshot,
    EventCounts,
    EventsOverTime,
}

impl WidgetKind {
    /// Display order, both stacked and in the selector.
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Metrics,
        WidgetKind::Screenshot,
        WidgetKind::EventCounts,
        WidgetKind::EventsOverTime,
    ];

    /// Value carried by the widget selector.
    pub fn id(self) -> &'static str {
        match self {
            WidgetKind::Metrics => "metrics",
            WidgetKind::Screenshot => "screenshot",
            WidgetKind::EventCounts => "event_counts",
            WidgetKind::EventsOverTime => "events_over_time",
        }
    }
}

impl FromStr for WidgetKind {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == value)
            .ok_or_else(|| DashboardError::UnknownWidget(value.to_string()))
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Current view. The selected widget only exists in individual mode, so the
/// stacked branch can neither read nor clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Stacked,
    Individual(WidgetKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    ModeSelected(ViewMode),
    WidgetSelected(WidgetKind),
}

impl ViewState {
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewState::Stacked => ViewMode::Stacked,
            ViewState::Individual(_) => ViewMode::Individual,
        }
    }

    pub fn selected_widget(&self) -> Option<WidgetKind> {
        match self {
            ViewState::Stacked => None,
            ViewState::Individual(kind) => Some(*kind),
        }
    }

    /// Apply one selector event. Returns whether the state changed.
    ///
    /// Entering individual mode always starts from a fresh selector on
    /// `Metrics`. Widget events outside individual mode are ignored; the
    /// widget selector is not on screen then.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let next = match (*self, event) {
            (ViewState::Stacked, ViewEvent::ModeSelected(ViewMode::Individual)) => {
                ViewState::Individual(WidgetKind::default())
            }
            (ViewState::Individual(_), ViewEvent::ModeSelected(ViewMode::Stacked)) => {
                ViewState::Stacked
            }
            (ViewState::Individual(_), ViewEvent::WidgetSelected(kind)) => {
                ViewState::Individual(kind)
            }
            (current, _) => current,
        };

        let changed = next != *self;
        *self = next;
        changed
    }
}
