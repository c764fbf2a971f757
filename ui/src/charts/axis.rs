//! Linear value scale and the plotting frame shared by both charts.

/// A zero-based value axis rounded up to a "nice" maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl LinearScale {
    /// Cover `0..=max_value` with roughly `target_ticks` intervals of 1, 2 or 5
    /// times a power of ten.
    pub fn covering(max_value: f64, target_ticks: usize) -> Self {
        let target = target_ticks.max(1) as f64;
        let step = if max_value.is_finite() && max_value > 0.0 {
            nice_step(max_value / target)
        } else {
            1.0
        };

        let intervals = (max_value.max(0.0) / step).ceil().max(1.0) as usize;
        let ticks = (0..=intervals).map(|i| i as f64 * step).collect::<Vec<_>>();
        let max = ticks.last().copied().unwrap_or(step);

        Self { max, ticks }
    }

    /// Position of `value` on the axis, 0.0 at the origin and 1.0 at `max`.
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (value / self.max).clamp(0.0, 1.0)
        }
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// SVG canvas with margins for titles and axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotFrame {
    pub const STANDARD: PlotFrame = PlotFrame {
        width: 760.0,
        height: 400.0,
        left: 72.0,
        right: 24.0,
        top: 56.0,
        bottom: 96.0,
    };

    pub fn inner_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    /// X coordinate for a 0..=1 fraction of the plot width.
    pub fn x_at(&self, fraction: f64) -> f64 {
        self.left + fraction * self.inner_width()
    }

    /// Y coordinate for a 0..=1 fraction of the plot height (0 at the baseline).
    pub fn y_at(&self, fraction: f64) -> f64 {
        self.top + (1.0 - fraction) * self.inner_height()
    }

    pub fn baseline(&self) -> f64 {
        self.y_at(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
