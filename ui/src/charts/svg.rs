//! Geometry for drawing chart specs as SVG.

use crate::core::format::format_epoch_ms;

use super::spec::{AxisKind, BarChartSpec, ScatterChartSpec, SeriesColor};

/// Plot size in SVG user units plus the margins reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            left: 56.0,
            right: 16.0,
            top: 16.0,
            bottom: 56.0,
        }
    }
}

impl Frame {
    pub fn plot_left(&self) -> f64 {
        self.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.right
    }

    pub fn plot_top(&self) -> f64 {
        self.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(1.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Evenly spaced ticks on a 1/2/5 step covering the domain, never more
    /// than `MAX_TICKS + 1` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let step = nice_step((d1 - d0) / count.max(1) as f64);
        if !step.is_finite() || step <= 0.0 {
            return vec![d0];
        }

        let first = (d0 / step).ceil() * step;
        let steps = ((d1 - first) / step + 1e-9).floor();
        if !steps.is_finite() || steps < 0.0 {
            return vec![d0];
        }
        let steps = (steps as usize).min(MAX_TICKS);
        (0..=steps).map(|i| first + i as f64 * step).collect()
    }
}

const MAX_TICKS: usize = 20;

fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Domain padded so points never sit on the plot edge.
pub fn padded_bounds(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() {
        return (0.0, 1.0);
    }
    // Relative check: values a few ulps apart would otherwise yield a step
    // too small to advance.
    if max - min <= max.abs().max(min.abs()) * 1e-12 {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        return (min - pad, max + pad);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub dataset: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: SeriesColor,
}

impl BarRect {
    /// Top-centre of the bar, where tooltips anchor.
    pub fn caret(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub bars: Vec<BarRect>,
    pub categories: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

/// Bars grouped per category, datasets side by side, zero-based y axis.
pub fn bar_layout(spec: &BarChartSpec, frame: &Frame) -> BarLayout {
    let categories = spec.labels.len();
    let series = spec.datasets.len().max(1);
    let max = spec
        .datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };
    let y = LinearScale::new((0.0, top), (frame.plot_bottom(), frame.plot_top()));

    let band = frame.plot_width() / categories.max(1) as f64;
    let group = band * 0.8;
    let bar_width = group / series as f64;

    let mut bars = Vec::new();
    for (dataset_index, dataset) in spec.datasets.iter().enumerate() {
        for (index, value) in dataset.values.iter().copied().enumerate().take(categories) {
            if !value.is_finite() {
                continue;
            }
            let x = frame.plot_left() + band * index as f64 + (band - group) / 2.0
                + bar_width * dataset_index as f64;
            let top = y.map(value.max(0.0));
            bars.push(BarRect {
                dataset: dataset_index,
                index,
                x,
                y: top,
                width: bar_width,
                height: (frame.plot_bottom() - top).max(0.0),
                color: dataset.color.clone(),
            });
        }
    }

    let categories = spec
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| Tick {
            position: frame.plot_left() + band * (index as f64 + 0.5),
            label: label.clone(),
        })
        .collect();

    BarLayout {
        bars,
        categories,
        y_ticks: value_ticks(&y, 5),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointMark {
    pub dataset: usize,
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub points: Vec<PointMark>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

pub const POINT_RADIUS: f64 = 4.0;

pub fn scatter_layout(spec: &ScatterChartSpec, frame: &Frame) -> ScatterLayout {
    let all = || spec.datasets.iter().flat_map(|d| d.points.iter());
    let x = LinearScale::new(
        padded_bounds(all().map(|p| p.x)),
        (frame.plot_left(), frame.plot_right()),
    );
    let y = LinearScale::new(
        padded_bounds(all().map(|p| p.y)),
        (frame.plot_bottom(), frame.plot_top()),
    );

    let points = spec
        .datasets
        .iter()
        .enumerate()
        .flat_map(|(dataset_index, dataset)| {
            dataset.points.iter().enumerate().map(move |(index, p)| PointMark {
                dataset: dataset_index,
                index,
                cx: x.map(p.x),
                cy: y.map(p.y),
                color: dataset.color.clone(),
            })
        })
        .collect();

    let x_ticks = match spec.x_axis {
        AxisKind::Time => x
            .ticks(4)
            .into_iter()
            .map(|value| Tick {
                position: x.map(value),
                label: format_epoch_ms(value),
            })
            .collect(),
        AxisKind::Linear => value_ticks(&x, 6),
    };

    ScatterLayout {
        points,
        x_ticks,
        y_ticks: value_ticks(&y, 5),
    }
}

fn value_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            position: scale.map(value),
            label: tick_label(value),
        })
        .collect()
}

fn tick_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}
