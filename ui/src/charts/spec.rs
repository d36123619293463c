//! Backend-neutral chart descriptions.
//!
//! `bar_chart_spec` and `scatter_chart_spec` turn payloads into plain data;
//! whatever draws them (SVG view, test recorder) only reads these structs.

use serde::{Deserialize, Serialize};

use crate::core::format::timestamp_epoch_ms;
use crate::data::{FareSummary, TripRecord};
use crate::t;
use crate::theme::Theme;

/// What the second chart plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterMode {
    /// Pickup time on x, distance on y.
    #[default]
    PickupVsDistance,
    /// Distance on x, speed on y.
    DistanceVsSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub grid: &'static str,
}

impl Palette {
    pub const LIGHT: Self = Self {
        text: "#333",
        grid: "#f0f0f0",
    };
    pub const DARK: Self = Self {
        text: "#cbc9e2",
        grid: "#2e2d44",
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

/// Fill and stroke for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColor {
    pub fill: String,
    pub stroke: String,
}

impl SeriesColor {
    fn rgba(rgb: (u8, u8, u8), fill_alpha: f32, stroke_alpha: f32) -> Self {
        let (r, g, b) = rgb;
        Self {
            fill: format!("rgba({r},{g},{b},{fill_alpha})"),
            stroke: format!("rgba({r},{g},{b},{stroke_alpha})"),
        }
    }
}

const PRIMARY: (u8, u8, u8) = (39, 72, 8);
const ACCENT: (u8, u8, u8) = (141, 96, 152);
const FALLBACK: (u8, u8, u8) = (100, 100, 200);

/// Stable vendor colours; unknown vendors share the fallback.
pub fn vendor_color(vendor_id: u32) -> SeriesColor {
    match vendor_id {
        1 => SeriesColor::rgba(PRIMARY, 0.08, 1.0),
        2 => SeriesColor::rgba(ACCENT, 0.08, 1.0),
        _ => SeriesColor::rgba(FALLBACK, 0.12, 1.0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDataset {
    pub label: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
    pub y_title: String,
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterDataset {
    pub vendor_id: u32,
    pub label: String,
    pub points: Vec<ScatterPoint>,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Millisecond epoch values, labelled as timestamps.
    Time,
    Linear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub mode: ScatterMode,
    pub datasets: Vec<ScatterDataset>,
    pub x_axis: AxisKind,
    pub x_title: String,
    pub y_title: String,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Bar(BarChartSpec),
    Scatter(ScatterChartSpec),
}

impl ChartSpec {
    pub fn palette(&self) -> Palette {
        match self {
            Self::Bar(spec) => spec.palette,
            Self::Scatter(spec) => spec.palette,
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn vendor_label(vendor_id: u32) -> String {
    t!("chart-vendor", id = vendor_id)
}

/// One category per summary row, in input order; min/avg/max series.
pub fn bar_chart_spec(summary: &[FareSummary], palette: Palette) -> BarChartSpec {
    let labels = summary.iter().map(|s| vendor_label(s.vendor_id)).collect();
    let series = |pick: fn(&FareSummary) -> f64| -> Vec<f64> {
        summary.iter().map(|s| round2(pick(s))).collect()
    };

    let datasets = vec![
        BarDataset {
            label: t!("chart-min-fare"),
            values: series(|s| s.min_price),
            color: SeriesColor {
                fill: "rgba(141,96,152,0.5)".into(),
                stroke: "rgba(141,96,152,1)".into(),
            },
        },
        BarDataset {
            label: t!("chart-avg-fare"),
            values: series(|s| s.avg_price),
            color: SeriesColor {
                fill: "rgba(39,72,8,0.7)".into(),
                stroke: "rgba(39,72,8,1)".into(),
            },
        },
        BarDataset {
            label: t!("chart-max-fare"),
            values: series(|s| s.max_price),
            color: SeriesColor {
                fill: "rgba(222,220,255,0.8)".into(),
                stroke: "rgba(141,96,152,0.8)".into(),
            },
        },
    ];

    BarChartSpec {
        labels,
        datasets,
        y_title: t!("chart-fare-axis"),
        palette,
    }
}

/// One series per vendor in first-seen order. Trips missing either
/// coordinate are skipped.
pub fn scatter_chart_spec(trips: &[TripRecord], mode: ScatterMode, palette: Palette) -> ScatterChartSpec {
    let mut datasets: Vec<ScatterDataset> = Vec::new();

    for trip in trips {
        let Some(point) = scatter_point(trip, mode) else {
            continue;
        };

        match datasets.iter_mut().find(|d| d.vendor_id == trip.vendor_id) {
            Some(dataset) => dataset.points.push(point),
            None => datasets.push(ScatterDataset {
                vendor_id: trip.vendor_id,
                label: vendor_label(trip.vendor_id),
                points: vec![point],
                color: vendor_color(trip.vendor_id),
            }),
        }
    }

    let (x_axis, x_title, y_title) = match mode {
        ScatterMode::PickupVsDistance => (
            AxisKind::Time,
            t!("chart-pickup-axis"),
            t!("chart-distance-axis"),
        ),
        ScatterMode::DistanceVsSpeed => (
            AxisKind::Linear,
            t!("chart-distance-axis"),
            t!("chart-speed-axis"),
        ),
    };

    ScatterChartSpec {
        mode,
        datasets,
        x_axis,
        x_title,
        y_title,
        palette,
    }
}

fn scatter_point(trip: &TripRecord, mode: ScatterMode) -> Option<ScatterPoint> {
    let (x, y) = match mode {
        ScatterMode::PickupVsDistance => (
            trip.pickup_datetime.as_deref().and_then(timestamp_epoch_ms)?,
            trip.trip_distance?,
        ),
        ScatterMode::DistanceVsSpeed => (trip.trip_distance?, trip.trip_speed?),
    };
    (x.is_finite() && y.is_finite()).then_some(ScatterPoint { x, y })
}
