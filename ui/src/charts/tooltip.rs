//! Custom tooltip: series name, label and value, offset from the caret.

use crate::core::format::{format_epoch_ms, EMPTY};

use super::spec::{AxisKind, ChartSpec};

/// Which element the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTarget {
    pub dataset: usize,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub series: String,
    pub label: String,
    pub value: String,
}

pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -40.0;

pub fn content(spec: &ChartSpec, hit: HitTarget) -> Option<TooltipContent> {
    match spec {
        ChartSpec::Bar(bar) => {
            let dataset = bar.datasets.get(hit.dataset)?;
            Some(TooltipContent {
                series: dataset.label.clone(),
                label: bar.labels.get(hit.index)?.clone(),
                value: number(*dataset.values.get(hit.index)?),
            })
        }
        ChartSpec::Scatter(scatter) => {
            let dataset = scatter.datasets.get(hit.dataset)?;
            let point = dataset.points.get(hit.index)?;
            let label = match scatter.x_axis {
                AxisKind::Time => format_epoch_ms(point.x),
                AxisKind::Linear => number(point.x),
            };
            Some(TooltipContent {
                series: dataset.label.clone(),
                label,
                value: number(point.y),
            })
        }
    }
}

/// Page position of the tooltip box for a caret inside a canvas whose
/// top-left corner sits at `origin`.
pub fn position(origin: (f64, f64), caret: (f64, f64)) -> (f64, f64) {
    (origin.0 + caret.0 + OFFSET_X, origin.1 + caret.1 + OFFSET_Y)
}

fn number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        EMPTY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::spec::{bar_chart_spec, scatter_chart_spec, Palette, ScatterMode};
    use crate::data::{FareSummary, TripRecord};

    #[test]
    fn bar_tooltip_names_vendor_and_fare() {
        let spec = ChartSpec::Bar(bar_chart_spec(
            &[FareSummary {
                vendor_id: 2,
                min_price: 3.0,
                avg_price: 17.5,
                max_price: 90.0,
            }],
            Palette::LIGHT,
        ));

        let tip = content(&spec, HitTarget { dataset: 1, index: 0 }).unwrap();
        assert_eq!(tip.series, "Avg Fare ($)");
        assert_eq!(tip.label, "Vendor 2");
        assert_eq!(tip.value, "17.50");
        assert!(content(&spec, HitTarget { dataset: 0, index: 3 }).is_none());
    }

    #[test]
    fn scatter_tooltip_formats_time_axis() {
        let spec = ChartSpec::Scatter(scatter_chart_spec(
            &[TripRecord {
                vendor_id: 1,
                pickup_datetime: Some("2024-01-05T14:30:00".into()),
                trip_distance: Some(3.456),
                ..TripRecord::default()
            }],
            ScatterMode::PickupVsDistance,
            Palette::DARK,
        ));

        let tip = content(&spec, HitTarget { dataset: 0, index: 0 }).unwrap();
        assert_eq!(tip.label, "Jan 5, 14:30");
        assert_eq!(tip.value, "3.46");
    }

    #[test]
    fn position_offsets_from_caret() {
        assert_eq!(position((100.0, 200.0), (30.0, 50.0)), (140.0, 210.0));
    }
}
