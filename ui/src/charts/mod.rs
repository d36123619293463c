//! Fare bar chart and trip scatter chart.

pub mod renderer;
pub mod spec;
pub mod svg;
pub mod tooltip;
pub mod view;

pub use renderer::{CanvasId, ChartBackend, ChartRenderer, RenderContext};
pub use spec::{
    bar_chart_spec, scatter_chart_spec, AxisKind, BarChartSpec, ChartSpec, Palette, ScatterChartSpec,
    ScatterMode,
};
pub use view::{ChartCanvas, MountedChart, SignalChartBackend};
