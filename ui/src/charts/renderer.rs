//! Chart lifecycle.
//!
//! Live chart instances are owned by a `RenderContext`. Every render disposes
//! both handles before creating replacements, so a canvas never carries two
//! charts.

use crate::data::{FareSummary, TripRecord};
use crate::theme::Theme;

use super::spec::{bar_chart_spec, scatter_chart_spec, ChartSpec, Palette, ScatterMode};

/// The two drawing surfaces on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasId {
    Bar,
    Line,
}

impl CanvasId {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Bar => "barChart",
            Self::Line => "lineChart",
        }
    }
}

/// Something that can mount a chart on a canvas and tear it down again.
pub trait ChartBackend {
    type Handle;

    fn create(&mut self, canvas: CanvasId, spec: ChartSpec) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
}

/// Handles of the charts currently mounted.
#[derive(Debug)]
pub struct RenderContext<H> {
    bar: Option<H>,
    line: Option<H>,
}

impl<H> Default for RenderContext<H> {
    fn default() -> Self {
        Self {
            bar: None,
            line: None,
        }
    }
}

impl<H> RenderContext<H> {
    pub fn is_empty(&self) -> bool {
        self.bar.is_none() && self.line.is_none()
    }

    pub fn live(&self) -> usize {
        usize::from(self.bar.is_some()) + usize::from(self.line.is_some())
    }
}

pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    context: RenderContext<B::Handle>,
    mode: ScatterMode,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B, mode: ScatterMode) -> Self {
        Self {
            backend,
            context: RenderContext::default(),
            mode,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn context(&self) -> &RenderContext<B::Handle> {
        &self.context
    }

    pub fn mode(&self) -> ScatterMode {
        self.mode
    }

    /// Destroy whatever is mounted. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.context.bar.take() {
            self.backend.destroy(handle);
        }
        if let Some(handle) = self.context.line.take() {
            self.backend.destroy(handle);
        }
    }

    /// Mount both charts. Callers go through `render`, which disposes first.
    pub fn create(&mut self, summary: &[FareSummary], trips: &[TripRecord], theme: Theme) {
        let palette = Palette::for_theme(theme);
        let bar = ChartSpec::Bar(bar_chart_spec(summary, palette));
        let line = ChartSpec::Scatter(scatter_chart_spec(trips, self.mode, palette));

        self.context.bar = Some(self.backend.create(CanvasId::Bar, bar));
        self.context.line = Some(self.backend.create(CanvasId::Line, line));
    }

    pub fn render(&mut self, summary: &[FareSummary], trips: &[TripRecord], theme: Theme) {
        self.dispose();
        self.create(summary, trips, theme);
        tracing::debug!(theme = %theme, vendors = summary.len(), trips = trips.len(), "charts rendered");
    }
}
