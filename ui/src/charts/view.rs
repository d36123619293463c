//! SVG drawing of mounted charts.

use dioxus::prelude::*;

use super::renderer::{CanvasId, ChartBackend};
use super::spec::{ChartSpec, Palette, SeriesColor};
use super::svg::{bar_layout, scatter_layout, Frame, Tick, POINT_RADIUS};
use super::tooltip::{self, HitTarget};

/// A chart currently attached to a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedChart {
    pub id: u64,
    pub spec: ChartSpec,
}

/// Backend that mounts charts by writing them into the canvas signals.
#[derive(Clone, Copy)]
pub struct SignalChartBackend {
    bar: Signal<Option<MountedChart>>,
    line: Signal<Option<MountedChart>>,
    next: u64,
}

impl SignalChartBackend {
    pub fn new(bar: Signal<Option<MountedChart>>, line: Signal<Option<MountedChart>>) -> Self {
        Self { bar, line, next: 0 }
    }

    fn slot(&mut self, canvas: CanvasId) -> &mut Signal<Option<MountedChart>> {
        match canvas {
            CanvasId::Bar => &mut self.bar,
            CanvasId::Line => &mut self.line,
        }
    }
}

impl ChartBackend for SignalChartBackend {
    type Handle = (CanvasId, u64);

    fn create(&mut self, canvas: CanvasId, spec: ChartSpec) -> Self::Handle {
        self.next += 1;
        let id = self.next;
        self.slot(canvas).set(Some(MountedChart { id, spec }));
        (canvas, id)
    }

    fn destroy(&mut self, (canvas, id): Self::Handle) {
        let slot = self.slot(canvas);
        let mounted = slot.peek().as_ref().map(|chart| chart.id);
        if mounted == Some(id) {
            slot.set(None);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hover {
    hit: HitTarget,
    caret: (f64, f64),
}

#[component]
pub fn ChartCanvas(canvas: CanvasId, title: String, chart: Signal<Option<MountedChart>>) -> Element {
    let mut hover = use_signal(|| None::<Hover>);
    let frame = Frame::default();

    let mounted = chart.read().clone();
    let Some(MountedChart { spec, .. }) = mounted else {
        return rsx! {
            figure { class: "chart-card", id: canvas.element_id(),
                figcaption { class: "chart-card__title", "{title}" }
                div { class: "chart-card__empty" }
            }
        };
    };

    let palette = spec.palette();
    let tip = hover().and_then(|h| {
        tooltip::content(&spec, h.hit).map(|content| (content, tooltip::position((0.0, 0.0), h.caret)))
    });

    let body = match &spec {
        ChartSpec::Bar(bar) => {
            let layout = bar_layout(bar, &frame);
            rsx! {
                {grid_lines(&frame, &layout.y_ticks, palette)}
                for tick in layout.categories.iter() {
                    text {
                        x: "{tick.position}",
                        y: "{frame.plot_bottom() + 18.0}",
                        fill: "{palette.text}",
                        "font-size": "11",
                        "text-anchor": "middle",
                        "{tick.label}"
                    }
                }
                for rect in layout.bars.iter() {
                    {
                        let hit = HitTarget { dataset: rect.dataset, index: rect.index };
                        rsx! {
                            rect {
                                key: "bar-{rect.dataset}-{rect.index}",
                                x: "{rect.x}",
                                y: "{rect.y}",
                                width: "{rect.width}",
                                height: "{rect.height}",
                                rx: "4",
                                fill: "{rect.color.fill}",
                                stroke: "{rect.color.stroke}",
                                "stroke-width": "2",
                                onmouseenter: move |e| {
                                    let p = e.data().client_coordinates();
                                    hover.set(Some(Hover { hit, caret: (p.x, p.y) }));
                                },
                                onmouseleave: move |_| hover.set(None),
                            }
                        }
                    }
                }
                {axis_title_y(&frame, &bar.y_title, palette)}
            }
        }
        ChartSpec::Scatter(scatter) => {
            let layout = scatter_layout(scatter, &frame);
            rsx! {
                {grid_lines(&frame, &layout.y_ticks, palette)}
                for tick in layout.x_ticks.iter() {
                    line {
                        x1: "{tick.position}",
                        y1: "{frame.plot_top()}",
                        x2: "{tick.position}",
                        y2: "{frame.plot_bottom()}",
                        stroke: "{palette.grid}",
                        "stroke-width": "1",
                    }
                    text {
                        x: "{tick.position}",
                        y: "{frame.plot_bottom() + 18.0}",
                        fill: "{palette.text}",
                        "font-size": "10",
                        "text-anchor": "middle",
                        "{tick.label}"
                    }
                }
                for mark in layout.points.iter() {
                    {
                        let hit = HitTarget { dataset: mark.dataset, index: mark.index };
                        rsx! {
                            circle {
                                key: "pt-{mark.dataset}-{mark.index}",
                                cx: "{mark.cx}",
                                cy: "{mark.cy}",
                                r: "{POINT_RADIUS}",
                                fill: "{mark.color.fill}",
                                stroke: "{mark.color.stroke}",
                                "stroke-width": "1",
                                onmouseenter: move |e| {
                                    let p = e.data().client_coordinates();
                                    hover.set(Some(Hover { hit, caret: (p.x, p.y) }));
                                },
                                onmouseleave: move |_| hover.set(None),
                            }
                        }
                    }
                }
                text {
                    x: "{frame.plot_left() + frame.plot_width() / 2.0}",
                    y: "{frame.height - 8.0}",
                    fill: "{palette.text}",
                    "font-size": "12",
                    "text-anchor": "middle",
                    "{scatter.x_title}"
                }
                {axis_title_y(&frame, &scatter.y_title, palette)}
            }
        }
    };

    let legend: Vec<(String, SeriesColor)> = match &spec {
        ChartSpec::Bar(bar) => bar.datasets.iter().map(|d| (d.label.clone(), d.color.clone())).collect(),
        ChartSpec::Scatter(scatter) => scatter
            .datasets
            .iter()
            .map(|d| (d.label.clone(), d.color.clone()))
            .collect(),
    };

    rsx! {
        figure { class: "chart-card", id: canvas.element_id(),
            figcaption { class: "chart-card__title", "{title}" }
            ul { class: "chart-legend", style: "color: {palette.text};",
                for (label, color) in legend {
                    li { class: "chart-legend__item",
                        span {
                            class: "chart-legend__swatch",
                            style: "background: {color.fill}; border-color: {color.stroke};",
                        }
                        "{label}"
                    }
                }
            }
            svg {
                class: "chart-card__plot",
                view_box: "{frame.view_box()}",
                "preserveAspectRatio": "xMidYMid meet",
                {body}
            }
            if let Some((content, (left, top))) = tip {
                div {
                    class: "chart-tooltip",
                    style: "left: {left}px; top: {top}px;",
                    b { "{content.series}" }
                    br {}
                    "{content.label}: {content.value}"
                }
            }
        }
    }
}

fn grid_lines(frame: &Frame, ticks: &[Tick], palette: Palette) -> Element {
    rsx! {
        for tick in ticks.iter() {
            line {
                x1: "{frame.plot_left()}",
                y1: "{tick.position}",
                x2: "{frame.plot_right()}",
                y2: "{tick.position}",
                stroke: "{palette.grid}",
                "stroke-width": "1",
            }
            text {
                x: "{frame.plot_left() - 6.0}",
                y: "{tick.position + 4.0}",
                fill: "{palette.text}",
                "font-size": "11",
                "text-anchor": "end",
                "{tick.label}"
            }
        }
    }
}

fn axis_title_y(frame: &Frame, title: &str, palette: Palette) -> Element {
    let x = 14.0;
    let y = frame.plot_top() + (frame.plot_bottom() - frame.plot_top()) / 2.0;
    rsx! {
        text {
            x: "{x}",
            y: "{y}",
            fill: "{palette.text}",
            "font-size": "12",
            "text-anchor": "middle",
            "transform": "rotate(-90 {x} {y})",
            "{title}"
        }
    }
}
