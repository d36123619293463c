use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::{CanvasId, ChartCanvas, MountedChart, ScatterMode, SignalChartBackend};
use crate::core::config::DashboardConfig;
use crate::core::platform;
use crate::core::storage::LocalStorage;
use crate::data::{BrowserTransport, DataFetcher, FilterState};
use crate::i18n;
use crate::t;
use crate::table::TripRow;

use super::controller::DashboardController;
use super::filters::FilterForm;
use super::header::AppHeader;
use super::signals::use_dashboard_signals;

type LiveController = DashboardController<BrowserTransport, LocalStorage, SignalChartBackend>;

/// The whole page. Reads a `DashboardConfig` from context when the platform
/// provides one, else builds it from the compile-time environment.
#[component]
pub fn Dashboard() -> Element {
    i18n::init();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = try_use_context::<DashboardConfig>().unwrap_or_else(DashboardConfig::from_env);
    let scatter_mode = config.scatter_mode;
    let signals = use_dashboard_signals();
    let bar_chart = use_signal(|| None::<MountedChart>);
    let line_chart = use_signal(|| None::<MountedChart>);

    let controller: Rc<LiveController> = use_hook(|| {
        let fetcher = DataFetcher::new(BrowserTransport, config.clone());
        let backend = SignalChartBackend::new(bar_chart, line_chart);
        Rc::new(DashboardController::new(fetcher, LocalStorage, backend))
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                let mut dom = signals;
                controller
                    .bootstrap(platform::prefers_dark_scheme(), &mut dom)
                    .await;
            });
        }
    });

    let on_apply = {
        let controller = controller.clone();
        move |filters: FilterState| {
            let controller = controller.clone();
            spawn(async move {
                let mut dom = signals;
                controller.apply_filters(&filters, &mut dom).await;
            });
        }
    };

    let on_toggle = {
        let controller = controller.clone();
        move |_: ()| {
            let mut dom = signals;
            controller.toggle_theme(&mut dom);
        }
    };

    let on_language = {
        let controller = controller.clone();
        move |_: ()| {
            let mut dom = signals;
            controller.relocalize(&mut dom);
        }
    };

    let theme = (signals.theme)();
    let scatter_title = match scatter_mode {
        ScatterMode::PickupVsDistance => t!("chart-scatter-pickup-title"),
        ScatterMode::DistanceVsSpeed => t!("chart-scatter-speed-title"),
    };

    rsx! {
        div { class: "dashboard", "data-theme": "{theme}",
            div { style: "display:none", "{_lang_marker}" }
            AppHeader { toggle_label: (signals.toggle_label)(), on_toggle, on_language }

            main { class: "page dashboard__body",
                FilterForm {
                    from_zones: signals.from_zones,
                    to_zones: signals.to_zones,
                    on_apply,
                }

                if let Some(message) = (signals.status)() {
                    p { id: "status", class: "status", role: "status", "{message}" }
                }

                section { class: "dashboard__charts",
                    ChartCanvas { canvas: CanvasId::Bar, title: t!("chart-bar-title"), chart: bar_chart }
                    ChartCanvas { canvas: CanvasId::Line, title: scatter_title, chart: line_chart }
                }

                TripsTable { rows: signals.rows, visible: signals.table_visible }

                div {
                    id: "small-list",
                    class: "small-list",
                    dangerous_inner_html: "{signals.card_list}",
                }
            }
        }
    }
}

#[component]
fn TripsTable(rows: Signal<Vec<TripRow>>, visible: Signal<bool>) -> Element {
    let class = if visible() {
        "trips-table"
    } else {
        "trips-table is-hidden"
    };

    rsx! {
        div { class: "trips-table__wrap",
            table { id: "tripsTable", class: "{class}",
                thead {
                    tr {
                        th { {t!("col-vendor")} }
                        th { {t!("col-pickup")} }
                        th { {t!("col-dropoff")} }
                        th { {t!("col-from")} }
                        th { {t!("col-to")} }
                        th { {t!("col-passengers")} }
                        th { {t!("col-distance")} }
                        th { {t!("col-duration")} }
                        th { {t!("col-speed")} }
                        th { {t!("col-fare")} }
                        th { {t!("col-per-mile")} }
                        th { {t!("col-total")} }
                    }
                }
                tbody {
                    for (index, row) in rows.read().iter().enumerate() {
                        tr { key: "{index}",
                            td {
                                span { class: "{row.vendor_class()}", "{row.vendor_badge()}" }
                            }
                            td { "{row.pickup}" }
                            td { "{row.dropoff}" }
                            td { "{row.pickup_zone}" }
                            td { "{row.dropoff_zone}" }
                            td { "{row.passengers}" }
                            td { "{row.distance}" }
                            td { "{row.duration}" }
                            td { "{row.speed}" }
                            td { class: "fare", "{row.fare}" }
                            td { "{row.per_mile}" }
                            td { class: "fare", "{row.total}" }
                        }
                    }
                }
            }
        }
    }
}
