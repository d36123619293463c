//! End-to-end filter-apply pipeline against a scripted transport, an
//! in-memory page and a recording chart backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;
use ui::charts::{CanvasId, ChartBackend, ChartSpec, Palette};
use ui::core::config::DashboardConfig;
use ui::core::dom::MemoryDom;
use ui::core::storage::{MemoryStorage, Storage};
use ui::dashboard::{ApplyOutcome, DashboardController};
use ui::data::{DataFetcher, FetchError, FilterState, Transport};
use ui::table::Status;
use ui::theme::Theme;

const SUMMARY: &str = r#"[
    {"VendorID": 1, "min_price": "2.50", "avg_price": 14.257, "max_price": 88},
    {"VendorID": 2, "min_price": 3, "avg_price": "16.1", "max_price": 120.5}
]"#;

const TRIPS: &str = r#"[
    {
        "VendorID": 1,
        "tpep_pickup_datetime": "2024-01-05 14:30:00",
        "tpep_dropoff_datetime": "2024-01-05 14:52:00",
        "pickup_zone": "<script>alert(1)</script>",
        "pickup_borough": "Manhattan",
        "DOLocationID": 236,
        "passenger_count": 1,
        "trip_distance": 3.456,
        "trip_duration": 22,
        "trip_speed": 9.43,
        "fare_amount": 12.5,
        "fare_per_mile": null,
        "total_amount": null
    },
    {
        "VendorID": 2,
        "tpep_pickup_datetime": "2024-01-05T16:05:00",
        "trip_distance": "1.1",
        "fare_amount": "7.20",
        "fare_per_mile": 6.55,
        "total_amount": 10.7
    }
]"#;

/// Yields once before completing, so a second apply can start meanwhile.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Default)]
struct ScriptedTransport {
    responses: HashMap<String, Result<String, FetchError>>,
    slow_marker: Option<&'static str>,
    requested: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    fn respond(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    fn fail(mut self, url: &str, err: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    fn slow_when(mut self, marker: &'static str) -> Self {
        self.slow_marker = Some(marker);
        self
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        if self.slow_marker.is_some_and(|marker| url.contains(marker)) {
            YieldOnce(false).await;
        }
        self.responses.get(url).cloned().unwrap_or_else(|| {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ChartEvent {
    Create(CanvasId, u32),
    Destroy(u32),
}

#[derive(Default)]
struct RecordingBackend {
    next: u32,
    events: Vec<ChartEvent>,
    mounted: Vec<(u32, ChartSpec)>,
}

impl ChartBackend for RecordingBackend {
    type Handle = u32;

    fn create(&mut self, canvas: CanvasId, spec: ChartSpec) -> u32 {
        self.next += 1;
        self.events.push(ChartEvent::Create(canvas, self.next));
        self.mounted.push((self.next, spec));
        self.next
    }

    fn destroy(&mut self, handle: u32) {
        self.events.push(ChartEvent::Destroy(handle));
        self.mounted.retain(|(id, _)| *id != handle);
    }
}

type Controller = DashboardController<ScriptedTransport, MemoryStorage, RecordingBackend>;

fn controller(transport: ScriptedTransport, storage: MemoryStorage) -> Controller {
    let fetcher = DataFetcher::new(transport, DashboardConfig::default());
    DashboardController::new(fetcher, storage, RecordingBackend::default())
}

fn happy_transport() -> ScriptedTransport {
    ScriptedTransport::default()
        .respond("/analytics/price-summary", SUMMARY)
        .respond("/analytics/trips?limit=100", TRIPS)
        .respond("/analytics/zones", r#"["Airports", "Boro Zone", "Yellow Zone"]"#)
}

#[test]
fn bootstrap_renders_table_charts_and_zones() {
    let controller = controller(happy_transport(), MemoryStorage::new());
    let mut dom = MemoryDom::new();

    let outcome = block_on(controller.bootstrap(false, &mut dom));
    assert_eq!(outcome, ApplyOutcome::Rendered { trips: 2 });

    assert_eq!(dom.theme_attribute, Some(Theme::Light));
    assert_eq!(dom.toggle_label, "Switch to Dark Mode");
    assert_eq!(dom.status, None);
    assert!(dom.table_visible);
    assert_eq!(dom.from_zone_options.len(), 4);
    assert_eq!(dom.from_zone_options, dom.to_zone_options);

    let first = &dom.rows[0];
    assert_eq!(first.vendor_badge(), "V1");
    assert_eq!(first.pickup, "Jan 5, 14:30");
    assert_eq!(first.distance, "3.46");
    assert_eq!(first.speed, "9.4");
    assert_eq!(first.fare, "$12.50");
    assert_eq!(first.per_mile, "—");
    assert_eq!(first.total, "$12.50");
    assert_eq!(first.dropoff_zone, "236");

    let second = &dom.rows[1];
    assert_eq!(second.pickup, "Jan 5, 16:05");
    assert_eq!(second.passengers, "—");
    assert_eq!(second.per_mile, "$6.55");
    assert_eq!(second.total, "$10.70");

    assert!(!dom.card_list.contains("<script>"));
    assert!(dom.card_list.contains("&lt;script&gt;alert(1)&lt;/script&gt;, Manhattan"));

    controller.with_charts(|charts| {
        let backend = charts.backend();
        assert_eq!(backend.mounted.len(), 2);
        match &backend.mounted[0].1 {
            ChartSpec::Bar(bar) => {
                assert_eq!(bar.labels, vec!["Vendor 1", "Vendor 2"]);
                assert_eq!(bar.datasets[0].values, vec![2.5, 3.0]);
                assert_eq!(bar.datasets[1].values, vec![14.26, 16.1]);
                assert_eq!(bar.palette, Palette::LIGHT);
            }
            other => panic!("expected the bar chart first, got {other:?}"),
        }
        match &backend.mounted[1].1 {
            ChartSpec::Scatter(scatter) => {
                assert_eq!(scatter.datasets.len(), 2);
                assert_eq!(scatter.datasets[1].points[0].y, 1.1);
            }
            other => panic!("expected the scatter chart second, got {other:?}"),
        }
    });
}

#[test]
fn filters_reach_both_requests_in_order() {
    let transport = ScriptedTransport::default()
        .respond("/analytics/price-summary?vendor=2&min_price=5&to_zone=Yellow+Zone", "[]")
        .respond(
            "/analytics/trips?vendor=2&min_price=5&to_zone=Yellow+Zone&limit=100",
            "[]",
        );
    let controller = controller(transport, MemoryStorage::new());
    let mut dom = MemoryDom::new();

    let filters = FilterState::from_controls("2", "5", "", "", "Yellow Zone");
    let outcome = block_on(controller.apply_filters(&filters, &mut dom));

    assert_eq!(outcome, ApplyOutcome::Rendered { trips: 0 });
    assert_eq!(controller.fetcher().transport().requested.borrow().len(), 2);
    assert!(!dom.table_visible);
    assert_eq!(
        dom.status.as_deref(),
        Some("No trips found for the selected filters.")
    );
}

#[test]
fn failed_fetch_keeps_previous_rows_and_charts() {
    let controller = controller(
        happy_transport()
            .respond("/analytics/price-summary?vendor=1", SUMMARY)
            .fail(
                "/analytics/trips?vendor=1&limit=100",
                FetchError::Network {
                    url: "/analytics/trips?vendor=1&limit=100".into(),
                    message: "connection reset".into(),
                },
            ),
        MemoryStorage::new(),
    );
    let mut dom = MemoryDom::new();
    block_on(controller.apply_filters(&FilterState::default(), &mut dom));
    let rows_before = dom.rows.clone();

    let filters = FilterState::from_controls("1", "", "", "", "");
    let outcome = block_on(controller.apply_filters(&filters, &mut dom));

    assert!(matches!(outcome, ApplyOutcome::Failed(FetchError::Network { .. })));
    assert_eq!(
        dom.status.as_deref(),
        Some("Error loading data. Check the console.")
    );
    assert_eq!(dom.rows, rows_before);
    assert!(dom.table_visible);
    controller.with_charts(|charts| assert_eq!(charts.backend().events.len(), 2));
}

#[test]
fn superseded_apply_is_not_rendered() {
    let transport = happy_transport()
        .respond("/analytics/price-summary?vendor=1", SUMMARY)
        .respond("/analytics/trips?vendor=1&limit=100", TRIPS)
        .slow_when("vendor=1");
    let controller = controller(transport, MemoryStorage::new());
    let mut stale_dom = MemoryDom::new();
    let mut fresh_dom = MemoryDom::new();

    let stale_filters = FilterState::from_controls("1", "", "", "", "");
    let fresh_filters = FilterState::default();
    let (stale, fresh) = block_on(futures::future::join(
        controller.apply_filters(&stale_filters, &mut stale_dom),
        controller.apply_filters(&fresh_filters, &mut fresh_dom),
    ));

    assert_eq!(stale, ApplyOutcome::Superseded);
    assert_eq!(fresh, ApplyOutcome::Rendered { trips: 2 });
    assert!(stale_dom.rows.is_empty());
    assert_eq!(stale_dom.status.as_deref(), Some("Loading trips…"));
    controller.with_charts(|charts| assert_eq!(charts.backend().events.len(), 2));
}

#[test]
fn theme_toggle_redraws_charts_only() {
    let controller = controller(happy_transport(), MemoryStorage::with_entry("theme", "dark"));
    let mut dom = MemoryDom::new();
    block_on(controller.bootstrap(false, &mut dom));
    assert_eq!(dom.toggle_label, "Switch to Light Mode");
    let rows_before = dom.rows.clone();
    let requests_before = controller.fetcher().transport().requested.borrow().len();

    assert_eq!(controller.toggle_theme(&mut dom), Theme::Light);

    assert_eq!(dom.theme_attribute, Some(Theme::Light));
    assert_eq!(dom.toggle_label, "Switch to Dark Mode");
    assert_eq!(dom.rows, rows_before);
    assert_eq!(
        controller.fetcher().transport().requested.borrow().len(),
        requests_before
    );
    controller.with_charts(|charts| {
        let backend = charts.backend();
        assert_eq!(
            backend.events[2..],
            [
                ChartEvent::Destroy(1),
                ChartEvent::Destroy(2),
                ChartEvent::Create(CanvasId::Bar, 3),
                ChartEvent::Create(CanvasId::Line, 4),
            ]
        );
        assert!(backend.mounted.iter().all(|(_, spec)| spec.palette() == Palette::LIGHT));
    });
}

#[test]
fn relocalize_rewrites_text_without_refetching() {
    let controller = controller(happy_transport(), MemoryStorage::new());
    let mut dom = MemoryDom::new();
    block_on(controller.bootstrap(false, &mut dom));
    let rendered = dom.clone();
    let requests_before = controller.fetcher().transport().requested.borrow().len();

    dom.toggle_label.clear();
    dom.card_list.clear();
    controller.relocalize(&mut dom);

    assert_eq!(dom, rendered);
    assert_eq!(
        controller.fetcher().transport().requested.borrow().len(),
        requests_before
    );
    controller.with_charts(|charts| {
        let backend = charts.backend();
        assert_eq!(
            backend.events[2..],
            [
                ChartEvent::Destroy(1),
                ChartEvent::Destroy(2),
                ChartEvent::Create(CanvasId::Bar, 3),
                ChartEvent::Create(CanvasId::Line, 4),
            ]
        );
    });
}

#[test]
fn relocalize_restores_the_current_status() {
    let transport = ScriptedTransport::default()
        .respond("/analytics/price-summary", "[]")
        .respond("/analytics/trips?limit=100", "[]");
    let controller = controller(transport, MemoryStorage::new());
    let mut dom = MemoryDom::new();
    block_on(controller.apply_filters(&FilterState::default(), &mut dom));
    assert_eq!(controller.status(), Some(Status::Empty));

    dom.status = None;
    controller.relocalize(&mut dom);
    assert_eq!(dom.status, Some(Status::Empty.message()));
    assert!(dom.card_list.is_empty());
}

#[test]
fn toggle_before_any_data_only_switches_theme() {
    let controller = controller(ScriptedTransport::default(), MemoryStorage::new());
    let mut dom = MemoryDom::new();
    controller.init_theme(true, &mut dom);
    assert_eq!(controller.theme(), Theme::Dark);

    controller.toggle_theme(&mut dom);
    controller.with_charts(|charts| assert!(charts.backend().events.is_empty()));
}

#[test]
fn theme_persists_through_storage() {
    let mut storage = MemoryStorage::new();
    storage.set("theme", "light").unwrap();
    let controller = controller(ScriptedTransport::default(), storage);
    let mut dom = MemoryDom::new();

    assert_eq!(controller.init_theme(true, &mut dom), Theme::Light);
    controller.toggle_theme(&mut dom);
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn zone_failure_is_not_fatal() {
    let transport = happy_transport().fail(
        "/analytics/zones",
        FetchError::Status {
            url: "/analytics/zones".into(),
            status: 500,
        },
    );
    let controller = controller(transport, MemoryStorage::new());
    let mut dom = MemoryDom::new();

    let outcome = block_on(controller.bootstrap(false, &mut dom));
    assert_eq!(outcome, ApplyOutcome::Rendered { trips: 2 });
    assert_eq!(dom.from_zone_options, vec![String::new()]);
}

struct Hanging;

impl Transport for Hanging {
    async fn get(&self, _url: &str) -> Result<String, FetchError> {
        futures::future::pending().await
    }
}

#[tokio::test]
async fn configured_timeout_fails_the_apply() {
    let config = DashboardConfig {
        request_timeout_ms: Some(20),
        ..DashboardConfig::default()
    };
    let controller = DashboardController::new(
        DataFetcher::new(Hanging, config),
        MemoryStorage::new(),
        RecordingBackend::default(),
    );
    let mut dom = MemoryDom::new();

    let outcome = controller.apply_filters(&FilterState::default(), &mut dom).await;
    assert_eq!(outcome, ApplyOutcome::Failed(FetchError::Timeout(20)));
    assert_eq!(
        dom.status.as_deref(),
        Some("Error loading data. Check the console.")
    );
}
