//! Filter-apply pipeline, theme toggle and first load.
//!
//! The controller owns every piece of mutable dashboard state (sequencer,
//! theme, chart handles, last payload) and writes to the page only through the
//! `DomTarget` it is handed. It lives behind an `Rc` on the UI task, so the
//! `RefCell`s are never borrowed across an `.await`.

use std::cell::{Cell, RefCell};

use futures::future;

use crate::charts::{ChartBackend, ChartRenderer};
use crate::core::dom::DomTarget;
use crate::core::storage::Storage;
use crate::data::{DataFetcher, FetchError, FilterState, Payload, RequestSequencer, Transport, ZoneDirectory};
use crate::table::{self, Status};
use crate::theme::{Theme, ThemeController};

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Rendered { trips: usize },
    /// A newer apply started while this one was in flight; nothing was drawn.
    Superseded,
    Failed(FetchError),
}

pub struct DashboardController<T, S, B: ChartBackend> {
    fetcher: DataFetcher<T>,
    sequencer: RequestSequencer,
    theme: RefCell<ThemeController<S>>,
    charts: RefCell<ChartRenderer<B>>,
    last: RefCell<Option<Payload>>,
    status: Cell<Option<Status>>,
}

impl<T, S, B> DashboardController<T, S, B>
where
    T: Transport,
    S: Storage,
    B: ChartBackend,
{
    pub fn new(fetcher: DataFetcher<T>, storage: S, backend: B) -> Self {
        let config = fetcher.config();
        let theme = ThemeController::new(storage, config.theme_storage_key.clone());
        let charts = ChartRenderer::new(backend, config.scatter_mode);

        Self {
            fetcher,
            sequencer: RequestSequencer::new(),
            theme: RefCell::new(theme),
            charts: RefCell::new(charts),
            last: RefCell::new(None),
            status: Cell::new(None),
        }
    }

    pub fn fetcher(&self) -> &DataFetcher<T> {
        &self.fetcher
    }

    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }

    pub fn theme(&self) -> Theme {
        self.theme.borrow().current()
    }

    pub fn last_payload(&self) -> Option<Payload> {
        self.last.borrow().clone()
    }

    pub fn status(&self) -> Option<Status> {
        self.status.get()
    }

    pub fn with_charts<R>(&self, f: impl FnOnce(&ChartRenderer<B>) -> R) -> R {
        f(&self.charts.borrow())
    }

    pub fn init_theme(&self, os_prefers_dark: bool, dom: &mut impl DomTarget) -> Theme {
        self.theme.borrow_mut().init(os_prefers_dark, dom)
    }

    /// Flip the theme and redraw the charts from the last payload. The table
    /// is not touched and nothing is refetched.
    pub fn toggle_theme(&self, dom: &mut impl DomTarget) -> Theme {
        let theme = self.theme.borrow_mut().toggle(dom);
        if let Some(payload) = self.last.borrow().as_ref() {
            self.charts
                .borrow_mut()
                .render(&payload.summary, &payload.trips, theme);
        }
        theme
    }

    /// Re-emit every piece of controller-written text after a language switch:
    /// toggle label, status message, card list and charts. Nothing is refetched.
    pub fn relocalize(&self, dom: &mut impl DomTarget) {
        self.theme.borrow().relabel(dom);
        table::show_status(dom, self.status.get());

        if let Some(payload) = self.last.borrow().as_ref() {
            if !payload.trips.is_empty() {
                table::refresh_cards(dom, &payload.trips);
            }
            self.charts
                .borrow_mut()
                .render(&payload.summary, &payload.trips, self.theme());
        }
    }

    pub async fn load_zones(&self, dom: &mut impl DomTarget) {
        ZoneDirectory::load_into(&self.fetcher, dom).await;
    }

    pub async fn apply_filters(&self, filters: &FilterState, dom: &mut impl DomTarget) -> ApplyOutcome {
        let generation = self.sequencer.begin();
        self.status.set(Some(table::show_loading(dom)));

        let result = self.fetcher.fetch_all(filters).await;
        if !self.sequencer.is_current(generation) {
            tracing::debug!(?generation, "discarding superseded dashboard results");
            return ApplyOutcome::Superseded;
        }

        match result {
            Ok(payload) => {
                self.status.set(table::render_trips(dom, &payload.trips));
                let theme = self.theme();
                self.charts
                    .borrow_mut()
                    .render(&payload.summary, &payload.trips, theme);

                let trips = payload.trips.len();
                *self.last.borrow_mut() = Some(payload);
                ApplyOutcome::Rendered { trips }
            }
            Err(err) => {
                tracing::error!(%err, "error loading dashboard data");
                self.status.set(Some(table::show_error(dom)));
                ApplyOutcome::Failed(err)
            }
        }
    }

    /// Resolve the theme, then load zones and the unfiltered data together.
    pub async fn bootstrap(&self, os_prefers_dark: bool, dom: &mut impl DomTarget) -> ApplyOutcome {
        self.init_theme(os_prefers_dark, dom);

        let filters = FilterState::default();
        let (zones, outcome) = future::join(
            ZoneDirectory::fetch_logged(&self.fetcher),
            self.apply_filters(&filters, dom),
        )
        .await;

        if let Some(zones) = zones {
            ZoneDirectory::populate(dom, &zones);
        }
        outcome
    }
}
