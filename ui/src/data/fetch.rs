//! Concurrent summary + trips fetch.

use std::cell::Cell;
use std::rc::Rc;

use futures::future;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::config::{DashboardConfig, SUMMARY_PATH, TRIPS_PATH};
use crate::core::timing;

use super::{FareSummary, FilterState, TripRecord};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("requests timed out after {0} ms")]
    Timeout(u64),
    #[error("fetch is only available in the browser")]
    Unsupported,
}

/// HTTP GET returning the response body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// `window.fetch` backed transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTransport;

#[cfg(target_arch = "wasm32")]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let network = |message: &str| FetchError::Network {
            url: url.to_string(),
            message: message.to_string(),
        };

        let window = web_sys::window().ok_or_else(|| network("window unavailable"))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| network("could not build request"))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| network(&format!("{err:?}")))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| network("fetch did not return a Response"))?;

        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response
            .text()
            .map_err(|_| network("response body unavailable"))?;
        let text = JsFuture::from(body)
            .await
            .map_err(|_| network("failed to read response body"))?;

        text.as_string().ok_or_else(|| FetchError::Decode {
            url: url.to_string(),
            message: "response body is not text".to_string(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for BrowserTransport {
    async fn get(&self, _url: &str) -> Result<String, FetchError> {
        Err(FetchError::Unsupported)
    }
}

/// Both payloads of one filter-apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub summary: Vec<FareSummary>,
    pub trips: Vec<TripRecord>,
}

pub struct DataFetcher<T> {
    transport: T,
    config: DashboardConfig,
}

impl<T: Transport> DataFetcher<T> {
    pub fn new(transport: T, config: DashboardConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn summary_url(&self, query: &str) -> String {
        let endpoint = self.config.endpoint(SUMMARY_PATH);
        if query.is_empty() {
            endpoint
        } else {
            format!("{endpoint}?{query}")
        }
    }

    pub fn trips_url(&self, query: &str) -> String {
        let endpoint = self.config.endpoint(TRIPS_PATH);
        let limit = self.config.page_size;
        if query.is_empty() {
            format!("{endpoint}?limit={limit}")
        } else {
            format!("{endpoint}?{query}&limit={limit}")
        }
    }

    /// Fire both requests together; fail as soon as either fails.
    pub async fn fetch_all(&self, filters: &FilterState) -> Result<Payload, FetchError> {
        let query = filters.to_query();
        let summary = self.get_json::<Vec<FareSummary>>(self.summary_url(&query));
        let trips = self.get_json::<Vec<TripRecord>>(self.trips_url(&query));
        let joined = future::try_join(summary, trips);

        let (summary, trips) = match self.config.request_timeout_ms {
            Some(ms) => timing::with_timeout(ms, joined)
                .await
                .ok_or(FetchError::Timeout(ms))??,
            None => joined.await?,
        };

        tracing::debug!(
            summary = summary.len(),
            trips = trips.len(),
            query = %query,
            "dashboard data fetched"
        );
        Ok(Payload { summary, trips })
    }

    pub async fn get_json<D: DeserializeOwned>(&self, url: String) -> Result<D, FetchError> {
        let body = self.transport.get(&url).await?;
        serde_json::from_str(&body).map_err(|err| FetchError::Decode {
            url,
            message: err.to_string(),
        })
    }
}

/// Ticket for one filter-apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Hands out generations so results of a superseded apply can be dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Generation {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Generation(next)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}
