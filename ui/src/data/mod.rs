//! Payload models and the network side of the dashboard.

mod de;

pub mod fetch;
pub mod filters;
pub mod models;
pub mod zones;

pub use fetch::{BrowserTransport, DataFetcher, FetchError, Generation, Payload, RequestSequencer, Transport};
pub use filters::FilterState;
pub use models::{FareSummary, TripRecord};
pub use zones::ZoneDirectory;
