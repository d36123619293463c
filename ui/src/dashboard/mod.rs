//! Page wiring: controller, signal-backed page regions and components.

mod controller;
mod filters;
mod header;
mod signals;
mod view;

pub use controller::{ApplyOutcome, DashboardController};
pub use filters::FilterForm;
pub use header::AppHeader;
pub use signals::{use_dashboard_signals, DashboardSignals};
pub use view::Dashboard;
