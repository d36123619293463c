//! Shared UI crate for Fareview: data pipeline, rendering and components.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;
pub mod table;
pub mod theme;

pub use dashboard::Dashboard;

#[cfg(test)]
mod tests;
