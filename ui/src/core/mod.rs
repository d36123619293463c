//! Platform-agnostic building blocks shared by the dashboard pipeline.

pub mod config;
pub mod dom;
pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
