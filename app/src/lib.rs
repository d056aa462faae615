//! Terminal host for the gridfilter filter panel.

pub mod app;
pub mod core;
pub mod session;
pub mod utils;

pub use app::FilterApp;
