//! Receipt processing and points lookup over HTTP

pub mod handlers;

pub use handlers::{AppState, get_points, process_receipt};
