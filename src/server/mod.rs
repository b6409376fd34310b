//! Server module for building the receipt HTTP service
//!
//! `ServerBuilder` wires a receipt store and validation settings into an
//! axum `Router` exposing:
//! - `POST /receipt/process`
//! - `GET /receipt/{id}/points`

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
