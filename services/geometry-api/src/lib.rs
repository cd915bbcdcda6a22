//! Geometry API Service Library
//!
//! HTTP front end for the geometry string parser. Raw text goes in, GeoJSON
//! lines (or a human-readable failure) come out.

pub mod config;
pub mod error;
pub mod file;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
