//! HTTP request handlers for the geometry API.

pub mod health;
pub mod parse;
