//! API module for the HTTP endpoints
//!
//! - `http`: Axum router setup
//! - `rest`: REST endpoint handlers

pub mod http;
pub mod rest;
