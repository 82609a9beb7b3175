//! HTTP proxy for the TMDB movie catalogue.
//!
//! Validates client input, calls TMDB with a bearer credential, normalizes the
//! untrusted responses and translates upstream failures into a stable JSON
//! error contract.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
