// src/lib.rs
//! One-shot HTTP health check: GET a URL, accept a set of status codes,
//! optionally require a substring in the body.
pub mod config;
pub mod health;
