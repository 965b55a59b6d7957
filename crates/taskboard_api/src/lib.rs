//! HTTP authentication API for the taskboard project tracker.
//!
//! The library surface exists so integration tests can build the router
//! in-process; `taskboard-api` is the production entry point.

pub mod config;
pub mod rest;
