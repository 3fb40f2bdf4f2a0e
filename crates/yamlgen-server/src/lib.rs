//! YAML generation HTTP server library
//!
//! Provides the REST API, configuration and service wiring for testing and
//! reuse by the `yamlgen-server` binary.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod services;
pub mod templates;
