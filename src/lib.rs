// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Demo App
//!
//! Two stub HTTP services meant to be deployed side by side:
//!
//! - **frontend** (`demo-frontend`, default `0.0.0.0:9000`): `GET /` returns a
//!   plain-text banner;
//! - **backend** (`demo-backend`, default `0.0.0.0:9001`): `GET /api/health`
//!   and `GET /api/test` return constant JSON.
//!
//! ## Main modules
//! - `api`: route tables and handlers
//! - `config`: listen address configuration
//! - `error`: error types
//! - `server`: bind and serve
//! - `telemetry`: logging setup
//! - `prelude`: commonly used types and functions

mod api;
mod config;
mod error;
mod server;
mod telemetry;
pub mod prelude;

/// Service identity and configuration
pub use config::{Config, Service, defaults, env_vars};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP route tables and response bodies
pub use api::handlers::{FRONTEND_BANNER, HealthResponse, MessageResponse};
pub use api::{backend_router, create_router, endpoints, frontend_router};

/// Listener lifecycle
pub use server::{bind, run, serve};

/// Logging
pub use telemetry::setup_tracing;
