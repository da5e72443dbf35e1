// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use demo_app::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, Service};
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{backend_router, create_router, frontend_router};
pub use crate::server::{bind, run, serve};
pub use crate::telemetry::setup_tracing;
