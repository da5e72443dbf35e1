// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod backend;
mod frontend;

pub use backend::{HealthResponse, MessageResponse, api_test, health_check};
pub use frontend::{FRONTEND_BANNER, root};

use axum::http::StatusCode;

/// Answers requests for a known path with an unregistered method
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
