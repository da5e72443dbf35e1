//! HTTP API module for the demo services
//!
//! Two flat route tables, one per service.
//!
//! # Frontend endpoints
//! - `GET /` — static banner
//!
//! # Backend endpoints
//! - `GET /api/health` — liveness stub
//! - `GET /api/test` — static message

pub mod handlers;

use axum::{Router, routing::get};

use crate::config::Service;

/// Registered paths, shared by the route tables and the startup log
pub mod paths {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/api/health";
    pub const TEST: &str = "/api/test";
}

/// Creates the frontend router
pub fn frontend_router() -> Router {
    Router::new()
        .route(paths::ROOT, get(handlers::root))
        .method_not_allowed_fallback(handlers::not_found)
}

/// Creates the backend router
pub fn backend_router() -> Router {
    Router::new()
        .route(paths::HEALTH, get(handlers::health_check))
        .route(paths::TEST, get(handlers::api_test))
        .method_not_allowed_fallback(handlers::not_found)
}

/// Route table for the given service
pub fn create_router(service: Service) -> Router {
    match service {
        Service::Frontend => frontend_router(),
        Service::Backend => backend_router(),
    }
}

/// `(method, path)` pairs registered for a service, used for the startup log
pub fn endpoints(service: Service) -> &'static [(&'static str, &'static str)] {
    match service {
        Service::Frontend => &[("GET", paths::ROOT)],
        Service::Backend => &[("GET", paths::HEALTH), ("GET", paths::TEST)],
    }
}
