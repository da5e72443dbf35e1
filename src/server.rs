// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Listener lifecycle: bind, announce, serve

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::api;
use crate::config::{Config, Service};
use crate::error::Result;

/// Parses `addr` and binds a TCP listener on it.
///
/// A taken port is reported as [`AppError::Io`](crate::AppError::Io) and is
/// never retried.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    let addr: SocketAddr = addr.parse().map_err(|e| {
        tracing::error!("Invalid server address '{}': {}", addr, e);
        e
    })?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address {}: {}", addr, e);
        e
    })?;

    Ok(listener)
}

/// Serves `router` on an already bound listener until the transport fails
pub async fn serve(listener: TcpListener, router: Router, service: Service) -> Result<()> {
    let local_addr = listener.local_addr()?;

    tracing::info!("{} listening at http://{}", service, local_addr);
    tracing::info!("Endpoints:");
    for (method, path) in api::endpoints(service) {
        tracing::info!("  - {} {}", method, path);
    }

    axum::serve(listener, router).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    Ok(())
}

/// Binds the configured address and serves the service's route table
pub async fn run(service: Service, config: &Config) -> Result<()> {
    let listener = bind(&config.server_addr).await?;
    serve(listener, api::create_router(service), service).await
}
