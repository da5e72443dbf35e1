// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the demo services
//!
//! Each service only needs a listen address. It comes from an environment
//! variable (optionally loaded from `.env`) and falls back to a fixed default.

use std::fmt;
use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const FRONTEND_ADDR: &str = "0.0.0.0:9000";
    pub const BACKEND_ADDR: &str = "0.0.0.0:9001";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const FRONTEND_ADDR: &str = "FRONTEND_ADDR";
    pub const BACKEND_ADDR: &str = "BACKEND_ADDR";
}

/// Which of the two services a process is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Frontend,
    Backend,
}

impl Service {
    /// Human-readable name used in the startup log line
    pub fn display_name(self) -> &'static str {
        match self {
            Service::Frontend => "Frontend server",
            Service::Backend => "Backend API server",
        }
    }

    pub fn default_addr(self) -> &'static str {
        match self {
            Service::Frontend => defaults::FRONTEND_ADDR,
            Service::Backend => defaults::BACKEND_ADDR,
        }
    }

    pub fn addr_env_var(self) -> &'static str {
        match self {
            Service::Frontend => env_vars::FRONTEND_ADDR,
            Service::Backend => env_vars::BACKEND_ADDR,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
}

impl Config {
    /// Built-in configuration for a service, ignoring the environment
    pub fn for_service(service: Service) -> Self {
        Config {
            server_addr: service.default_addr().to_string(),
        }
    }

    /// Loads configuration from environment variables
    pub fn from_env(service: Service) -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_value(service, std::env::var(service.addr_env_var()).ok())
    }

    /// Builds configuration from an optional raw value of the address variable
    pub(crate) fn from_value(service: Service, value: Option<String>) -> Result<Self> {
        let server_addr = match value {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            Some(_) => {
                tracing::warn!(
                    "{} is empty, using default {}",
                    service.addr_env_var(),
                    service.default_addr()
                );
                service.default_addr().to_string()
            }
            None => service.default_addr().to_string(),
        };

        let config = Config { server_addr };
        config.validate(service)?;
        Ok(config)
    }

    /// Validates that the listen address is a literal `ip:port`.
    ///
    /// Hostnames are not resolved; `bind` accepts exactly what passes here.
    pub fn validate(&self, service: Service) -> Result<()> {
        self.server_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!(
                "Invalid {} '{}': expected 'ip:port' ({})",
                service.addr_env_var(),
                self.server_addr,
                e
            ))
        })?;

        Ok(())
    }
}
