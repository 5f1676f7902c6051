use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use eyre::WrapErr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address when running as a standalone server.
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins. `None` allows any origin.
    pub allowed_origins: Option<Vec<HeaderValue>>,
    /// Whether we were started by the AWS Lambda runtime.
    pub lambda_runtime: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = var("COGNIS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid COGNIS_BIND_ADDR: {bind_addr}"))?;

        let origins = var("COGNIS_ALLOWED_ORIGINS").unwrap_or_default();
        let origins: Vec<&str> = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();
        let allowed_origins = if origins.is_empty() || origins.contains(&"*") {
            None
        } else {
            Some(
                origins
                    .iter()
                    .map(|origin| {
                        HeaderValue::from_str(origin)
                            .wrap_err_with(|| format!("invalid CORS origin: {origin}"))
                    })
                    .collect::<eyre::Result<Vec<_>>>()?,
            )
        };

        Ok(Config {
            bind_addr,
            allowed_origins,
            lambda_runtime: var("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
