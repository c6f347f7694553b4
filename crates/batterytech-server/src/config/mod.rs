use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_PRODUCTION_ORIGIN: &str = "https://batterytech-explorer.vercel.app";

#[derive(Debug, Clone, Serialize)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(15 * 60),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub cors_allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
    pub quiz_sample_size: usize,
    pub quiz_seed: Option<u64>,
    /// Key rate limits on the first `x-forwarded-for` hop instead of the
    /// socket peer. Only safe behind a proxy that overwrites the header.
    pub trust_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            cors_allowed_origins: vec![DEFAULT_DEV_ORIGIN.to_string()],
            rate_limit: RateLimitConfig::default(),
            quiz_sample_size: batterytech_query::DEFAULT_QUIZ_SAMPLE_SIZE,
            quiz_seed: None,
            trust_proxy: false,
        }
    }
}

/// Process-level settings read once by the binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory with the four content files; embedded data when unset.
    pub data_dir: Option<PathBuf>,
    pub shutdown_drain: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: bind_address(None, None),
            data_dir: None,
            shutdown_drain: Duration::from_millis(2000),
        }
    }
}

/// Origin allow-list: an explicit comma list wins, otherwise the deployed
/// front end in production and the local dev server everywhere else.
#[must_use]
pub fn cors_origins(explicit: Option<&str>, environment: Option<&str>) -> Vec<String> {
    let listed: Vec<String> = explicit
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect();
    if !listed.is_empty() {
        return listed;
    }
    match environment {
        Some("production") => vec![DEFAULT_PRODUCTION_ORIGIN.to_string()],
        _ => vec![DEFAULT_DEV_ORIGIN.to_string()],
    }
}

/// `BATTERYTECH_BIND` wins, then `PORT` on all interfaces.
#[must_use]
pub fn bind_address(bind: Option<&str>, port: Option<&str>) -> String {
    if let Some(addr) = bind.map(str::trim).filter(|v| !v.is_empty()) {
        return addr.to_string();
    }
    match port.and_then(|p| p.trim().parse::<u16>().ok()) {
        Some(port) => format!("0.0.0.0:{port}"),
        None => "0.0.0.0:3001".to_string(),
    }
}
