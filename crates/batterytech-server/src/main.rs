#![forbid(unsafe_code)]

use batterytech_query::QueryService;
use batterytech_server::{
    bind_address, build_router, cors_origins, ApiConfig, AppState, RateLimitConfig, ServerConfig,
};
use batterytech_store::{ContentStore, StaticContent};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("BATTERYTECH_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn api_config_from_env() -> ApiConfig {
    let defaults = ApiConfig::default();
    ApiConfig {
        max_body_bytes: env_usize("BATTERYTECH_MAX_BODY_BYTES", defaults.max_body_bytes),
        cors_allowed_origins: cors_origins(
            env::var("BATTERYTECH_CORS_ORIGINS").ok().as_deref(),
            env::var("BATTERYTECH_ENV").ok().as_deref(),
        ),
        rate_limit: RateLimitConfig {
            max_requests: env_usize(
                "BATTERYTECH_RATE_LIMIT_MAX",
                defaults.rate_limit.max_requests,
            ),
            window: env_duration_ms(
                "BATTERYTECH_RATE_LIMIT_WINDOW_MS",
                defaults.rate_limit.window.as_millis() as u64,
            ),
        },
        quiz_sample_size: env_usize("BATTERYTECH_QUIZ_SAMPLE_SIZE", defaults.quiz_sample_size),
        quiz_seed: env::var("BATTERYTECH_QUIZ_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok()),
        trust_proxy: env_bool("BATTERYTECH_TRUST_PROXY", defaults.trust_proxy),
    }
}

fn server_config_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        bind_addr: bind_address(
            env::var("BATTERYTECH_BIND").ok().as_deref(),
            env::var("PORT").ok().as_deref(),
        ),
        data_dir: env::var("BATTERYTECH_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from),
        shutdown_drain: env_duration_ms(
            "BATTERYTECH_SHUTDOWN_DRAIN_MS",
            defaults.shutdown_drain.as_millis() as u64,
        ),
    }
}

fn load_content(data_dir: Option<&PathBuf>) -> Result<StaticContent, String> {
    match data_dir {
        Some(dir) => {
            StaticContent::load_dir(dir).map_err(|e| format!("content load failed: {e}"))
        }
        None => StaticContent::embedded().map_err(|e| format!("embedded content invalid: {e}")),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let server = server_config_from_env();
    let content = load_content(server.data_dir.as_ref())?;
    info!(
        batteries = content.batteries().len(),
        questions = content.quiz_questions().len(),
        "content loaded"
    );
    let api = api_config_from_env();
    info!(
        origins = ?api.cors_allowed_origins,
        rate_limit_max = api.rate_limit.max_requests,
        quiz_seeded = api.quiz_seed.is_some(),
        trust_proxy = api.trust_proxy,
        "api config"
    );
    let state = AppState::with_config(QueryService::new(Arc::new(content)), api);
    let app = build_router(state);

    let bind_addr = server.bind_addr;
    let drain = server.shutdown_drain;
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("batterytech-server listening on {bind_addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        wait_for_shutdown_signal().await;
        info!(drain_ms = drain.as_millis() as u64, "shutdown requested, draining");
        tokio::time::sleep(drain).await;
    })
    .await
    .map_err(|e| format!("server failed: {e}"))
}
