use md_server::{
    AccessGate, AppState, GateScope, Metrics, ProxyConfig, ServerError, SessionCookie,
    build_router, logger, tenant_table_from_config,
};

use md_auth::{JwtAlgorithm, JwtValidator, TokenVerifier, UnverifiedTokenVerifier};
use md_config::Config;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting md-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Prometheus recorder not installed, /metrics disabled: {}", e);
            None
        }
    };
    let metrics = Metrics::new();

    let verifier = build_verifier(&config)?;
    info!("Access gate using {} token verification", verifier.name());

    let gate = AccessGate::new(
        verifier,
        config.auth.verify_timeout(),
        GateScope::default(),
        metrics.clone(),
    );

    let environment = config.server.environment;
    if environment.is_development() {
        warn!("Development environment: session cookie sent without Secure");
    }
    let session_cookie = SessionCookie::new(
        config.auth.cookie_name.clone(),
        !environment.is_development(),
    );

    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|e| ServerError::HttpClient { source: e })?;

    // Build application state
    let app_state = AppState {
        gate: Arc::new(gate),
        session_cookie,
        tenants: Arc::new(tenant_table_from_config(&config.tenants)),
        proxy: ProxyConfig::from(&config.backends),
        http_client,
        metrics,
        prometheus,
    };

    let static_dir = PathBuf::from(&config.server.static_dir);
    if !static_dir.join("index.html").exists() {
        warn!(
            "No index.html in {}; dashboard pages will 404",
            static_dir.display()
        );
    }

    let app = build_router(app_state, &static_dir);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Token verifier for the configured auth mode
fn build_verifier(config: &Config) -> Result<Arc<dyn TokenVerifier>, ServerError> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - tokens are decoded but signatures are NOT verified");
        return Ok(Arc::new(UnverifiedTokenVerifier));
    }

    let algorithm = match (&config.auth.jwt_secret, &config.auth.jwt_public_key_path) {
        (Some(secret), key_path) => {
            if key_path.is_some() {
                warn!("Both auth.jwt_secret and auth.jwt_public_key_path set; using HS256");
            }
            JwtAlgorithm::HS256 {
                secret: secret.as_bytes().to_vec(),
            }
        }
        (None, Some(key_path)) => {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key_pem =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            JwtAlgorithm::RS256 { public_key_pem }
        }
        (None, None) => return Err(ServerError::MissingJwtConfig),
    };

    Ok(Arc::new(JwtValidator::from_algorithm(&algorithm)?))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await
        }
    }
}
