mod auth_config;
mod backends_config;
mod config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod tenants_config;


pub use auth_config::AuthConfig;
pub use backends_config::BackendsConfig;
pub use config::Config;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use tenants_config::{TenantUrlsConfig, TenantsConfig};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_STATIC_DIR: &str = "public";

const DEFAULT_AUTH_ENABLED: bool = true;
const DEFAULT_COOKIE_NAME: &str = "auth_token";
const DEFAULT_VERIFY_TIMEOUT_MS: u64 = 2000;
const MIN_VERIFY_TIMEOUT_MS: u64 = 1;
const MAX_VERIFY_TIMEOUT_MS: u64 = 30_000;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
const MIN_BACKEND_TIMEOUT_SECS: u64 = 1;
const MAX_BACKEND_TIMEOUT_SECS: u64 = 300;
