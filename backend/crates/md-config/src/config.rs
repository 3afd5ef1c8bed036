use crate::{
    AuthConfig, BackendsConfig, ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig,
    TenantsConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub backends: BackendsConfig,
    pub tenants: TenantsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for MD_CONFIG_DIR env var, else use ./.md/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply MD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MD_CONFIG_DIR env var > ./.md/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("MD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".md"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.backends.validate()?;
        self.tenants.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({}), static_dir={}",
            self.server.host, self.server.port, self.server.environment, self.server.static_dir
        );

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({}), cookie={}, verify_timeout={}ms",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type,
            self.auth.cookie_name,
            self.auth.verify_timeout_ms
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        info!(
            "  backends: marketing={}, timeout={}s",
            display_url(&self.backends.marketing_api_url),
            self.backends.timeout_secs
        );

        info!(
            "  tenants: default={} / {}, wsc={} / {}, ameritrust={} / {}",
            display_url(&self.tenants.default.api_base_url),
            display_url(&self.tenants.default.ae_base_url),
            display_url(&self.tenants.wsc.api_base_url),
            display_url(&self.tenants.wsc.ae_base_url),
            display_url(&self.tenants.ameritrust.api_base_url),
            display_url(&self.tenants.ameritrust.ae_base_url),
        );

        for key in self.tenants.unset_fields() {
            warn!("  {} is not set; requests resolved to it will fail upstream", key);
        }
        if self.backends.marketing_api_url.is_empty() {
            warn!("  backends.marketing_api_url is not set");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MD_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("MD_SERVER_ENVIRONMENT", &mut self.server.environment);
        Self::apply_env_string("MD_SERVER_STATIC_DIR", &mut self.server.static_dir);

        // Auth
        Self::apply_env_bool("MD_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("MD_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "MD_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_parse(
            "MD_AUTH_VERIFY_TIMEOUT_MS",
            &mut self.auth.verify_timeout_ms,
        );
        Self::apply_env_string("MD_AUTH_COOKIE_NAME", &mut self.auth.cookie_name);

        // Logging
        Self::apply_env_parse("MD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MD_LOG_FILE", &mut self.logging.file);

        // Backends
        Self::apply_env_string(
            "MD_MARKETING_API_URL",
            &mut self.backends.marketing_api_url,
        );
        Self::apply_env_parse("MD_BACKEND_TIMEOUT_SECS", &mut self.backends.timeout_secs);

        // Tenants
        Self::apply_env_string(
            "MD_TENANT_DEFAULT_API_URL",
            &mut self.tenants.default.api_base_url,
        );
        Self::apply_env_string(
            "MD_TENANT_DEFAULT_AE_URL",
            &mut self.tenants.default.ae_base_url,
        );
        Self::apply_env_string("MD_TENANT_WSC_API_URL", &mut self.tenants.wsc.api_base_url);
        Self::apply_env_string("MD_TENANT_WSC_AE_URL", &mut self.tenants.wsc.ae_base_url);
        Self::apply_env_string(
            "MD_TENANT_AMERITRUST_API_URL",
            &mut self.tenants.ameritrust.api_base_url,
        );
        Self::apply_env_string(
            "MD_TENANT_AMERITRUST_AE_URL",
            &mut self.tenants.ameritrust.ae_base_url,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn display_url(url: &str) -> &str {
    if url.is_empty() { "<unset>" } else { url }
}
