use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] md_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] md_auth::AuthError),

    #[error("auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path")]
    MissingJwtConfig,

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
