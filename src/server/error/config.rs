use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
