use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {env_var}: {reason}")]
    InvalidEnvVar { env_var: String, reason: String },
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

// Convert a config field path (e.g., "provider.api_key") to its environment variable name
pub fn to_env_var(field: &str) -> String {
    format!("DEBRIEF_{}", field.replace('.', "__").to_uppercase())
}
