//! Runtime configuration

/// Storefront configuration, sourced from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level filter, e.g. "info" or "storefront=debug"
    pub log_level: String,
    /// Whether collaborator calls sleep to emulate network latency
    pub simulate_latency: bool,
    /// Optional directory for daily-rotated log files
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            simulate_latency: std::env::var("SIMULATE_LATENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            simulate_latency: true,
            log_dir: None,
        }
    }
}
