//! Configuration module
//!
//! Handles CLI settings that apply to every command.

use tracing_subscriber::EnvFilter;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive
    pub log_filter: String,
}

impl Config {
    /// Build the tracing filter, falling back to `warn` on a bad directive
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
