//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Environment name in which the seed endpoint refuses to run.
pub const PRODUCTION_ENVIRONMENT: &str = "production";

fn default_seed_random_records() -> usize {
    1000
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Deployment environment name, e.g. `local` or `production`.
    pub environment: String,
    /// Number of generated advocates added on top of the fixed sample.
    #[serde(default = "default_seed_random_records")]
    pub seed_random_records: usize,
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(PRODUCTION_ENVIRONMENT)
    }
}
