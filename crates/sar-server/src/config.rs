use std::env;

use anyhow::{Context, Result};
use sar_simulation::SimConfig;

/// Server settings, read from `SAR_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Fixed RNG seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    /// Event log capacity of the shared simulation.
    pub max_events: usize,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            seed: None,
            max_events: 500,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let port = match lookup("SAR_PORT") {
            Some(v) => v.parse().context("SAR_PORT must be a port number")?,
            None => defaults.port,
        };
        let seed = lookup("SAR_SEED")
            .map(|v| v.parse().context("SAR_SEED must be an unsigned integer"))
            .transpose()?;
        let max_events = match lookup("SAR_MAX_EVENTS") {
            Some(v) => v.parse().context("SAR_MAX_EVENTS must be a number")?,
            None => defaults.max_events,
        };
        let allowed_origins = lookup("SAR_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: lookup("SAR_HOST").unwrap_or(defaults.host),
            port,
            seed,
            max_events,
            allowed_origins,
        })
    }

    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The simulation configuration for the shared run.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig::default()
            .with_seed(self.seed.unwrap_or_else(rand::random))
            .with_max_events(self.max_events)
    }
}
