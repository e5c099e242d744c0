//! Service configuration loaded from environment variables.

use crate::modules::activities::core::catalogue::{Activities, default_catalogue, load_catalogue};
use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to
    pub host: String,

    pub port: u16,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// JSON file replacing the built-in activities
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("ACTIVITIES_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("ACTIVITIES_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),

            static_dir: lookup("ACTIVITIES_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),

            seed_file: lookup("ACTIVITIES_SEED_FILE").map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    pub fn load_activities(&self) -> anyhow::Result<Activities> {
        match &self.seed_file {
            Some(path) => load_catalogue(path),
            None => Ok(default_catalogue()),
        }
    }
}
