//! Server configuration: optional TOML file, then `TP_*` environment overrides.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use tp_protocol::EngagementLevel;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Insight log file.
    #[serde(default = "default_insights_path")]
    pub insights_path: PathBuf,
    /// Protocol text file served as a resource.
    #[serde(default = "default_protocol_path")]
    pub protocol_path: PathBuf,
    /// Which tools the listing advertises.
    #[serde(default)]
    pub engagement_level: EngagementLevel,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3030
}

fn default_insights_path() -> PathBuf {
    PathBuf::from("data/insights.md")
}

fn default_protocol_path() -> PathBuf {
    PathBuf::from("data/protocol.md")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            insights_path: default_insights_path(),
            protocol_path: default_protocol_path(),
            engagement_level: EngagementLevel::default(),
        }
    }
}

impl ServerConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config {path}"))?;
        Ok(config)
    }

    /// File (if given) plus process environment.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `TP_HOST`, `TP_PORT`, `TP_INSIGHTS_PATH`, `TP_PROTOCOL_PATH`
    /// and `TP_ENGAGEMENT_LEVEL` from `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(host) = lookup("TP_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("TP_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("invalid TP_PORT '{port}'"))?;
        }
        if let Some(path) = lookup("TP_INSIGHTS_PATH") {
            self.insights_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("TP_PROTOCOL_PATH") {
            self.protocol_path = PathBuf::from(path);
        }
        if let Some(level) = lookup("TP_ENGAGEMENT_LEVEL") {
            self.engagement_level = level.parse()?;
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
