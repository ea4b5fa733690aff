use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Attach a permissive CORS layer.
    pub cors: bool,
}

impl ServerConfig {
    /// `host:port` as a bindable address string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            cors: defaults::DEFAULT_CORS_ENABLED,
        }
    }
}
