/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Config file read when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_store")]
    pub store: StoreSettings,

    #[serde(default = "default_graphql")]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Start with the three demo users
    #[serde(default = "default_seed")]
    pub seed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphqlSettings {
    /// Serve the GraphiQL IDE on `GET /` and `GET /graphql`
    #[serde(default = "default_ide")]
    pub ide: bool,

    /// Maximum query nesting depth
    #[serde(default = "default_depth")]
    pub depth: usize,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `roster.toml` is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) if !path.exists() => {
                return Err(ServerError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with ROSTER_)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(format!("invalid host {:?}: {}", self.server.host, e)))?;

        if self.server.port == 0 {
            return Err(ServerError::Config(
                "port must be non-zero (set ROSTER_SERVER_PORT)".to_string(),
            ));
        }

        if self.graphql.depth == 0 {
            return Err(ServerError::Config(
                "graphql depth limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_store() -> StoreSettings {
    StoreSettings {
        seed: default_seed(),
    }
}

fn default_seed() -> bool {
    true
}

fn default_graphql() -> GraphqlSettings {
    GraphqlSettings {
        ide: default_ide(),
        depth: default_depth(),
    }
}

fn default_ide() -> bool {
    true
}

fn default_depth() -> usize {
    16
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            store: default_store(),
            graphql: default_graphql(),
        }
    }
}
