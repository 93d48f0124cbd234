use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Absent means records are kept in memory.
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    bind_address: Option<String>,
    database_url: Option<String>,
    log_dir: Option<String>,
    max_connections: Option<u32>,
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            database_url: None,
            log_dir: default_log_dir(),
            max_connections: default_max_connections(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()
            .map_err(|e| format!("Failed to load config from environment: {e}"))?;

        Self::layered(config_path, env_config)
    }

    fn layered(config_path: Option<&str>, env_config: PartialServerConfig) -> Result<Self, String> {
        // 1. Load from file (optional)
        let file_config: PartialServerConfig = match config_path {
            Some(path_str) if Path::new(path_str).exists() => {
                let path = Path::new(path_str);
                let contents = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
                toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))?
            }
            _ => PartialServerConfig::default(),
        };

        // 2. Merge: environment overrides file
        let final_config = ServerConfig {
            bind_address: env_config.bind_address.or(file_config.bind_address)
                .unwrap_or_else(default_bind_address),
            database_url: env_config.database_url.or(file_config.database_url)
                .filter(|url| !url.trim().is_empty()),
            log_dir: env_config.log_dir.or(file_config.log_dir)
                .unwrap_or_else(default_log_dir),
            max_connections: env_config.max_connections.or(file_config.max_connections)
                .unwrap_or_else(default_max_connections),
        };

        if final_config.max_connections == 0 {
            return Err("MAX_CONNECTIONS must be at least 1".to_string());
        }

        Ok(final_config)
    }
}
