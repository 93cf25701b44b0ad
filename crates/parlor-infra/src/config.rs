//! Server configuration loader for Parlor.
//!
//! Reads an optional TOML file and deserializes it into [`ServerConfig`].
//! A missing file means defaults; a file that exists but cannot be read or
//! parsed is an error.

use std::path::Path;

use parlor_types::config::ServerConfig;
use parlor_types::error::ConfigError;

/// Load server configuration from `path`.
///
/// - `None`: returns [`ServerConfig::default()`].
/// - File does not exist: logs at debug level and returns the default.
/// - File exists but fails to read or parse: returns a [`ConfigError`].
pub async fn load_server_config(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ServerConfig::default());
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(ServerConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                reason: err.to_string(),
            });
        }
    };

    toml::from_str::<ServerConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
