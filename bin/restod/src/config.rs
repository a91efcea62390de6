use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Server configuration, loaded from a TOML context file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding all persistent data.
    pub data_dir: String,
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    ///
    /// A bare name resolves to `/etc/resto/<name>.toml`; anything containing
    /// `/` or `.` is treated as a path and used directly.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/resto/{name_or_path}.toml"))
        }
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Verify the configuration is usable before the server starts.
    pub fn verify(&self) -> anyhow::Result<()> {
        if self.storage.data_dir.is_empty() {
            anyhow::bail!("Storage data_dir is empty in configuration.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_bare_name() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/resto/prod.toml")
        );
    }

    #[test]
    fn test_resolve_path_explicit() {
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("/tmp/resto/test.toml"),
            PathBuf::from("/tmp/resto/test.toml")
        );
    }

    #[test]
    fn test_load_and_verify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"/var/lib/resto\"\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.storage.data_dir, "/var/lib/resto");
        assert!(config.verify().is_ok());
    }

    #[test]
    fn test_verify_empty_data_dir() {
        let config = ServerConfig {
            storage: StorageConfig {
                data_dir: String::new(),
            },
        };
        assert!(config.verify().is_err());
    }
}
