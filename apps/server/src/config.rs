//! Server configuration from the environment.

use std::path::PathBuf;

use kotoba_core::DictionaryCatalog;

/// Process-level settings.
///
/// Read from env vars (a `.env` file is honored):
/// - HOST: bind host (default `0.0.0.0`)
/// - PORT: bind port (default `3000`)
/// - KOTOBA_CONFIG: dictionary catalog file (default `config.json`)
/// - KOTOBA_DICTIONARY_DIR: base directory for relative dictionary paths (default `dictionaries`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
    pub catalog_path: PathBuf,
    pub dictionary_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: "3000".to_string(),
            catalog_path: PathBuf::from("config.json"),
            dictionary_dir: PathBuf::from("dictionaries"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT").unwrap_or(defaults.port),
            catalog_path: std::env::var("KOTOBA_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            dictionary_dir: std::env::var("KOTOBA_DICTIONARY_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dictionary_dir),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the dictionary catalog, falling back to the built-in default.
    pub fn load_catalog(&self) -> DictionaryCatalog {
        let json = match std::fs::read_to_string(&self.catalog_path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(
                    "Catalog {} unavailable ({}), using default catalog",
                    self.catalog_path.display(),
                    e
                );
                return DictionaryCatalog::default();
            }
        };

        match DictionaryCatalog::from_json(&json) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    "Catalog {} is invalid ({}), using default catalog",
                    self.catalog_path.display(),
                    e
                );
                DictionaryCatalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: "8080".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_catalog_uses_default() {
        let config = ServerConfig {
            catalog_path: PathBuf::from("/nonexistent/config.json"),
            ..ServerConfig::default()
        };
        let catalog = config.load_catalog();
        assert_eq!(catalog.default_source().path, "dictionaries/base.json");
    }

    #[test]
    fn test_invalid_catalog_uses_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"dictionaries\": []}}").unwrap();

        let config = ServerConfig {
            catalog_path: file.path().to_path_buf(),
            ..ServerConfig::default()
        };
        assert_eq!(config.load_catalog().sources().len(), 1);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"dictionaries": [{{"path": "n5.json", "name": "N5"}}], "default_dictionary": "n5.json"}}"#
        )
        .unwrap();

        let config = ServerConfig {
            catalog_path: file.path().to_path_buf(),
            ..ServerConfig::default()
        };
        assert_eq!(config.load_catalog().default_source().name, "N5");
    }
}
