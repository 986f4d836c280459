use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Built demo app (index.html, pkg/, assets/), served when set
    pub static_files_path: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value: port.clone(),
            })?,
            static_files_path: env::var("STATIC_FILES_PATH").ok(),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure config tests run serially (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("STATIC_FILES_PATH");
        env::remove_var("CORS_ORIGINS");
    }

    #[test]
    fn test_config_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.static_files_path.is_none());
        assert_eq!(config.cors_origins, vec!["http://localhost".to_string()]);
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        env::set_var("HOST", "0.0.0.0");
        env::set_var("PORT", "3000");
        env::set_var("STATIC_FILES_PATH", "./dist");
        env::set_var("CORS_ORIGINS", "http://localhost:8080, https://docs.example.com,");

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_files_path, Some("./dist".to_string()));
        assert_eq!(
            config.cors_origins,
            vec![
                "http://localhost:8080".to_string(),
                "https://docs.example.com".to_string()
            ]
        );

        clear_env();
    }

    #[test]
    fn test_config_invalid_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        env::set_var("PORT", "eighty");
        let err = Config::from_env().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
        assert_eq!(err.to_string(), "PORT must be a number, got 'eighty'");

        clear_env();
    }
}
