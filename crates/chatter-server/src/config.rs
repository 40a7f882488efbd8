use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Restrict CORS to a single origin. Unset means permissive.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = var("CHATTER_DB_PATH").unwrap_or_else(|| "chatter.db".into()).into();
        let host = var("CHATTER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = var("CHATTER_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("CHATTER_PORT must be a port number")?;
        let cors_origin = var("CHATTER_CORS_ORIGIN").filter(|v| !v.trim().is_empty());

        Ok(Self {
            db_path,
            host,
            port,
            cors_origin,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.db_path, PathBuf::from("chatter.db"));
        assert_eq!(config.addr().unwrap(), "0.0.0.0:8080".parse().unwrap());
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("CHATTER_DB_PATH", "/tmp/test.db"),
            ("CHATTER_HOST", "127.0.0.1"),
            ("CHATTER_PORT", "9000"),
            ("CHATTER_CORS_ORIGIN", "http://localhost:5173"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.addr().unwrap(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("CHATTER_PORT", "http")])).is_err());
    }
}
