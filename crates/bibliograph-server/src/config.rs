//! Application configuration.
//!
//! Settings come from an optional TOML file plus environment overrides,
//! e.g. `BIBLIOGRAPH__SERVER__PORT=9090` or
//! `BIBLIOGRAPH__AUTH__SECRET=...`. The token secret has no default and
//! must be supplied through one of the two.

use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub graphql: GraphQLSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Initial data created at startup (authors have no mutation in the
    /// schema, so they enter here).
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        if self.auth.secret.len() < 16 {
            return Err("auth.secret must be at least 16 bytes".into());
        }
        if self.cache.mode == CacheMode::Redis && self.cache.url.as_deref().unwrap_or("").is_empty()
        {
            return Err("cache.mode = \"redis\" requires cache.url".into());
        }
        if self.cache.ttl_secs == 0 {
            return Err("cache.ttl_secs must be > 0".into());
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthSettings {
    /// HS256 secret shared with the token issuer. Prefer supplying it
    /// via `BIBLIOGRAPH__AUTH__SECRET` over committing it to a file.
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default)]
    pub mode: CacheMode,
    /// Redis connection URL, required in redis mode.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            mode: CacheMode::Memory,
            url: None,
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_cache_ttl_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLSettings {
    #[serde(default = "default_true")]
    pub playground: bool,
}

impl Default for GraphQLSettings {
    fn default() -> Self {
        Self { playground: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BootstrapSettings {
    /// Author names created at startup if they are not already present.
    #[serde(default)]
    pub authors: Vec<String>,
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    /// Loads configuration from an optional TOML file and
    /// `BIBLIOGRAPH__`-prefixed environment overrides, then validates.
    pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
        let mut builder = Config::builder();
        match path {
            Some(p) => {
                let pathbuf = PathBuf::from(p);
                if pathbuf.exists() {
                    builder = builder.add_source(File::from(pathbuf));
                }
            }
            None => {
                let default_path = PathBuf::from("bibliograph.toml");
                if default_path.exists() {
                    builder = builder.add_source(File::from(default_path));
                }
            }
        }
        builder = builder.add_source(
            Environment::with_prefix("BIBLIOGRAPH")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        merged.validate()?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn valid() -> AppConfig {
        AppConfig {
            auth: AuthSettings {
                secret: "0123456789abcdef".to_string(),
            },
            ..AppConfig::default()
        }
    }

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.cache.mode, CacheMode::Memory);
        assert_eq!(cfg.cache.ttl_secs, 120);
        assert!(cfg.graphql.playground);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_validate_accepts_good_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_secret() {
        let mut cfg = valid();
        cfg.auth.secret = String::new();
        assert!(cfg.validate().is_err());

        cfg.auth.secret = "short".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_redis_mode_requires_url() {
        let mut cfg = valid();
        cfg.cache.mode = CacheMode::Redis;
        assert!(cfg.validate().is_err());

        cfg.cache.url = Some("redis://localhost:6379".to_string());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_ttl_and_bad_level() {
        let mut cfg = valid();
        cfg.cache.ttl_secs = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = valid();
        cfg.logging.level = "noisy".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = from_toml(
            r#"
            [server]
            port = 9090

            [auth]
            secret = "0123456789abcdef"

            [cache]
            mode = "redis"
            url = "redis://cache:6379"
            ttl_secs = 30

            [bootstrap]
            authors = ["N. K. Jemisin"]
            "#,
        );
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.cache.mode, CacheMode::Redis);
        assert_eq!(cfg.cache.ttl(), std::time::Duration::from_secs(30));
        assert_eq!(cfg.bootstrap.authors, ["N. K. Jemisin"]);
        assert!(cfg.validate().is_ok());
    }
}
