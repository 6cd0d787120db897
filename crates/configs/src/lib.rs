use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Token settings. `require_token` gates the resource routes behind the
/// bearer-token middleware; the routes are open when it is `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_minutes")]
    pub access_token_expire_minutes: i64,
    #[serde(default)]
    pub require_token: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: String::new(), access_token_expire_minutes: default_token_minutes(), require_token: false }
    }
}

fn default_token_minutes() -> i64 { 20 }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file when present, otherwise defaults filled from the environment.
    pub fn load_or_env() -> Result<Self> {
        Self::load_path_or_env(&config_path())
    }

    /// Only a missing file falls back to the environment; unreadable or
    /// malformed files are errors.
    pub fn load_path_or_env(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(anyhow::Error::new(e).context(format!("cannot read config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 归一化 database（支持从环境变量填充 URL）
        self.database.normalize_from_env();
        self.database.validate()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供 URL，则尝试从环境变量填充
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    pub fn is_memory_sqlite(&self) -> bool {
        self.is_sqlite() && self.url.contains(":memory:")
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || self.is_sqlite()) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            self.jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.access_token_expire_minutes <= 0 {
            return Err(anyhow!("auth.access_token_expire_minutes must be positive"));
        }
        Ok(())
    }
}
