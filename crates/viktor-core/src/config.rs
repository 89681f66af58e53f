//! Configuration types for viktor.
//!
//! [`Config::load`] reads `~/.config/viktor/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist; a file that exists but does
//! not parse is an error. [`Config::load_from`] layers an explicit file
//! instead. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests).

use crate::catalog::Catalog;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3001

[catalog]
# path = "/path/to/formulas.json"

[search]
default_limit = 10

[demo]
search_delay_ms  = 500
explain_delay_ms = 1000
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/viktor/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[catalog]` section of `config.toml`. No path means the builtin sample.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Build the catalog this section describes.
    pub fn load(&self) -> anyhow::Result<Catalog> {
        match &self.path {
            Some(path) => Ok(Catalog::from_path(path)?),
            None => {
                let catalog = Catalog::builtin();
                tracing::info!("loaded {} sample formulas", catalog.len());
                Ok(catalog)
            }
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_limit() -> usize { crate::search::DEFAULT_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

/// `[demo]` section of `config.toml`: artificial response delays.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,
    #[serde(default = "default_explain_delay_ms")]
    pub explain_delay_ms: u64,
}

fn default_search_delay_ms() -> u64 { 500 }
fn default_explain_delay_ms() -> u64 { 1000 }

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: default_search_delay_ms(),
            explain_delay_ms: default_explain_delay_ms(),
        }
    }
}

impl DemoConfig {
    /// No artificial delays at all.
    pub fn instant() -> Self {
        Self {
            search_delay_ms: 0,
            explain_delay_ms: 0,
        }
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn explain_delay(&self) -> Duration {
        Duration::from_millis(self.explain_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/viktor/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&Self::default_path())
    }

    /// Where [`Config::load`] looks: `$XDG_CONFIG_HOME/viktor/config.toml`,
    /// else `~/.config/viktor/config.toml`.
    pub fn default_path() -> PathBuf {
        config_path()
    }

    /// Write the defaults to `path` if nothing is there yet, then load it.
    /// An existing file is never rewritten, even when it fails to parse.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(path)
    }

    /// Load `path` layered on top of the built-in defaults. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("viktor")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
