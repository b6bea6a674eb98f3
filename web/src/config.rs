//! Configuration types and loading for tgbot-web.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default listen address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default output directory for `export`.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Config file format. Every field is optional; CLI flags win over it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Listen address for `serve`, e.g. `"127.0.0.1:3000"`
    pub bind: Option<String>,
    /// Target directory for `export`
    pub out_dir: Option<PathBuf>,
}

/// Resolved settings after merging defaults, file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Validated listen address
    pub bind: SocketAddr,
    /// Directory the static export writes into
    pub out_dir: PathBuf,
}

/// Read and parse a TOML config file.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid config: {}", path.display()))
}

/// Parse TOML config text.
pub fn parse(raw: &str) -> Result<FileConfig> {
    Ok(toml::from_str(raw)?)
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Value of `serve --bind`
    pub bind: Option<String>,
    /// Value of `export --out`
    pub out_dir: Option<PathBuf>,
}

impl Settings {
    /// Merge defaults < file < CLI overrides.
    pub fn resolve(file: Option<FileConfig>, cli: Overrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        let bind_raw = cli
            .bind
            .or(file.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address: {bind_raw}"))?;

        let out_dir = cli
            .out_dir
            .or(file.out_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        Ok(Self { bind, out_dir })
    }

    /// Load the optional config file and merge it with `cli`.
    pub fn load(config_path: Option<&Path>, cli: Overrides) -> Result<Self> {
        let file = config_path.map(load_file).transpose()?;
        Self::resolve(file, cli)
    }
}
