//! fracdrill configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::timer::DEFAULT_ADVANCE_DELAY;

/// Name of the per-directory config file.
pub const CONFIG_FILE_NAME: &str = "fracdrill.toml";

/// Top-level fracdrill configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Pause after a benchmark answer before the next question, in milliseconds.
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    /// Seed for arithmetic problem sampling. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Ring the terminal bell after benchmark answers.
    #[serde(default = "default_sound")]
    pub sound: bool,
}

fn default_advance_delay_ms() -> u64 {
    DEFAULT_ADVANCE_DELAY.as_millis() as u64
}
fn default_sound() -> bool {
    true
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: default_advance_delay_ms(),
            seed: None,
            sound: default_sound(),
        }
    }
}

impl DrillConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `fracdrill.toml` in the current directory
/// 2. `~/.config/fracdrill/config.toml`
///
/// Environment variable overrides: `FRACDRILL_SEED`, `FRACDRILL_ADVANCE_DELAY_MS`.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let mut config = match resolve_path(path)? {
        Some(path) => read_config(&path)?,
        None => DrillConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// An explicit path must exist; otherwise the first default location found.
fn resolve_path(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(p) if p.exists() => Ok(Some(p.to_path_buf())),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() {
                return Ok(Some(local));
            }
            Ok(dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists()))
        }
    }
}

/// Read and parse one config file, without environment overrides.
pub fn read_config(path: &Path) -> Result<DrillConfig> {
    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<DrillConfig> {
    Ok(toml::from_str::<DrillConfig>(content)?)
}

fn apply_env_overrides(config: &mut DrillConfig) -> Result<()> {
    if let Ok(seed) = std::env::var("FRACDRILL_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("FRACDRILL_SEED is not a number: '{seed}'"))?;
        config.seed = Some(seed);
    }
    if let Ok(delay) = std::env::var("FRACDRILL_ADVANCE_DELAY_MS") {
        config.advance_delay_ms = delay
            .trim()
            .parse::<u64>()
            .with_context(|| format!("FRACDRILL_ADVANCE_DELAY_MS is not a number: '{delay}'"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("fracdrill"))
}

/// Starter config written by `fracdrill init`.
pub const SAMPLE_CONFIG: &str = r#"# fracdrill configuration

# Pause after a benchmark answer before the next question (milliseconds).
advance_delay_ms = 1500

# Ring the terminal bell after benchmark answers.
sound = true

# Fix the arithmetic problem order. Remove for a fresh order every session.
# seed = 42
"#;
