//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.carousel/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::slide::{Deck, DeckError, Slide};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Inline deck, used when no deck file is configured.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Milliseconds between automatic advances; 0 disables.
    pub auto_advance_ms: Option<u64>,
    pub deck: Option<String>,
    pub default_img_height: Option<u16>,
    /// Run with the index owned outside the controller.
    pub controlled: Option<bool>,
    pub start_index: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 10_000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` when auto-advance is disabled.
    pub auto_advance: Option<Duration>,
    pub deck_path: Option<PathBuf>,
    pub default_img_height: Option<u16>,
    pub controlled: bool,
    pub start_index: usize,
    pub inline_slides: Vec<Slide>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub auto_advance_ms: Option<u64>,
    pub deck: Option<PathBuf>,
    /// `Some(false)` turns off `controlled = true` from the file.
    pub controlled: Option<bool>,
    pub start_index: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.carousel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".carousel").join("config.toml"))
}

/// Load config from `~/.carousel/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CarouselConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CarouselConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CarouselConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CarouselConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CarouselConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CarouselConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Carousel Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# auto_advance_ms = 10000            # 0 disables auto-advance
# deck = "/path/to/deck.toml"        # Or set CAROUSEL_DECK env var
# default_img_height = 10
# controlled = false                 # Index owned outside the carousel (--uncontrolled overrides)
# start_index = 0

# [[slides]]
# image_url = "https://example.com/slide1.png"
# description = "Slide 1"
# attribution = "Uno Pizzeria"
# img_height = 8
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CarouselConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Auto-advance: CLI → env → config → default
    let auto_advance_ms = cli
        .auto_advance_ms
        .or_else(|| env_parse("CAROUSEL_AUTO_ADVANCE_MS"))
        .or(config.general.auto_advance_ms)
        .unwrap_or(DEFAULT_AUTO_ADVANCE_MS);

    // Deck: CLI → env → config
    let deck_path = cli
        .deck
        .clone()
        .or_else(|| std::env::var("CAROUSEL_DECK").ok().map(PathBuf::from))
        .or_else(|| config.general.deck.as_ref().map(PathBuf::from));

    ResolvedConfig {
        auto_advance: (auto_advance_ms > 0).then(|| Duration::from_millis(auto_advance_ms)),
        deck_path,
        default_img_height: config.general.default_img_height,
        controlled: cli.controlled.or(config.general.controlled).unwrap_or(false),
        start_index: cli
            .start_index
            .or(config.general.start_index)
            .unwrap_or(0),
        inline_slides: config.slides.clone(),
    }
}

impl ResolvedConfig {
    /// Deck file → inline `[[slides]]` → built-in sample.
    ///
    /// A deck-wide `default_img_height` in the config applies only when the
    /// deck itself does not set one.
    pub fn load_deck(&self) -> Result<Deck, DeckError> {
        let mut deck = match &self.deck_path {
            Some(path) => Deck::load(path)?,
            None if !self.inline_slides.is_empty() => Deck {
                default_img_height: None,
                slides: self.inline_slides.clone(),
            },
            None => {
                info!("No deck configured, using the sample deck");
                Deck::sample()
            }
        };
        deck.default_img_height = deck.default_img_height.or(self.default_img_height);
        Ok(deck)
    }
}

fn env_parse(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}
