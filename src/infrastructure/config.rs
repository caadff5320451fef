use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{model::reveal::RevealTiming, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Reveal timings, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub char_delay_ms: u64,
    pub typing_pause_ms: u64,
    pub bubble_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 15,
            typing_pause_ms: 50,
            bubble_delay_ms: 300,
        }
    }
}

impl RevealConfig {
    pub fn timing(&self) -> RevealTiming {
        RevealTiming {
            char_delay: Duration::from_millis(self.char_delay_ms),
            typing_pause: Duration::from_millis(self.typing_pause_ms),
            bubble_delay: Duration::from_millis(self.bubble_delay_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Minimum horizontal drag, in pixels, that counts as a swipe
    pub swipe_threshold_px: i32,
    /// Assumed width of one terminal cell, in pixels
    pub cell_width_px: i32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50,
            cell_width_px: 8,
        }
    }
}

impl Config {
    /// The configuration bundled with the binary, without any user overrides.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir())
    }

    /// Layers the user config files found in `config_dir` over the
    /// embedded defaults.
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// Fills in every key binding and style the user did not set.
    pub fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }
}
