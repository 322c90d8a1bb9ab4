//! Dock layout configuration persistence
//!
//! Stores layout tunables in `~/.config/dockgroup/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Layout tunables shared by every dock group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Thickness of handles between panels and of the outer edge grip
    pub resize_handle_size: f64,
    /// Height of the tab strip band in center groups
    pub tab_strip_height: f64,
    /// A handle drag is rejected if either neighbor would shrink to this or less
    pub min_panel_extent: f64,
    /// Border kept between an edge group's bounds and its panels
    pub border_inset: f64,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            resize_handle_size: 4.0,
            tab_strip_height: 30.0,
            min_panel_extent: 30.0,
            border_inset: 1.0,
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace negative or non-finite values with defaults
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, fallback: f64, name: &str| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                tracing::warn!("Ignoring invalid {} = {}, using {}", name, value, fallback);
                fallback
            }
        };
        Self {
            resize_handle_size: pick(
                self.resize_handle_size,
                defaults.resize_handle_size,
                "resize_handle_size",
            ),
            tab_strip_height: pick(
                self.tab_strip_height,
                defaults.tab_strip_height,
                "tab_strip_height",
            ),
            min_panel_extent: pick(
                self.min_panel_extent,
                defaults.min_panel_extent,
                "min_panel_extent",
            ),
            border_inset: pick(self.border_inset, defaults.border_inset, "border_inset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DockConfig::default();
        assert_eq!(config.resize_handle_size, 4.0);
        assert_eq!(config.tab_strip_height, 30.0);
        assert_eq!(config.min_panel_extent, 30.0);
        assert_eq!(config.border_inset, 1.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: DockConfig = serde_yaml::from_str("resize_handle_size: 6.0\n").unwrap();
        assert_eq!(config.resize_handle_size, 6.0);
        assert_eq!(config.tab_strip_height, 30.0);
    }

    #[test]
    fn test_sanitized_rejects_negative() {
        let config = DockConfig {
            min_panel_extent: -5.0,
            ..DockConfig::default()
        }
        .sanitized();
        assert_eq!(config.min_panel_extent, 30.0);
    }
}
