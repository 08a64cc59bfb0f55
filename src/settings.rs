//! Window and asset settings
//!
//! Read once at startup from `lander.json` in the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "lander.json";

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: "Lunar Lander A.V. edition".to_string(),
            vsync: true,
        }
    }
}

/// Sprite image locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: PathBuf,
    pub pillar: PathBuf,
    pub landing: PathBuf,
    /// 16x16 glyph atlas indexed by character code
    pub font: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: PathBuf::from("sprites/gundam.png"),
            pillar: PathBuf::from("sprites/flame_pillar.png"),
            landing: PathBuf::from("sprites/tile.png"),
            font: PathBuf::from("sprites/font1.png"),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub assets: AssetPaths,
}

impl Settings {
    /// Load from `lander.json`, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load from `path`. A missing file means defaults; a malformed one is
    /// reported and ignored.
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            log::info!("No {} found, using default settings", path.display());
            return Self::default();
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lunar-lander-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(Path::new("definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window.width, 960);
        assert_eq!(settings.window.height, 720);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_file(
            "partial.json",
            r#"{ "assets": { "font": "art/font.png" }, "window": { "vsync": false } }"#,
        );

        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.assets.font, PathBuf::from("art/font.png"));
        assert_eq!(settings.assets.player, AssetPaths::default().player);
        assert!(!settings.window.vsync);
        assert_eq!(settings.window.title, "Lunar Lander A.V. edition");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = scratch_file("broken.json", "{ not json");
        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
