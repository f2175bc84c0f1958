// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings for the PBR atlas and animation passes.
//!
//! Settings are plain data with sensible defaults; a shader pack or the host
//! can override any subset of them from RON text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings shared by all Prism passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismSettings {
    /// PBR companion atlas settings.
    pub pbr: PbrSettings,
    /// Sprite animation settings.
    pub animation: AnimationSettings,
}

/// Naming and fill values of the PBR companion atlases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbrSettings {
    /// Suffix appended to the color atlas path to name the normal atlas.
    pub normal_suffix: String,
    /// Suffix appended to the color atlas path to name the specular atlas.
    pub specular_suffix: String,
    /// RGBA value filling normal atlas texels that no sprite covers (a flat normal).
    pub normal_default: [u8; 4],
    /// RGBA value filling specular atlas texels that no sprite covers.
    pub specular_default: [u8; 4],
}

impl Default for PbrSettings {
    fn default() -> Self {
        Self {
            normal_suffix: "_n".to_string(),
            specular_suffix: "_s".to_string(),
            normal_default: [127, 127, 255, 255],
            specular_default: [0, 0, 0, 0],
        }
    }
}

/// Settings of the sprite animation passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// If `true`, PBR sprite tickers start in phase with their color sprite.
    /// Otherwise they start at their first frame.
    pub sync_with_base: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            sync_with_base: true,
        }
    }
}

/// An error raised while reading settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings text is not valid RON for [`PrismSettings`].
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(msg) => write!(f, "Failed to parse settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl PrismSettings {
    /// Parses settings from RON text. Missing fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_core::PrismSettings;
    /// let settings = PrismSettings::from_ron_str("(animation: (sync_with_base: false))").unwrap();
    /// assert!(!settings.animation.sync_with_base);
    /// assert_eq!(settings.pbr.normal_suffix, "_n");
    /// ```
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            ron::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))?;
        log::debug!("Loaded settings: {settings:?}");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = PrismSettings::default();
        assert_eq!(settings.pbr.normal_suffix, "_n");
        assert_eq!(settings.pbr.specular_suffix, "_s");
        assert_eq!(settings.pbr.normal_default, [127, 127, 255, 255]);
        assert_eq!(settings.pbr.specular_default, [0, 0, 0, 0]);
        assert!(settings.animation.sync_with_base);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let settings =
            PrismSettings::from_ron_str(r#"(pbr: (specular_suffix: "_spec"))"#).unwrap();
        assert_eq!(settings.pbr.specular_suffix, "_spec");
        assert_eq!(settings.pbr.normal_suffix, "_n");
        assert!(settings.animation.sync_with_base);
    }

    #[test]
    fn invalid_text_is_reported() {
        let err = PrismSettings::from_ron_str("(pbr: 3)").unwrap_err();
        assert!(format!("{err}").starts_with("Failed to parse settings:"));
    }
}
