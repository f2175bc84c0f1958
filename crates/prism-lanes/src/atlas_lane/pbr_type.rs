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

//! The kinds of PBR companion atlas.

use prism_core::settings::PbrSettings;

/// Which material property a PBR atlas carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PbrType {
    /// Tangent-space normal maps.
    Normal,
    /// Specular / roughness / metalness maps.
    Specular,
}

impl PbrType {
    /// Suffix appended to the color atlas path to name this atlas.
    pub fn suffix<'a>(&self, settings: &'a PbrSettings) -> &'a str {
        match self {
            PbrType::Normal => &settings.normal_suffix,
            PbrType::Specular => &settings.specular_suffix,
        }
    }

    /// RGBA value of texels no sprite covers.
    pub fn default_color(&self, settings: &PbrSettings) -> [u8; 4] {
        match self {
            PbrType::Normal => settings.normal_default,
            PbrType::Specular => settings.specular_default,
        }
    }
}
