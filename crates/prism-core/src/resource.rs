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

//! Namespaced resource identifiers, as used by the host's resource manager.

use std::fmt;

/// Namespace assumed when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A `namespace:path` identifier of an atlas, sprite or texture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Creates an identifier from its two parts.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Parses `namespace:path`, or `path` alone with the [`DEFAULT_NAMESPACE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_core::ResourceLocation;
    /// let id = ResourceLocation::parse("mymod:textures/atlas/blocks.png");
    /// assert_eq!(id.namespace(), "mymod");
    /// assert_eq!(id.path(), "textures/atlas/blocks.png");
    /// ```
    pub fn parse(text: &str) -> Self {
        match text.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() => Self::new(namespace, path),
            Some((_, path)) => Self::new(DEFAULT_NAMESPACE, path),
            None => Self::new(DEFAULT_NAMESPACE, text),
        }
    }

    /// The namespace part.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path part.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a flat name usable as a file name (`/` and `:` replaced by `_`).
    pub fn to_debug_file_name(&self) -> String {
        self.to_string().replace(['/', ':'], "_")
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_namespace_uses_default() {
        let id = ResourceLocation::parse("textures/atlas/blocks.png");
        assert_eq!(id.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(id.to_string(), "minecraft:textures/atlas/blocks.png");
    }

    #[test]
    fn debug_file_name_is_flat() {
        let id = ResourceLocation::new("mymod", "textures/atlas/blocks_n.png");
        assert_eq!(id.to_debug_file_name(), "mymod_textures_atlas_blocks_n.png");
    }
}
