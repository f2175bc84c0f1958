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

//! CPU-side management of the PBR companion atlases.
//!
//! For every color atlas the host stitches, a normal atlas and a specular
//! atlas with the same sprite placement may exist. This lane keeps their
//! sprites, uploads them through a [`TextureTarget`], keeps their animations
//! in phase with the color sprites, and ticks them afterwards.

mod pbr_atlas;
mod pbr_type;
mod sprite;
pub mod upload;

pub use pbr_atlas::{AtlasError, PbrAtlas, PbrAtlasHolder};
pub use pbr_type::PbrType;
pub use sprite::PbrSprite;
pub use upload::{CpuAtlasTexture, TextureTarget, UploadError};
