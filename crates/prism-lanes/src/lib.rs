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

//! # Prism Lanes
//!
//! Hot-path passes built on the contracts of `prism-core`:
//!
//! - [`vertex_lane`]: augments base-format quads with mid texture coordinates,
//!   packed normals and tangents, and entity/block entity/item identifiers.
//! - [`animation_lane`]: puts a PBR sprite ticker in phase with its color sprite.
//! - [`atlas_lane`]: the CPU side of the PBR companion atlases, which drives
//!   the animation lane when sprites are uploaded and ticked.

#![warn(missing_docs)]

pub mod animation_lane;
pub mod atlas_lane;
pub mod vertex_lane;

pub use animation_lane::{sync_animation, AnimationError};
pub use atlas_lane::{AtlasError, PbrAtlas, PbrAtlasHolder, PbrSprite, PbrType};
pub use vertex_lane::{AugmentError, QuadAugmentLane};
