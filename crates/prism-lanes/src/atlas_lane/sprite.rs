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

//! Sprites placed in a PBR atlas.

use super::upload::{TextureTarget, UploadError};
use prism_core::{
    animation::{FrameSequence, SpriteTicker},
    math::{Extent2D, Origin2D},
    ResourceLocation,
};

/// A PBR sprite: its place in the atlas, its frame images and its animation.
///
/// A PBR sprite always belongs to a color sprite of the same name. If that
/// color sprite is animated, its ticker state is attached with
/// [`with_base_ticker`](Self::with_base_ticker) so the PBR animation can start
/// in phase with it.
#[derive(Debug, Clone)]
pub struct PbrSprite {
    name: ResourceLocation,
    origin: Origin2D,
    size: Extent2D,
    frames: Vec<Vec<u8>>,
    animation: Option<FrameSequence>,
    base_ticker: Option<SpriteTicker>,
}

impl PbrSprite {
    /// Creates a sprite from its RGBA8 frame images, one per sprite frame index.
    pub fn new(
        name: ResourceLocation,
        origin: Origin2D,
        size: Extent2D,
        frames: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            name,
            origin,
            size,
            frames,
            animation: None,
            base_ticker: None,
        }
    }

    /// Attaches the sprite's own frame sequence.
    pub fn with_animation(mut self, animation: FrameSequence) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Attaches the current ticker state of the color sprite this sprite belongs to.
    pub fn with_base_ticker(mut self, ticker: SpriteTicker) -> Self {
        self.base_ticker = Some(ticker);
        self
    }

    /// The sprite's name.
    pub fn name(&self) -> &ResourceLocation {
        &self.name
    }

    /// Top-left corner of the sprite in the atlas.
    pub fn origin(&self) -> Origin2D {
        self.origin
    }

    /// Size of one frame.
    pub fn size(&self) -> Extent2D {
        self.size
    }

    /// The ticker of the color sprite, if it is animated.
    pub fn base_ticker(&self) -> Option<&SpriteTicker> {
        self.base_ticker.as_ref()
    }

    /// Creates a ticker for this sprite, or `None` if it is not animated.
    pub fn create_ticker(&self) -> Option<SpriteTicker> {
        self.animation
            .as_ref()
            .filter(|seq| seq.is_animated())
            .map(|seq| SpriteTicker::new(seq.clone()))
    }

    /// Uploads frame image `index` to the sprite's place in `target`.
    pub fn upload_frame(
        &self,
        target: &mut dyn TextureTarget,
        index: usize,
    ) -> Result<(), UploadError> {
        let pixels = self
            .frames
            .get(index)
            .ok_or(UploadError::MissingFrame { index })?;
        target.upload_sub_image(self.origin, self.size, pixels)
    }

    /// Uploads the image shown by the first frame of the sprite's animation
    /// (frame image `0` when it is not animated).
    pub fn upload_first_frame(&self, target: &mut dyn TextureTarget) -> Result<(), UploadError> {
        let index = self
            .animation
            .as_ref()
            .and_then(|seq| seq.sprite_index(0))
            .unwrap_or(0);
        self.upload_frame(target, index)
    }
}
