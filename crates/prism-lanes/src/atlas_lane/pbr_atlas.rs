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

//! A PBR companion atlas and the holder that links it to its color atlas.

use super::{
    upload::{CpuAtlasTexture, TextureTarget, UploadError},
    PbrSprite, PbrType,
};
use crate::animation_lane::sync_animation;
use ahash::AHashMap;
use anyhow::Context;
use prism_core::{
    animation::SpriteTicker,
    settings::{PbrSettings, PrismSettings},
    ResourceLocation,
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use thiserror::Error;

/// An error raised while uploading or animating a PBR atlas.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// One sprite could not be uploaded; the atlas upload was aborted.
    #[error("Failed to stitch sprite '{sprite}' into atlas '{atlas}'")]
    SpriteUpload {
        /// Id of the atlas being stitched.
        atlas: ResourceLocation,
        /// Name of the sprite that failed.
        sprite: ResourceLocation,
        /// What went wrong.
        #[source]
        source: UploadError,
    },
}

/// Links a color atlas to the PBR atlases uploaded for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PbrAtlasHolder {
    normal: Option<ResourceLocation>,
    specular: Option<ResourceLocation>,
}

impl PbrAtlasHolder {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the registered atlas of the given type.
    pub fn get(&self, pbr_type: PbrType) -> Option<&ResourceLocation> {
        self.slot(pbr_type).as_ref()
    }

    fn slot(&self, pbr_type: PbrType) -> &Option<ResourceLocation> {
        match pbr_type {
            PbrType::Normal => &self.normal,
            PbrType::Specular => &self.specular,
        }
    }

    fn slot_mut(&mut self, pbr_type: PbrType) -> &mut Option<ResourceLocation> {
        match pbr_type {
            PbrType::Normal => &mut self.normal,
            PbrType::Specular => &mut self.specular,
        }
    }

    fn register(&mut self, pbr_type: PbrType, id: ResourceLocation) {
        *self.slot_mut(pbr_type) = Some(id);
    }

    fn unregister(&mut self, pbr_type: PbrType, id: &ResourceLocation) {
        let slot = self.slot_mut(pbr_type);
        if slot.as_ref() == Some(id) {
            *slot = None;
        }
    }
}

#[derive(Debug)]
struct AnimatedSprite {
    sprite: ResourceLocation,
    ticker: SpriteTicker,
}

/// A normal or specular atlas that mirrors the layout of a color atlas.
#[derive(Debug)]
pub struct PbrAtlas {
    pbr_type: PbrType,
    id: ResourceLocation,
    fill_color: [u8; 4],
    sync_with_base: bool,
    sprites: AHashMap<ResourceLocation, PbrSprite>,
    animated: Vec<AnimatedSprite>,
}

impl PbrAtlas {
    /// Creates an empty atlas of `pbr_type` for the color atlas at `atlas_location`,
    /// using the default settings.
    pub fn new(atlas_location: &ResourceLocation, pbr_type: PbrType) -> Self {
        Self::with_settings(atlas_location, pbr_type, &PrismSettings::default())
    }

    /// Creates an empty atlas using explicit settings.
    ///
    /// The atlas id is the color atlas path without its `.png` extension,
    /// followed by the type suffix and `.png`.
    pub fn with_settings(
        atlas_location: &ResourceLocation,
        pbr_type: PbrType,
        settings: &PrismSettings,
    ) -> Self {
        let pbr: &PbrSettings = &settings.pbr;
        let path = format!(
            "{}{}.png",
            atlas_location.path().replace(".png", ""),
            pbr_type.suffix(pbr)
        );
        Self {
            pbr_type,
            id: ResourceLocation::new(atlas_location.namespace(), path),
            fill_color: pbr_type.default_color(pbr),
            sync_with_base: settings.animation.sync_with_base,
            sprites: AHashMap::new(),
            animated: Vec::new(),
        }
    }

    /// The material property this atlas carries.
    pub fn pbr_type(&self) -> PbrType {
        self.pbr_type
    }

    /// The id of this atlas.
    pub fn atlas_id(&self) -> &ResourceLocation {
        &self.id
    }

    /// Adds a sprite, replacing any sprite of the same name.
    pub fn add_sprite(&mut self, sprite: PbrSprite) {
        self.sprites.insert(sprite.name().clone(), sprite);
    }

    /// Looks up a sprite by name.
    pub fn sprite(&self, name: &ResourceLocation) -> Option<&PbrSprite> {
        self.sprites.get(name)
    }

    /// Number of sprites in the atlas.
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Number of sprites with a running animation.
    pub fn animated_count(&self) -> usize {
        self.animated.len()
    }

    /// Current position of the animation of sprite `name`, if it is animated
    /// and the atlas has been uploaded.
    pub fn ticker(&self, name: &ResourceLocation) -> Option<&SpriteTicker> {
        self.animated
            .iter()
            .find(|a| &a.sprite == name)
            .map(|a| &a.ticker)
    }

    /// Prepares `target`, fills it with the default color of this atlas type and
    /// uploads every sprite, then registers the atlas in `holder`.
    ///
    /// Animated sprites whose color sprite is animated start in phase with it.
    /// The first sprite that fails aborts the upload; the error names the atlas
    /// and the sprite. On failure the atlas is not registered.
    pub fn upload(
        &mut self,
        target: &mut dyn TextureTarget,
        holder: &mut PbrAtlasHolder,
        width: u32,
        height: u32,
        mip_level: u32,
    ) -> Result<(), AtlasError> {
        target.prepare_image(mip_level, width, height);
        target.fill_with_color(self.fill_color);
        self.animated.clear();

        let mut names: Vec<&ResourceLocation> = self.sprites.keys().collect();
        names.sort();
        for name in names {
            let sprite = &self.sprites[name];
            let animated =
                upload_sprite(sprite, target, self.sync_with_base).map_err(|source| {
                    AtlasError::SpriteUpload {
                        atlas: self.id.clone(),
                        sprite: name.clone(),
                        source,
                    }
                })?;
            if let Some(ticker) = animated {
                self.animated.push(AnimatedSprite {
                    sprite: name.clone(),
                    ticker,
                });
            }
        }

        log::debug!(
            "Uploaded PBR atlas '{}' ({}x{}, {} sprites, {} animated)",
            self.id,
            width,
            height,
            self.sprites.len(),
            self.animated.len()
        );
        holder.register(self.pbr_type, self.id.clone());
        Ok(())
    }

    /// Like [`upload`](Self::upload), but logs a failure and returns `false`
    /// instead of propagating it.
    pub fn try_upload(
        &mut self,
        target: &mut dyn TextureTarget,
        holder: &mut PbrAtlasHolder,
        width: u32,
        height: u32,
        mip_level: u32,
    ) -> bool {
        match self.upload(target, holder, width, height, mip_level) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{:#}", anyhow::Error::new(e));
                false
            }
        }
    }

    /// Advances every animated sprite by one tick and uploads the sprites whose
    /// image changed.
    ///
    /// Every ticker advances even if an upload fails, so animations stay in
    /// phase; the first failure is returned after the loop.
    pub fn cycle_animation_frames(
        &mut self,
        target: &mut dyn TextureTarget,
    ) -> Result<(), AtlasError> {
        let mut first_error = None;
        for animated in &mut self.animated {
            let Some(index) = animated.ticker.tick() else {
                continue;
            };
            let Some(sprite) = self.sprites.get(&animated.sprite) else {
                continue;
            };
            if let Err(source) = sprite.upload_frame(target, index) {
                log::warn!("Failed to upload frame {index} of '{}': {source}", animated.sprite);
                first_error.get_or_insert(AtlasError::SpriteUpload {
                    atlas: self.id.clone(),
                    sprite: animated.sprite.clone(),
                    source,
                });
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drops every sprite and animation.
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing PBR atlas '{}' ({} sprites)",
            self.id,
            self.sprites.len()
        );
        self.animated.clear();
        self.sprites.clear();
    }

    /// Unregisters the atlas from `holder` (if it is the registered one) and clears it.
    pub fn close(&mut self, holder: &mut PbrAtlasHolder) {
        holder.unregister(self.pbr_type, &self.id);
        self.clear();
    }

    /// Writes one line per sprite, sorted by name:
    /// `name\tx=..\ty=..\tw=..\th=..`.
    pub fn dump_sprite_names(&self, writer: &mut dyn Write) -> io::Result<()> {
        let mut sprites: Vec<&PbrSprite> = self.sprites.values().collect();
        sprites.sort_by(|a, b| a.name().cmp(b.name()));
        for sprite in sprites {
            writeln!(
                writer,
                "{}\tx={}\ty={}\tw={}\th={}",
                sprite.name(),
                sprite.origin().x,
                sprite.origin().y,
                sprite.size().width,
                sprite.size().height
            )?;
        }
        Ok(())
    }

    /// Writes the base level of `texture` as `<debug name>_0.png` and the sprite
    /// list as `<debug name>.txt` into `dir`.
    ///
    /// A failure to write the sprite list is only logged.
    pub fn dump_contents(&self, dir: &Path, texture: &CpuAtlasTexture) -> anyhow::Result<()> {
        let name = self.id.to_debug_file_name();

        let png_path = dir.join(format!("{name}_0.png"));
        let size = texture.size();
        let image = image::RgbaImage::from_raw(size.width, size.height, texture.pixels().to_vec())
            .context("Atlas pixel buffer does not match its size")?;
        image
            .save(&png_path)
            .with_context(|| format!("Failed to write {}", png_path.display()))?;

        let txt_path = dir.join(format!("{name}.txt"));
        let written = File::create(&txt_path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            self.dump_sprite_names(&mut writer)?;
            writer.flush()
        });
        if let Err(e) = written {
            log::warn!("Failed to write file {}: {e}", txt_path.display());
        }
        Ok(())
    }
}

/// Uploads one sprite and returns its ticker if it is animated.
fn upload_sprite(
    sprite: &PbrSprite,
    target: &mut dyn TextureTarget,
    sync_with_base: bool,
) -> Result<Option<SpriteTicker>, UploadError> {
    let Some(mut ticker) = sprite.create_ticker() else {
        sprite.upload_first_frame(target)?;
        return Ok(None);
    };

    let base = sprite.base_ticker().filter(|_| sync_with_base);
    if let Some(base) = base {
        match sync_animation(base, &mut ticker) {
            Ok(()) => {
                let index = ticker.current_sprite_index().unwrap_or(0);
                sprite.upload_frame(target, index)?;
                return Ok(Some(ticker));
            }
            Err(e) => log::warn!("Skipping animation sync of '{}': {e}", sprite.name()),
        }
    }

    sprite.upload_first_frame(target)?;
    Ok(Some(ticker))
}
