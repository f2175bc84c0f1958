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

//! The seam between atlas bookkeeping and the host's texture upload.

use prism_core::math::{Extent2D, Origin2D};
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 4;

/// An error raised while copying pixels into a texture target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The sub image does not fit inside the prepared image.
    #[error(
        "Sub image {width}x{height} at ({x}, {y}) exceeds the {target_width}x{target_height} target"
    )]
    OutOfBounds {
        /// Left edge of the sub image.
        x: u32,
        /// Top edge of the sub image.
        y: u32,
        /// Width of the sub image.
        width: u32,
        /// Height of the sub image.
        height: u32,
        /// Width of the prepared image.
        target_width: u32,
        /// Height of the prepared image.
        target_height: u32,
    },
    /// The pixel data does not match the sub image size.
    #[error("Sub image needs {expected} bytes of RGBA data, got {actual}")]
    SizeMismatch {
        /// Bytes implied by the extent.
        expected: usize,
        /// Bytes provided.
        actual: usize,
    },
    /// The sprite has no image for the requested frame.
    #[error("Sprite has no image for frame index {index}")]
    MissingFrame {
        /// The requested sprite frame index.
        index: usize,
    },
}

/// Receives atlas pixels. The host implements this over its GPU texture.
pub trait TextureTarget {
    /// (Re)allocates the image with the given base size and mip level count.
    fn prepare_image(&mut self, mip_level: u32, width: u32, height: u32);
    /// Sets every texel of the image to `rgba`.
    fn fill_with_color(&mut self, rgba: [u8; 4]);
    /// Copies tightly packed RGBA8 `pixels` into the region at `origin`.
    fn upload_sub_image(
        &mut self,
        origin: Origin2D,
        extent: Extent2D,
        pixels: &[u8],
    ) -> Result<(), UploadError>;
}

/// A CPU-side RGBA8 texture target.
///
/// Only the base level is stored; the mip level count is recorded so callers
/// can forward it to the GPU.
#[derive(Debug, Clone, Default)]
pub struct CpuAtlasTexture {
    /// The raw RGBA8 pixel data, row-major.
    pixels: Vec<u8>,
    /// The size of the base level.
    size: Extent2D,
    /// The highest mip level the image was prepared with.
    mip_level: u32,
}

impl CpuAtlasTexture {
    /// Creates an empty texture. Call [`TextureTarget::prepare_image`] before uploading.
    pub fn new() -> Self {
        Self::default()
    }

    /// The size of the base level.
    pub fn size(&self) -> Extent2D {
        self.size
    }

    /// The highest mip level the image was prepared with.
    pub fn mip_level(&self) -> u32 {
        self.mip_level
    }

    /// All pixels of the base level.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let start = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
        Some(rgba)
    }
}

impl TextureTarget for CpuAtlasTexture {
    fn prepare_image(&mut self, mip_level: u32, width: u32, height: u32) {
        self.size = Extent2D::new(width, height);
        self.mip_level = mip_level;
        self.pixels = vec![0; self.size.area() * BYTES_PER_PIXEL];
    }

    fn fill_with_color(&mut self, rgba: [u8; 4]) {
        for texel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            texel.copy_from_slice(&rgba);
        }
    }

    fn upload_sub_image(
        &mut self,
        origin: Origin2D,
        extent: Extent2D,
        pixels: &[u8],
    ) -> Result<(), UploadError> {
        let expected = extent.area() * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(UploadError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let fits_x = origin.x as u64 + extent.width as u64 <= self.size.width as u64;
        let fits_y = origin.y as u64 + extent.height as u64 <= self.size.height as u64;
        if !fits_x || !fits_y {
            return Err(UploadError::OutOfBounds {
                x: origin.x,
                y: origin.y,
                width: extent.width,
                height: extent.height,
                target_width: self.size.width,
                target_height: self.size.height,
            });
        }

        let row_bytes = extent.width as usize * BYTES_PER_PIXEL;
        let target_row_bytes = self.size.width as usize * BYTES_PER_PIXEL;
        if row_bytes == 0 {
            return Ok(());
        }
        for (row, src_row) in pixels.chunks_exact(row_bytes).enumerate() {
            let start = (origin.y as usize + row) * target_row_bytes
                + origin.x as usize * BYTES_PER_PIXEL;
            self.pixels[start..start + row_bytes].copy_from_slice(src_row);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_then_upload_region() {
        let mut texture = CpuAtlasTexture::new();
        texture.prepare_image(0, 4, 4);
        texture.fill_with_color([1, 2, 3, 4]);
        assert_eq!(texture.pixel(3, 3), Some([1, 2, 3, 4]));

        let red = [255u8, 0, 0, 255].repeat(4);
        texture
            .upload_sub_image(Origin2D::new(2, 1), Extent2D::new(2, 2), &red)
            .unwrap();
        assert_eq!(texture.pixel(2, 1), Some([255, 0, 0, 255]));
        assert_eq!(texture.pixel(3, 2), Some([255, 0, 0, 255]));
        assert_eq!(texture.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(texture.pixel(2, 3), Some([1, 2, 3, 4]));
        assert_eq!(texture.pixel(4, 0), None);
    }

    #[test]
    fn rejects_out_of_bounds_region() {
        let mut texture = CpuAtlasTexture::new();
        texture.prepare_image(0, 4, 4);
        let err = texture
            .upload_sub_image(Origin2D::new(3, 0), Extent2D::new(2, 1), &[0; 8])
            .unwrap_err();
        assert!(matches!(err, UploadError::OutOfBounds { x: 3, .. }));
    }

    #[test]
    fn rejects_mismatched_pixel_data() {
        let mut texture = CpuAtlasTexture::new();
        texture.prepare_image(2, 4, 4);
        assert_eq!(texture.mip_level(), 2);
        let err = texture
            .upload_sub_image(Origin2D::new(0, 0), Extent2D::new(2, 2), &[0; 15])
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::SizeMismatch {
                expected: 16,
                actual: 15
            }
        );
    }
}
