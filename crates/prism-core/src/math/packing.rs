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

//! Signed-normalized 8-bit packing for normals and tangents.
//!
//! Four components are clamped to `[-1.0, 1.0]`, scaled by 127, truncated
//! toward zero and stored as two's-complement bytes in an `i32`, `x` in the
//! lowest byte and `w` in the highest. This matches the `Snorm8x4` vertex format.

use super::{clamp, Vec3};

const COMPONENT_RANGE: f32 = 127.0;

#[inline]
fn pack_component(value: f32) -> u32 {
    // `as` truncates toward zero and maps NaN to 0.
    ((clamp(value, -1.0, 1.0) * COMPONENT_RANGE) as i32 as u32) & 0xFF
}

/// Packs four normalized components into a single `i32`.
///
/// # Examples
///
/// ```
/// use prism_core::math::pack_snorm8x4;
/// assert_eq!(pack_snorm8x4(0.0, 0.0, 1.0, 0.0), 0x007F_0000);
/// assert_eq!(pack_snorm8x4(-1.0, 0.0, 0.0, 0.0), 0x0000_0081);
/// ```
#[inline]
pub fn pack_snorm8x4(x: f32, y: f32, z: f32, w: f32) -> i32 {
    (pack_component(x)
        | (pack_component(y) << 8)
        | (pack_component(z) << 16)
        | (pack_component(w) << 24)) as i32
}

/// Packs a direction vector with a zero `w` component.
#[inline]
pub fn pack_normal(normal: Vec3) -> i32 {
    pack_snorm8x4(normal.x, normal.y, normal.z, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_axis_vectors() {
        assert_eq!(pack_normal(Vec3::X), 0x0000_007F);
        assert_eq!(pack_normal(Vec3::Y), 0x0000_7F00);
        assert_eq!(pack_normal(Vec3::Z), 0x007F_0000);
        assert_eq!(pack_normal(Vec3::new(0.0, 0.0, -1.0)), 0x0081_0000);
    }

    #[test]
    fn packs_handedness_into_high_byte() {
        let packed = pack_snorm8x4(1.0, 0.0, 0.0, -1.0);
        assert_eq!(packed as u32, 0x8100_007F);
        assert_eq!(packed.to_le_bytes()[3] as i8, -127);
    }

    #[test]
    fn nan_components_pack_to_zero() {
        assert_eq!(pack_snorm8x4(f32::NAN, f32::NAN, f32::NAN, 0.0), 0);
    }

    #[test]
    fn out_of_range_components_keep_their_sign() {
        assert_eq!(pack_snorm8x4(1.01, 0.0, 0.0, 0.0), 0x0000_007F);
        assert_eq!(pack_snorm8x4(0.0, -1.5, 0.0, 0.0) as u32, 0x0000_8100);
        assert_eq!(pack_snorm8x4(0.0, 0.0, 0.0, 2.0) as u32, 0x7F00_0000);
    }

    #[test]
    fn truncates_toward_zero() {
        // 0.5 * 127 = 63.5, truncated to 63.
        assert_eq!(pack_snorm8x4(0.5, 0.0, 0.0, 0.0), 63);
        assert_eq!(pack_snorm8x4(-0.5, 0.0, 0.0, 0.0) as u32, 0x0000_00C1);
    }
}
