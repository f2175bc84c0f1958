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

//! Provides the small set of mathematics primitives the Prism passes need.
//!
//! Vertex augmentation works on per-quad positions and texture coordinates,
//! so this module only carries 2D and 3D `f32` vectors, integer extents for
//! atlas regions, and the signed-normalized packing used for vertex normals
//! and tangents.

// --- Fundamental Constants ---

/// Vectors shorter than this are treated as zero length.
pub const EPSILON: f32 = 1e-5;

// --- Declare Sub-Modules ---

pub mod dimension;
pub mod packing;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::dimension::{Extent2D, Origin2D};
pub use self::packing::{pack_normal, pack_snorm8x4};
pub use self::vector::{Vec2, Vec3};

// --- Utility Functions ---

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use prism_core::math::clamp;
/// assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
/// assert_eq!(clamp(-3.0, -1.0, 1.0), -1.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}
