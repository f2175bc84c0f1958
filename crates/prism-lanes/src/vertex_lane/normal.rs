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

//! Face normal and tangent computation for quads.

use super::QuadView;
use prism_core::math::{pack_snorm8x4, Vec3};

/// Computes the unit face normal of a quad from the cross product of its diagonals.
///
/// Using the diagonals instead of two edges gives the same answer for planar
/// quads and a stable average for slightly non-planar ones. Counter-clockwise
/// winding yields a normal pointing towards the viewer. A degenerate quad
/// returns [`Vec3::ZERO`].
pub fn compute_face_normal(quad: &QuadView<'_>) -> Vec3 {
    let diagonal_a = quad.position(2) - quad.position(0);
    let diagonal_b = quad.position(3) - quad.position(1);
    diagonal_a.cross(diagonal_b).normalize()
}

/// Computes the packed tangent of a quad.
///
/// The tangent follows the direction in which the `u` texture coordinate grows
/// across the first triangle. The `w` component is `-1` when the bitangent
/// (direction of growing `v`) points against `tangent × normal` and `+1`
/// otherwise. Degenerate edges or texture coordinates produce a zero tangent
/// with `w = +1`.
pub fn compute_tangent(normal: Vec3, quad: &QuadView<'_>) -> i32 {
    let p0 = quad.position(0);
    let edge1 = quad.position(1) - p0;
    let edge2 = quad.position(2) - p0;

    let uv0 = quad.tex_coord(0);
    let delta1 = quad.tex_coord(1) - uv0;
    let delta2 = quad.tex_coord(2) - uv0;

    let denom = delta1.x * delta2.y - delta2.x * delta1.y;
    let f = if denom == 0.0 { 1.0 } else { 1.0 / denom };

    let tangent = ((edge1 * delta2.y - edge2 * delta1.y) * f).normalize();
    let bitangent = ((edge2 * delta1.x - edge1 * delta2.x) * f).normalize();

    let predicted_bitangent = tangent.cross(normal);
    let w = if bitangent.dot(predicted_bitangent) < 0.0 {
        -1.0
    } else {
        1.0
    };

    pack_snorm8x4(tangent.x, tangent.y, tangent.z, w)
}
