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

//! Read-only typed access to the four vertices of one quad.

use prism_core::math::{Vec2, Vec3};

/// A view of four consecutive vertices in a raw vertex buffer.
///
/// Accessors panic if the view was built over fewer than `4 * stride` bytes;
/// [`QuadView::new`] checks this once so the accessors stay cheap.
#[derive(Debug, Clone, Copy)]
pub struct QuadView<'a> {
    bytes: &'a [u8],
    stride: usize,
    position_offset: usize,
    tex_coord_offset: usize,
}

impl<'a> QuadView<'a> {
    /// Creates a view over `bytes`, or `None` if they cannot hold four vertices
    /// or the attribute offsets fall outside a vertex.
    pub fn new(
        bytes: &'a [u8],
        stride: usize,
        position_offset: usize,
        tex_coord_offset: usize,
    ) -> Option<Self> {
        let fits = position_offset + 12 <= stride && tex_coord_offset + 8 <= stride;
        if !fits || bytes.len() < stride * 4 {
            return None;
        }
        Some(Self {
            bytes,
            stride,
            position_offset,
            tex_coord_offset,
        })
    }

    /// Creates a view whose offsets were already checked against the layout
    /// that `bytes` is laid out in.
    pub(crate) fn from_validated(
        bytes: &'a [u8],
        stride: usize,
        position_offset: usize,
        tex_coord_offset: usize,
    ) -> Self {
        Self {
            bytes,
            stride,
            position_offset,
            tex_coord_offset,
        }
    }

    /// Position of vertex `i` (0..4).
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        let start = i * self.stride + self.position_offset;
        bytemuck::pod_read_unaligned(&self.bytes[start..start + 12])
    }

    /// Texture coordinate of vertex `i` (0..4).
    #[inline]
    pub fn tex_coord(&self, i: usize) -> Vec2 {
        let start = i * self.stride + self.tex_coord_offset;
        bytemuck::pod_read_unaligned(&self.bytes[start..start + 8])
    }
}
