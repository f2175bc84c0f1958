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

//! Serializes base-format quads into the extended vertex format.

use super::{compute_face_normal, compute_tangent, QuadView};
use prism_core::{
    math::{pack_normal, Vec2},
    render_state::RenderStateSnapshot,
    vertex::{LayoutError, VertexElement, VertexFormat, VertexLayout},
};
use thiserror::Error;

const VERTICES_PER_QUAD: usize = 4;

/// An error raised by [`QuadAugmentLane::serialize`]. Nothing is written when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AugmentError {
    /// The vertex count does not describe whole quads.
    #[error("Vertex count {vertex_count} is not a multiple of 4")]
    InvalidArgument {
        /// The rejected vertex count.
        vertex_count: usize,
    },
    /// A buffer cannot hold `vertex_count` vertices in its layout.
    #[error("The {buffer} buffer holds {actual} bytes but {required} are required")]
    BufferTooSmall {
        /// Which buffer was too small (`"source"` or `"destination"`).
        buffer: &'static str,
        /// Bytes needed for the requested vertex count.
        required: usize,
        /// Bytes available.
        actual: usize,
    },
}

/// A lane that converts quads from a base layout into an extended layout.
///
/// Every attribute of the base layout is copied verbatim. Each vertex also
/// receives the entity, block entity and item identifiers of the current
/// render state, and every vertex of a quad receives the same mid texture
/// coordinate, packed face normal and packed tangent.
#[derive(Debug, Clone)]
pub struct QuadAugmentLane {
    source_stride: usize,
    destination_stride: usize,
    position: usize,
    tex_coord: usize,
    normal: usize,
    entity_ids: usize,
    mid_tex_coord: usize,
    tangent: usize,
}

impl QuadAugmentLane {
    /// Resolves the offsets this lane needs from the two layouts.
    ///
    /// The destination layout must begin with every attribute of the source
    /// layout and also contain a normal, identifiers, a mid texture coordinate
    /// and a tangent. Positions must be `Float32x3`, texture coordinates
    /// `Float32x2`, normal and tangent `Snorm8x4` and identifiers `Uint16x3`.
    pub fn new(source: &VertexLayout, destination: &VertexLayout) -> Result<Self, LayoutError> {
        if !destination.starts_with(source) {
            return Err(LayoutError::IncompatiblePrefix {
                source: source.name(),
                destination: destination.name(),
            });
        }

        let lane = Self {
            source_stride: source.stride(),
            destination_stride: destination.stride(),
            position: source.require(VertexElement::Position, VertexFormat::Float32x3)?,
            tex_coord: source.require(VertexElement::TexCoord, VertexFormat::Float32x2)?,
            normal: destination.require(VertexElement::Normal, VertexFormat::Snorm8x4)?,
            entity_ids: destination.require(VertexElement::EntityIds, VertexFormat::Uint16x3)?,
            mid_tex_coord: destination
                .require(VertexElement::MidTexCoord, VertexFormat::Float32x2)?,
            tangent: destination.require(VertexElement::Tangent, VertexFormat::Snorm8x4)?,
        };

        log::debug!(
            "Quad augmentation: '{}' ({} bytes) -> '{}' ({} bytes)",
            source.name(),
            lane.source_stride,
            destination.name(),
            lane.destination_stride
        );
        Ok(lane)
    }

    /// The lane for the host's base format and the extended glyph format.
    pub fn glyph() -> Self {
        Self {
            source_stride: 28,
            destination_stride: 52,
            position: 0,
            tex_coord: 16,
            normal: 28,
            entity_ids: 32,
            mid_tex_coord: 40,
            tangent: 48,
        }
    }

    /// Bytes per vertex in the source buffer.
    pub fn source_stride(&self) -> usize {
        self.source_stride
    }

    /// Bytes per vertex in the destination buffer.
    pub fn destination_stride(&self) -> usize {
        self.destination_stride
    }

    /// Converts `vertex_count` vertices from `src` into `dst`.
    ///
    /// Both buffers are validated before anything is written, so on error
    /// `dst` is untouched. Bytes of `dst` past `vertex_count` vertices are
    /// never modified.
    pub fn serialize(
        &self,
        src: &[u8],
        dst: &mut [u8],
        vertex_count: usize,
        state: &dyn RenderStateSnapshot,
    ) -> Result<(), AugmentError> {
        if vertex_count % VERTICES_PER_QUAD != 0 {
            return Err(AugmentError::InvalidArgument { vertex_count });
        }

        let src_required = vertex_count * self.source_stride;
        if src.len() < src_required {
            return Err(AugmentError::BufferTooSmall {
                buffer: "source",
                required: src_required,
                actual: src.len(),
            });
        }
        let dst_required = vertex_count * self.destination_stride;
        if dst.len() < dst_required {
            return Err(AugmentError::BufferTooSmall {
                buffer: "destination",
                required: dst_required,
                actual: dst.len(),
            });
        }

        let ids = [state.entity_id(), state.block_entity_id(), state.item_id()];

        let src_quads = src[..src_required].chunks_exact(self.source_stride * VERTICES_PER_QUAD);
        let dst_quads =
            dst[..dst_required].chunks_exact_mut(self.destination_stride * VERTICES_PER_QUAD);
        for (src_quad, dst_quad) in src_quads.zip(dst_quads) {
            self.augment_quad(src_quad, dst_quad, ids);
        }
        Ok(())
    }

    fn augment_quad(&self, src: &[u8], dst: &mut [u8], ids: [u16; 3]) {
        // Offsets were checked against the layout formats in `new`.
        let quad =
            QuadView::from_validated(src, self.source_stride, self.position, self.tex_coord);

        let mid_uv = (0..VERTICES_PER_QUAD)
            .map(|i| quad.tex_coord(i))
            .fold(Vec2::ZERO, |sum, uv| sum + uv)
            * 0.25;
        let normal = compute_face_normal(&quad);
        let packed_normal = pack_normal(normal);
        let packed_tangent = compute_tangent(normal, &quad);

        let src_vertices = src.chunks_exact(self.source_stride);
        let dst_vertices = dst.chunks_exact_mut(self.destination_stride);
        for (s, d) in src_vertices.zip(dst_vertices) {
            d[..self.source_stride].copy_from_slice(s);
            for (k, id) in ids.iter().enumerate() {
                let at = self.entity_ids + k * 2;
                d[at..at + 2].copy_from_slice(&id.to_ne_bytes());
            }
            d[self.mid_tex_coord..self.mid_tex_coord + 8]
                .copy_from_slice(bytemuck::bytes_of(&mid_uv));
            d[self.normal..self.normal + 4].copy_from_slice(&packed_normal.to_ne_bytes());
            d[self.tangent..self.tangent + 4].copy_from_slice(&packed_tangent.to_ne_bytes());
        }
    }
}

impl Default for QuadAugmentLane {
    fn default() -> Self {
        Self::glyph()
    }
}
