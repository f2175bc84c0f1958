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

//! Per-attribute memory formats.

/// The memory format of a single vertex attribute's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    /// Four 8-bit unsigned integer components normalized to `[0.0, 1.0]`.
    Unorm8x4,
    /// Four 8-bit signed integer components normalized to `[-1.0, 1.0]`.
    Snorm8x4,
    /// Three 8-bit signed normalized components, packed without padding.
    Snorm8x3,
    /// Two 16-bit unsigned integer components.
    Uint16x2,
    /// Three 16-bit unsigned integer components.
    Uint16x3,
    /// Two 16-bit signed integer components.
    Sint16x2,
    /// One 32-bit float component.
    Float32,
    /// Two 32-bit float components.
    Float32x2,
    /// Three 32-bit float components.
    Float32x3,
    /// Four 32-bit float components.
    Float32x4,
    /// One unused byte.
    Padding8,
    /// Two unused bytes.
    Padding16,
}

impl VertexFormat {
    /// Returns the size in bytes of this vertex format
    pub fn size(&self) -> usize {
        match self {
            VertexFormat::Unorm8x4 => 4,
            VertexFormat::Snorm8x4 => 4,
            VertexFormat::Snorm8x3 => 3,
            VertexFormat::Uint16x2 => 4,
            VertexFormat::Uint16x3 => 6,
            VertexFormat::Sint16x2 => 4,
            VertexFormat::Float32 => 4,
            VertexFormat::Float32x2 => 8,
            VertexFormat::Float32x3 => 12,
            VertexFormat::Float32x4 => 16,
            VertexFormat::Padding8 => 1,
            VertexFormat::Padding16 => 2,
        }
    }

    /// Returns `true` for the formats that only reserve space.
    pub fn is_padding(&self) -> bool {
        matches!(self, VertexFormat::Padding8 | VertexFormat::Padding16)
    }
}

/// The semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexElement {
    /// Object-space position.
    Position,
    /// Packed RGBA color.
    Color,
    /// Primary texture coordinate.
    TexCoord,
    /// Packed block/sky light coordinates.
    Light,
    /// Packed face normal.
    Normal,
    /// Entity, block entity and item identifiers of the object being drawn.
    EntityIds,
    /// Mean texture coordinate of the quad the vertex belongs to.
    MidTexCoord,
    /// Packed tangent; the `w` byte holds the handedness sign.
    Tangent,
    /// Unused bytes inserted for alignment.
    Padding,
}
