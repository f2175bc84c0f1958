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

//! Vertex layouts and the stock layouts used by the augmentation pass.

use super::{LayoutError, VertexElement, VertexFormat};

/// Describes a single vertex attribute within a vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttributeDescriptor {
    /// What the attribute holds.
    pub element: VertexElement,
    /// The format of the attribute's data.
    pub format: VertexFormat,
    /// The byte offset of this attribute from the start of the vertex.
    pub offset: usize,
}

/// The memory layout of one vertex: an ordered, tightly packed list of attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    name: &'static str,
    attributes: Vec<VertexAttributeDescriptor>,
    stride: usize,
}

/// Builds a [`VertexLayout`] by appending attributes in memory order.
#[derive(Debug)]
pub struct VertexLayoutBuilder {
    name: &'static str,
    attributes: Vec<VertexAttributeDescriptor>,
    cursor: usize,
}

impl VertexLayoutBuilder {
    /// Appends an attribute directly after the previous one.
    pub fn push(mut self, element: VertexElement, format: VertexFormat) -> Self {
        self.attributes.push(VertexAttributeDescriptor {
            element,
            format,
            offset: self.cursor,
        });
        self.cursor += format.size();
        self
    }

    /// Finishes the layout. The stride is the packed size of all attributes.
    pub fn build(self) -> VertexLayout {
        VertexLayout {
            name: self.name,
            attributes: self.attributes,
            stride: self.cursor,
        }
    }
}

impl VertexLayout {
    /// Starts a new layout with the given debug name.
    pub fn builder(name: &'static str) -> VertexLayoutBuilder {
        VertexLayoutBuilder {
            name,
            attributes: Vec::new(),
            cursor: 0,
        }
    }

    /// The host's base quad format: position, color, texture coordinate and light.
    ///
    /// | attribute | offset | format      |
    /// |-----------|--------|-------------|
    /// | position  | 0      | `Float32x3` |
    /// | color     | 12     | `Unorm8x4`  |
    /// | tex coord | 16     | `Float32x2` |
    /// | light     | 24     | `Uint16x2`  |
    ///
    /// Stride: 28 bytes.
    pub fn position_color_tex_light() -> Self {
        Self::builder("position_color_tex_light")
            .push(VertexElement::Position, VertexFormat::Float32x3)
            .push(VertexElement::Color, VertexFormat::Unorm8x4)
            .push(VertexElement::TexCoord, VertexFormat::Float32x2)
            .push(VertexElement::Light, VertexFormat::Uint16x2)
            .build()
    }

    /// The extended glyph format: the base format followed by normal,
    /// identifiers, mid texture coordinate and tangent.
    ///
    /// | attribute      | offset | format      |
    /// |----------------|--------|-------------|
    /// | normal         | 28     | `Snorm8x4`  |
    /// | entity ids     | 32     | `Uint16x3`  |
    /// | padding        | 38     | `Padding16` |
    /// | mid tex coord  | 40     | `Float32x2` |
    /// | tangent        | 48     | `Snorm8x4`  |
    ///
    /// Stride: 52 bytes.
    pub fn glyph_extended() -> Self {
        Self::builder("glyph_extended")
            .push(VertexElement::Position, VertexFormat::Float32x3)
            .push(VertexElement::Color, VertexFormat::Unorm8x4)
            .push(VertexElement::TexCoord, VertexFormat::Float32x2)
            .push(VertexElement::Light, VertexFormat::Uint16x2)
            .push(VertexElement::Normal, VertexFormat::Snorm8x4)
            .push(VertexElement::EntityIds, VertexFormat::Uint16x3)
            .push(VertexElement::Padding, VertexFormat::Padding16)
            .push(VertexElement::MidTexCoord, VertexFormat::Float32x2)
            .push(VertexElement::Tangent, VertexFormat::Snorm8x4)
            .build()
    }

    /// The debug name of this layout.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The byte distance between consecutive vertices.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// All attributes in memory order.
    pub fn attributes(&self) -> &[VertexAttributeDescriptor] {
        &self.attributes
    }

    /// Returns the offset of the first attribute holding `element`.
    pub fn offset_of(&self, element: VertexElement) -> Option<usize> {
        self.attributes
            .iter()
            .find(|a| a.element == element)
            .map(|a| a.offset)
    }

    /// Returns the offset of `element`, checking that it is stored as `format`.
    ///
    /// Attributes never overlap the end of a vertex, so the returned offset
    /// plus `format.size()` is within the stride.
    pub fn require(
        &self,
        element: VertexElement,
        format: VertexFormat,
    ) -> Result<usize, LayoutError> {
        let attribute = self
            .attributes
            .iter()
            .find(|a| a.element == element)
            .ok_or(LayoutError::MissingElement {
                layout: self.name,
                element,
            })?;
        if attribute.format != format {
            return Err(LayoutError::FormatMismatch {
                layout: self.name,
                element,
                expected: format,
                actual: attribute.format,
            });
        }
        Ok(attribute.offset)
    }

    /// Returns `true` if this layout begins with exactly the attributes of `prefix`.
    pub fn starts_with(&self, prefix: &VertexLayout) -> bool {
        self.attributes.len() >= prefix.attributes.len()
            && self
                .attributes
                .iter()
                .zip(prefix.attributes.iter())
                .all(|(a, b)| a == b)
    }
}
