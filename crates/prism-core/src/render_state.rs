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

//! Identifiers of the object currently being rendered.
//!
//! The augmentation pass tags every vertex with the entity, block entity and
//! item that produced it so shader packs can special-case them. The host
//! captures these while walking its render lists and the pass queries them
//! synchronously while serializing.

/// Read access to the identifiers of the object currently being drawn.
pub trait RenderStateSnapshot {
    /// Identifier of the entity being drawn, or `0` for none.
    fn entity_id(&self) -> u16;
    /// Identifier of the block entity being drawn, or `0` for none.
    fn block_entity_id(&self) -> u16;
    /// Identifier of the item being drawn, or `0` for none.
    fn item_id(&self) -> u16;
}

/// A plain snapshot of the current render state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapturedRenderState {
    entity: u16,
    block_entity: u16,
    item: u16,
}

impl CapturedRenderState {
    /// Creates a snapshot from already narrowed identifiers.
    pub const fn new(entity: u16, block_entity: u16, item: u16) -> Self {
        Self {
            entity,
            block_entity,
            item,
        }
    }

    /// Records the entity being drawn. Only the low 16 bits are kept.
    pub fn capture_entity(&mut self, id: i32) {
        self.entity = id as u16;
    }

    /// Records the block entity being drawn. Only the low 16 bits are kept.
    pub fn capture_block_entity(&mut self, id: i32) {
        self.block_entity = id as u16;
    }

    /// Records the item being drawn. Only the low 16 bits are kept.
    pub fn capture_item(&mut self, id: i32) {
        self.item = id as u16;
    }

    /// Forgets every captured identifier.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl RenderStateSnapshot for CapturedRenderState {
    fn entity_id(&self) -> u16 {
        self.entity
    }

    fn block_entity_id(&self) -> u16 {
        self.block_entity
    }

    fn item_id(&self) -> u16 {
        self.item
    }
}
