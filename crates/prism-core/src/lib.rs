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

//! # Prism Core
//!
//! Foundational crate containing the math primitives, vertex layout
//! descriptions, animation state and settings shared by the Prism passes.
//!
//! Nothing in this crate touches GPU resources. The hot-path passes that
//! consume these contracts live in `prism-lanes`.

#![warn(missing_docs)]

pub mod animation;
pub mod math;
pub mod render_state;
pub mod resource;
pub mod settings;
pub mod vertex;

pub use animation::{AnimationTicker, FrameInfo, FrameSequence, SpriteTicker};
pub use render_state::{CapturedRenderState, RenderStateSnapshot};
pub use resource::ResourceLocation;
pub use settings::PrismSettings;
pub use vertex::{VertexAttributeDescriptor, VertexElement, VertexFormat, VertexLayout};
