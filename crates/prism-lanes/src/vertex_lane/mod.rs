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

//! Quad vertex augmentation.
//!
//! The host emits text and glyph quads in a compact 28-byte format. Shader
//! packs expect the extended format, which additionally carries per-quad data
//! (mid texture coordinate, face normal, tangent) and per-draw identifiers.
//! [`QuadAugmentLane`] converts one format into the other on raw byte buffers.

mod glyph_ext;
mod normal;
mod quad_view;

pub use glyph_ext::{AugmentError, QuadAugmentLane};
pub use normal::{compute_face_normal, compute_tangent};
pub use quad_view::QuadView;
