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

//! Describes the byte layout of the vertex formats the passes read and write.
//!
//! A [`VertexLayout`] is the contract between the host's vertex format
//! registry and the augmentation pass: it names each attribute, gives its
//! [`VertexFormat`] and its byte offset, and reports the stride. The pass
//! resolves the offsets it needs once and then works on raw byte slices.

mod error;
mod format;
mod layout;

pub use error::*;
pub use format::*;
pub use layout::*;
