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

//! Animation phase synchronization between a color sprite and its PBR companions.
//!
//! A normal or specular sprite may declare a different frame list than the
//! color sprite it belongs to. Both tickers are created independently, so
//! without intervention they start out of phase. [`sync_animation`] moves the
//! companion ticker to the position that corresponds to the same elapsed time.

mod sync;

pub use sync::{sync_animation, AnimationError};
