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

//! Phase synchronization of two sprite tickers.

use prism_core::animation::AnimationTicker;
use thiserror::Error;

/// An error raised when a ticker cannot be synchronized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The target ticker is in a state that has no meaningful phase.
    #[error("Cannot synchronize animation: {reason}")]
    InvalidState {
        /// Why the target was rejected.
        reason: &'static str,
    },
}

/// Moves `target` to the phase `source` has reached.
///
/// The ticks elapsed before the source's current frame are wrapped into one
/// cycle of the target sequence and walked frame by frame to find the target
/// frame. The source's sub-frame ticks are then added on top of the remainder
/// unchanged, which may leave the target's sub-frame at or past its frame
/// duration; the next tick of the target moves it on.
///
/// Fails with [`AnimationError::InvalidState`] and leaves `target` untouched
/// when the target cycle has no length.
pub fn sync_animation<S, T>(source: &S, target: &mut T) -> Result<(), AnimationError>
where
    S: AnimationTicker + ?Sized,
    T: AnimationTicker + ?Sized,
{
    let source_elapsed: u64 = source
        .frame_durations()
        .iter()
        .take(source.current_frame())
        .map(|&d| d as u64)
        .sum();

    let target_durations = target.frame_durations();
    let cycle_length: u64 = target_durations.iter().map(|&d| d as u64).sum();
    if cycle_length == 0 {
        return Err(AnimationError::InvalidState {
            reason: "target animation cycle length is zero",
        });
    }

    let mut phase = source_elapsed % cycle_length;
    let mut target_frame = 0;
    for &duration in target_durations {
        let duration = duration as u64;
        if phase < duration {
            break;
        }
        phase -= duration;
        target_frame += 1;
    }

    // `phase` is below the duration of `target_frame`, so it fits in a u32.
    let sub_frame = (phase as u32).saturating_add(source.current_sub_frame());
    target.set_frame(target_frame);
    target.set_sub_frame(sub_frame);
    Ok(())
}
