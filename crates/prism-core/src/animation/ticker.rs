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

//! A concrete ticker over an owned frame sequence.

use super::{AnimationTicker, FrameSequence};

/// A cursor walking a [`FrameSequence`] one tick at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTicker {
    sequence: FrameSequence,
    frame: usize,
    sub_frame: u32,
}

impl SpriteTicker {
    /// Creates a ticker positioned at the start of `sequence`.
    pub fn new(sequence: FrameSequence) -> Self {
        Self {
            sequence,
            frame: 0,
            sub_frame: 0,
        }
    }

    /// Creates a ticker at an explicit position.
    pub fn at(sequence: FrameSequence, frame: usize, sub_frame: u32) -> Self {
        Self {
            sequence,
            frame,
            sub_frame,
        }
    }

    /// The sequence this ticker walks.
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// The sprite image shown at the current position.
    pub fn current_sprite_index(&self) -> Option<usize> {
        self.sequence.sprite_index(self.frame)
    }

    /// Advances the ticker by one tick.
    ///
    /// Once the ticks spent in the current frame reach its duration the ticker
    /// moves to the next frame (wrapping around) and restarts its sub-frame
    /// count. A sub-frame count that already exceeds the duration is corrected
    /// on the next call. Returns the new sprite index when the shown image
    /// changed and has to be uploaded again.
    pub fn tick(&mut self) -> Option<usize> {
        let frame_count = self.sequence.frame_count();
        if frame_count == 0 {
            return None;
        }

        self.sub_frame = self.sub_frame.saturating_add(1);
        let duration = self.sequence.duration(self.frame).unwrap_or(0);
        if self.sub_frame < duration {
            return None;
        }

        let old_index = self.sequence.sprite_index(self.frame);
        self.frame = (self.frame + 1) % frame_count;
        self.sub_frame = 0;
        let new_index = self.sequence.sprite_index(self.frame);

        if new_index != old_index {
            new_index
        } else {
            None
        }
    }
}

impl AnimationTicker for SpriteTicker {
    fn frame_durations(&self) -> &[u32] {
        self.sequence.durations()
    }

    fn current_frame(&self) -> usize {
        self.frame
    }

    fn current_sub_frame(&self) -> u32 {
        self.sub_frame
    }

    fn set_frame(&mut self, frame: usize) {
        self.frame = frame;
    }

    fn set_sub_frame(&mut self, sub_frame: u32) {
        self.sub_frame = sub_frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameInfo;

    #[test]
    fn tick_advances_after_duration() {
        let mut ticker = SpriteTicker::new(FrameSequence::from_durations([2, 3]));
        assert_eq!(ticker.tick(), None);
        assert_eq!(ticker.current_frame(), 0);
        assert_eq!(ticker.current_sub_frame(), 1);

        assert_eq!(ticker.tick(), Some(1));
        assert_eq!(ticker.current_frame(), 1);
        assert_eq!(ticker.current_sub_frame(), 0);
    }

    #[test]
    fn tick_wraps_around() {
        let mut ticker = SpriteTicker::at(FrameSequence::from_durations([1, 1]), 1, 0);
        assert_eq!(ticker.tick(), Some(0));
        assert_eq!(ticker.current_frame(), 0);
    }

    #[test]
    fn tick_reports_nothing_when_image_is_unchanged() {
        let seq = FrameSequence::new([FrameInfo::new(4, 1), FrameInfo::new(4, 1)]);
        let mut ticker = SpriteTicker::new(seq);
        assert_eq!(ticker.tick(), None);
        assert_eq!(ticker.current_frame(), 1);
    }

    #[test]
    fn overflowing_sub_frame_corrects_on_next_tick() {
        let mut ticker = SpriteTicker::at(FrameSequence::from_durations([5, 5]), 1, 7);
        assert_eq!(ticker.tick(), Some(0));
        assert_eq!(ticker.current_frame(), 0);
        assert_eq!(ticker.current_sub_frame(), 0);
    }

    #[test]
    fn empty_sequence_never_ticks() {
        let mut ticker = SpriteTicker::new(FrameSequence::default());
        assert_eq!(ticker.tick(), None);
        assert_eq!(ticker.current_sub_frame(), 0);
        assert_eq!(ticker.current_sprite_index(), None);
    }
}
