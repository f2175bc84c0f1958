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

//! Sprite animation state: frame sequences and the tickers that walk them.
//!
//! A [`FrameSequence`] is an ordered list of `(sprite frame, duration)` pairs.
//! A ticker is a cursor into that list. The synchronization pass in
//! `prism-lanes` only sees tickers through the narrow [`AnimationTicker`]
//! trait, so host-owned tickers can take part without exposing anything else.

mod ticker;

pub use ticker::SpriteTicker;

/// One entry of a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameInfo {
    /// Index of the sprite image shown during this frame.
    pub index: usize,
    /// How many ticks the frame stays on screen.
    pub time: u32,
}

impl FrameInfo {
    /// Creates a new frame entry.
    pub const fn new(index: usize, time: u32) -> Self {
        Self { index, time }
    }
}

/// An ordered sequence of animation frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    indices: Vec<usize>,
    durations: Vec<u32>,
}

impl FrameSequence {
    /// Creates a sequence from its frames.
    ///
    /// Construction never fails: an empty or zero-length sequence is representable
    /// and is rejected by the operations that cannot handle it.
    pub fn new(frames: impl IntoIterator<Item = FrameInfo>) -> Self {
        let (indices, durations): (Vec<usize>, Vec<u32>) =
            frames.into_iter().map(|f| (f.index, f.time)).unzip();
        Self { indices, durations }
    }

    /// Creates a sequence that shows sprite frames `0..n` in order, one per duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_core::animation::FrameSequence;
    /// let seq = FrameSequence::from_durations([5, 5]);
    /// assert_eq!(seq.cycle_length(), 10);
    /// assert_eq!(seq.sprite_index(1), Some(1));
    /// ```
    pub fn from_durations(durations: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            durations
                .into_iter()
                .enumerate()
                .map(|(index, time)| FrameInfo::new(index, time)),
        )
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.durations.len()
    }

    /// Durations of every frame, in order.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Duration of one frame, or `None` if `frame` is out of range.
    pub fn duration(&self, frame: usize) -> Option<u32> {
        self.durations.get(frame).copied()
    }

    /// Sprite image shown by one frame, or `None` if `frame` is out of range.
    pub fn sprite_index(&self, frame: usize) -> Option<usize> {
        self.indices.get(frame).copied()
    }

    /// Iterates over the frames of the sequence.
    pub fn frames(&self) -> impl Iterator<Item = FrameInfo> + '_ {
        self.indices
            .iter()
            .zip(self.durations.iter())
            .map(|(&index, &time)| FrameInfo { index, time })
    }

    /// Total number of ticks in one full cycle.
    pub fn cycle_length(&self) -> u64 {
        self.durations.iter().map(|&d| d as u64).sum()
    }

    /// Returns `true` if the sequence has more than one frame.
    pub fn is_animated(&self) -> bool {
        self.durations.len() > 1
    }
}

/// The view of a sprite ticker needed to synchronize two animations.
///
/// Implementors expose the durations of their frame sequence and their
/// position in it, and accept a new position.
pub trait AnimationTicker {
    /// Durations of every frame of the ticker's sequence, in order.
    fn frame_durations(&self) -> &[u32];
    /// The frame currently shown.
    fn current_frame(&self) -> usize;
    /// Ticks already spent in the current frame.
    fn current_sub_frame(&self) -> u32;
    /// Moves the ticker to another frame.
    fn set_frame(&mut self, frame: usize);
    /// Sets the ticks already spent in the current frame.
    fn set_sub_frame(&mut self, sub_frame: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_accessors() {
        let seq = FrameSequence::new([FrameInfo::new(3, 2), FrameInfo::new(0, 7)]);
        assert_eq!(seq.frame_count(), 2);
        assert_eq!(seq.durations(), &[2, 7]);
        assert_eq!(seq.duration(1), Some(7));
        assert_eq!(seq.duration(2), None);
        assert_eq!(seq.sprite_index(0), Some(3));
        assert_eq!(seq.cycle_length(), 9);
        assert!(seq.is_animated());
        assert_eq!(
            seq.frames().collect::<Vec<_>>(),
            vec![FrameInfo::new(3, 2), FrameInfo::new(0, 7)]
        );
    }

    #[test]
    fn empty_sequence_has_zero_cycle() {
        let seq = FrameSequence::default();
        assert_eq!(seq.frame_count(), 0);
        assert_eq!(seq.cycle_length(), 0);
        assert!(!seq.is_animated());
    }
}
