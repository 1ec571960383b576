//! Score calculation with look-ahead bonuses
//!
//! The scorer is stateless: it borrows an ordered slice of validated frames
//! and recomputes everything on each call. Strikes and spares pull their bonus
//! pins from whichever later frames hold the next rolls bowled, so a partial
//! game simply yields a partial score.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::TENTH_FRAME_INDEX;
use crate::frame::Frame;

/// Score breakdown for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// 1-indexed frame number
    pub frame_number: usize,
    pub base: u32,
    pub bonus: u32,
    /// Game total up to and including this frame
    pub running_total: u32,
}

impl FrameScore {
    pub fn total(&self) -> u32 {
        self.base + self.bonus
    }
}

/// Computes game scores from an ordered sequence of frames.
#[derive(Debug, Clone, Copy)]
pub struct BowlingScorer<'a> {
    frames: &'a [Frame],
}

impl<'a> BowlingScorer<'a> {
    pub fn new(frames: &'a [Frame]) -> Self {
        Self { frames }
    }

    /// Total score of every frame played so far.
    pub fn calculate(&self) -> u32 {
        let mut total = 0;
        for index in 0..self.frames.len() {
            total += self.frame_total(index);
        }
        total
    }

    /// Per-frame breakdown with running totals.
    pub fn frame_scores(&self) -> Vec<FrameScore> {
        let mut running_total = 0;
        self.frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                let base = frame.base_score();
                let bonus = self.bonus(index);
                running_total += base + bonus;
                FrameScore { frame_number: index + 1, base, bonus, running_total }
            })
            .collect()
    }

    fn frame_total(&self, index: usize) -> u32 {
        let base = self.frames[index].base_score();
        let bonus = self.bonus(index);
        trace!(frame = index + 1, base, bonus, "scored frame");
        base + bonus
    }

    fn bonus(&self, index: usize) -> u32 {
        // the tenth frame already counts its fill balls as base pins
        if index == TENTH_FRAME_INDEX {
            return 0;
        }

        let needed = self.frames[index].bonus_multiplier();
        if needed == 0 {
            return 0;
        }

        let mut collected = 0;
        let mut bonus = 0;
        for next in &self.frames[index + 1..] {
            if collected == needed {
                break;
            }
            let pins = next.bonus_pins(needed - collected);
            collected += pins.len();
            bonus += pins.iter().map(|&p| u32::from(p)).sum::<u32>();
        }
        bonus
    }
}
