//! Game state: an ordered sequence of up to ten frames
//!
//! The game decides which variant a frame may take from its position and owns
//! the frames it accepts. Rejected frames leave the game untouched, so a
//! caller can skip bad input and keep adding frames.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::MAX_FRAMES;
use crate::error::{BowlingError, BowlingResult};
use crate::frame::Frame;
use crate::scorer::{BowlingScorer, FrameScore};

/// A bowling game being built frame by frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct Game {
    frames: Vec<Frame>,
}

impl Game {
    pub fn new() -> Self {
        Self { frames: Vec::with_capacity(MAX_FRAMES) }
    }

    /// Builds a game by adding each roll list in order.
    ///
    /// More than ten roll lists fail with [`BowlingError::TooManyFrames`]
    /// before any frame is validated.
    pub fn from_frames(frames: &[Vec<i64>]) -> BowlingResult<Self> {
        if frames.len() > MAX_FRAMES {
            return Err(BowlingError::TooManyFrames { count: frames.len() });
        }

        let mut game = Self::new();
        for rolls in frames {
            game.add_frame(rolls)?;
        }
        Ok(game)
    }

    /// Validates `rolls` for the next frame position and appends the frame.
    ///
    /// Fails with [`BowlingError::GameComplete`] once ten frames are held,
    /// whatever the rolls contain.
    pub fn add_frame(&mut self, rolls: &[i64]) -> BowlingResult<&mut Self> {
        if self.is_complete() {
            warn!(?rolls, "rejected frame for completed game");
            return Err(BowlingError::GameComplete);
        }

        let position = self.frames.len();
        let frame = Frame::classify(rolls, position).map_err(|err| {
            debug!(frame = position + 1, error = %err, "rejected frame");
            err
        })?;

        debug!(frame = position + 1, kind = %frame.kind(), rolls = %frame, "added frame");
        self.frames.push(frame);
        Ok(self)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// True once all ten frame slots are filled
    pub fn is_complete(&self) -> bool {
        self.frames.len() == MAX_FRAMES
    }

    /// 1-indexed number of the next frame to be added
    pub fn current_frame_number(&self) -> usize {
        self.frames.len() + 1
    }

    /// True when the latest frame could still take more rolls.
    ///
    /// A tenth frame holding a single roll, or an unfinished strike or spare,
    /// fills the last slot but is still in progress.
    pub fn has_frame_in_progress(&self) -> bool {
        self.frames.last().is_some_and(Frame::is_in_progress)
    }

    /// Current score, including partial bonuses for an unfinished game
    pub fn score(&self) -> u32 {
        BowlingScorer::new(&self.frames).calculate()
    }

    pub fn frame_scores(&self) -> Vec<FrameScore> {
        BowlingScorer::new(&self.frames).frame_scores()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Game {
    type Error = BowlingError;

    fn try_from(frames: Vec<Vec<i64>>) -> BowlingResult<Self> {
        Self::from_frames(&frames)
    }
}

impl From<Game> for Vec<Vec<u8>> {
    fn from(game: Game) -> Self {
        game.frames.iter().map(|frame| frame.rolls().to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameKind;

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert!(game.frames().is_empty());
        assert_eq!(game.current_frame_number(), 1);
        assert!(!game.is_complete());
        assert!(!game.has_frame_in_progress());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_add_frame_classifies_by_rolls() {
        let mut game = Game::new();
        game.add_frame(&[3, 4]).unwrap().add_frame(&[10]).unwrap().add_frame(&[7, 3]).unwrap();

        let kinds: Vec<_> = game.frames().iter().map(Frame::kind).collect();
        assert_eq!(kinds, vec![FrameKind::Regular, FrameKind::Strike, FrameKind::Spare]);
        assert_eq!(game.current_frame_number(), 4);
    }

    #[test]
    fn test_tenth_position_creates_tenth_frame() {
        let mut game = Game::new();
        for _ in 0..9 {
            game.add_frame(&[3, 4]).unwrap();
        }
        game.add_frame(&[10, 5, 3]).unwrap();

        assert_eq!(game.frames()[9].kind(), FrameKind::Tenth);
        assert!(game.is_complete());
        assert_eq!(game.current_frame_number(), 11);
    }

    #[test]
    fn test_eleventh_frame_rejected_regardless_of_rolls() {
        let mut game = Game::new();
        for _ in 0..10 {
            game.add_frame(&[3, 4]).unwrap();
        }

        assert_eq!(game.add_frame(&[3, 4]).unwrap_err(), BowlingError::GameComplete);
        assert_eq!(game.add_frame(&[]).unwrap_err(), BowlingError::GameComplete);
        assert_eq!(game.add_frame(&[99]).unwrap_err(), BowlingError::GameComplete);
        assert_eq!(game.frames().len(), 10);
    }

    #[test]
    fn test_rejected_frame_leaves_game_unchanged() {
        let mut game = Game::new();
        game.add_frame(&[7, 3]).unwrap();

        assert!(game.add_frame(&[15]).is_err());
        assert!(game.add_frame(&[6, 5]).is_err());
        assert_eq!(game.frames().len(), 1);
        assert_eq!(game.current_frame_number(), 2);

        game.add_frame(&[5, 4]).unwrap();
        assert_eq!(game.score(), 24);
    }

    #[test]
    fn test_partial_tenth_frame_scores_and_reports_progress() {
        let mut game = Game::new();
        for _ in 0..9 {
            game.add_frame(&[3, 4]).unwrap();
        }
        game.add_frame(&[3]).unwrap();

        assert!(game.is_complete());
        assert!(game.has_frame_in_progress());
        assert_eq!(game.score(), 66);
        assert_eq!(game.add_frame(&[4]).unwrap_err(), BowlingError::GameComplete);
    }

    #[test]
    fn test_lone_strike_in_tenth_is_rejected() {
        let mut game = Game::new();
        for _ in 0..9 {
            game.add_frame(&[10]).unwrap();
        }

        assert_eq!(game.add_frame(&[10]).unwrap_err(), BowlingError::IncompleteTenthFrame);
        assert!(!game.is_complete());
        game.add_frame(&[10, 10, 10]).unwrap();
        assert_eq!(game.score(), 300);
    }

    #[test]
    fn test_from_frames_rejects_more_than_ten_lists() {
        assert_eq!(
            Game::from_frames(&vec![vec![1, 1]; 11]).unwrap_err(),
            BowlingError::TooManyFrames { count: 11 }
        );
        assert_eq!(
            Game::try_from(vec![vec![1, 1]; 12]).unwrap_err(),
            BowlingError::TooManyFrames { count: 12 }
        );
        assert!(Game::from_frames(&[]).unwrap().frames().is_empty());
    }

    #[test]
    fn test_score_is_idempotent() {
        let game = Game::from_frames(&[vec![5, 3], vec![10], vec![4, 6]]).unwrap();
        assert_eq!(game.score(), 38);
        assert_eq!(game.score(), 38);
        assert_eq!(game.frame_scores().last().map(|s| s.running_total), Some(38));
    }

    #[test]
    fn test_serde_round_trip_revalidates() {
        let game = Game::from_frames(&[vec![10], vec![7, 3], vec![2]]).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, "[[10],[7,3],[2]]");

        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);

        let err = serde_json::from_str::<Game>("[[6,5]]").unwrap_err();
        assert!(err.to_string().contains("cannot knock down more than 10 pins"));
    }
}
