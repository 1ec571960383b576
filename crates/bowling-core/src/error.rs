//! Error handling for the bowling score engine
//!
//! Every failure is a synchronous rejection of a single operation: building a
//! frame, adding it to a game, or validating batch input. Nothing is retried.

use thiserror::Error;

/// Rejection reasons for frame, game and batch-input operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BowlingError {
    /// Input was not a list of roll lists
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Batch input with no frames
    #[error("Input cannot be empty")]
    EmptyGame,

    /// Batch input with more frames than a game holds
    #[error("Cannot have more than 10 frames (got {count})")]
    TooManyFrames { count: usize },

    #[error("Frame {frame_number}: rolls cannot be empty")]
    EmptyRolls { frame_number: usize },

    /// Roll outside 0..=10, or not an integer at all
    #[error("Frame {frame_number}: invalid pin count {value}")]
    InvalidPinCount { frame_number: usize, value: String },

    #[error("Frame {frame_number}: at most {max} roll(s) allowed, got {actual}")]
    TooManyRolls { frame_number: usize, max: usize, actual: usize },

    #[error("Frame {frame_number}: cannot knock down more than 10 pins (got {total})")]
    TooManyPins { frame_number: usize, total: u32 },

    /// Tenth frame holding nothing but its opening strike
    #[error("Tenth frame with one roll must be less than 10 (incomplete)")]
    IncompleteTenthFrame,

    #[error("Tenth frame can only have 3 rolls after strike or spare (got {rolls:?})")]
    BonusRollNotEarned { rolls: Vec<u8> },

    /// Fill balls after a tenth-frame strike knock down more than one rack
    #[error("Invalid roll combination in tenth frame after strike: {second} + {third}")]
    InvalidBonusRolls { second: u8, third: u8 },

    #[error("Frame position {position} is past the tenth frame")]
    InvalidFramePosition { position: usize },

    /// All ten frames have already been added
    #[error("Game is already complete")]
    GameComplete,
}

impl BowlingError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            BowlingError::MalformedInput { .. }
            | BowlingError::EmptyGame
            | BowlingError::TooManyFrames { .. } => "input",
            BowlingError::EmptyRolls { .. }
            | BowlingError::InvalidPinCount { .. }
            | BowlingError::TooManyRolls { .. }
            | BowlingError::TooManyPins { .. }
            | BowlingError::IncompleteTenthFrame
            | BowlingError::BonusRollNotEarned { .. }
            | BowlingError::InvalidBonusRolls { .. }
            | BowlingError::InvalidFramePosition { .. } => "frame",
            BowlingError::GameComplete => "game",
        }
    }

    /// Whether the caller can skip the rejected frame and keep using the same game
    pub fn is_recoverable(&self) -> bool {
        match self {
            BowlingError::MalformedInput { .. } => false,
            BowlingError::EmptyGame => false,
            BowlingError::TooManyFrames { .. } => false,
            BowlingError::GameComplete => false, // nothing left to add
            BowlingError::InvalidFramePosition { .. } => false,
            _ => true,
        }
    }

    /// Create a malformed input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput { message: message.into() }
    }

    pub(crate) fn invalid_pin(frame_number: usize, value: impl ToString) -> Self {
        Self::InvalidPinCount { frame_number, value: value.to_string() }
    }
}

/// Result type alias for bowling operations
pub type BowlingResult<T> = Result<T, BowlingError>;

impl From<serde_json::Error> for BowlingError {
    fn from(err: serde_json::Error) -> Self {
        let operation = if err.is_syntax() || err.is_eof() {
            "parse"
        } else if err.is_data() {
            "validate"
        } else {
            "read"
        };
        BowlingError::malformed(format!("JSON {operation} error: {err}"))
    }
}
