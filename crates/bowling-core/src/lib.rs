#![deny(unsafe_code)]
//! Core scoring engine for ten-pin bowling.
//!
//! This crate validates per-frame roll records, classifies them into frames,
//! accumulates them into a game of at most ten frames and computes scores with
//! look-ahead strike and spare bonuses.

/// Rule constants
pub mod constants;
/// Batch scoring from roll lists and JSON values
pub mod convenience;
/// Error taxonomy for rejected input
pub mod error;
/// Frame classification and validation
pub mod frame;
/// Frame sequencing and completion state
pub mod game;
/// Score calculation with strike and spare bonuses
pub mod scorer;


pub use convenience::{
    create_game, create_game_from_value, frames_from_value, score, score_json, score_value,
};
pub use error::{BowlingError, BowlingResult};
pub use frame::{Frame, FrameKind};
pub use game::Game;
pub use scorer::{BowlingScorer, FrameScore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
