//! Bowling Prelude
//!
//! This crate re-exports the most frequently used public items of
//! `bowling-core`. Down-stream applications can depend on `bowling-prelude`
//! to avoid long import lists and to stay insulated from internal module
//! reshuffles.
//!
//! ```
//! use bowling_prelude::*;
//!
//! let mut game = Game::new();
//! game.add_frame(&[10]).unwrap().add_frame(&[7, 3]).unwrap();
//! assert_eq!(game.score(), 30);
//! assert_eq!(score(&[vec![10], vec![7, 3]]).unwrap(), 30);
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

// Game building & scoring -------------------------------------------------------------------

pub use bowling_core::{
    // Frame model
    Frame, FrameKind,
    // Sequencing and scoring
    Game, BowlingScorer, FrameScore,
    // Errors
    BowlingError, BowlingResult,
};

// Batch entry points ------------------------------------------------------------------------

pub use bowling_core::{create_game, create_game_from_value, score, score_json, score_value};

// When new crates expose stable public APIs, add re-exports here in a backwards-compatible
// manner.
