//! Rule constants shared by frame validation, game sequencing and scoring.
//!
//! Ten-pin rules are fixed, so everything tunable lives here rather than in a
//! runtime configuration file.

/// Pins standing at the start of every frame.
pub const MAX_PINS: u8 = 10;

/// Frames in a complete game.
pub const MAX_FRAMES: usize = 10;

/// Zero-based index of the tenth frame.
pub const TENTH_FRAME_INDEX: usize = MAX_FRAMES - 1;

/// Rolls allowed in frames one through nine.
pub const MAX_REGULAR_ROLLS: usize = 2;

/// Rolls allowed in the tenth frame, fill balls included.
pub const MAX_TENTH_ROLLS: usize = 3;

/// Rolls credited to a strike as bonus.
pub const STRIKE_BONUS_ROLLS: usize = 2;

/// Rolls credited to a spare as bonus.
pub const SPARE_BONUS_ROLLS: usize = 1;
