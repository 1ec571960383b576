//! Batch entry points
//!
//! Score a whole game from a list of per-frame roll lists, either typed or as
//! a dynamic JSON value. Structural checks on the container run before any
//! frame is validated.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::constants::MAX_FRAMES;
use crate::error::{BowlingError, BowlingResult};
use crate::game::Game;

/// Validates every frame and returns the total score.
///
/// ```
/// use bowling_core::score;
///
/// assert_eq!(score(&[vec![5, 3], vec![10], vec![4, 6]]).unwrap(), 38);
/// ```
#[instrument(level = "debug", skip(frames), fields(frames = frames.len()))]
pub fn score(frames: &[Vec<i64>]) -> BowlingResult<u32> {
    let score = create_game(frames)?.score();
    debug!(score, "scored game");
    Ok(score)
}

/// Validates every frame and returns the built game for further inspection.
#[instrument(level = "debug", skip(frames), fields(frames = frames.len()))]
pub fn create_game(frames: &[Vec<i64>]) -> BowlingResult<Game> {
    check_frame_count(frames.len())?;
    Game::from_frames(frames)
}

/// Like [`score`], for input that has not been type-checked yet.
pub fn score_value(input: &Value) -> BowlingResult<u32> {
    Ok(create_game_from_value(input)?.score())
}

/// Like [`create_game`], for input that has not been type-checked yet.
#[instrument(level = "debug", skip(input))]
pub fn create_game_from_value(input: &Value) -> BowlingResult<Game> {
    let frames = frames_from_value(input)?;
    create_game(&frames)
}

/// Parses JSON text such as `[[10],[7,3],[9,0]]` and scores it.
pub fn score_json(input: &str) -> BowlingResult<u32> {
    let value: Value = serde_json::from_str(input)?;
    score_value(&value)
}

/// Extracts roll lists from a JSON array of arrays of integers.
pub fn frames_from_value(input: &Value) -> BowlingResult<Vec<Vec<i64>>> {
    let Value::Array(frames) = input else {
        return Err(BowlingError::malformed("Input must be an array"));
    };
    check_frame_count(frames.len())?;

    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| {
            let frame_number = index + 1;
            let Value::Array(rolls) = frame else {
                return Err(BowlingError::malformed(format!(
                    "Frame {frame_number} must be an array"
                )));
            };
            rolls
                .iter()
                .map(|roll| roll_from_value(roll, frame_number))
                .collect::<BowlingResult<Vec<i64>>>()
        })
        .collect()
}

fn roll_from_value(roll: &Value, frame_number: usize) -> BowlingResult<i64> {
    match roll {
        Value::Number(number) => {
            number.as_i64().ok_or_else(|| BowlingError::invalid_pin(frame_number, number))
        }
        other => Err(BowlingError::malformed(format!(
            "Frame {frame_number} rolls must be integers, got {other}"
        ))),
    }
}

fn check_frame_count(count: usize) -> BowlingResult<()> {
    if count == 0 {
        return Err(BowlingError::EmptyGame);
    }
    if count > MAX_FRAMES {
        return Err(BowlingError::TooManyFrames { count });
    }
    Ok(())
}
