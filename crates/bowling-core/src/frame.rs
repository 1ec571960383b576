//! Frame classification and validation
//!
//! A [`Frame`] is built exactly once, from raw rolls at a known position in
//! the game, and is never modified afterwards. Validation and classification
//! happen together: a value of this type always satisfies the rules of its
//! variant.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{
    MAX_PINS, MAX_REGULAR_ROLLS, MAX_TENTH_ROLLS, SPARE_BONUS_ROLLS, STRIKE_BONUS_ROLLS,
    TENTH_FRAME_INDEX,
};
use crate::error::{BowlingError, BowlingResult};

static STRIKE_ROLLS: [u8; 1] = [MAX_PINS];

/// Classification of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// One or two rolls leaving at least one pin standing
    Regular,
    /// All ten pins on the first roll
    Strike,
    /// All ten pins across two rolls
    Spare,
    /// The final frame, whatever its rolls look like
    Tenth,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Regular => write!(f, "regular"),
            FrameKind::Strike => write!(f, "strike"),
            FrameKind::Spare => write!(f, "spare"),
            FrameKind::Tenth => write!(f, "tenth"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
    Regular(Box<[u8]>),
    Strike,
    Spare([u8; 2]),
    Tenth(Box<[u8]>),
}

/// The validated rolls of a single frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    repr: Repr,
}

impl Frame {
    /// Validates `rolls` for the zero-based frame `position` and classifies them.
    ///
    /// Positions 0 through 8 produce `Regular`, `Strike` or `Spare` frames;
    /// position 9 always produces a `Tenth` frame.
    pub fn classify(rolls: &[i64], position: usize) -> BowlingResult<Self> {
        if position > TENTH_FRAME_INDEX {
            return Err(BowlingError::InvalidFramePosition { position });
        }

        let frame_number = position + 1;
        let pins = validate_pins(rolls, frame_number)?;
        let repr = if position == TENTH_FRAME_INDEX {
            classify_tenth(&pins)?
        } else {
            classify_open(&pins, frame_number)?
        };

        Ok(Self { repr })
    }

    pub fn kind(&self) -> FrameKind {
        match self.repr {
            Repr::Regular(_) => FrameKind::Regular,
            Repr::Strike => FrameKind::Strike,
            Repr::Spare(_) => FrameKind::Spare,
            Repr::Tenth(_) => FrameKind::Tenth,
        }
    }

    /// Rolls in the order they were bowled
    pub fn rolls(&self) -> &[u8] {
        match &self.repr {
            Repr::Regular(rolls) | Repr::Tenth(rolls) => &rolls[..],
            Repr::Strike => &STRIKE_ROLLS[..],
            Repr::Spare(rolls) => &rolls[..],
        }
    }

    /// Pins knocked down in this frame, without any bonus
    pub fn base_score(&self) -> u32 {
        self.rolls().iter().map(|&pins| u32::from(pins)).sum()
    }

    pub fn is_strike(&self) -> bool {
        match &self.repr {
            Repr::Strike => true,
            Repr::Tenth(rolls) => rolls[0] == MAX_PINS,
            Repr::Regular(_) | Repr::Spare(_) => false,
        }
    }

    pub fn is_spare(&self) -> bool {
        match &self.repr {
            Repr::Spare(_) => true,
            Repr::Tenth(rolls) => {
                rolls[0] != MAX_PINS && rolls.len() >= 2 && rolls[0] + rolls[1] == MAX_PINS
            }
            Repr::Regular(_) | Repr::Strike => false,
        }
    }

    /// Number of later rolls this frame claims as bonus.
    ///
    /// The tenth frame never claims any: its fill balls are part of its own rolls.
    pub fn bonus_multiplier(&self) -> usize {
        match self.repr {
            Repr::Strike => STRIKE_BONUS_ROLLS,
            Repr::Spare(_) => SPARE_BONUS_ROLLS,
            Repr::Regular(_) | Repr::Tenth(_) => 0,
        }
    }

    /// Up to `count` of this frame's rolls, taken from the front.
    pub fn bonus_pins(&self, count: usize) -> &[u8] {
        let rolls = self.rolls();
        &rolls[..count.min(rolls.len())]
    }

    /// True while more rolls could still be bowled in this frame
    pub fn is_in_progress(&self) -> bool {
        match &self.repr {
            Repr::Regular(rolls) => rolls.len() == 1,
            Repr::Strike | Repr::Spare(_) => false,
            Repr::Tenth(rolls) => match rolls.len() {
                1 => true,
                2 => self.is_strike() || self.is_spare(),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Frame {
    /// Renders the frame in score-sheet notation, e.g. `X`, `7 /`, `X 9 -`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut standing = MAX_PINS;
        let mut first_ball = true;
        for (i, &pins) in self.rolls().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if first_ball && pins == MAX_PINS {
                write!(f, "X")?;
            } else if !first_ball && pins == standing {
                write!(f, "/")?;
                standing = MAX_PINS;
                first_ball = true;
            } else {
                if pins == 0 {
                    write!(f, "-")?;
                } else {
                    write!(f, "{pins}")?;
                }
                standing -= pins;
                first_ball = false;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct FrameView<'a> {
    kind: FrameKind,
    rolls: &'a [u8],
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FrameView { kind: self.kind(), rolls: self.rolls() }.serialize(serializer)
    }
}

fn validate_pins(rolls: &[i64], frame_number: usize) -> BowlingResult<Vec<u8>> {
    if rolls.is_empty() {
        return Err(BowlingError::EmptyRolls { frame_number });
    }

    rolls
        .iter()
        .map(|&roll| {
            u8::try_from(roll)
                .ok()
                .filter(|&pins| pins <= MAX_PINS)
                .ok_or_else(|| BowlingError::invalid_pin(frame_number, roll))
        })
        .collect()
}

fn classify_open(pins: &[u8], frame_number: usize) -> BowlingResult<Repr> {
    match *pins {
        [MAX_PINS] => Ok(Repr::Strike),
        [_] => Ok(Repr::Regular(pins.into())),
        // a strike ends the frame, so 10 then 0 is not a spare
        [MAX_PINS, 0] => Err(BowlingError::TooManyRolls { frame_number, max: 1, actual: 2 }),
        [first, second] => {
            let total = u32::from(first) + u32::from(second);
            if total == u32::from(MAX_PINS) {
                Ok(Repr::Spare([first, second]))
            } else if total > u32::from(MAX_PINS) {
                Err(BowlingError::TooManyPins { frame_number, total })
            } else {
                Ok(Repr::Regular(pins.into()))
            }
        }
        _ => Err(BowlingError::TooManyRolls {
            frame_number,
            max: MAX_REGULAR_ROLLS,
            actual: pins.len(),
        }),
    }
}

fn classify_tenth(pins: &[u8]) -> BowlingResult<Repr> {
    let frame_number = TENTH_FRAME_INDEX + 1;

    match *pins {
        [MAX_PINS] => return Err(BowlingError::IncompleteTenthFrame),
        [_] | [MAX_PINS, _] | [MAX_PINS, MAX_PINS, _] => {}
        [first, second] => {
            let total = u32::from(first) + u32::from(second);
            if total > u32::from(MAX_PINS) {
                return Err(BowlingError::TooManyPins { frame_number, total });
            }
        }
        [MAX_PINS, second, third] => {
            if u32::from(second) + u32::from(third) > u32::from(MAX_PINS) {
                return Err(BowlingError::InvalidBonusRolls { second, third });
            }
        }
        [first, second, _] if first + second == MAX_PINS => {}
        [_, _, _] => return Err(BowlingError::BonusRollNotEarned { rolls: pins.to_vec() }),
        _ => {
            return Err(BowlingError::TooManyRolls {
                frame_number,
                max: MAX_TENTH_ROLLS,
                actual: pins.len(),
            });
        }
    }

    Ok(Repr::Tenth(pins.into()))
}
