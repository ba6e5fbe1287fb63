//! Turn-by-turn direction synthesis.
//!
//! A route is narrated as one [`NavigationStep`] per stretch of road that
//! keeps the same name.  Each step after the first carries the turn taken
//! onto it, classified from the bearing of the last edge before the name
//! change to the bearing of the first edge after it.
//!
//! # Turn bands
//!
//! With `a = |relative bearing|` after normalization into (−180, 180]:
//!
//! | Band            | Direction                 |
//! |-----------------|---------------------------|
//! | `a ≤ 15`        | Straight                  |
//! | `15 < a ≤ 30`   | SlightLeft / SlightRight  |
//! | `30 < a ≤ 100`  | Left / Right              |
//! | `a > 100`       | SharpLeft / SharpRight    |
//!
//! Bearings grow clockwise, so a positive relative bearing is a right turn.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use wm_core::{VertexId, WmResult};
use wm_graph::{Edge, GraphStore};

/// Road name used for edges whose way had no `name` tag.
pub const UNKNOWN_ROAD: &str = "unknown road";

/// Upper bound (inclusive) of the straight band, in degrees.
pub const STRAIGHT_MAX_DEG: f64 = 15.0;
/// Upper bound (inclusive) of the slight-turn band, in degrees.
pub const SLIGHT_MAX_DEG: f64 = 30.0;
/// Upper bound (inclusive) of the turn band, in degrees.
pub const TURN_MAX_DEG: f64 = 100.0;

/// Flips left/right in the turn and sharp-turn bands only.
///
/// The slight band is unaffected.  `false` maps positive relative bearings to
/// right turns in every band.
pub const TURN_SIGN_INVERTED: bool = false;

// ── Direction ─────────────────────────────────────────────────────────────────

/// A navigation instruction.  The numeric codes are part of the serialized
/// direction format and must not change; serde writes the code, not the
/// variant name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Direction {
    Start = 0,
    Straight = 1,
    SlightLeft = 2,
    SlightRight = 3,
    Right = 4,
    Left = 5,
    SharpLeft = 6,
    SharpRight = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Start,
        Direction::Straight,
        Direction::SlightLeft,
        Direction::SlightRight,
        Direction::Right,
        Direction::Left,
        Direction::SharpLeft,
        Direction::SharpRight,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Direction> {
        Self::ALL.get(code as usize).copied()
    }

    /// Human-readable instruction text.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Start       => "Start",
            Direction::Straight    => "Go straight",
            Direction::SlightLeft  => "Slight left",
            Direction::SlightRight => "Slight right",
            Direction::Right       => "Turn right",
            Direction::Left        => "Turn left",
            Direction::SharpLeft   => "Sharp left",
            Direction::SharpRight  => "Sharp right",
        }
    }

    pub fn from_label(label: &str) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction.code()
    }
}

/// A turn code outside `0..=7`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown turn code {0}")]
pub struct UnknownTurnCode(pub u8);

impl TryFrom<u8> for Direction {
    type Error = UnknownTurnCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::from_code(code).ok_or(UnknownTurnCode(code))
    }
}

/// `current − previous`, normalized into (−180, 180].
pub fn relative_bearing(previous: f64, current: f64) -> f64 {
    let rel = current - previous;
    if rel > 180.0 {
        rel - 360.0
    } else if rel <= -180.0 {
        rel + 360.0
    } else {
        rel
    }
}

/// Classify the turn from a leg with bearing `previous` onto one with
/// bearing `current`.  Never returns [`Direction::Start`].
pub fn classify(previous: f64, current: f64) -> Direction {
    let rel = relative_bearing(previous, current);
    let a = rel.abs();
    let turn_right = (rel > 0.0) != TURN_SIGN_INVERTED;

    if a <= STRAIGHT_MAX_DEG {
        Direction::Straight
    } else if a <= SLIGHT_MAX_DEG {
        if rel > 0.0 { Direction::SlightRight } else { Direction::SlightLeft }
    } else if a <= TURN_MAX_DEG {
        if turn_right { Direction::Right } else { Direction::Left }
    } else if turn_right {
        Direction::SharpRight
    } else {
        Direction::SharpLeft
    }
}

// ── NavigationStep ────────────────────────────────────────────────────────────

/// One instruction: how to enter a road, which road, and how far to follow it.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct NavigationStep {
    pub direction: Direction,
    pub way: String,
    /// Distance along `way` in miles.
    pub distance: f64,
}

impl NavigationStep {
    pub fn new(direction: Direction, way: impl Into<String>, distance: f64) -> Self {
        Self { direction, way: way.into(), distance }
    }
}

const ON: &str = " on ";
const CONTINUE_FOR: &str = " and continue for ";
const MILES: &str = " miles.";

impl fmt::Display for NavigationStep {
    /// `"Turn left on Oak Ave and continue for 0.250 miles."`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{ON}{}{CONTINUE_FOR}{:.3}{MILES}",
            self.direction, self.way, self.distance
        )
    }
}

/// Errors from parsing a [`NavigationStep`] out of its text form.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseStepError {
    #[error("malformed navigation step: {0:?}")]
    Malformed(String),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("invalid distance: {0}")]
    Distance(#[from] ParseFloatError),
}

impl FromStr for NavigationStep {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseStepError::Malformed(s.to_owned());

        let body = s.strip_suffix(MILES).ok_or_else(malformed)?;
        let (head, distance) = body.rsplit_once(CONTINUE_FOR).ok_or_else(malformed)?;
        let (label, way) = head.split_once(ON).ok_or_else(malformed)?;

        let direction = Direction::from_label(label)
            .ok_or_else(|| ParseStepError::UnknownDirection(label.to_owned()))?;
        let distance = distance.parse::<f64>()?;

        Ok(NavigationStep { direction, way: way.to_owned(), distance })
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

fn road_name(edge: &Edge) -> &str {
    edge.name().unwrap_or(UNKNOWN_ROAD)
}

/// Narrate `path` as navigation steps.
///
/// Paths with fewer than two vertices produce no steps.  The first step is
/// always [`Direction::Start`]; a final step for the last stretch of road is
/// always emitted.
///
/// # Errors
///
/// [`WmError::NotFound`](wm_core::WmError::NotFound) for unknown vertices and
/// [`WmError::NotAdjacent`](wm_core::WmError::NotAdjacent) when two
/// consecutive vertices share no edge.
pub fn directions(graph: &GraphStore, path: &[VertexId]) -> WmResult<Vec<NavigationStep>> {
    let [first, second, ..] = path else {
        return Ok(Vec::new());
    };

    let mut steps = Vec::new();
    let mut way = road_name(graph.edge_between(*first, *second)?).to_owned();
    let mut previous_bearing = graph.bearing(*first, *second)?;
    let mut direction = Direction::Start;
    let mut distance = 0.0;

    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let name = road_name(graph.edge_between(a, b)?);
        let bearing = graph.bearing(a, b)?;
        let leg = graph.distance(a, b)?;

        if name == way {
            distance += leg;
        } else {
            steps.push(NavigationStep {
                direction,
                way: std::mem::replace(&mut way, name.to_owned()),
                distance,
            });
            direction = classify(previous_bearing, bearing);
            distance = leg;
        }
        previous_bearing = bearing;
    }

    steps.push(NavigationStep { direction, way, distance });
    Ok(steps)
}
