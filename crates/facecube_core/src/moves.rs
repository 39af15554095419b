//! Move notation and the table of permutations that defines each move.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Face, MoveParseError, Positions};

/// Layer or group of layers that a move turns, named by its notation letter.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::EnumCount,
    strum::Display,
)]
pub enum Layer {
    /// Up face.
    U,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Back face.
    B,
    /// Middle slice, between L and R.
    M,
    /// Equator slice, between U and D.
    E,
    /// Standing slice, between F and B.
    S,
    /// Whole cube around the L-R axis.
    X,
    /// Whole cube around the U-D axis.
    Y,
    /// Whole cube around the F-B axis.
    Z,
}

impl Layer {
    /// Returns the upper-case notation letter of the layer.
    pub const fn letter(self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::L => 'L',
            Layer::R => 'R',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
            Layer::X => 'X',
            Layer::Y => 'Y',
            Layer::Z => 'Z',
        }
    }

    /// Returns the face that the layer pivots, if it is a face layer.
    pub const fn face(self) -> Option<Face> {
        match self {
            Layer::U => Some(Face::U),
            Layer::D => Some(Face::D),
            Layer::L => Some(Face::L),
            Layer::R => Some(Face::R),
            Layer::F => Some(Face::F),
            Layer::B => Some(Face::B),
            Layer::M | Layer::E | Layer::S | Layer::X | Layer::Y | Layer::Z => None,
        }
    }

    /// Returns what kind of move turns this layer.
    pub const fn kind(self) -> MoveKind {
        match self {
            Layer::U | Layer::D | Layer::L | Layer::R | Layer::F | Layer::B => MoveKind::Face,
            Layer::M | Layer::E | Layer::S => MoveKind::Slice,
            Layer::X | Layer::Y | Layer::Z => MoveKind::Rotation,
        }
    }
}

/// Category of move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MoveKind {
    /// Turn of one outer face.
    Face,
    /// Turn of one inner slice.
    Slice,
    /// Rotation of the whole cube.
    Rotation,
}

/// Direction of a move.
///
/// Upper-case notation is [`Direction::Cw`] and lower-case notation is
/// [`Direction::Ccw`]. For slices and whole-cube rotations these are simply
/// the two opposite directions; the names follow face turns.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clockwise, written in upper case.
    Cw,
    /// Counterclockwise, written in lower case.
    Ccw,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }
}

/// Single move, written as one character.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "char", try_from = "char")]
pub struct Move {
    /// Layer being turned.
    pub layer: Layer,
    /// Direction of the turn.
    pub direction: Direction,
}

/// Permutation applied by a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveDefinition {
    /// Optional face rotation plus one cycle of facelets between four faces.
    Turn {
        /// Face whose own facelets rotate, and the direction of rotation.
        rotate: Option<(Face, Direction)>,
        /// Four faces whose facelets are cycled.
        cycle: [Face; 4],
        /// Facelet positions carried around the cycle.
        positions: Positions,
        /// Whether facelets travel `f1 -> f4` instead of `f1 -> f2`.
        reverse: bool,
    },
    /// Sequence of three simpler moves, applied in order.
    Composite([Move; 3]),
}

impl Move {
    /// All 24 moves, in notation order: face turns, then slices, then
    /// whole-cube rotations.
    pub const ALL: [Move; 24] = [
        Move::cw(Layer::U),
        Move::ccw(Layer::U),
        Move::cw(Layer::D),
        Move::ccw(Layer::D),
        Move::cw(Layer::L),
        Move::ccw(Layer::L),
        Move::cw(Layer::R),
        Move::ccw(Layer::R),
        Move::cw(Layer::F),
        Move::ccw(Layer::F),
        Move::cw(Layer::B),
        Move::ccw(Layer::B),
        Move::cw(Layer::M),
        Move::ccw(Layer::M),
        Move::cw(Layer::E),
        Move::ccw(Layer::E),
        Move::cw(Layer::S),
        Move::ccw(Layer::S),
        Move::cw(Layer::X),
        Move::ccw(Layer::X),
        Move::cw(Layer::Y),
        Move::ccw(Layer::Y),
        Move::cw(Layer::Z),
        Move::ccw(Layer::Z),
    ];

    /// Moves used for random scrambles: the 12 face turns.
    pub const SCRAMBLE: [Move; 12] = [
        Move::cw(Layer::U),
        Move::ccw(Layer::U),
        Move::cw(Layer::D),
        Move::ccw(Layer::D),
        Move::cw(Layer::L),
        Move::ccw(Layer::L),
        Move::cw(Layer::R),
        Move::ccw(Layer::R),
        Move::cw(Layer::F),
        Move::ccw(Layer::F),
        Move::cw(Layer::B),
        Move::ccw(Layer::B),
    ];

    /// Constructs a move.
    pub const fn new(layer: Layer, direction: Direction) -> Self {
        Self { layer, direction }
    }
    /// Constructs a clockwise (upper-case) move.
    pub const fn cw(layer: Layer) -> Self {
        Self::new(layer, Direction::Cw)
    }
    /// Constructs a counterclockwise (lower-case) move.
    pub const fn ccw(layer: Layer) -> Self {
        Self::new(layer, Direction::Ccw)
    }

    /// Returns the notation character for the move.
    pub const fn to_char(self) -> char {
        let c = self.layer.letter();
        match self.direction {
            Direction::Cw => c,
            Direction::Ccw => c.to_ascii_lowercase(),
        }
    }

    /// Returns the move written as `c`, or `None` if `c` is not one of the 24
    /// notations.
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.to_char() == c)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.layer, self.direction.rev())
    }

    /// Returns what kind of move this is.
    pub const fn kind(self) -> MoveKind {
        self.layer.kind()
    }

    /// Returns the permutation that this move applies.
    pub const fn definition(self) -> MoveDefinition {
        use Direction::{Ccw, Cw};
        use Face as F;
        use Positions::{Edge8, Mid4};

        const fn turn(face: Face, dir: Direction, cycle: [Face; 4], reverse: bool) -> MoveDefinition {
            MoveDefinition::Turn {
                rotate: Some((face, dir)),
                cycle,
                positions: Edge8,
                reverse,
            }
        }
        const fn slice(cycle: [Face; 4]) -> MoveDefinition {
            MoveDefinition::Turn {
                rotate: None,
                cycle,
                positions: Mid4,
                reverse: false,
            }
        }
        const fn seq(a: Move, b: Move, c: Move) -> MoveDefinition {
            MoveDefinition::Composite([a, b, c])
        }

        match (self.layer, self.direction) {
            (Layer::U, Cw) => turn(F::U, Cw, [F::F, F::L, F::B, F::R], false),
            (Layer::U, Ccw) => turn(F::U, Ccw, [F::R, F::B, F::L, F::F], false),
            (Layer::D, Cw) => turn(F::D, Cw, [F::F, F::R, F::B, F::L], true),
            (Layer::D, Ccw) => turn(F::D, Ccw, [F::L, F::B, F::R, F::F], true),
            (Layer::L, Cw) => turn(F::L, Cw, [F::F, F::U, F::B, F::D], false),
            (Layer::L, Ccw) => turn(F::L, Ccw, [F::D, F::B, F::U, F::F], false),
            (Layer::R, Cw) => turn(F::R, Cw, [F::F, F::D, F::B, F::U], false),
            (Layer::R, Ccw) => turn(F::R, Ccw, [F::U, F::B, F::D, F::F], false),
            (Layer::F, Cw) => turn(F::F, Cw, [F::U, F::R, F::D, F::L], false),
            (Layer::F, Ccw) => turn(F::F, Ccw, [F::L, F::D, F::R, F::U], false),
            (Layer::B, Cw) => turn(F::B, Cw, [F::U, F::L, F::D, F::R], true),
            (Layer::B, Ccw) => turn(F::B, Ccw, [F::R, F::D, F::L, F::U], true),

            (Layer::M, Cw) => slice([F::U, F::F, F::D, F::B]),
            (Layer::M, Ccw) => slice([F::B, F::D, F::F, F::U]),
            (Layer::E, Cw) => slice([F::F, F::R, F::B, F::L]),
            (Layer::E, Ccw) => slice([F::L, F::B, F::R, F::F]),
            (Layer::S, Cw) => slice([F::U, F::L, F::D, F::R]),
            (Layer::S, Ccw) => slice([F::R, F::D, F::L, F::U]),

            (Layer::X, Cw) => seq(Move::cw(Layer::R), Move::cw(Layer::M), Move::ccw(Layer::L)),
            (Layer::X, Ccw) => seq(Move::ccw(Layer::R), Move::ccw(Layer::M), Move::cw(Layer::L)),
            (Layer::Y, Cw) => seq(Move::cw(Layer::U), Move::ccw(Layer::E), Move::ccw(Layer::D)),
            (Layer::Y, Ccw) => seq(Move::ccw(Layer::U), Move::cw(Layer::E), Move::cw(Layer::D)),
            (Layer::Z, Cw) => seq(Move::cw(Layer::F), Move::cw(Layer::S), Move::ccw(Layer::B)),
            (Layer::Z, Ccw) => seq(Move::ccw(Layer::F), Move::ccw(Layer::S), Move::cw(Layer::B)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<Move> for char {
    fn from(m: Move) -> Self {
        m.to_char()
    }
}

impl TryFrom<char> for Move {
    type Error = MoveParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Move::from_char(c).ok_or(MoveParseError::BadMove {
            notation: c,
            position: 0,
        })
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MoveParseError::Empty),
            (Some(c), None) => Move::try_from(c),
            (Some(_), Some(_)) => Err(MoveParseError::NotSingle(s.to_owned())),
        }
    }
}

/// Returns the notation that undoes `notation`, such as `u` for `U`.
///
/// Characters that are not move notations are returned unchanged.
pub fn opposite_notation(notation: char) -> char {
    match Move::from_char(notation) {
        Some(m) => m.opposite().to_char(),
        None => notation,
    }
}
