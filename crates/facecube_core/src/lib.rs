//! Facelet-permutation engine for a 3x3x3 twisty cube.
//!
//! The cube is modeled as six faces of nine colored facelets each. Every move
//! is a fixed permutation of facelets: an optional rotation of one face's own
//! facelets plus a cycle of facelets between four neighboring faces. This is a
//! simplified model and does not track individual pieces.
//!
//! # Example
//!
//! ```rust
//! use facecube_core::{Cube, Face, FaceletColor};
//!
//! let mut cube = Cube::new();
//! assert!(cube.move_notation('R'));
//! assert!(!cube.move_notation('?'));
//! assert_eq!(cube.move_count(), 1);
//! assert!(!cube.is_solved());
//!
//! assert!(cube.undo());
//! assert!(cube.is_solved());
//! assert_eq!(cube.facelet(Face::U, 4), Some(FaceletColor::White));
//! ```

mod color;
mod cube;
mod face;
mod moves;
pub mod notation;
mod scramble;
mod state;

#[cfg(test)]
mod tests;

pub use color::FaceletColor;
pub use cube::Cube;
pub use face::{Face, PerFace};
pub use moves::{Direction, Layer, Move, MoveDefinition, MoveKind, opposite_notation};
pub use notation::MoveParseError;
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, MAX_SCRAMBLE_LENGTH, ScrambleParams, random_moves};
pub use state::{CENTER, CubeState, FACELETS_PER_FACE, FaceFacelets, Positions};

/// Version string such as `facecube_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
