//! Facelet storage and the permutation primitives that every move is built
//! from.

use serde::Serialize;
use strum::EnumCount;

use crate::{Face, FaceletColor, PerFace};

/// Number of facelets on each face.
pub const FACELETS_PER_FACE: usize = 9;

/// Index of the center facelet, which never moves.
pub const CENTER: usize = 4;

/// Facelets of one face in row-major order relative to that face:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub type FaceFacelets = [FaceletColor; FACELETS_PER_FACE];

/// Source index for each destination index when turning a face 90 degrees
/// clockwise.
const CLOCKWISE_SOURCE: [usize; FACELETS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Set of facelet positions moved between faces by a cycling step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Positions {
    /// Every position except the center: `{0, 1, 2, 3, 5, 6, 7, 8}`. Used by
    /// face turns.
    Edge8,
    /// Edge midpoints only: `{1, 3, 5, 7}`. Used by slice turns.
    Mid4,
}

impl Positions {
    /// Returns the facelet indices in the set, in ascending order.
    pub const fn indices(self) -> &'static [usize] {
        match self {
            Positions::Edge8 => &[0, 1, 2, 3, 5, 6, 7, 8],
            Positions::Mid4 => &[1, 3, 5, 7],
        }
    }
}

/// Colors of every facelet on the cube.
///
/// This is a plain value: cloning it produces an independent snapshot.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CubeState {
    faces: PerFace<FaceFacelets>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Returns the solved state, with each face filled with its canonical
    /// color.
    pub fn new() -> Self {
        Self {
            faces: PerFace::from_fn(|face| [face.color(); FACELETS_PER_FACE]),
        }
    }

    /// Returns the facelets of a face.
    pub fn face(&self, face: Face) -> &FaceFacelets {
        &self.faces[face]
    }

    /// Returns the facelets of all faces.
    pub fn faces(&self) -> &PerFace<FaceFacelets> {
        &self.faces
    }

    /// Returns the color at `index` on `face`, or `None` if `index` is not in
    /// `0..9`.
    pub fn facelet(&self, face: Face, index: usize) -> Option<FaceletColor> {
        self.faces[face].get(index).copied()
    }

    /// Returns whether every face is a single uniform color.
    ///
    /// Faces are compared against their own first facelet, not against their
    /// canonical color. Whole-cube rotations do not preserve this: their three
    /// layers cycle the same faces in the same direction, so `X` on a solved
    /// cube leaves mixed colors on the front, top, back and bottom faces.
    pub fn is_solved(&self) -> bool {
        self.faces
            .values()
            .all(|facelets| facelets.iter().all(|&c| c == facelets[0]))
    }

    /// Returns the number of facelets of each color across the whole cube, in
    /// the order of [`FaceletColor`]'s variants.
    pub fn color_counts(&self) -> [usize; FaceletColor::COUNT] {
        let mut counts = [0; FaceletColor::COUNT];
        for &color in self.faces.values().flatten() {
            counts[color as usize] += 1;
        }
        counts
    }

    /// Turns the facelets of `face` 90 degrees clockwise within the face.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        let old = self.faces[face];
        self.faces[face] = CLOCKWISE_SOURCE.map(|i| old[i]);
    }

    /// Turns the facelets of `face` 90 degrees counterclockwise within the
    /// face, as three clockwise turns.
    pub fn rotate_face_counterclockwise(&mut self, face: Face) {
        for _ in 0..3 {
            self.rotate_face_clockwise(face);
        }
    }

    /// Moves the facelets at `positions` one step around the cycle of four
    /// faces.
    ///
    /// If `reverse` is `false`, facelets travel `f1 -> f2 -> f3 -> f4 -> f1`.
    /// If `reverse` is `true`, they travel `f1 -> f4 -> f3 -> f2 -> f1`.
    /// Facelets keep their index when moving to another face.
    pub fn cycle_face_positions(&mut self, cycle: [Face; 4], positions: Positions, reverse: bool) {
        let [f1, f2, f3, f4] = cycle;
        // `f1` is both the first source and the last destination.
        let first = self.faces[f1];
        let faces = &mut self.faces;
        for &i in positions.indices() {
            if reverse {
                faces[f1][i] = faces[f2][i];
                faces[f2][i] = faces[f3][i];
                faces[f3][i] = faces[f4][i];
                faces[f4][i] = first[i];
            } else {
                faces[f1][i] = faces[f4][i];
                faces[f4][i] = faces[f3][i];
                faces[f3][i] = faces[f2][i];
                faces[f2][i] = first[i];
            }
        }
    }
}
