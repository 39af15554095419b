use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::EnumCount;

use crate::FaceletColor;

/// Face of the cube.
///
/// The discriminant order is the canonical iteration order of faces.
#[derive(
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
pub enum Face {
    /// Front face.
    F,
    /// Back face.
    B,
    /// Up face.
    U,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Right face.
    R,
}

impl Face {
    /// All faces in canonical order.
    pub const ALL: [Face; Face::COUNT] = [Face::F, Face::B, Face::U, Face::D, Face::L, Face::R];

    /// Returns the color of every facelet on this face when the cube is
    /// solved.
    pub const fn color(self) -> FaceletColor {
        match self {
            Face::F => FaceletColor::Red,
            Face::B => FaceletColor::Orange,
            Face::U => FaceletColor::White,
            Face::D => FaceletColor::Yellow,
            Face::L => FaceletColor::Blue,
            Face::R => FaceletColor::Green,
        }
    }

    /// Returns the single-letter name of the face.
    pub const fn to_char(self) -> char {
        match self {
            Face::F => 'F',
            Face::B => 'B',
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// Returns the face with the given single-letter name, or `None` if there
    /// is none. Only upper-case letters are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.to_char() == c)
    }

    /// Returns the human-friendly name of the face.
    pub const fn name(self) -> &'static str {
        match self {
            Face::F => "Front",
            Face::B => "Back",
            Face::U => "Up",
            Face::D => "Down",
            Face::L => "Left",
            Face::R => "Right",
        }
    }
}

/// Fixed-size table with one value per [`Face`], indexed by face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>([T; Face::COUNT]);

impl<T> PerFace<T> {
    /// Constructs a table by calling `f` once for each face, in canonical
    /// order.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Face::ALL[i])))
    }

    /// Iterates over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(&self.0)
    }

    /// Iterates over the values in canonical face order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}

impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face as usize]
    }
}

/// Serializes as a map from face letter to value.
impl<T: Serialize> Serialize for PerFace<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Face::COUNT))?;
        for (face, value) in self.iter() {
            map.serialize_entry(&face.to_string(), value)?;
        }
        map.end()
    }
}
