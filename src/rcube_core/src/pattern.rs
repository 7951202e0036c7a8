use std::fmt::Display;

use itertools::Itertools;

use crate::{colors::Color, cube::Cube, face::CENTER};

/// Coarse description of how far along a legal cube is. This is only a
/// pattern match; `Unknown` cubes may well be solvable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Every face is a single color.
    Full,
    /// On every face the eight facelets around the center match each other.
    Spots,
    Unknown,
}

impl Pattern {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Full => "full",
            Pattern::Spots => "spots",
            Pattern::Unknown => "unknown",
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a cube. `Full` is tested before `Spots`; a full cube also
/// satisfies the spots condition.
#[must_use]
pub fn classify(cube: &Cube) -> Pattern {
    if cube.faces().all(|(_, face)| face.iter().all_equal()) {
        Pattern::Full
    } else if cube.faces().all(|(_, face)| ring(face).all_equal()) {
        Pattern::Spots
    } else {
        Pattern::Unknown
    }
}

/// The facelets of a face excluding its center.
fn ring(face: &[Color]) -> impl Iterator<Item = &Color> {
    face.iter()
        .enumerate()
        .filter(|&(i, _)| i != CENTER)
        .map(|(_, color)| color)
}
