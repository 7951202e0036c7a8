use std::{fmt::Display, ops::Range, str::FromStr};

/// Number of facelets on a single face.
pub const FACELETS_PER_FACE: usize = 9;
/// Number of facelets on the whole cube.
pub const FACELET_COUNT: usize = FACELETS_PER_FACE * Face::ALL.len();
/// Position of the center facelet within a face.
pub const CENTER: usize = 4;

/// One of the six faces of the cube. The discriminant is the face's position
/// in the flat facelet layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl Face {
    /// Every face in canonical order.
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Front, Right, Back, Left, Top, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The key identifying this face in a request. Bottom is `u` for "under".
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Face::Front => "f",
            Face::Right => "r",
            Face::Back => "b",
            Face::Left => "l",
            Face::Top => "t",
            Face::Bottom => "u",
        }
    }

    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Face::Front => "green",
            Face::Right => "yellow",
            Face::Back => "blue",
            Face::Left => "white",
            Face::Top => "red",
            Face::Bottom => "orange",
        }
    }

    /// The indices of this face's facelets in the flat layout.
    #[must_use]
    pub fn range(self) -> Range<usize> {
        let start = self as usize * FACELETS_PER_FACE;
        start..start + FACELETS_PER_FACE
    }

    #[must_use]
    pub fn center_index(self) -> usize {
        self as usize * FACELETS_PER_FACE + CENTER
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Face::Front),
            "r" => Ok(Face::Right),
            "b" => Ok(Face::Back),
            "l" => Ok(Face::Left),
            "t" => Ok(Face::Top),
            "u" => Ok(Face::Bottom),
            _ => Err(()),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Left => "left",
            Face::Top => "top",
            Face::Bottom => "bottom",
        };
        f.write_str(name)
    }
}
