use crate::{
    colors::{Color, ColorAssignment},
    face::{FACELET_COUNT, FACELETS_PER_FACE, Face},
};

/// A cube's 54 facelets laid out face by face in canonical order.
///
/// Outside of this crate a `Cube` can only come from [`Cube::solved`] or from a
/// successful [`crate::check_cube`] pipeline, so every instance has the right
/// size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube(Box<[Color]>);

impl Cube {
    /// Each face painted entirely in its assigned color.
    #[must_use]
    pub fn solved(colors: &ColorAssignment) -> Cube {
        Cube(
            colors
                .iter()
                .flat_map(|(_, color)| std::iter::repeat_n(color, FACELETS_PER_FACE))
                .cloned()
                .collect(),
        )
    }

    /// Wraps facelets that have already passed the size check.
    pub(crate) fn from_checked(facelets: Vec<Color>) -> Cube {
        debug_assert_eq!(facelets.len(), FACELET_COUNT);
        Cube(facelets.into_boxed_slice())
    }

    #[must_use]
    pub fn facelets(&self) -> &[Color] {
        &self.0
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Color] {
        &self.0[face.range()]
    }

    #[must_use]
    pub fn center(&self, face: Face) -> &Color {
        &self.0[face.center_index()]
    }

    /// Iterates over the faces in canonical order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &[Color])> {
        Face::ALL.into_iter().map(move |face| (face, self.face(face)))
    }

    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}
