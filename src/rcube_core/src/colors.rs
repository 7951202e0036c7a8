use std::{
    collections::{HashMap, HashSet},
    ops::Index,
};

use internment::ArcIntern;
use log::{debug, trace};

use crate::{error::CubeError, face::Face};

/// A facelet color. Any non-empty token is accepted; colors are only ever
/// compared for equality.
pub type Color = ArcIntern<str>;

/// Per-request color choices. Faces left as `None` fall back to their default
/// color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub front: Option<Color>,
    pub right: Option<Color>,
    pub back: Option<Color>,
    pub left: Option<Color>,
    pub top: Option<Color>,
    pub bottom: Option<Color>,
}

impl ColorOverrides {
    /// Picks the face keys out of a request's parameters. Keys that don't name a
    /// face are ignored.
    #[must_use]
    pub fn from_params<S: std::hash::BuildHasher>(params: &HashMap<String, String, S>) -> Self {
        let mut overrides = ColorOverrides::default();

        for (key, value) in params {
            let Ok(face) = key.parse::<Face>() else {
                continue;
            };
            trace!("Color override {face}={value}");
            *overrides.slot_mut(face) = Some(Color::from(value.as_str()));
        }

        overrides
    }

    #[must_use]
    pub fn with(mut self, face: Face, color: &str) -> Self {
        *self.slot_mut(face) = Some(Color::from(color));
        self
    }

    #[must_use]
    pub fn get(&self, face: Face) -> Option<&Color> {
        match face {
            Face::Front => self.front.as_ref(),
            Face::Right => self.right.as_ref(),
            Face::Back => self.back.as_ref(),
            Face::Left => self.left.as_ref(),
            Face::Top => self.top.as_ref(),
            Face::Bottom => self.bottom.as_ref(),
        }
    }

    fn slot_mut(&mut self, face: Face) -> &mut Option<Color> {
        match face {
            Face::Front => &mut self.front,
            Face::Right => &mut self.right,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
        }
    }

    /// Fills every face without an override with its default color.
    #[must_use]
    pub fn resolve(&self) -> ColorAssignment {
        ColorAssignment(Face::ALL.map(|face| match self.get(face) {
            Some(color) => Color::clone(color),
            None => Color::from(face.default_color()),
        }))
    }
}

/// The color of every face, indexed by `Face`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment([Color; 6]);

impl ColorAssignment {
    /// Rejects assignments where two faces share a color.
    ///
    /// # Errors
    ///
    /// `CubeError::NonUniqueColors` if any color appears on more than one face.
    pub fn ensure_unique(&self) -> Result<(), CubeError> {
        let unique = self.0.iter().collect::<HashSet<_>>();

        if unique.len() == self.0.len() {
            Ok(())
        } else {
            debug!("Rejecting color assignment {self:?}: colors are not unique");
            Err(CubeError::NonUniqueColors)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, &Color)> {
        Face::ALL.into_iter().zip(&self.0)
    }
}

impl Default for ColorAssignment {
    fn default() -> Self {
        ColorOverrides::default().resolve()
    }
}

impl Index<Face> for ColorAssignment {
    type Output = Color;

    fn index(&self, index: Face) -> &Self::Output {
        &self.0[index as usize]
    }
}
