use thiserror::Error;

use crate::{colors::Color, face::Face};

/// Why a request was rejected. The `Display` text of each variant is the
/// reason reported to callers; see [`CubeError::status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("non-unique color(s) specified")]
    NonUniqueColors,
    #[error("cube not sized properly")]
    WrongSize { expected: usize, actual: usize },
    /// Both causes share one reason on the wire; the variant keeps them apart.
    #[error("illegal cube")]
    IllegalCube(IllegalCubeReason),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalCubeReason {
    #[error("Expected 6 colors appearing 9 times each but got {0:?}")]
    ColorCount(Vec<(Color, usize)>),
    #[error("The center of the {face} face is {actual} but the face is assigned {expected}")]
    CenterMismatch {
        face: Face,
        expected: Color,
        actual: Color,
    },
}

impl CubeError {
    /// The status string reported for this error, e.g. `error: illegal cube`.
    #[must_use]
    pub fn status(&self) -> String {
        format!("error: {self}")
    }
}

impl From<IllegalCubeReason> for CubeError {
    fn from(value: IllegalCubeReason) -> Self {
        CubeError::IllegalCube(value)
    }
}
