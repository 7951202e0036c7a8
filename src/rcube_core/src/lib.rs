//! Validation and classification of 3x3x3 cube states given as 54 facelet
//! colors.

mod check;
pub mod colors;
pub mod cube;
pub mod dispatch;
pub mod error;
pub mod face;
pub mod pattern;

pub use check::{check_cube, create_cube};
pub use colors::{Color, ColorAssignment, ColorOverrides};
pub use cube::Cube;
pub use dispatch::{Response, dispatch};
pub use error::{CubeError, IllegalCubeReason};
pub use face::Face;
pub use pattern::Pattern;
