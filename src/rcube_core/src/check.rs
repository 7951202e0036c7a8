use itertools::Itertools;
use log::{debug, trace};

use crate::{
    colors::{Color, ColorAssignment, ColorOverrides},
    cube::Cube,
    error::{CubeError, IllegalCubeReason},
    face::{FACELET_COUNT, FACELETS_PER_FACE, Face},
    pattern::{Pattern, classify},
};

/// A single validation step run on a correctly sized cube. Steps run in order
/// and the first error wins.
type Step = fn(&ColorAssignment, &Cube) -> Result<(), CubeError>;

static STEPS: [(&str, Step); 2] = [
    ("color count", check_color_counts),
    ("centers", check_centers),
];

/// Builds a solved cube in the requested colors.
///
/// # Errors
///
/// `CubeError::NonUniqueColors` if two faces end up with the same color.
pub fn create_cube(overrides: &ColorOverrides) -> Result<Cube, CubeError> {
    let colors = overrides.resolve();
    colors.ensure_unique()?;

    debug!("Creating cube with colors {colors:?}");
    Ok(Cube::solved(&colors))
}

/// Validates an externally supplied cube and classifies it.
///
/// # Errors
///
/// The first failing check, in order: non-unique colors, wrong size, then
/// illegal color counts or centers.
pub fn check_cube(overrides: &ColorOverrides, facelets: &[Color]) -> Result<Pattern, CubeError> {
    let colors = overrides.resolve();
    colors.ensure_unique()?;

    let cube = sized_cube(facelets)?;

    for (name, step) in &STEPS {
        trace!("Running check `{name}`");
        if let Err(e) = step(&colors, &cube) {
            debug!("Check `{name}` failed: {e:?}");
            return Err(e);
        }
    }

    let pattern = classify(&cube);
    debug!("Cube classified as {pattern}");

    Ok(pattern)
}

fn sized_cube(facelets: &[Color]) -> Result<Cube, CubeError> {
    if facelets.len() == FACELET_COUNT {
        Ok(Cube::from_checked(facelets.to_vec()))
    } else {
        debug!("Check `size` failed: got {} facelets", facelets.len());
        Err(CubeError::WrongSize {
            expected: FACELET_COUNT,
            actual: facelets.len(),
        })
    }
}

fn check_color_counts(_: &ColorAssignment, cube: &Cube) -> Result<(), CubeError> {
    let counts = cube.facelets().iter().counts();

    if counts.len() == Face::ALL.len() && counts.values().all(|&n| n == FACELETS_PER_FACE) {
        return Ok(());
    }

    let counts = counts
        .into_iter()
        .map(|(color, n)| (Color::clone(color), n))
        .sorted_by(|(a, _), (b, _)| (**a).cmp(&**b))
        .collect();
    Err(IllegalCubeReason::ColorCount(counts).into())
}

fn check_centers(colors: &ColorAssignment, cube: &Cube) -> Result<(), CubeError> {
    for face in Face::ALL {
        let expected = &colors[face];
        let actual = cube.center(face);

        if actual != expected {
            return Err(IllegalCubeReason::CenterMismatch {
                face,
                expected: Color::clone(expected),
                actual: Color::clone(actual),
            }
            .into());
        }
    }

    Ok(())
}
