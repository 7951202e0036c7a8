use std::{collections::HashMap, hash::BuildHasher};

use log::{debug, info};
use serde::Serialize;

use crate::{
    check::{check_cube, create_cube},
    colors::{Color, ColorOverrides},
    cube::Cube,
    error::CubeError,
    pattern::Pattern,
};

/// The record returned for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cube: Option<Vec<String>>,
}

impl Response {
    fn status(status: impl Into<String>) -> Response {
        Response {
            status: status.into(),
            cube: None,
        }
    }

    #[must_use]
    pub fn created(cube: Cube) -> Response {
        Response {
            status: "created".to_owned(),
            cube: Some(cube.into_strings()),
        }
    }
}

impl From<Pattern> for Response {
    fn from(value: Pattern) -> Self {
        Response::status(value.as_str())
    }
}

impl From<CubeError> for Response {
    fn from(value: CubeError) -> Self {
        Response::status(value.status())
    }
}

/// Routes a decoded request to the matching operation. `op` selects the
/// operation, the face keys override colors, and `cube` carries the
/// comma-separated facelets for `check`.
#[must_use]
pub fn dispatch<S: BuildHasher>(params: &HashMap<String, String, S>) -> Response {
    let Some(op) = params.get("op") else {
        info!("Request is missing an `op`");
        return Response::status("error: missing op");
    };

    let overrides = ColorOverrides::from_params(params);

    match op.as_str() {
        "create" => match create_cube(&overrides) {
            Ok(cube) => Response::created(cube),
            Err(e) => e.into(),
        },
        "check" => {
            let facelets = params
                .get("cube")
                .map(|cube| split_facelets(cube))
                .unwrap_or_default();

            match check_cube(&overrides, &facelets) {
                Ok(pattern) => pattern.into(),
                Err(e) => e.into(),
            }
        }
        _ => {
            debug!("Unknown op `{op}`");
            Response::status("error: unknown op")
        }
    }
}

/// Splits the wire form of a cube into facelet colors.
#[must_use]
pub fn split_facelets(cube: &str) -> Vec<Color> {
    cube.split(',').map(Color::from).collect()
}
