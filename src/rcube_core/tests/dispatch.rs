use std::collections::HashMap;

use itertools::Itertools;
use rcube_core::{Face, Response, dispatch};

const DEFAULT_CUBE: [&str; 6] = ["green", "yellow", "blue", "white", "red", "orange"];

fn request(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

fn solved() -> Vec<String> {
    DEFAULT_CUBE
        .iter()
        .flat_map(|&c| std::iter::repeat_n(c.to_owned(), 9))
        .collect()
}

fn check(facelets: &[String]) -> Response {
    dispatch(&request(&[("op", "check"), ("cube", facelets.join(",").as_str())]))
}

#[test_log::test]
fn test_create_default() {
    let response = dispatch(&request(&[("op", "create")]));

    assert_eq!(response.status, "created");
    assert_eq!(response.cube, Some(solved()));
}

#[test_log::test]
fn test_create_with_overrides() {
    let response = dispatch(&request(&[
        ("op", "create"),
        ("f", "f"),
        ("r", "r"),
        ("b", "b"),
        ("l", "l"),
        ("t", "t"),
        ("u", "u"),
    ]));

    let cube = response.cube.unwrap();
    for face in Face::ALL {
        assert!(cube[face.range()].iter().all(|c| c == face.key()));
    }
}

#[test_log::test]
fn test_create_non_unique() {
    let response = dispatch(&request(&[("op", "create"), ("f", "purple"), ("r", "purple")]));

    assert_eq!(response.status, "error: non-unique color(s) specified");
    assert_eq!(response.cube, None);

    let response = dispatch(&request(&[("op", "create"), ("t", "orange")]));
    assert_eq!(response.status, "error: non-unique color(s) specified");
}

#[test_log::test]
fn test_check_non_unique_wins_over_size() {
    let response = dispatch(&request(&[("op", "check"), ("f", "blue"), ("cube", "x")]));

    assert_eq!(response.status, "error: non-unique color(s) specified");
}

#[test_log::test]
fn test_check_wrong_size() {
    let mut cube = solved();
    cube.pop();
    assert_eq!(check(&cube).status, "error: cube not sized properly");

    let mut cube = solved();
    cube.push("green".to_owned());
    assert_eq!(check(&cube).status, "error: cube not sized properly");
}

#[test_log::test]
fn test_check_full() {
    assert_eq!(check(&solved()).status, "full");
    // Pure function of the input
    assert_eq!(check(&solved()), check(&solved()));
}

#[test_log::test]
fn test_check_full_with_overrides() {
    let created = dispatch(&request(&[("op", "create"), ("l", "black")]))
        .cube
        .unwrap();

    let response = dispatch(&request(&[
        ("op", "check"),
        ("l", "black"),
        ("cube", created.join(",").as_str()),
    ]));
    assert_eq!(response.status, "full");
}

#[test_log::test]
fn test_check_swapped_centers() {
    let mut cube = solved();
    for (a, b) in [
        (Face::Front, Face::Right),
        (Face::Back, Face::Left),
        (Face::Top, Face::Bottom),
    ] {
        cube.swap(a.center_index(), b.center_index());
    }

    assert_eq!(check(&cube).status, "error: illegal cube");
}

#[test_log::test]
fn test_check_bad_counts() {
    let mut cube = solved();
    cube[0] = "yellow".to_owned();
    assert_eq!(check(&cube).status, "error: illegal cube");

    let cube = solved()
        .into_iter()
        .map(|c| if c == "orange" { "red".to_owned() } else { c })
        .collect_vec();
    assert_eq!(check(&cube).status, "error: illegal cube");
}

#[test_log::test]
fn test_check_spots() {
    let cube = Face::ALL
        .into_iter()
        .flat_map(|face| {
            let ring = DEFAULT_CUBE[(face as usize + 1) % 6];
            let mut facelets = vec![ring.to_owned(); 9];
            facelets[4] = face.default_color().to_owned();
            facelets
        })
        .collect_vec();

    assert_eq!(check(&cube).status, "spots");
}

#[test_log::test]
fn test_check_spots_with_uniform_faces() {
    let mut cube = solved();
    for i in (0..9).filter(|&i| i != 4) {
        cube.swap(Face::Top.range().start + i, Face::Bottom.range().start + i);
    }

    assert_eq!(check(&cube).status, "spots");
}

#[test_log::test]
fn test_check_unknown() {
    let mut cube = solved();
    cube.swap(0, 9);
    cube.swap(17, 18);

    assert_eq!(check(&cube).status, "unknown");
}
