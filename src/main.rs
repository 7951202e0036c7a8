use std::collections::HashMap;

use clap::{Args, Parser, Subcommand};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug};
use rcube_core::{Color, ColorOverrides, Face, Response, check_cube, create_cube, dispatch};

/// Creates and checks 3x3x3 cubes given as 54 facelet colors
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Handle a raw request, e.g. "op=check&f=purple&cube=...".
    Query {
        /// The URL query string of the request.
        query: String,
    },
    /// Create a solved cube.
    Create {
        #[command(flatten)]
        colors: FaceColors,
    },
    /// Validate and classify a cube.
    Check {
        /// The 54 facelet colors, face by face, separated by commas.
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        cube: Vec<String>,

        #[command(flatten)]
        colors: FaceColors,
    },
}

/// Color overrides; faces that aren't given keep their default color.
#[derive(Args)]
struct FaceColors {
    /// Front face color [default: green]
    #[arg(long)]
    front: Option<String>,
    /// Right face color [default: yellow]
    #[arg(long)]
    right: Option<String>,
    /// Back face color [default: blue]
    #[arg(long)]
    back: Option<String>,
    /// Left face color [default: white]
    #[arg(long)]
    left: Option<String>,
    /// Top face color [default: red]
    #[arg(long)]
    top: Option<String>,
    /// Bottom face color [default: orange]
    #[arg(long)]
    bottom: Option<String>,
}

impl From<FaceColors> for ColorOverrides {
    fn from(value: FaceColors) -> Self {
        let mut overrides = ColorOverrides::default();

        for (face, color) in [
            (Face::Front, value.front),
            (Face::Right, value.right),
            (Face::Back, value.back),
            (Face::Left, value.left),
            (Face::Top, value.top),
            (Face::Bottom, value.bottom),
        ] {
            if let Some(color) = color {
                overrides = overrides.with(face, &color);
            }
        }

        overrides
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let response = match cli.command {
        Commands::Query { query } => {
            let params = serde_urlencoded::from_str::<HashMap<String, String>>(
                query.trim_start_matches('?'),
            )?;
            debug!("Decoded request {params:?}");
            dispatch(&params)
        }
        Commands::Create { colors } => match create_cube(&colors.into()) {
            Ok(cube) => Response::created(cube),
            Err(e) => e.into(),
        },
        Commands::Check { cube, colors } => {
            let facelets = cube.iter().map(|c| Color::from(c.as_str())).collect_vec();

            match check_cube(&colors.into(), &facelets) {
                Ok(pattern) => pattern.into(),
                Err(e) => e.into(),
            }
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rcube_core::{ColorOverrides, Face};

    use crate::{Cli, Commands};

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from([
            "rcube",
            "check",
            "--top",
            "purple",
            "--cube",
            "a,b,c",
        ])
        .unwrap();

        let Commands::Check { cube, colors } = cli.command else {
            panic!("expected the check subcommand");
        };
        assert_eq!(cube, ["a", "b", "c"]);
        assert_eq!(
            ColorOverrides::from(colors),
            ColorOverrides::default().with(Face::Top, "purple")
        );
    }

    #[test]
    fn test_query_args() {
        let cli = Cli::try_parse_from(["rcube", "-vv", "query", "op=create&f=red"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Query { query } if query == "op=create&f=red"));
    }
}
