use eyre::{Result, eyre};
use facecube_core::{Cube, CubeState, MAX_SCRAMBLE_LENGTH, Move, ScrambleParams, notation};
use facecube_prefs::Preferences;
use serde::Serialize;

use crate::render::render_net;

/// facecube command-line interface
///
/// If no subcommand is specified, then an interactive session is started on
/// stdin.
#[derive(Debug, clap::Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Move notation (such as `RUru`).
        #[arg(required = true)]
        moves: Vec<String>,
        /// Print the cube as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Scramble a solved cube and print the scramble and the result.
    Scramble {
        /// Number of moves in the scramble.
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_SCRAMBLE_LENGTH)))]
        length: Option<u32>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<String>,
        /// Print the scramble and cube as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print every move notation.
    Moves,
    /// Print the preferences file location and the current preferences as
    /// JSON.
    Prefs {
        /// Write the current preferences to the preferences file, creating it
        /// if it does not exist.
        #[arg(long)]
        save: bool,
    },
}

#[derive(Serialize, Debug)]
struct CubeReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    scramble: Option<&'a ScrambleParams>,
    moves: &'a [Move],
    solved: bool,
    state: CubeState,
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Apply { moves, json } => {
            let mut cube = Cube::new();
            let moves = moves.join(" ");
            cube.apply_sequence(&moves).map_err(|e| eyre!("{e} in {moves:?}"))?;

            if json {
                write_json_output(&CubeReport {
                    scramble: None,
                    moves: cube.history(),
                    solved: cube.is_solved(),
                    state: cube.state(),
                })
            } else {
                print_cube(&cube, prefs);
                Ok(())
            }
        }

        Subcommand::Scramble { length, seed, json } => {
            let params = match seed {
                Some(seed) => {
                    let length = length.unwrap_or(prefs.scramble.length);
                    ScrambleParams::with_seed(length.min(MAX_SCRAMBLE_LENGTH), seed)
                }
                None => prefs.scramble.params(length),
            };
            let mut cube = Cube::new();
            let moves = cube.scramble_seeded(&params);

            if json {
                write_json_output(&CubeReport {
                    scramble: Some(&params),
                    moves: &moves,
                    solved: cube.is_solved(),
                    state: cube.state(),
                })
            } else {
                println!("Seed: {}", params.seed);
                println!("Scramble: {}", notation::format_moves(moves));
                print_cube(&cube, prefs);
                Ok(())
            }
        }

        Subcommand::Moves => {
            for m in Move::ALL {
                let kind = m.kind().to_string();
                let face = m.layer.face().map_or("", |f| f.name());
                println!("{m}  {kind:<8}  {face:<5}  opposite {}", m.opposite());
            }
            Ok(())
        }

        Subcommand::Prefs { save } => {
            if save {
                prefs.save()?;
            }
            let path = facecube_prefs::paths::prefs_file()?;
            eprintln!("{}", path.display());
            write_json_output(prefs)
        }
    }
}

fn print_cube(cube: &Cube, prefs: &Preferences) {
    println!("{}", render_net(&cube.state(), &prefs.display));
    let status = if cube.is_solved() { "solved" } else { "not solved" };
    println!("{} moves, {status}", cube.move_count());
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    use eyre::Context;

    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
