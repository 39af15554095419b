//! Interactive solving session.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use eyre::{Context, Result};
use facecube_core::{Cube, MAX_SCRAMBLE_LENGTH, notation};
use facecube_prefs::Preferences;

use crate::render::render_net;

const HELP: &str = "\
Enter move notation such as `RUru` to turn the cube. Lower case letters turn
counterclockwise. Whitespace between moves is ignored.

Commands:
  scramble [n]  scramble the cube
  undo          undo the last move
  reset         reset to the solved state
  rewind        undo every move, one at a time
  history       print every move since the last reset
  state         print the cube
  help          print this message
  quit          exit

An empty line scrambles the cube, or resets it if it is already scrambled.";

/// Progress of the current solve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum SolveStatus {
    /// The cube has not been scrambled since the last reset.
    NotScrambled,
    /// The cube has been scrambled and not yet solved.
    Scrambled,
    /// The cube was scrambled and then solved.
    Solved,
}

/// Result of handling one line of input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Response {
    /// Messages to print, one per line.
    pub messages: Vec<String>,
    /// Whether the cube should be printed.
    pub redraw: bool,
    /// Whether the session is over.
    pub quit: bool,
}
impl Response {
    fn message(s: impl Into<String>) -> Self {
        Self {
            messages: vec![s.into()],
            ..Self::default()
        }
    }
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }
    fn with_message(mut self, s: impl Into<String>) -> Self {
        self.messages.push(s.into());
        self
    }
}

/// Cube plus solve tracking for an interactive session.
#[derive(Debug)]
pub(crate) struct Session {
    cube: Cube,
    prefs: Preferences,
    status: SolveStatus,
    /// Time of the most recent scramble.
    started: Option<Instant>,
}

impl Session {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            cube: Cube::new(),
            prefs,
            status: SolveStatus::NotScrambled,
            started: None,
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// One-line summary of the session, like `Scrambled | Moves: 20 | Time: 00:14`.
    pub fn status_line(&self) -> String {
        let status = match self.status {
            SolveStatus::NotScrambled => "Not scrambled",
            SolveStatus::Scrambled => "Scrambled",
            SolveStatus::Solved => "Solved!",
        };
        let mut line = format!("{status} | Moves: {}", self.cube.move_count());
        if self.status == SolveStatus::Scrambled
            && let Some(started) = self.started
        {
            line += &format!(" | Time: {}", format_duration(started.elapsed()));
        }
        line
    }

    /// Handles one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return if self.status == SolveStatus::Scrambled {
                self.reset()
            } else {
                self.scramble(None)
            };
        };
        let arg = words.next();
        if words.next().is_some() && is_command(command) {
            return Response::message(format!("too many arguments to `{command}`"));
        }

        match (command, arg) {
            ("scramble", None) => self.scramble(None),
            ("scramble", Some(n)) => match n.parse() {
                Ok(n) if n <= MAX_SCRAMBLE_LENGTH => self.scramble(Some(n)),
                Ok(_) => Response::message(format!(
                    "scramble length must be at most {MAX_SCRAMBLE_LENGTH}",
                )),
                Err(_) => Response::message(format!("bad scramble length {n:?}")),
            },
            ("undo", None) => {
                if self.cube.undo() {
                    self.check_solved(Response::redraw())
                } else {
                    Response::message("nothing to undo")
                }
            }
            ("reset", None) => self.reset(),
            ("rewind", None) => self.rewind(),
            ("history", None) => match self.cube.history_string() {
                s if s.is_empty() => Response::message("no moves"),
                s => Response::message(s),
            },
            ("state", None) => Response::redraw(),
            ("help", None) => Response::message(HELP),
            ("quit" | "exit", None) => Response {
                quit: true,
                ..Response::default()
            },
            (c, Some(_)) if is_command(c) => {
                Response::message(format!("`{c}` takes no arguments"))
            }
            _ => self.apply_moves(line),
        }
    }

    fn scramble(&mut self, length: Option<u32>) -> Response {
        let params = self.prefs.scramble.params(length);
        let moves = self.cube.scramble_seeded(&params);
        self.status = SolveStatus::Scrambled;
        self.started = Some(Instant::now());
        Response::redraw().with_message(format!(
            "Scramble: {}",
            notation::format_moves(moves.iter().copied()),
        ))
    }

    fn reset(&mut self) -> Response {
        self.cube.reset();
        self.status = SolveStatus::NotScrambled;
        self.started = None;
        Response::redraw()
    }

    fn rewind(&mut self) -> Response {
        let mut count = 0;
        while self.cube.undo() {
            count += 1;
        }
        self.check_solved(Response::redraw().with_message(format!("Undid {count} moves")))
    }

    fn apply_moves(&mut self, line: &str) -> Response {
        if let Err(e) = self.cube.apply_sequence(line) {
            return Response::message(format!("{e}; type `help` for a list of commands"));
        }
        self.check_solved(Response::redraw())
    }

    /// Ends the solve if the cube was scrambled and is now solved, adding the
    /// result to `response`.
    fn check_solved(&mut self, mut response: Response) -> Response {
        if self.status == SolveStatus::Scrambled && self.cube.is_solved() {
            self.status = SolveStatus::Solved;
            let time = self
                .started
                .take()
                .map(|t| format_duration(t.elapsed()))
                .unwrap_or_default();
            log::info!("solved in {time} with {} moves", self.cube.move_count());
            response = response.with_message(format!(
                "Solved in {time} with {} moves!",
                self.cube.move_count(),
            ));
        }
        response
    }
}

fn is_command(word: &str) -> bool {
    matches!(
        word,
        "scramble" | "undo" | "reset" | "rewind" | "history" | "state" | "help" | "quit" | "exit",
    )
}

/// Formats a duration as `mm:ss`.
pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Runs a session reading commands from `input` until it is exhausted or the
/// user quits.
pub(crate) fn run(prefs: Preferences, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut session = Session::new(prefs);
    writeln!(output, "{}", render_net(&session.cube().state(), &session.prefs.display))?;
    writeln!(output, "{}", session.status_line())?;
    writeln!(output, "Type `help` for a list of commands.")?;

    for line in input.lines() {
        let line = line.wrap_err("error reading input")?;
        let response = session.handle_line(&line);
        if response.quit {
            break;
        }
        for message in &response.messages {
            writeln!(output, "{message}")?;
        }
        if response.redraw {
            writeln!(output, "{}", render_net(&session.cube().state(), &session.prefs.display))?;
            writeln!(output, "{}", session.status_line())?;
        }
        output.flush().wrap_err("error writing output")?;
    }
    Ok(())
}
