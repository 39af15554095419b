use rand::Rng;

use crate::notation::{format_moves, parse_moves_strict};
use strum::EnumCount;

use crate::{
    CubeState, Direction, FACELETS_PER_FACE, Face, FaceletColor, Move, MoveDefinition,
    MoveParseError, ScrambleParams,
};

/// 3x3x3 cube with its move history.
///
/// The cube owns its state and history exclusively. Queries return copies or
/// shared references; the only way to change the state is through a move,
/// [`Cube::undo()`], or [`Cube::reset()`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cube {
    state: CubeState,
    history: Vec<Move>,
}

impl Cube {
    /// Constructs a solved cube with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> CubeState {
        self.state
    }
    /// Returns the color at `index` on `face`, or `None` if `index` is not in
    /// `0..9`.
    pub fn facelet(&self, face: Face, index: usize) -> Option<FaceletColor> {
        self.state.facelet(face, index)
    }
    /// Returns the color of `face` when solved. This does not depend on the
    /// current state.
    pub fn face_color(&self, face: Face) -> FaceletColor {
        face.color()
    }
    /// Returns whether every face is a single uniform color.
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Returns every move applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    /// Returns the history as space-separated notation.
    pub fn history_string(&self) -> String {
        format_moves(self.history.iter().copied())
    }
    /// Returns the number of moves applied since the last reset.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Applies a move and records it in the history.
    pub fn apply(&mut self, m: Move) {
        log::debug!("applying move {m}");
        apply_to_state(&mut self.state, m);
        debug_assert_eq!(self.state.color_counts(), [FACELETS_PER_FACE; FaceletColor::COUNT]);
        self.history.push(m);
    }

    /// Applies the move written as `notation` and returns `true`, or returns
    /// `false` without doing anything if `notation` is not a move.
    pub fn move_notation(&mut self, notation: char) -> bool {
        match Move::from_char(notation) {
            Some(m) => {
                self.apply(m);
                true
            }
            None => {
                log::debug!("ignoring invalid move notation {notation:?}");
                false
            }
        }
    }

    /// Applies a sequence of moves written in notation, returning the number
    /// of moves applied.
    ///
    /// The whole sequence is parsed before any move is applied, so nothing
    /// changes if it contains an invalid character.
    pub fn apply_sequence(&mut self, s: &str) -> Result<usize, MoveParseError> {
        let moves = parse_moves_strict(s)?;
        for &m in &moves {
            self.apply(m);
        }
        Ok(moves.len())
    }

    /// Applies `count` random face turns using the thread-local random number
    /// generator and returns them.
    pub fn scramble(&mut self, count: u32) -> Vec<Move> {
        self.scramble_with_rng(count, &mut rand::rng())
    }
    /// Applies `count` random face turns drawn from `rng` and returns them.
    pub fn scramble_with_rng(&mut self, count: u32, rng: &mut impl Rng) -> Vec<Move> {
        let moves = crate::random_moves(rng, count);
        self.apply_scramble(&moves);
        moves
    }
    /// Applies the scramble generated by `params` and returns it.
    pub fn scramble_seeded(&mut self, params: &ScrambleParams) -> Vec<Move> {
        let moves = params.moves();
        self.apply_scramble(&moves);
        moves
    }
    fn apply_scramble(&mut self, moves: &[Move]) {
        log::info!("scrambling with {} moves", moves.len());
        for &m in moves {
            self.apply(m);
        }
    }

    /// Undoes the last move and returns `true`, or returns `false` if the
    /// history is empty.
    ///
    /// The state is rebuilt by resetting and replaying the remaining history
    /// from the start.
    pub fn undo(&mut self) -> bool {
        let mut remaining = std::mem::take(&mut self.history);
        let Some(undone) = remaining.pop() else {
            return false;
        };
        log::debug!("undoing move {undone}");

        self.reset();
        for m in remaining {
            log::trace!("replaying move {m}");
            self.apply(m);
        }
        true
    }

    /// Restores the solved state and clears the history.
    pub fn reset(&mut self) {
        log::info!("resetting cube");
        self.state = CubeState::new();
        self.history.clear();
    }
}

/// Applies the permutation for `m` to `state`.
fn apply_to_state(state: &mut CubeState, m: Move) {
    match m.definition() {
        MoveDefinition::Turn {
            rotate,
            cycle,
            positions,
            reverse,
        } => {
            match rotate {
                Some((face, Direction::Cw)) => state.rotate_face_clockwise(face),
                Some((face, Direction::Ccw)) => state.rotate_face_counterclockwise(face),
                None => (),
            }
            state.cycle_face_positions(cycle, positions, reverse);
        }
        MoveDefinition::Composite(steps) => {
            for step in steps {
                apply_to_state(state, step);
            }
        }
    }
}
