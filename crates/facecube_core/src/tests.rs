use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;

use crate::*;

fn scrambled(seed: &str) -> Cube {
    let mut cube = Cube::new();
    cube.scramble_seeded(&ScrambleParams::with_seed(30, seed));
    cube
}

fn any_move() -> impl Strategy<Value = Move> {
    proptest::sample::select(Move::ALL.to_vec())
}

/// Logger that keeps messages at `info` level and above.
struct CaptureLogger(std::sync::Mutex<Vec<(log::Level, String)>>);

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Info
    }
    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata())
            && let Ok(mut records) = self.0.lock()
        {
            records.push((record.level(), record.args().to_string()));
        }
    }
    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger(std::sync::Mutex::new(vec![]));

fn captured_logs() -> Vec<(log::Level, String)> {
    LOGGER.0.lock().map(|records| records.clone()).unwrap_or_default()
}

#[test]
fn test_new_and_reset_are_solved() {
    let mut cube = Cube::new();
    assert!(cube.is_solved());
    assert_eq!(cube.move_count(), 0);
    assert!(cube.history().is_empty());

    cube.scramble(20);
    assert_eq!(cube.move_count(), 20);
    cube.reset();
    assert!(cube.is_solved());
    assert_eq!(cube.move_count(), 0);
    assert_eq!(cube.state(), CubeState::new());
}

#[test]
fn test_reset_is_logged_at_info() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
    let mut cube = Cube::new();
    cube.reset();
    assert!(
        captured_logs()
            .iter()
            .any(|(level, msg)| *level == log::Level::Info && msg == "resetting cube"),
    );
}

#[test]
fn test_every_move_has_order_four() {
    for m in Move::ALL {
        let mut cube = scrambled("order four");
        let before = cube.state();
        for i in 1..=4 {
            cube.apply(m);
            if i < 4 && m.kind() == MoveKind::Face {
                assert_ne!(cube.state(), before, "{m} has order {i}");
            }
        }
        assert_eq!(cube.state(), before, "{m} four times");
    }
}

#[test]
fn test_move_then_opposite_is_identity() {
    for m in Move::ALL {
        let mut cube = scrambled("opposites");
        let before = cube.state();
        assert!(cube.move_notation(m.to_char()));
        assert!(cube.move_notation(opposite_notation(m.to_char())));
        assert_eq!(cube.state(), before, "{m} then {}", m.opposite());
    }
}

#[test]
fn test_move_count_ignores_invalid_notation() {
    let mut cube = Cube::new();
    let mut expected = 0;
    for c in "RqU?x 2'Mw".chars() {
        if cube.move_notation(c) {
            expected += 1;
        }
        assert_eq!(cube.move_count(), expected);
        assert_eq!(cube.history().len(), cube.move_count());
    }
    assert_eq!(cube.history_string(), "R U x M");
    assert!(!cube.move_notation('Q'));
    assert_eq!(cube.move_count(), 4);
}

#[test]
fn test_invalid_notation_leaves_state_untouched() {
    let mut cube = scrambled("invalid");
    let before = cube.clone();
    for c in ['a', 'W', ' ', '\'', '2', 'é'] {
        assert!(!cube.move_notation(c));
    }
    assert_eq!(cube, before);
}

#[test]
fn test_undo_restores_previous_state() {
    let mut cube = Cube::new();
    let mut states = vec![cube.state()];
    for m in "RUrFMdXbes".chars() {
        assert!(cube.move_notation(m));
        states.push(cube.state());
    }
    while let Some(expected) = states.pop() {
        assert_eq!(cube.state(), expected);
        assert_eq!(cube.move_count(), states.len());
        let undone = cube.undo();
        assert_eq!(undone, !states.is_empty());
    }
    assert!(cube.is_solved());
    assert!(!cube.undo());
    assert_eq!(cube.move_count(), 0);
}

#[test]
fn test_scramble_then_undo_everything() {
    let mut cube = Cube::new();
    let moves = cube.scramble(20);
    assert_eq!(moves.len(), 20);
    assert_eq!(cube.history(), moves.as_slice());
    assert!(moves.iter().all(|m| m.kind() == MoveKind::Face));
    for _ in 0..20 {
        assert!(cube.undo());
    }
    assert!(cube.is_solved());
    assert_eq!(cube.move_count(), 0);
}

#[test]
fn test_scramble_with_injected_rng() {
    let mut a = Cube::new();
    let mut b = Cube::new();
    let moves_a = a.scramble_with_rng(15, &mut rand_chacha::ChaCha12Rng::seed_from_u64(7));
    let moves_b = b.scramble_with_rng(15, &mut rand_chacha::ChaCha12Rng::seed_from_u64(7));
    assert_eq!(moves_a, moves_b);
    assert_eq!(a, b);
}

#[test]
fn test_scramble_continues_history() {
    let mut cube = Cube::new();
    cube.move_notation('M');
    let moves = cube.scramble_seeded(&ScrambleParams::with_seed(5, "continue"));
    assert_eq!(cube.move_count(), 6);
    assert_eq!(cube.history()[0], Move::cw(Layer::M));
    assert_eq!(&cube.history()[1..], moves.as_slice());
}

#[test]
fn test_u_on_solved_cube() {
    use FaceletColor::*;

    let mut cube = Cube::new();
    assert!(cube.move_notation('U'));

    let state = cube.state();
    assert_eq!(state.face(Face::U), &[White; 9]);
    assert_eq!(state.face(Face::D), &[Yellow; 9]);

    // Non-center facelets travel F -> L -> B -> R -> F.
    let expect = |center, moved| {
        let mut facelets = [moved; 9];
        facelets[CENTER] = center;
        facelets
    };
    assert_eq!(state.face(Face::F), &expect(Red, Green));
    assert_eq!(state.face(Face::L), &expect(Blue, Red));
    assert_eq!(state.face(Face::B), &expect(Orange, Blue));
    assert_eq!(state.face(Face::R), &expect(Green, Orange));

    for face in Face::ALL {
        assert_eq!(cube.face_color(face), face.color());
    }
    assert!(!cube.is_solved());
}

#[test]
fn test_slice_on_solved_cube() {
    use FaceletColor::*;

    let mut cube = Cube::new();
    assert!(cube.move_notation('M'));

    // Edge midpoints travel U -> F -> D -> B -> U; corners stay.
    let state = cube.state();
    assert_eq!(state.face(Face::F), &[Red, White, Red, White, Red, White, Red, White, Red]);
    assert_eq!(state.facelet(Face::D, 3), Some(Red));
    assert_eq!(state.facelet(Face::B, 5), Some(Yellow));
    assert_eq!(state.facelet(Face::U, 7), Some(Orange));
    assert_eq!(state.face(Face::L), &[Blue; 9]);
    assert_eq!(state.face(Face::R), &[Green; 9]);
}

#[test]
fn test_rotations_are_compositions() {
    let compositions = [
        ('X', "RMl"),
        ('x', "rmL"),
        ('Y', "Ued"),
        ('y', "uED"),
        ('Z', "FSb"),
        ('z', "fsB"),
    ];
    for (rotation, steps) in compositions {
        let mut a = scrambled("rotations");
        let mut b = a.clone();
        assert!(a.move_notation(rotation));
        assert_eq!(b.apply_sequence(steps), Ok(3));
        assert_eq!(a.state(), b.state(), "{rotation} vs {steps}");
        // The rotation is recorded as a single move.
        assert_eq!(a.move_count() + 2, b.move_count());
    }
}

#[test]
fn test_rotations_of_solved_cube_are_not_solved() {
    use FaceletColor::*;

    for rotation in "XxYyZz".chars() {
        let mut cube = Cube::new();
        assert!(cube.move_notation(rotation));
        assert!(!cube.is_solved(), "{rotation}");
        assert_eq!(cube.state().color_counts(), [9; 6]);
    }

    let mut cube = Cube::new();
    cube.move_notation('X');
    assert_eq!(
        cube.state().face(Face::F),
        &[Orange, Yellow, Orange, Yellow, Red, Yellow, Orange, Yellow, Orange],
    );
}

#[test]
fn test_apply_sequence_is_all_or_nothing() {
    let mut cube = Cube::new();
    assert_eq!(
        cube.apply_sequence("R U R' U'"),
        Err(MoveParseError::BadMove {
            notation: '\'',
            position: 5,
        }),
    );
    assert_eq!(cube, Cube::new());
    assert_eq!(cube.apply_sequence("R U r u"), Ok(4));
    assert_eq!(cube.move_count(), 4);
}

#[test]
fn test_state_is_a_snapshot() {
    let mut cube = Cube::new();
    let snapshot = cube.state();
    cube.move_notation('F');
    assert_eq!(snapshot, CubeState::new());
    assert_ne!(cube.state(), snapshot);
}

#[test]
fn test_state_serializes_by_face() {
    let mut cube = Cube::new();
    cube.move_notation('E');
    let json = serde_json::to_value(cube.state()).unwrap();
    assert_eq!(json["U"][0], "WHITE");
    assert_eq!(json["R"][1], "RED");
    assert_eq!(json.as_object().map(|o| o.len()), Some(6));
}

proptest! {
    #[test]
    fn proptest_inverse_sequence_returns_to_start(moves in proptest::collection::vec(any_move(), 0..40)) {
        let mut cube = Cube::new();
        for &m in &moves {
            cube.apply(m);
        }
        for &m in moves.iter().rev() {
            cube.apply(m.opposite());
        }
        prop_assert!(cube.is_solved());
        prop_assert_eq!(cube.state(), CubeState::new());
        prop_assert_eq!(cube.move_count(), moves.len() * 2);
    }

    #[test]
    fn proptest_undo_matches_prefix(moves in proptest::collection::vec(any_move(), 1..30)) {
        let mut cube = Cube::new();
        for &m in &moves {
            cube.apply(m);
        }
        prop_assert!(cube.undo());

        let mut expected = Cube::new();
        for &m in &moves[..moves.len() - 1] {
            expected.apply(m);
        }
        prop_assert_eq!(cube.state(), expected.state());
        prop_assert_eq!(cube.history(), expected.history());
        prop_assert_eq!(cube.move_count(), moves.len() - 1);
    }

    #[test]
    fn proptest_notation_round_trip(moves in proptest::collection::vec(any_move(), 0..30)) {
        let s = notation::format_moves(moves.iter().copied());
        prop_assert_eq!(notation::parse_moves_strict(&s), Ok(moves));
    }
}
