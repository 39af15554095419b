//! Plain-text rendering of the cube as an unfolded net.
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```

use facecube_core::{CubeState, Face, FaceletColor};
use facecube_prefs::DisplayPreferences;
use itertools::Itertools;
use owo_colors::OwoColorize;

/// Faces in the middle band of the net, left to right.
const BAND: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

/// Returns the net of `state` as a multi-line string without a trailing
/// newline.
pub(crate) fn render_net(state: &CubeState, display: &DisplayPreferences) -> String {
    let cell = |color: FaceletColor| -> String {
        if display.color {
            let [r, g, b] = color.rgb();
            display.sticker.truecolor(r, g, b).to_string()
        } else {
            color.initial().to_string()
        }
    };
    let row = |face: Face, row: usize| -> String {
        state.face(face)[row * 3..row * 3 + 3]
            .iter()
            .map(|&c| cell(c))
            .join(" ")
    };
    let indent = " ".repeat(6);

    let mut lines = vec![];
    for r in 0..3 {
        lines.push(format!("{indent}{}", row(Face::U, r)));
    }
    for r in 0..3 {
        lines.push(BAND.iter().map(|&face| row(face, r)).join(" "));
    }
    for r in 0..3 {
        lines.push(format!("{indent}{}", row(Face::D, r)));
    }
    lines.join("\n")
}
