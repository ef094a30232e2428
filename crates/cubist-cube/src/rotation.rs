//! Table-driven face rotations.
//!
//! Each face has one fixed permutation table for its clockwise quarter turn.
//! A table is a gather map: after the turn, position `i` holds the facelet
//! that was at `table[i]`. Tables are built at compile time from two parts:
//!
//! - the turned face itself, where `new[r][c] = old[2 - c][r]` (corners and
//!   edges each form a 4-cycle, the center stays put)
//! - the four 3-facelet strips on the neighboring faces, listed in the order a
//!   clockwise turn carries them, each strip ordered so that paired entries
//!   are carried onto each other
//!
//! Counterclockwise turns are three clockwise turns and half turns are two,
//! so every move is derived from the same six tables.

use crate::notation::{Direction, Move};
use crate::{Cubestring, Face, FACELET_COUNT, FACE_SIZE};

/// A gather permutation over the 54 facelets.
pub type Permutation = [usize; FACELET_COUNT];

/// Neighbor strips of one face: `strips[k]` is carried onto `strips[k + 1]`.
type Strips = [[usize; FACE_SIZE]; 4];

const fn clockwise_table(face: Face, strips: Strips) -> Permutation {
    let mut table = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        table[i] = i;
        i += 1;
    }

    let base = face.offset();
    let mut row = 0;
    while row < FACE_SIZE {
        let mut col = 0;
        while col < FACE_SIZE {
            table[base + row * FACE_SIZE + col] = base + (FACE_SIZE - 1 - col) * FACE_SIZE + row;
            col += 1;
        }
        row += 1;
    }

    let mut k = 0;
    while k < 4 {
        let from = strips[k];
        let to = strips[(k + 1) % 4];
        let mut j = 0;
        while j < FACE_SIZE {
            table[to[j]] = from[j];
            j += 1;
        }
        k += 1;
    }
    table
}

/// Clockwise quarter-turn tables, indexed by [`Face::index`].
pub const CLOCKWISE: [Permutation; 6] = [
    // U: front top row -> left -> back -> right
    clockwise_table(Face::U, [[18, 19, 20], [36, 37, 38], [45, 46, 47], [9, 10, 11]]),
    // R: front right column -> up -> back left column -> down
    clockwise_table(Face::R, [[20, 23, 26], [2, 5, 8], [51, 48, 45], [29, 32, 35]]),
    // F: up bottom row -> right left column -> down top row -> left right column
    clockwise_table(Face::F, [[6, 7, 8], [9, 12, 15], [29, 28, 27], [44, 41, 38]]),
    // D: front bottom row -> right -> back -> left
    clockwise_table(Face::D, [[24, 25, 26], [15, 16, 17], [51, 52, 53], [42, 43, 44]]),
    // L: up left column -> front -> down -> back right column
    clockwise_table(Face::L, [[0, 3, 6], [18, 21, 24], [27, 30, 33], [53, 50, 47]]),
    // B: up top row -> left left column -> down bottom row -> right right column
    clockwise_table(Face::B, [[2, 1, 0], [36, 39, 42], [33, 34, 35], [17, 14, 11]]),
];

/// The clockwise quarter-turn table for a face.
#[inline]
pub fn table(face: Face) -> &'static Permutation {
    &CLOCKWISE[face.index()]
}

/// Number of clockwise quarter turns a move amounts to.
const fn quarter_turns(direction: Direction, repeats: u8) -> usize {
    match (repeats, direction) {
        (2, _) => 2,
        (_, Direction::Clockwise) => 1,
        (_, Direction::CounterClockwise) => 3,
    }
}

fn turn(cube: &Cubestring, face: Face, quarters: usize) -> Cubestring {
    let table = table(face);
    let mut current = *cube.facelets();
    for _ in 0..quarters {
        let previous = current;
        for (slot, &source) in current.iter_mut().zip(table.iter()) {
            *slot = previous[source];
        }
    }
    Cubestring::from_facelets(current)
}

/// Turn one face a quarter turn. The input is left untouched.
pub fn rotate(cube: &Cubestring, face: Face, direction: Direction) -> Cubestring {
    turn(cube, face, quarter_turns(direction, 1))
}

/// Apply a parsed move. Half turns are two clockwise quarter turns.
pub fn apply_move(cube: &Cubestring, mv: Move) -> Cubestring {
    turn(cube, mv.face(), quarter_turns(mv.direction(), mv.repeats()))
}
