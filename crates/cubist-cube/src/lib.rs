//! Cubist Cube Model
//!
//! The 3×3×3 cube as a 54-facelet cubestring, with table-driven face turns.
//!
//! # Layout
//!
//! A cubestring lists the nine facelets of each face in the order
//! U, R, F, D, L, B; within a face, row-major from the top-left as seen from
//! outside the cube. Positions 0–8 are Up, 9–17 Right, 18–26 Front,
//! 27–35 Down, 36–44 Left and 45–53 Back.
//!
//! # Turns
//!
//! Every face turn is a permutation of the 54 positions. Each face carries a
//! single clockwise table; counterclockwise and half turns are derived from
//! it, so the group laws hold by construction:
//!
//! - four quarter turns of a face are the identity
//! - a clockwise turn followed by a counterclockwise turn is the identity
//! - turns only move facelets, the symbol multiset never changes
//!
//! ```
//! use cubist_cube::Cubestring;
//!
//! let cube = Cubestring::solved().apply_sequence("R U R' U'").unwrap();
//! assert!(cube.validate().is_ok());
//! assert!(!cube.is_solved());
//! ```

mod coords;
mod cubestring;
mod error;
mod face;
mod notation;
pub mod rotation;

pub use coords::{face_coords_to_position, position_to_face_coords, symbol_coords_to_position, FaceletCoord};
pub use cubestring::{mirror_rows, Cubestring, FaceBlock};
pub use error::{Error, Result};
pub use face::{Color, Face};
pub use notation::{parse, parse_sequence, Direction, Move};
pub use rotation::{apply_move, rotate};

/// Rows and columns per face.
pub const FACE_SIZE: usize = 3;

/// Facelets per face.
pub const FACELETS_PER_FACE: usize = FACE_SIZE * FACE_SIZE;

/// Number of faces.
pub const FACE_COUNT: usize = 6;

/// Total facelets in a cubestring.
pub const FACELET_COUNT: usize = FACE_COUNT * FACELETS_PER_FACE;

/// The solved cubestring.
pub const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

// Compile-time assertion of the fixed 54-facelet layout
const _: () = assert!(FACELET_COUNT == 54);
