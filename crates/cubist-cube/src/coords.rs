//! Facelet addressing.
//!
//! A facelet is addressed either by its linear position in the cubestring
//! (`0..54`) or by `(face, row, col)` with row and column in `0..=2`, read
//! row-major from the top-left of the face as seen from outside the cube.
//!
//! ```text
//!              U0 U1 U2
//!              U3 U4 U5
//!              U6 U7 U8
//!   L36 L37 L38  F18 F19 F20  R9  R10 R11  B45 B46 B47
//!   L39 L40 L41  F21 F22 F23  R12 R13 R14  B48 B49 B50
//!   L42 L43 L44  F24 F25 F26  R15 R16 R17  B51 B52 B53
//!              D27 D28 D29
//!              D30 D31 D32
//!              D33 D34 D35
//! ```

use crate::error::{Error, Result};
use crate::{Face, FACELET_COUNT, FACE_SIZE};

/// A facelet position given as face, row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceletCoord {
    /// Face the facelet belongs to
    pub face: Face,
    /// Row within the face, top to bottom
    pub row: usize,
    /// Column within the face, left to right
    pub col: usize,
}

impl FaceletCoord {
    /// Create a coordinate, rejecting rows or columns outside `0..=2`.
    pub fn new(face: Face, row: usize, col: usize) -> Result<Self> {
        if row >= FACE_SIZE || col >= FACE_SIZE {
            return Err(Error::CoordinateOutOfRange { row, col });
        }
        Ok(Self { face, row, col })
    }

    /// The center facelet of a face.
    pub const fn center(face: Face) -> Self {
        Self { face, row: 1, col: 1 }
    }

    /// Linear position in the cubestring.
    pub const fn position(&self) -> usize {
        self.face.offset() + self.row * FACE_SIZE + self.col
    }

    /// Whether this is the fixed center of its face.
    pub const fn is_center(&self) -> bool {
        self.row == 1 && self.col == 1
    }

    /// Whether this is one of the four corner facelets of its face.
    pub const fn is_corner(&self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl std::fmt::Display for FaceletCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}, {}]", self.face, self.row, self.col)
    }
}

/// Convert `(face, row, col)` to a linear cubestring position.
pub fn face_coords_to_position(face: Face, row: usize, col: usize) -> Result<usize> {
    FaceletCoord::new(face, row, col).map(|c| c.position())
}

/// Convert a face symbol and `(row, col)` to a linear cubestring position.
///
/// Fails on an unknown face symbol as well as on out-of-range coordinates.
pub fn symbol_coords_to_position(face: char, row: usize, col: usize) -> Result<usize> {
    face_coords_to_position(Face::from_symbol(face)?, row, col)
}

/// Convert a linear cubestring position to `(face, row, col)`.
pub fn position_to_face_coords(position: usize) -> Result<FaceletCoord> {
    if position >= FACELET_COUNT {
        return Err(Error::PositionOutOfRange(position));
    }
    let per_face = FACE_SIZE * FACE_SIZE;
    let face = Face::from_index(position / per_face).ok_or(Error::PositionOutOfRange(position))?;
    let within = position % per_face;
    Ok(FaceletCoord {
        face,
        row: within / FACE_SIZE,
        col: within % FACE_SIZE,
    })
}
