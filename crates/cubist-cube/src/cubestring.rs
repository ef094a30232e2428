//! The 54-facelet cubestring.

use std::fmt;
use std::str::FromStr;

use crate::coords::{position_to_face_coords, FaceletCoord};
use crate::error::{Error, Result};
use crate::notation::{parse_sequence, Move};
use crate::{rotation, Color, Face, FACELETS_PER_FACE, FACELET_COUNT, FACE_SIZE};

/// Nine facelets of one face, row-major.
pub type FaceBlock = [Face; FACELETS_PER_FACE];

/// All visible facelets of the cube, laid out face by face in the order
/// U, R, F, D, L, B.
///
/// Construction from text checks shape (length and alphabet) only. Whether
/// the arrangement is physically plausible is checked separately by
/// [`Cubestring::validate`], since editors legitimately hold incomplete
/// states while the user is still entering colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Cubestring {
    facelets: [Face; FACELET_COUNT],
}

impl Cubestring {
    /// The solved cube: every face carries its own symbol.
    pub fn solved() -> Self {
        let mut facelets = [Face::U; FACELET_COUNT];
        for (position, slot) in facelets.iter_mut().enumerate() {
            *slot = Face::ALL[position / FACELETS_PER_FACE];
        }
        Self { facelets }
    }

    /// Wrap raw facelets without any validation.
    pub const fn from_facelets(facelets: [Face; FACELET_COUNT]) -> Self {
        Self { facelets }
    }

    /// Build a cubestring from 54 sticker colors.
    pub fn from_colors(colors: &[Color]) -> Result<Self> {
        if colors.len() != FACELET_COUNT {
            return Err(Error::InvalidLength(colors.len()));
        }
        let mut facelets = [Face::U; FACELET_COUNT];
        for (slot, color) in facelets.iter_mut().zip(colors) {
            *slot = color.face();
        }
        Ok(Self { facelets })
    }

    /// Build a cubestring from 54 color names such as `"White"`.
    pub fn from_color_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Color>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_colors(&colors)
    }

    /// The raw facelets.
    pub const fn facelets(&self) -> &[Face; FACELET_COUNT] {
        &self.facelets
    }

    /// Facelet at a linear position.
    pub fn get(&self, position: usize) -> Result<Face> {
        self.facelets
            .get(position)
            .copied()
            .ok_or(Error::PositionOutOfRange(position))
    }

    /// Facelet at a face coordinate.
    pub fn at(&self, coord: FaceletCoord) -> Face {
        self.facelets[coord.position()]
    }

    /// Read the nine facelets of a face.
    pub fn extract_face(&self, face: Face) -> FaceBlock {
        let mut block = [face; FACELETS_PER_FACE];
        let start = face.offset();
        block.copy_from_slice(&self.facelets[start..start + FACELETS_PER_FACE]);
        block
    }

    /// Replace the nine facelets of a face.
    pub fn write_face(&mut self, face: Face, block: FaceBlock) {
        let start = face.offset();
        self.facelets[start..start + FACELETS_PER_FACE].copy_from_slice(&block);
    }

    /// Replace a face from nine symbols, e.g. `"UUFUUFUUF"`.
    pub fn write_face_str(&mut self, face: Face, symbols: &str) -> Result<()> {
        let parsed = symbols
            .chars()
            .enumerate()
            .map(|(i, c)| parse_symbol(face.offset() + i, c))
            .collect::<Result<Vec<_>>>()?;
        let block: FaceBlock = parsed
            .try_into()
            .map_err(|v: Vec<Face>| Error::FaceLength(v.len()))?;
        self.write_face(face, block);
        Ok(())
    }

    /// Replace a face from nine colors reported by a color source.
    pub fn write_face_colors(&mut self, face: Face, colors: &[Color]) -> Result<()> {
        if colors.len() != FACELETS_PER_FACE {
            return Err(Error::FaceLength(colors.len()));
        }
        let mut block = [face; FACELETS_PER_FACE];
        for (slot, color) in block.iter_mut().zip(colors) {
            *slot = color.face();
        }
        self.write_face(face, block);
        Ok(())
    }

    /// How many times each face symbol occurs, ordered like [`Face::ALL`].
    pub fn counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for face in self.facelets {
            counts[face.index()] += 1;
        }
        counts
    }

    /// Check the physical-validity invariants: every symbol appears nine
    /// times and every center carries its own face.
    pub fn validate(&self) -> Result<()> {
        let counts = self.counts();
        if counts.iter().any(|&c| c != FACELETS_PER_FACE) {
            return Err(Error::InvalidDistribution { counts });
        }
        for face in Face::ALL {
            let found = self.at(FaceletCoord::center(face));
            if found != face {
                return Err(Error::MisplacedCenter { face, found });
            }
        }
        Ok(())
    }

    /// Whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.extract_face(face).iter().all(|&f| f == face))
    }

    /// Apply one move, returning the new cubestring.
    pub fn apply(&self, mv: Move) -> Self {
        rotation::apply_move(self, mv)
    }

    /// Apply moves in order.
    pub fn apply_moves<'a, I>(&self, moves: I) -> Self
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves.into_iter().fold(*self, |cube, &mv| cube.apply(mv))
    }

    /// Parse and apply a whitespace-separated sequence such as `"R U R' U'"`.
    pub fn apply_sequence(&self, text: &str) -> Result<Self> {
        Ok(self.apply_moves(&parse_sequence(text)?))
    }

    /// Render the unfolded cube: U on top, then L F R B, then D.
    pub fn net(&self) -> String {
        let row = |face: Face, r: usize| -> String {
            let block = self.extract_face(face);
            block[r * FACE_SIZE..(r + 1) * FACE_SIZE]
                .iter()
                .map(|f| f.symbol())
                .collect()
        };
        let pad = " ".repeat(FACE_SIZE + 1);
        let mut out = String::new();
        for r in 0..FACE_SIZE {
            out.push_str(&format!("{pad}{}\n", row(Face::U, r)));
        }
        for r in 0..FACE_SIZE {
            let middle: Vec<String> = [Face::L, Face::F, Face::R, Face::B]
                .iter()
                .map(|&f| row(f, r))
                .collect();
            out.push_str(&middle.join(" "));
            out.push('\n');
        }
        for r in 0..FACE_SIZE {
            out.push_str(&format!("{pad}{}\n", row(Face::D, r)));
        }
        out
    }

    /// Coordinates of every facelet that differs between two cubestrings.
    pub fn diff(&self, other: &Self) -> Vec<FaceletCoord> {
        (0..FACELET_COUNT)
            .filter(|&p| self.facelets[p] != other.facelets[p])
            .filter_map(|p| position_to_face_coords(p).ok())
            .collect()
    }
}

/// Reverse each row of a face.
///
/// Camera previews are mirrored horizontally so the user sees a natural
/// reflection; facelets read from such a preview need their rows reversed.
pub fn mirror_rows<T: Copy>(block: [T; FACELETS_PER_FACE]) -> [T; FACELETS_PER_FACE] {
    let mut out = block;
    for row in out.chunks_exact_mut(FACE_SIZE) {
        row.reverse();
    }
    out
}

fn parse_symbol(position: usize, symbol: char) -> Result<Face> {
    if !symbol.is_ascii_uppercase() {
        return Err(Error::InvalidSymbol { position, symbol });
    }
    Face::from_symbol(symbol).map_err(|_| Error::InvalidSymbol { position, symbol })
}

impl Default for Cubestring {
    fn default() -> Self {
        Self::solved()
    }
}

impl FromStr for Cubestring {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != FACELET_COUNT {
            return Err(Error::InvalidLength(len));
        }
        let mut facelets = [Face::U; FACELET_COUNT];
        for (position, (slot, symbol)) in facelets.iter_mut().zip(s.chars()).enumerate() {
            *slot = parse_symbol(position, symbol)?;
        }
        Ok(Self { facelets })
    }
}

impl TryFrom<String> for Cubestring {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Cubestring> for String {
    fn from(cube: Cubestring) -> Self {
        cube.to_string()
    }
}

impl fmt::Display for Cubestring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.facelets {
            write!(f, "{}", face.symbol())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cubestring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cubestring({self})")
    }
}
