//! Faces of the cube and the sticker colors that identify them.
//!
//! Faces are named by the symbol that appears in a cubestring. The order of
//! [`Face::ALL`] is the order in which faces are laid out in the 54-facelet
//! sequence: Up, Right, Front, Down, Left, Back.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::FACELETS_PER_FACE;

/// One of the six independently turnable sides of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Up
    U,
    /// Right
    R,
    /// Front
    F,
    /// Down
    D,
    /// Left
    L,
    /// Back
    B,
}

impl Face {
    /// All faces in cubestring order.
    pub const ALL: [Self; 6] = [Self::U, Self::R, Self::F, Self::D, Self::L, Self::B];

    /// Position of this face in [`Face::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// First cubestring position belonging to this face.
    #[inline]
    pub const fn offset(self) -> usize {
        self.index() * FACELETS_PER_FACE
    }

    /// The cubestring symbol for this face.
    pub const fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Look up a face by symbol, ignoring case.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol.to_ascii_uppercase() {
            'U' => Ok(Face::U),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'B' => Ok(Face::B),
            _ => Err(Error::UnknownFace(symbol)),
        }
    }

    /// Look up a face by its [`Face::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The sticker color carried by this face on a solved cube.
    pub const fn color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Face {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Self::from_symbol(symbol)
    }
}

/// Sticker color as reported by a color source (camera or manual editor).
///
/// Each color maps onto exactly one face symbol, so a face of nine colors can
/// be written straight into a cubestring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// All colors, ordered to match [`Face::ALL`].
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Blue,
    ];

    /// The face whose center carries this color.
    pub const fn face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Blue => Face::B,
        }
    }

    /// Display name, as produced by the color classifier.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

impl From<Color> for Face {
    fn from(color: Color) -> Self {
        color.face()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_layout() {
        let offsets: Vec<_> = Face::ALL.iter().map(|f| f.offset()).collect();
        assert_eq!(offsets, vec![0, 9, 18, 27, 36, 45]);
    }

    #[test]
    fn symbol_lookup_ignores_case() {
        for face in Face::ALL {
            assert_eq!(Face::from_symbol(face.symbol()).unwrap(), face);
            assert_eq!(
                Face::from_symbol(face.symbol().to_ascii_lowercase()).unwrap(),
                face
            );
        }
        assert!(matches!(Face::from_symbol('X'), Err(Error::UnknownFace('X'))));
    }

    #[test]
    fn colors_and_faces_are_a_bijection() {
        for face in Face::ALL {
            assert_eq!(face.color().face(), face);
        }
        for (color, face) in Color::ALL.iter().zip(Face::ALL) {
            assert_eq!(color.face(), face);
        }
    }

    #[test]
    fn color_names_parse() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::White);
        assert_eq!(" orange ".parse::<Color>().unwrap(), Color::Orange);
        assert!(matches!("Purple".parse::<Color>(), Err(Error::UnknownColor(_))));
    }
}
