//! Error types for cubist-cube.

use thiserror::Error;

use crate::Face;

/// Result type for cubist-cube operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, addressing or validating a cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A move token could not be parsed.
    #[error("invalid move notation {token:?}: {reason}")]
    InvalidNotation {
        token: String,
        reason: &'static str,
    },

    /// The cubestring does not have exactly 54 symbols.
    #[error("invalid cubestring length: expected 54, got {0}")]
    InvalidLength(usize),

    /// A symbol outside {U, R, F, D, L, B}.
    #[error("invalid facelet symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    /// Some symbol does not occur exactly nine times.
    #[error("invalid color distribution, each symbol must appear 9 times: {}", format_counts(.counts))]
    InvalidDistribution { counts: [usize; 6] },

    /// A center facelet does not carry its own face symbol.
    #[error("center of face {face} carries {found}")]
    MisplacedCenter { face: Face, found: Face },

    /// Row or column outside `0..=2`.
    #[error("facelet coordinate out of range: row {row}, col {col}")]
    CoordinateOutOfRange { row: usize, col: usize },

    /// Linear position outside `0..54`.
    #[error("facelet position {0} out of range")]
    PositionOutOfRange(usize),

    /// Face symbol not in {U, R, F, D, L, B}.
    #[error("unknown face {0:?}")]
    UnknownFace(char),

    /// Color name not recognized.
    #[error("unknown color {0:?}")]
    UnknownColor(String),

    /// A face write did not carry exactly nine facelets.
    #[error("a face holds 9 facelets, got {0}")]
    FaceLength(usize),
}

fn format_counts(counts: &[usize; 6]) -> String {
    Face::ALL
        .iter()
        .zip(counts)
        .map(|(face, count)| format!("{face}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_message_lists_counts() {
        let err = Error::InvalidDistribution {
            counts: [10, 8, 9, 9, 9, 9],
        };
        let msg = err.to_string();
        assert!(msg.contains("U: 10"));
        assert!(msg.contains("R: 8"));
    }
}
