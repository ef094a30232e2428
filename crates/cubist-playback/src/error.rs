//! Error types for cubist-playback.

use thiserror::Error;

/// Result type for cubist-playback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening or driving a playback session.
#[derive(Debug, Error)]
pub enum Error {
    /// The starting cubestring or a move token was malformed.
    #[error(transparent)]
    Cube(#[from] cubist_cube::Error),

    /// A session needs at least one move.
    #[error("move list is empty")]
    EmptyMoveList,

    /// The solver was asked to solve a cube that is already solved.
    #[error("cube is already solved")]
    AlreadySolved,

    /// The external solver failed.
    #[error("solver error: {0}")]
    Solver(String),

    /// The session task has shut down.
    #[error("playback session is closed")]
    SessionClosed,
}
