//! Error types for fallible boundaries.
//!
//! Rule violations inside the engine (playing a taken cell, an action out of
//! range) are programming errors and panic. The variants here cover input
//! that arrives from outside the engine: tensors, snapshots and typed moves.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("tensor has {got} entries, expected {expected} for a {side}x{side} board")]
    TensorShape {
        side: usize,
        expected: usize,
        got: usize,
    },

    #[error("board side {side} is not the square of a sub-board size")]
    BoardSide { side: usize },

    #[error("unknown marker {value} at row {row}, col {col}")]
    UnknownMarker { value: f32, row: usize, col: usize },

    #[error("free-play marker at row {row}, col {col} lies in a sub-board that is already won")]
    SentinelInWonSubBoard { row: usize, col: usize },

    #[error("{marked} free-play markers disagree with the {legal} legal cells they imply")]
    InconsistentSentinels { marked: usize, legal: usize },

    #[error("could not parse move '{input}': expected 'row col'")]
    MoveSyntax { input: String },

    #[error("square ({row}, {col}) is outside a {side}x{side} board")]
    SquareOutOfRange { row: usize, col: usize, side: usize },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::TensorShape {
            side: 9,
            expected: 81,
            got: 80,
        };
        assert_eq!(
            err.to_string(),
            "tensor has 80 entries, expected 81 for a 9x9 board"
        );

        let err = Error::MoveSyntax {
            input: "a b".to_string(),
        };
        assert!(err.to_string().contains("'a b'"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
