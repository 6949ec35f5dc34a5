//! Error taxonomy.
//!
//!    Error 1: wrong length, unknown color, or color count != 9 for some face
//!    Error 2: a piece identified as an edge appears != 1 time
//!    Error 3: edge flip sum != 0 mod 2
//!    Error 4: a corner appears != 1 time
//!    Error 5: corner twist sum != 0 mod 3
//!    Error 6: sign(cp) != sign(ep)
//!    Error 7: no solution found within max_depth
//!    Error 8: time_out elapsed
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid facelet string: wrong length or unknown color")]
    InvalidLength,
    #[error("Invalid facelet string: a color does not appear exactly 9 times")]
    InvalidColorCount,
    #[error("Not all 12 edges exist exactly once")]
    InvalidEdgeCount,
    #[error("Edge flip error: edge orientations do not sum to 0 mod 2")]
    InvalidEdgeFlip,
    #[error("Not all 8 corners exist exactly once")]
    InvalidCornerCount,
    #[error("Corner twist error: corner orientations do not sum to 0 mod 3")]
    InvalidCornerTwist,
    #[error("Parity error: corner and edge permutation signs disagree")]
    InvalidParity,
    #[error("Invalid move string")]
    InvalidScramble,
    #[error("No solution found within the given max_depth")]
    DepthExceeded,
    #[error("Time-out elapsed before a solution was found")]
    TimeOut,
    #[error("table I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("table encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("table decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl Error {
    /// Numeric code of the external interface (spec taxonomy), if this
    /// variant is one a caller should see. Table I/O errors have no code:
    /// they are handled internally by rebuilding the cache.
    pub fn code(&self) -> Option<u8> {
        match self {
            Error::InvalidLength | Error::InvalidColorCount => Some(1),
            Error::InvalidEdgeCount => Some(2),
            Error::InvalidEdgeFlip => Some(3),
            Error::InvalidCornerCount => Some(4),
            Error::InvalidCornerTwist => Some(5),
            Error::InvalidParity => Some(6),
            Error::DepthExceeded => Some(7),
            Error::TimeOut => Some(8),
            Error::InvalidScramble | Error::Io(_) | Error::Encode(_) | Error::Decode(_) => None,
        }
    }
}
