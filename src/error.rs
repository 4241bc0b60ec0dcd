use thiserror::Error;

/// Errors returned by [`SongTable`](crate::SongTable) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A table was requested with a capacity of zero.
    #[error("song table capacity must be greater than zero")]
    InvalidCapacity,
    /// Every slot on the probe sequence is occupied by a different song.
    ///
    /// The table is left untouched. Callers can build a larger table and retry.
    #[error("song table is full ({capacity} slots)")]
    TableFull { capacity: usize },
}

/// A `Result` alias where the error is [`songtable::Error`](Error).
pub type Result<T> = std::result::Result<T, Error>;
