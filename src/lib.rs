#![doc = include_str!("../README.md")]

mod error;
mod hash;
mod raw;
mod table;

pub use error::{Error, Result};
pub use hash::Xxh3BuildHasher;
pub use table::{InsertStatus, Iter, SongTable, SongTableBuilder};
