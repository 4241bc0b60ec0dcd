use std::hash::BuildHasherDefault;
use xxhash_rust::xxh3::Xxh3;

/// The default hasher builder for a [`SongTable`](crate::SongTable).
///
/// XXH3 with the default seed carries no per-process state, so a title hashes to
/// the same home slot in every table of the same capacity, across runs.
pub type Xxh3BuildHasher = BuildHasherDefault<Xxh3>;
