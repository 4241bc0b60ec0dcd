#![allow(dead_code)]

use songtable::{SongTable, Xxh3BuildHasher};

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

pub type Table = SongTable<Placement>;

// The hasher configurations a test is run against.
#[derive(Clone, Debug)]
pub enum Placement {
    // The default XXH3 hasher.
    Xxh3(Xxh3BuildHasher),
    // A randomly seeded hasher, placing titles differently on every run.
    Random(RandomState),
    // Every title hashes to zero, so every insert collides.
    Collide,
}

impl BuildHasher for Placement {
    type Hasher = Box<dyn Hasher>;

    fn build_hasher(&self) -> Self::Hasher {
        match self {
            Placement::Xxh3(s) => Box::new(s.build_hasher()),
            Placement::Random(s) => Box::new(s.build_hasher()),
            Placement::Collide => Box::new(ZeroHasher),
        }
    }
}

struct ZeroHasher;

impl Hasher for ZeroHasher {
    fn write(&mut self, _: &[u8]) {}

    fn finish(&self) -> u64 {
        0
    }
}

// Run the test on tables with different hasher configurations.
//
// The test receives a constructor for tables of a given capacity.
pub fn with_table(mut test: impl FnMut(&dyn Fn(usize) -> Table)) {
    init_logger();

    for placement in [
        Placement::Xxh3(Xxh3BuildHasher::default()),
        Placement::Random(RandomState::new()),
        Placement::Collide,
    ] {
        log::debug!("running with {placement:?}");

        test(
            &(|capacity| {
                SongTable::builder()
                    .capacity(capacity)
                    .hasher(placement.clone())
                    .build()
                    .unwrap()
            }),
        );
    }
}

// Returns `count` distinct titles whose home slot in `table` is `slot`.
pub fn titles_at<S: BuildHasher>(table: &SongTable<S>, slot: usize, count: usize) -> Vec<String> {
    (0..)
        .map(|i| format!("song-{i}"))
        .filter(|title| table.slot_of(title) == slot)
        .take(count)
        .collect()
}

// Installs a logger for the test binary, honoring `RUST_LOG`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
