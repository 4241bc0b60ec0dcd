mod probe;

use std::{mem, slice};

use self::probe::Probe;

pub use self::probe::home;

// The fixed-size slot array backing a song table.
#[derive(Clone)]
pub struct RawTable {
    slots: Box<[Slot]>,
    count: usize,
}

// A slot in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    // The slot was never occupied, probing stops here.
    Empty,
    // A stored song.
    Occupied(Song),
    // A tombstone left by a removed song. Probing continues past it, and
    // insertions may reuse it.
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    #[inline]
    fn is(&self, title: &str, artist: &str) -> bool {
        self.title == title && self.artist == artist
    }
}

// The result of an insert operation.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertStatus {
    // The song was written to the slot at `index` after `probes` steps.
    Inserted { index: usize, probes: usize },
    // An identical song is already stored at `index`.
    Exists { index: usize },
    // No slot was available and no duplicate was found.
    Full,
}

impl RawTable {
    // Allocate a table of `len` empty slots.
    //
    // `len` must be non-zero.
    pub fn new(len: usize) -> RawTable {
        debug_assert!(len > 0, "raw tables are never empty");

        RawTable {
            slots: (0..len).map(|_| Slot::Empty).collect(),
            count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    // Returns the first song titled `title` on its probe sequence.
    pub fn get(&self, hash: u64, title: &str) -> Option<&Song> {
        let mut probe = Probe::start(hash, self.len());

        while !probe.exhausted() {
            match &self.slots[probe.i] {
                // an empty slot ends the probe sequence, the title cannot be further along
                Slot::Empty => return None,
                Slot::Occupied(song) if song.title == title => return Some(song),
                // a different title or a tombstone, keep searching
                Slot::Occupied(_) | Slot::Deleted => {}
            }

            probe.next();
        }

        // every slot was visited
        None
    }

    // Returns the index of the song `(title, artist)`, if it is stored.
    pub fn find(&self, hash: u64, title: &str, artist: &str) -> Option<usize> {
        match self.search(hash, title, artist) {
            Search::Found(index) => Some(index),
            Search::Vacant { .. } | Search::Full => None,
        }
    }

    // Insert the song `(title, artist)`, unless an identical song is already stored.
    pub fn insert(&mut self, hash: u64, title: String, artist: String) -> InsertStatus {
        match self.search(hash, &title, &artist) {
            Search::Found(index) => InsertStatus::Exists { index },
            Search::Full => InsertStatus::Full,
            Search::Vacant { index, probes } => {
                let previous = mem::replace(
                    &mut self.slots[index],
                    Slot::Occupied(Song { title, artist }),
                );
                debug_assert!(!matches!(previous, Slot::Occupied(_)));

                self.count += 1;
                InsertStatus::Inserted { index, probes }
            }
        }
    }

    // Walk the probe sequence of `title`, looking for an identical song or the
    // first slot a new song could be written to.
    fn search(&self, hash: u64, title: &str, artist: &str) -> Search {
        let mut probe = Probe::start(hash, self.len());
        let mut candidate = None;

        while !probe.exhausted() {
            match &self.slots[probe.i] {
                Slot::Occupied(song) if song.is(title, artist) => {
                    return Search::Found(probe.i);
                }
                // a collision, keep searching
                Slot::Occupied(_) => {}
                // the first empty slot ends the search. nothing was ever placed past it
                Slot::Empty => {
                    candidate.get_or_insert((probe.i, probe.len));
                    break;
                }
                // tombstones can be reused, but the song may still be stored further along
                Slot::Deleted => {
                    candidate.get_or_insert((probe.i, probe.len));
                }
            }

            probe.next();
        }

        match candidate {
            Some((index, probes)) => Search::Vacant { index, probes },
            None => Search::Full,
        }
    }

    // Returns an iterator over the occupied slots, in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.count,
        }
    }

    // Replace the song at `index` with a tombstone.
    //
    // There is no public removal yet, this exists to exercise tombstone probing.
    #[cfg(test)]
    pub fn delete(&mut self, index: usize) -> Option<Song> {
        match mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Occupied(song) => {
                self.count -= 1;
                Some(song)
            }
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    // Returns the slot array.
    #[cfg(test)]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

// The outcome of walking a probe sequence for a specific song.
enum Search {
    Found(usize),
    Vacant { index: usize, probes: usize },
    Full,
}

// An iterator over the songs in a raw table.
#[derive(Clone)]
pub struct Iter<'table> {
    slots: slice::Iter<'table, Slot>,
    remaining: usize,
}

impl<'table> Iterator for Iter<'table> {
    type Item = &'table Song;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(song) = slot {
                self.remaining -= 1;
                return Some(song);
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
