use crate::hash::Xxh3BuildHasher;
use crate::raw::{self, RawTable};
use crate::{Error, Result};

use std::fmt;
use std::hash::BuildHasher;

/// A fixed-capacity hash table mapping song titles to artists.
///
/// The table is a single array of slots with linear probing. Its capacity is
/// chosen at construction and never changes. Once every slot on a title's probe
/// sequence is taken, [`insert`](SongTable::insert) reports
/// [`Error::TableFull`] instead of growing.
///
/// A title may be stored several times with different artists, but each
/// `(title, artist)` pair is stored at most once.
///
/// # Examples
///
/// ```
/// use songtable::{InsertStatus, SongTable};
///
/// let mut songs = SongTable::new(8)?;
/// assert_eq!(songs.insert("Blackbird", "The Beatles")?, InsertStatus::Inserted);
/// assert_eq!(songs.insert("Blackbird", "The Beatles")?, InsertStatus::AlreadyExists);
///
/// assert_eq!(songs.lookup("Blackbird"), Some("The Beatles"));
/// assert_eq!(songs.lookup("Jolene"), None);
/// # Ok::<(), songtable::Error>(())
/// ```
pub struct SongTable<S = Xxh3BuildHasher> {
    raw: RawTable,
    build_hasher: S,
}

/// The successful outcome of [`SongTable::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsertStatus {
    /// The song was stored in a previously unused slot.
    Inserted,
    /// An identical `(title, artist)` pair was already stored. The table was not modified.
    AlreadyExists,
}

/// A builder for a [`SongTable`].
///
/// # Examples
///
/// ```
/// use songtable::SongTable;
/// use std::collections::hash_map::RandomState;
///
/// let songs = SongTable::builder()
///     .capacity(64)
///     .hasher(RandomState::new())
///     .build()?;
///
/// assert_eq!(songs.capacity(), 64);
/// # Ok::<(), songtable::Error>(())
/// ```
pub struct SongTableBuilder<S> {
    capacity: usize,
    hasher: S,
}

impl SongTableBuilder<Xxh3BuildHasher> {
    /// Set the hasher used to place titles in the table.
    pub fn hasher<S>(self, hasher: S) -> SongTableBuilder<S> {
        SongTableBuilder {
            capacity: self.capacity,
            hasher,
        }
    }
}

impl<S> SongTableBuilder<S> {
    /// Set the number of slots in the table.
    ///
    /// The capacity must be non-zero, and is never adjusted.
    pub fn capacity(self, capacity: usize) -> SongTableBuilder<S> {
        SongTableBuilder {
            capacity,
            hasher: self.hasher,
        }
    }

    /// Construct a [`SongTable`] from the builder.
    ///
    /// Returns [`Error::InvalidCapacity`] if the capacity is zero or was never set.
    pub fn build(self) -> Result<SongTable<S>> {
        SongTable::with_capacity_and_hasher(self.capacity, self.hasher)
    }
}

impl<S> fmt::Debug for SongTableBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SongTableBuilder")
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl SongTable {
    /// Creates an empty `SongTable` with `capacity` slots.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use songtable::{Error, SongTable};
    ///
    /// let songs = SongTable::new(16)?;
    /// assert!(songs.is_empty());
    ///
    /// assert_eq!(SongTable::new(0).unwrap_err(), Error::InvalidCapacity);
    /// # Ok::<(), songtable::Error>(())
    /// ```
    pub fn new(capacity: usize) -> Result<SongTable> {
        SongTable::with_capacity_and_hasher(capacity, Xxh3BuildHasher::default())
    }

    /// Returns a builder for a `SongTable`.
    pub fn builder() -> SongTableBuilder<Xxh3BuildHasher> {
        SongTableBuilder {
            capacity: 0,
            hasher: Xxh3BuildHasher::default(),
        }
    }
}

impl<S> SongTable<S> {
    /// Creates an empty `SongTable` with `capacity` slots, using `build_hasher`
    /// to place titles.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Result<SongTable<S>> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        log::debug!("allocating song table with {capacity} slots");

        Ok(SongTable {
            raw: RawTable::new(capacity),
            build_hasher,
        })
    }

    /// Returns the number of songs in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.count()
    }

    /// Returns `true` if the table holds no songs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns the number of slots in the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.len()
    }

    /// Returns a reference to the table's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        &self.build_hasher
    }

    /// An iterator visiting all `(title, artist)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            raw: self.raw.iter(),
        }
    }
}

impl<S> SongTable<S>
where
    S: BuildHasher,
{
    /// Stores the song `(title, artist)`.
    ///
    /// Returns [`InsertStatus::AlreadyExists`] without modifying the table if the
    /// exact pair is already stored, and [`Error::TableFull`] if no slot on the
    /// title's probe sequence is available.
    ///
    /// # Examples
    ///
    /// ```
    /// use songtable::{Error, InsertStatus, SongTable};
    ///
    /// let mut songs = SongTable::new(1)?;
    /// assert_eq!(songs.insert("Hurt", "Nine Inch Nails")?, InsertStatus::Inserted);
    /// assert_eq!(songs.insert("Hurt", "Johnny Cash"), Err(Error::TableFull { capacity: 1 }));
    /// # Ok::<(), songtable::Error>(())
    /// ```
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Result<InsertStatus> {
        let (title, artist) = (title.into(), artist.into());
        let hash = self.hash(&title);

        match self.raw.insert(hash, title, artist) {
            raw::InsertStatus::Inserted { index, probes } => {
                log::trace!("inserted song at slot {index} after {probes} probes");
                Ok(InsertStatus::Inserted)
            }
            raw::InsertStatus::Exists { index } => {
                log::trace!("song already stored at slot {index}");
                Ok(InsertStatus::AlreadyExists)
            }
            raw::InsertStatus::Full => {
                let capacity = self.capacity();
                log::debug!("song table is full ({} of {capacity} slots)", self.len());
                Err(Error::TableFull { capacity })
            }
        }
    }

    /// Returns the artist of the first song titled `title` on its probe sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use songtable::SongTable;
    ///
    /// let mut songs = SongTable::new(4)?;
    /// songs.insert("Respect", "Aretha Franklin")?;
    ///
    /// assert_eq!(songs.lookup("Respect"), Some("Aretha Franklin"));
    /// assert_eq!(songs.lookup("Imagine"), None);
    /// # Ok::<(), songtable::Error>(())
    /// ```
    pub fn lookup(&self, title: &str) -> Option<&str> {
        let hash = self.hash(title);
        self.raw.get(hash, title).map(|song| song.artist.as_str())
    }

    /// Returns `true` if a song titled `title` is stored.
    #[inline]
    pub fn contains(&self, title: &str) -> bool {
        self.lookup(title).is_some()
    }

    /// Returns `true` if the exact pair `(title, artist)` is stored.
    pub fn contains_song(&self, title: &str, artist: &str) -> bool {
        let hash = self.hash(title);
        self.raw.find(hash, title, artist).is_some()
    }

    /// Returns the home slot of `title`, the first slot on its probe sequence.
    ///
    /// Titles with the same home slot collide, and are placed in the slots that
    /// follow it.
    pub fn slot_of(&self, title: &str) -> usize {
        raw::home(self.hash(title), self.capacity())
    }

    #[inline]
    fn hash(&self, title: &str) -> u64 {
        self.build_hasher.hash_one(title)
    }
}

impl<S> Clone for SongTable<S>
where
    S: Clone,
{
    fn clone(&self) -> SongTable<S> {
        SongTable {
            raw: self.raw.clone(),
            build_hasher: self.build_hasher.clone(),
        }
    }
}

impl<S> fmt::Debug for SongTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, S> IntoIterator for &'a SongTable<S> {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the songs in a [`SongTable`].
///
/// This struct is created by the [`iter`](SongTable::iter) method on [`SongTable`].
/// See its documentation for details.
#[derive(Clone)]
pub struct Iter<'table> {
    raw: raw::Iter<'table>,
}

impl<'table> Iterator for Iter<'table> {
    type Item = (&'table str, &'table str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw
            .next()
            .map(|song| (song.title.as_str(), song.artist.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
