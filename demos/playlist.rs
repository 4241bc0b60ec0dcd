//! Builds a small song table and looks a few titles up.
//!
//! Run with `RUST_LOG=trace` to see where each song is placed.

use songtable::{Error, InsertStatus, SongTable};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut songs = SongTable::new(6)?;

    let playlist = [
        ("Bohemian Rhapsody", "Queen"),
        ("Hallelujah", "Leonard Cohen"),
        ("Hallelujah", "Jeff Buckley"),
        ("Bohemian Rhapsody", "Queen"),
        ("Waterloo", "ABBA"),
        ("Wonderwall", "Oasis"),
        ("Smells Like Teen Spirit", "Nirvana"),
        ("Paint It Black", "The Rolling Stones"),
    ];

    for (title, artist) in playlist {
        match songs.insert(title, artist) {
            Ok(InsertStatus::Inserted) => {
                println!("added {title:?} by {artist} (home slot {})", songs.slot_of(title))
            }
            Ok(InsertStatus::AlreadyExists) => println!("skipped duplicate {title:?} by {artist}"),
            Err(err) => println!("could not add {title:?}: {err}"),
        }
    }

    println!();
    for title in ["Waterloo", "Hallelujah", "Yesterday"] {
        match songs.lookup(title) {
            Some(artist) => println!("{title:?} is by {artist}"),
            None => println!("{title:?} is not in the table"),
        }
    }

    println!("\n{} of {} slots used", songs.len(), songs.capacity());
    Ok(())
}
