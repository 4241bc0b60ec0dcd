#![no_main]

use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use songtable::{Error, InsertStatus, SongTable};

#[derive(Debug, Arbitrary)]
enum Operation {
    Insert(u8, u8),
    Lookup(u8),
    ContainsSong(u8, u8),
    Len,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    capacity: u8,
    operations: Vec<Operation>,
}

// Titles and artists are drawn from small alphabets so that duplicates and
// collisions are frequent.
fn title(t: u8) -> String {
    format!("title-{}", t % 32)
}

fn artist(a: u8) -> String {
    format!("artist-{}", a % 4)
}

fn fuzz_table(input: FuzzInput) {
    let capacity = usize::from(input.capacity);
    let mut table = match SongTable::new(capacity) {
        Ok(table) => table,
        Err(err) => {
            assert_eq!(capacity, 0);
            assert_eq!(err, Error::InvalidCapacity);
            return;
        }
    };

    // every stored song, in insertion order
    let mut model: Vec<(String, String)> = Vec::new();

    for op in input.operations {
        match op {
            Operation::Insert(t, a) => {
                let (t, a) = (title(t), artist(a));
                let expected = if model.contains(&(t.clone(), a.clone())) {
                    Ok(InsertStatus::AlreadyExists)
                } else if model.len() == capacity {
                    Err(Error::TableFull { capacity })
                } else {
                    model.push((t.clone(), a.clone()));
                    Ok(InsertStatus::Inserted)
                };

                assert_eq!(table.insert(t, a), expected);
            }
            Operation::Lookup(t) => {
                let t = title(t);
                let expected = model
                    .iter()
                    .find(|(title, _)| *title == t)
                    .map(|(_, artist)| artist.as_str());
                assert_eq!(table.lookup(&t), expected);
            }
            Operation::ContainsSong(t, a) => {
                let (t, a) = (title(t), artist(a));
                assert_eq!(table.contains_song(&t, &a), model.contains(&(t, a)));
            }
            Operation::Len => {
                assert_eq!(table.len(), model.len());
                assert_eq!(table.is_full(), model.len() == capacity);
            }
        }
    }

    // Final consistency checks
    let mut stored: Vec<_> = table
        .iter()
        .map(|(t, a)| (t.to_owned(), a.to_owned()))
        .collect();
    stored.sort();
    model.sort();
    assert_eq!(stored, model);
}

fuzz_target!(|data: FuzzInput| {
    fuzz_table(data);
});
