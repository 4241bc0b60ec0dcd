// A linear probe sequence.
//
// Starts at the home slot and walks `+1 mod len`, visiting every slot of the
// table exactly once before it is exhausted.
pub struct Probe {
    // The current index in the probe sequence.
    pub i: usize,
    // The number of slots visited so far.
    pub len: usize,
    // The length of the table.
    limit: usize,
}

impl Probe {
    // Initialize the probe sequence at the home slot for `hash`.
    #[inline]
    pub fn start(hash: u64, len: usize) -> Probe {
        Probe {
            i: home(hash, len),
            len: 0,
            limit: len,
        }
    }

    // Returns true once every slot has been visited.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.len >= self.limit
    }

    // Increment the probe sequence.
    #[inline]
    pub fn next(&mut self) {
        self.len += 1;
        self.i += 1;

        if self.i == self.limit {
            self.i = 0;
        }
    }
}

// The home slot of `hash` in a table of length `len`.
#[inline]
pub fn home(hash: u64, len: usize) -> usize {
    // `len` is non-zero and fits in a u64, so the remainder fits in a usize.
    (hash % len as u64) as usize
}
