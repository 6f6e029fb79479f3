//! Fixed-capacity ring of the most recent digit positions.

/// Number of trailing digits left in clear text.
pub const TAIL_DIGITS: usize = 4;

/// Byte offsets of the last [`TAIL_DIGITS`] digits seen in a run.
///
/// Pushing into a full ring evicts the oldest position. No allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailPositions {
    slots: [usize; TAIL_DIGITS],
    /// Index of the slot the next push writes to.
    head: usize,
    len: usize,
}

impl TailPositions {
    /// Create an empty ring.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [0; TAIL_DIGITS],
            head: 0,
            len: 0,
        }
    }

    /// Record a digit position, evicting the oldest when full.
    pub const fn push(&mut self, pos: usize) {
        self.slots[self.head] = pos;
        self.head = (self.head + 1) % TAIL_DIGITS;
        if self.len < TAIL_DIGITS {
            self.len += 1;
        }
    }

    /// Oldest position still held.
    #[must_use]
    pub const fn oldest(&self) -> Option<usize> {
        match self.len {
            0 => None,
            TAIL_DIGITS => Some(self.slots[self.head]),
            _ => Some(self.slots[0]),
        }
    }

    /// Most recently pushed position.
    #[must_use]
    pub const fn newest(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.slots[(self.head + TAIL_DIGITS - 1) % TAIL_DIGITS])
        }
    }

    /// Number of positions held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if no position has been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget all positions.
    pub const fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
