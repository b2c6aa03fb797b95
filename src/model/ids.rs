use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BookError, BookResult};

/// Identity of a contact within one book. Assigned by the book's
/// [`IdSequence`], never reused while the book lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl ContactId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ContactId)
    }
}

/// Monotonic id generator owned by a `ContactBook`. Starts at zero and is
/// persisted with the book so ids stay stable across save/load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// The id the next call to [`IdSequence::next_id`] will hand out.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Fails once the sequence has reached `u64::MAX`.
    pub fn next_id(&mut self) -> BookResult<ContactId> {
        let id = ContactId(self.next);
        self.next = successor(id)?;
        Ok(id)
    }

    /// Advance past an id that was assigned elsewhere. Fails for `u64::MAX`,
    /// which leaves no id to hand out next.
    pub fn observe(&mut self, id: ContactId) -> BookResult<()> {
        if id.0 >= self.next {
            self.next = successor(id)?;
        }
        Ok(())
    }
}

fn successor(id: ContactId) -> BookResult<u64> {
    id.0.checked_add(1).ok_or(BookError::IdOverflow { id: id.0 })
}
