//! FizzBuzz sequence generator.

use std::fmt;

use serde::{Serialize, Serializer};

/// One entry of the FizzBuzz sequence: either a plain number or one of
/// the three tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Number(u32),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Number(n) => write!(f, "{n}"),
            Entry::Fizz => write!(f, "Fizz"),
            Entry::Buzz => write!(f, "Buzz"),
            Entry::FizzBuzz => write!(f, "FizzBuzz"),
        }
    }
}

/// Serializes as a JSON number for [`Entry::Number`] and as a string
/// for the tags, matching the mixed-type sequence the demonstration
/// prints.
impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Entry::Number(n) => serializer.serialize_u32(*n),
            tag => serializer.serialize_str(&tag.to_string()),
        }
    }
}

/// The FizzBuzz sequence for 1..=n. `n = 0` yields an empty sequence.
pub fn sequence(n: u32) -> Vec<Entry> {
    (1..=n)
        .map(|i| match (i % 3, i % 5) {
            (0, 0) => Entry::FizzBuzz,
            (0, _) => Entry::Fizz,
            (_, 0) => Entry::Buzz,
            _ => Entry::Number(i),
        })
        .collect()
}
