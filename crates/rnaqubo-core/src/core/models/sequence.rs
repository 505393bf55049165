use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,
}

/// An immutable RNA sequence, 0-indexed.
///
/// Bases are stored one per character exactly as given, so positions count characters
/// rather than bytes. Characters outside `{A, C, G, U}`, non-ASCII ones included, are
/// kept and simply never form a pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    bases: Vec<char>,
}

impl Sequence {
    pub fn new(sequence: &str) -> Result<Self, SequenceError> {
        if sequence.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self {
            bases: sequence.chars().collect(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn base(&self, index: usize) -> char {
        self.bases[index]
    }

    pub fn bases(&self) -> &[char] {
        &self.bases
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bases.iter().try_for_each(|base| write!(f, "{}", base))
    }
}
