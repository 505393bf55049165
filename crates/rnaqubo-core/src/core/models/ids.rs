use std::fmt;

/// Position of a quartet in generation order.
///
/// Every coefficient map is keyed by this index rather than by a rendered name, so the
/// interaction maps never have to parse identifiers back into quartets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuartetId(pub usize);

impl QuartetId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for QuartetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An unordered pair of distinct quartets, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuartetPair {
    first: QuartetId,
    second: QuartetId,
}

impl QuartetPair {
    /// Returns `None` when both ids are the same quartet.
    pub fn new(a: QuartetId, b: QuartetId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn first(&self) -> QuartetId {
        self.first
    }

    #[inline]
    pub fn second(&self) -> QuartetId {
        self.second
    }
}
