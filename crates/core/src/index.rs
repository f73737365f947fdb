//! 1-based display index.
//!
//! Users address patients and sessions by their position in a displayed list,
//! counting from one. Internally lookups are zero-based; this type keeps the
//! two representations from being mixed up.

/// A 1-based position in a displayed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Creates an `Index` from a 1-based position.
    ///
    /// Callers are expected to have rejected zero already (the parser only
    /// produces non-zero values); a zero input is clamped to one.
    pub fn from_one_based(one_based: usize) -> Self {
        Self(one_based.max(1))
    }

    /// Returns the 1-based position, as displayed to the user.
    pub fn one_based(self) -> usize {
        self.0
    }

    /// Returns the zero-based offset, for collection lookups.
    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_and_zero_based_views_agree() {
        let idx = Index::from_one_based(3);
        assert_eq!(idx.one_based(), 3);
        assert_eq!(idx.zero_based(), 2);
    }

    #[test]
    fn zero_is_clamped_to_first_position() {
        assert_eq!(Index::from_one_based(0).zero_based(), 0);
    }
}
