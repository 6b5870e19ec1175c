use std::mem;

use crate::IntervalMap;

/// Error indicating an [`IntervalMap`] is not in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CanonicalError<K> {
    /// The first stored boundary repeats the default value
    #[error("First boundary at {key:?} holds the default value")]
    LeadingDefault {
        /// The key of the offending boundary
        key: K,
    },
    /// A stored boundary repeats the value of the boundary before it
    #[error("Boundary at {key:?} repeats the value of its predecessor")]
    Repeated {
        /// The key of the offending boundary
        key: K,
    },
}

impl<K: Clone> CanonicalError<&K> {
    fn cloned(self) -> CanonicalError<K> {
        match self {
            Self::LeadingDefault { key } => CanonicalError::LeadingDefault { key: key.clone() },
            Self::Repeated { key } => CanonicalError::Repeated { key: key.clone() },
        }
    }
}

impl<K, V: PartialEq> IntervalMap<K, V> {
    fn find_violation(&self) -> Option<CanonicalError<&K>> {
        let mut iter = self.boundaries.iter();
        let (key, mut last) = iter.next()?;

        if *last == self.default_value {
            return Some(CanonicalError::LeadingDefault { key });
        }

        iter.find(|&(_, val)| val == mem::replace(&mut last, val))
            .map(|(key, _)| CanonicalError::Repeated { key })
    }

    /// Returns true if no stored boundary is redundant
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool { self.find_violation().is_none() }

    /// Check that no stored boundary is redundant, reporting the first one
    /// that is
    ///
    /// # Errors
    /// This method returns an error if the first boundary holds the default
    /// value, or if any boundary holds the same value as its predecessor.
    pub fn check_canonical(&self) -> Result<(), CanonicalError<K>>
    where K: Clone {
        self.find_violation().map_or(Ok(()), |e| Err(e.cloned()))
    }

    #[cfg(any(test, feature = "test"))]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.find_violation().is_none());

        if let Some(last) = self.boundaries.values().next_back() {
            assert!(*last == self.default_value);
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::CanonicalError;
    use crate::IntervalMap;

    fn raw(default_value: char, bounds: &[(i32, char)]) -> IntervalMap<i32, char> {
        let mut map = IntervalMap::new(default_value);
        map.boundaries = bounds.iter().copied().collect::<BTreeMap<_, _>>();
        map
    }

    #[test]
    fn test_empty() {
        let map = raw('a', &[]);
        assert!(map.is_canonical());
        assert_eq!(map.check_canonical(), Ok(()));
    }

    #[test]
    fn test_canonical() {
        let map = raw('a', &[(1, 'b'), (2, 'a'), (5, 'c'), (6, 'a')]);
        assert!(map.is_canonical());
        assert_eq!(map.check_canonical(), Ok(()));
    }

    #[test]
    fn test_leading_default() {
        let map = raw('a', &[(1, 'a'), (2, 'b')]);
        assert!(!map.is_canonical());
        assert_eq!(
            map.check_canonical(),
            Err(CanonicalError::LeadingDefault { key: 1 })
        );
    }

    #[test]
    fn test_repeated() {
        let map = raw('a', &[(1, 'b'), (2, 'c'), (3, 'c'), (4, 'c')]);
        assert!(!map.is_canonical());
        assert_eq!(map.check_canonical(), Err(CanonicalError::Repeated { key: 3 }));
    }

    #[test]
    fn test_invariants_unordered_keys() {
        // No `Ord`, so the invariant check must not lean on key ordering
        struct Opaque;

        let map = IntervalMap::<Opaque, char>::new('a');
        map.assert_invariants();
        assert!(map.is_canonical());
    }

    #[test]
    fn test_invariants_closed_tail() {
        raw('a', &[(1, 'b'), (4, 'a')]).assert_invariants();
    }

    #[test]
    #[should_panic]
    fn test_invariants_open_tail() {
        raw('a', &[(1, 'b'), (4, 'c')]).assert_invariants();
    }

    #[test]
    fn test_message() {
        assert_eq!(
            CanonicalError::Repeated { key: 3 }.to_string(),
            "Boundary at 3 repeats the value of its predecessor",
        );
        assert_eq!(
            CanonicalError::LeadingDefault { key: "k" }.to_string(),
            "First boundary at \"k\" holds the default value",
        );
    }
}
