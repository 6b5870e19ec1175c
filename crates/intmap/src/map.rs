use std::{
    borrow::Borrow,
    collections::BTreeMap,
    fmt,
    ops::{Bound, Index, Range},
};

use tracing::trace;

use crate::{
    Interval,
    iter::{Boundaries, Intervals},
};

/// A map assigning a value to every key of an ordered key space
///
/// Only the keys where the value changes are stored.  A stored entry
/// `(k, v)` means `v` holds from `k` up to (but excluding) the next stored
/// key, or without bound if `k` is the last stored key.  Keys below the first
/// stored key take the default value given at construction.
///
/// Every mutation leaves the map in canonical form: the first stored value
/// differs from the default value, and no two consecutive stored values are
/// equal.  Two canonical maps denote the same function exactly when they
/// compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalMap<K, V> {
    pub(crate) default_value: V,
    pub(crate) boundaries: BTreeMap<K, V>,
}

impl<K, V: Default> Default for IntervalMap<K, V> {
    fn default() -> Self { Self::new(V::default()) }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.intervals()
            .fold(&mut f.debug_map(), |d, (k, v)| d.entry(&k, &v))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "default: {}", self.default_value)?;

        for (key, value) in &self.boundaries {
            writeln!(f, "{key} -> {value}")?;
        }

        Ok(())
    }
}

impl<K, V> IntervalMap<K, V> {
    /// Construct a map assigning `default_value` to every key
    #[inline]
    #[must_use]
    pub const fn new(default_value: V) -> Self {
        Self {
            default_value,
            boundaries: BTreeMap::new(),
        }
    }

    /// The value of every key below the first stored boundary
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &V { &self.default_value }

    /// The number of stored boundaries (not the size of the key space)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.boundaries.len() }

    /// Returns true if the map holds the default value everywhere
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.boundaries.is_empty() }

    /// Iterate over the stored boundaries in ascending key order
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> Boundaries<'_, K, V> { Boundaries::new(&self.boundaries) }

    /// Iterate over the constant pieces of the map, covering the whole key
    /// space in ascending order
    #[inline]
    #[must_use]
    pub fn intervals(&self) -> Intervals<'_, K, V> {
        Intervals::new(&self.default_value, &self.boundaries)
    }
}

impl<K: Ord, V> IntervalMap<K, V> {
    /// Look up the value in effect at `key`
    #[inline]
    pub fn value_at<Q: ?Sized + Ord>(&self, key: &Q) -> &V
    where K: Borrow<Q> {
        self.boundaries
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map_or(&self.default_value, |(_, v)| v)
    }

    /// Look up the constant piece containing `key`, along with its value
    pub fn interval_at<Q: ?Sized + Ord>(&self, key: &Q) -> (Interval<&K>, &V)
    where K: Borrow<Q> {
        let prev = self
            .boundaries
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back();
        let end = self
            .boundaries
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(k, _)| k);

        (
            Interval {
                start: prev.map(|(k, _)| k),
                end,
            },
            prev.map_or(&self.default_value, |(_, v)| v),
        )
    }
}

impl<K: Borrow<Q> + Ord, Q: ?Sized + Ord, V> Index<&Q> for IntervalMap<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, key: &Q) -> &V { self.value_at(key) }
}

impl<K: Clone + Ord, V: Clone + PartialEq> IntervalMap<K, V> {
    /// Construct a map with the given default value and apply each
    /// assignment in order
    pub fn from_iter_with_default<I: IntoIterator<Item = (Range<K>, V)>>(
        it: I,
        default_value: V,
    ) -> Self {
        let mut me = Self::new(default_value);
        me.extend(it);
        me
    }

    /// Assign `value` to every key in `[key_begin, key_end)`
    ///
    /// Keys outside the range keep their value.  If `key_begin` is not less
    /// than `key_end` the range is empty and the map is left untouched.
    pub fn assign(&mut self, key_begin: K, key_end: K, value: V) {
        self.assign_internal(key_begin, key_end, value);

        #[cfg(any(test, feature = "test"))]
        self.assert_invariants();
    }

    fn assign_internal(&mut self, key_begin: K, key_end: K, value: V) {
        if key_begin >= key_end {
            trace!("Ignoring empty interval");
            return;
        }

        if self.boundaries.is_empty() {
            if value != self.default_value {
                self.boundaries.insert(key_end, self.default_value.clone());
                self.boundaries.insert(key_begin, value);
            }

            trace!(len = self.boundaries.len(), "Assigning into empty map");
            return;
        }

        // Only cloned when the stored span reaches past the new interval
        let last_inner = self
            .boundaries
            .last_key_value()
            .filter(|(k, _)| key_end < **k)
            .map(|(k, _)| k.clone());

        self.clear_span(&key_begin, &key_end, &value);
        self.insert_merged(key_begin, value);

        while self
            .boundaries
            .first_key_value()
            .is_some_and(|(_, v)| *v == self.default_value)
        {
            self.boundaries.pop_first();
        }

        self.trim_tail();

        // The last stored value holds without bound, so it must be the default.
        // The carried value at `key_end` and `trim_tail` already guarantee
        // this; the insertion below only guards release builds.
        let open_tail = self
            .boundaries
            .last_key_value()
            .is_some_and(|(_, v)| *v != self.default_value);
        debug_assert!(!open_tail, "Assignment left the tail open");

        if open_tail {
            let last_key = last_inner.unwrap_or(key_end);
            self.boundaries.insert(last_key, self.default_value.clone());
        }

        trace!(len = self.boundaries.len(), "Assigned interval");
    }

    /// Remove every boundary the new interval will overwrite, keeping the
    /// value that held at `key_end` in place
    fn clear_span(&mut self, key_begin: &K, key_end: &K, value: &V) {
        let mut doomed = vec![];

        for (key, val) in self
            .boundaries
            .range((Bound::Included(key_begin), Bound::Included(key_end)))
        {
            if key == key_begin && val == value {
                // Overwritten in place
                continue;
            }

            if val == value || key < key_end {
                doomed.push(key.clone());
            }
        }

        let carried = (!self.boundaries.contains_key(key_end))
            .then(|| (key_end.clone(), self.value_at(key_end).clone()));

        trace!(
            len = self.boundaries.len(),
            deleted = doomed.len(),
            carried = carried.is_some(),
            "Cleared affected span"
        );

        if let Some((key, val)) = carried {
            assert!(self.boundaries.insert(key, val).is_none());
        }

        for key in doomed {
            assert!(self.boundaries.remove(&key).is_some());
        }
    }

    fn insert_merged(&mut self, key_begin: K, value: V) {
        let next_equal = self
            .boundaries
            .range((Bound::Excluded(&key_begin), Bound::Unbounded))
            .next()
            .filter(|(_, v)| **v == value)
            .map(|(k, _)| k.clone());
        let prev_equal = self
            .boundaries
            .range((Bound::Unbounded, Bound::Excluded(&key_begin)))
            .next_back()
            .is_some_and(|(_, v)| *v == value);

        if let Some(next) = next_equal {
            assert!(self.boundaries.remove(&next).is_some());
        }

        if prev_equal {
            self.boundaries.remove(&key_begin);
        } else {
            self.boundaries.insert(key_begin, value);
        }
    }

    fn trim_tail(&mut self) {
        loop {
            let mut rev = self.boundaries.values().rev();
            let Some(last) = rev.next() else { break };

            if *last != *rev.next().unwrap_or(&self.default_value) {
                break;
            }

            self.boundaries.pop_last();
        }
    }
}

impl<K: Clone + Ord, V: Clone + PartialEq> Extend<(Range<K>, V)> for IntervalMap<K, V> {
    fn extend<I: IntoIterator<Item = (Range<K>, V)>>(&mut self, it: I) {
        for (Range { start, end }, value) in it {
            self.assign_internal(start, end, value);
        }

        #[cfg(any(test, feature = "test"))]
        self.assert_invariants();
    }
}

impl<K: Clone + Ord, V: Clone + Default + PartialEq> FromIterator<(Range<K>, V)>
    for IntervalMap<K, V>
{
    fn from_iter<I: IntoIterator<Item = (Range<K>, V)>>(it: I) -> Self {
        Self::from_iter_with_default(it, V::default())
    }
}
