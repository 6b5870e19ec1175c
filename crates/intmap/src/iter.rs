use std::{
    collections::{BTreeMap, btree_map},
    iter::FusedIterator,
    mem,
};

use crate::Interval;

/// Iterator over the stored boundaries of an
/// [`IntervalMap`](crate::IntervalMap), in ascending key order
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Boundaries<'a, K, V>(btree_map::Iter<'a, K, V>);

impl<'a, K, V> Boundaries<'a, K, V> {
    #[inline]
    pub(crate) fn new(map: &'a BTreeMap<K, V>) -> Self { Self(map.iter()) }
}

impl<'a, K, V> Iterator for Boundaries<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for Boundaries<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for Boundaries<'_, K, V> {}

impl<K, V> FusedIterator for Boundaries<'_, K, V> {}

/// Iterator over the constant pieces of an
/// [`IntervalMap`](crate::IntervalMap)
///
/// The first piece is unbounded below and the last is unbounded above, so
/// the pieces together cover every key exactly once.
#[derive(Debug, Clone)]
pub struct Intervals<'a, K, V> {
    /// Boundary opening the next piece
    start: Option<&'a K>,
    /// Value of the next piece, or `None` once the unbounded tail was yielded
    value: Option<&'a V>,
    iter: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Intervals<'a, K, V> {
    #[inline]
    pub(crate) fn new(default_value: &'a V, map: &'a BTreeMap<K, V>) -> Self {
        Self {
            start: None,
            value: Some(default_value),
            iter: map.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Intervals<'a, K, V> {
    type Item = (Interval<&'a K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value?;

        let end = match self.iter.next() {
            Some((key, next_value)) => {
                self.value = Some(next_value);
                Some(key)
            },
            None => {
                self.value = None;
                None
            },
        };

        let start = mem::replace(&mut self.start, end);
        Some((Interval { start, end }, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.value.map_or(0, |_| self.iter.len() + 1);
        (len, Some(len))
    }
}

impl<K, V> ExactSizeIterator for Intervals<'_, K, V> {}

impl<K, V> FusedIterator for Intervals<'_, K, V> {}

#[cfg(test)]
mod test {
    use crate::IntervalMap;

    fn pieces(map: &IntervalMap<i32, char>) -> Vec<(String, char)> {
        map.intervals().map(|(i, &v)| (format!("{i:?}"), v)).collect()
    }

    #[test]
    fn test_boundaries() {
        let mut map = IntervalMap::new('a');
        map.assign(2, 5, 'b');
        map.assign(7, 9, 'c');

        let b = map.boundaries();
        assert_eq!(b.len(), 4);
        assert_eq!(b.map(|(&k, &v)| (k, v)).collect::<Vec<_>>(), [
            (2, 'b'),
            (5, 'a'),
            (7, 'c'),
            (9, 'a'),
        ]);
        assert_eq!(map.boundaries().next_back(), Some((&9, &'a')));
    }

    #[test]
    fn test_intervals_empty() {
        let map = IntervalMap::new('a');

        let mut i = map.intervals();
        assert_eq!(i.len(), 1);
        assert_eq!(pieces(&map), [("..".to_owned(), 'a')]);

        assert!(i.next().is_some());
        assert_eq!(i.len(), 0);
        assert!(i.next().is_none());
        assert!(i.next().is_none());
    }

    #[test]
    fn test_intervals() {
        let mut map = IntervalMap::new('a');
        map.assign(2, 5, 'b');
        map.assign(7, 9, 'c');

        assert_eq!(map.intervals().len(), 5);
        assert_eq!(
            pieces(&map),
            [("..2", 'a'), ("2..5", 'b'), ("5..7", 'a'), ("7..9", 'c'), ("9..", 'a')]
                .map(|(i, v)| (i.to_owned(), v)),
        );

        for k in 0..12 {
            let (_, v) = map.intervals().find(|(i, _)| i.contains(&k)).unwrap();
            assert_eq!(*v, map[&k]);
        }
    }
}
