//! [`proptest`] strategies for generating assignments and interval maps

use std::{fmt, ops::Range};

use proptest::{prelude::*, sample::SizeRange};

use crate::IntervalMap;

/// Generate a single assignment whose range is never inverted
///
/// Bounds are drawn independently from `key` and swapped if needed, so empty
/// ranges are generated whenever both draws coincide.
pub fn assignment<K: Ord + fmt::Debug, V: fmt::Debug>(
    key: impl Strategy<Value = K> + Clone,
    value: impl Strategy<Value = V>,
) -> impl Strategy<Value = (Range<K>, V)> {
    (key.clone(), key, value).prop_map(|(start, end, value)| {
        if end < start {
            (end..start, value)
        } else {
            (start..end, value)
        }
    })
}

/// Generate a list of assignments, see [`assignment`]
pub fn assignments<K: Ord + fmt::Debug, V: fmt::Debug>(
    key: impl Strategy<Value = K> + Clone,
    value: impl Strategy<Value = V>,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = Vec<(Range<K>, V)>> {
    prop::collection::vec(assignment(key, value), size)
}

/// Generate an interval map by applying a list of assignments to a map with
/// the given default value
pub fn interval_map<K, V>(
    key: impl Strategy<Value = K> + Clone,
    value: impl Strategy<Value = V>,
    default_value: V,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = IntervalMap<K, V>>
where
    K: Clone + Ord + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    assignments(key, value, size)
        .prop_map(move |v| IntervalMap::from_iter_with_default(v, default_value.clone()))
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{assignment, interval_map};

    proptest! {
        #[test]
        fn test_assignment(a in assignment(any::<i16>(), any::<bool>())) {
            let (range, _) = a;
            prop_assert!(range.start <= range.end);
        }

        #[test]
        fn test_interval_map(map in interval_map(0_u8..32, 0_u8..4, 0, 0..16)) {
            prop_assert_eq!(*map.default_value(), 0);
            prop_assert!(map.is_canonical());
            prop_assert!(map.boundaries().all(|(&k, _)| k < 32));
        }
    }
}
