use std::fmt;

/// One constant piece of an [`IntervalMap`](crate::IntervalMap), covering
/// the keys in `[start, end)`
///
/// A missing `start` extends the piece down without bound, and a missing
/// `end` extends it up without bound.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    /// The stored boundary that opens this piece, if any
    pub start: Option<T>,
    /// The stored boundary that closes this piece, if any
    pub end: Option<T>,
}

/// Prints as a Rust range, e.g. `..3`, `1..3` or `3..`
impl<T: fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = &self.start {
            fmt::Debug::fmt(start, f)?;
        }

        f.write_str("..")?;

        if let Some(end) = &self.end {
            fmt::Debug::fmt(end, f)?;
        }

        Ok(())
    }
}

impl<T: ?Sized + Ord> Interval<&T> {
    /// Returns true if `key` lies within this piece
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.start.is_none_or(|s| s <= key) && self.end.is_none_or(|e| key < e)
    }
}
