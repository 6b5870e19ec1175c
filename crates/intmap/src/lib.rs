//! Interval maps: total functions over an ordered key space, stored as the
//! sorted set of keys where the value changes.
//!
//! ```
//! use intmap::IntervalMap;
//!
//! let mut map = IntervalMap::new('A');
//! map.assign(1, 3, 'B');
//!
//! assert_eq!(map[&0], 'A');
//! assert_eq!(map[&2], 'B');
//! assert_eq!(map[&3], 'A');
//! assert_eq!(map.len(), 2);
//! assert!(map.is_canonical());
//! ```

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod canonical;
mod interval;
mod iter;
mod map;

#[cfg(any(test, feature = "proptest"))]
pub mod prop;

pub use canonical::CanonicalError;
pub use interval::Interval;
pub use iter::{Boundaries, Intervals};
pub use map::IntervalMap;
