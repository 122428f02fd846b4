//! Red-black index, an ordered in-memory map with O(log n) search,
//! insert and delete.
//!
//! ```
//! use rbt_index::Rbt;
//!
//! let mut index: Rbt<u32, &str> = Rbt::new("example");
//! for (key, value) in [(5, "five"), (3, "three"), (7, "seven")].iter() {
//!     index.insert(*key, *value);
//! }
//! assert_eq!(index.search(&3), Some("three"));
//! assert!(index.delete(&3));
//! assert_eq!(index.search(&3), None);
//! assert!(index.validate().is_ok());
//! ```

mod depth;
mod error;
mod rbt;

pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::rbt::{Iter, Rbt, Stats};

#[cfg(test)]
mod depth_test;
