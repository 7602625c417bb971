//! seq-ops: sequence traversal built from an index loop and a callback.
//!
//! Three operations over any index-addressable sequence:
//! - [`for_each`]: invoke a callback once per element, in index order
//! - [`find_first`]: yield the first element matching a predicate
//! - [`map_all`]: build a new sequence from a transform of every element
//!
//! Each operation is a single linear pass driven by an explicit index,
//! starting at 0 and walking while `index < sequence.len()`. The sequence
//! itself is abstracted by the [`SequenceView`] trait; callbacks are plain
//! `FnMut` closures. Fallible callbacks go through the `try_` variants,
//! which abort traversal on the first error and discard partial output.
//!
//! # Example
//!
//! ```
//! use seq_ops::{find_first, map_all};
//!
//! let names = ["Brooke", "Gehrig", "Cecilia"];
//!
//! let upper = map_all(&names, |n| n.to_uppercase());
//! assert_eq!(upper, ["BROOKE", "GEHRIG", "CECILIA"]);
//!
//! let c_name = find_first(&names, |n| n.starts_with('C'));
//! assert_eq!(c_name, Some("Cecilia"));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod ops;
pub mod view;

pub use error::TraverseError;
pub use ops::{
    SequenceOps, find_first, for_each, map_all, try_find_first, try_for_each, try_map_all,
};
pub use view::SequenceView;
