//! # Flagsort
//!
//! `flagsort` is a high-performance, in-place sorting library for integers and
//! other fixed-width keys.
//!
//! It implements the [**American flag sort**](https://en.wikipedia.org/wiki/American_flag_sort)
//! algorithm, a most-significant-digit **Radix Sort** that partitions its input
//! into 256 digit buckets by cyclic permutation and hands small ranges to
//! **Insertion Sort**, touching each element a bounded number of times.
//!
//! ## Key Features
//!
//! - **In-Place Partitioning**: Elements are permuted into their buckets by
//!   following permutation cycles, so a partitioning pass needs no scratch
//!   buffer regardless of input size.
//! - **Adaptive Strategy**: Ranges of 64 elements or fewer skip partitioning
//!   entirely and are insertion sorted, where the quadratic fallback beats the
//!   cost of another counting pass.
//! - **Pluggable Keys**: The [`RadixKey`] trait covers every native integer
//!   type, pairs, and fixed-size arrays out of the box, and extends to custom
//!   structs with a handful of lines.
//! - **Flexible Ordering**: [`sort_by`] sorts elements whose payload is not
//!   `Ord`, and [`sort_by_key`] sorts by a derived key without materializing a
//!   keyed copy of the data.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Slices of native integers sort directly with [`sort`]; signed types order
//! correctly across the sign boundary.
//!
//! ```rust
//! use flagsort::sort;
//!
//! let mut data = vec![5_i32, -3, 0, i32::MAX, i32::MIN, -1];
//! sort(&mut data);
//!
//! assert_eq!(data, vec![i32::MIN, -3, -1, 0, 5, i32::MAX]);
//! ```
//!
//! ### Custom Keys
//!
//! To sort custom types, implement the [`RadixKey`] trait by delegating to the
//! digits of the fields, most significant field first.
//!
//! ```rust
//! use flagsort::{sort, RadixKey};
//!
//! #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
//! struct Version {
//!     major: u16,
//!     minor: u16,
//! }
//!
//! impl RadixKey for Version {
//!     const DIGITS: usize = 4;
//!
//!     fn digit(&self, position: usize) -> u8 {
//!         // The two highest digit positions belong to `major`.
//!         if position >= 2 {
//!             self.major.digit(position - 2)
//!         } else {
//!             self.minor.digit(position)
//!         }
//!     }
//! }
//!
//! let mut versions = vec![
//!     Version { major: 1, minor: 9 },
//!     Version { major: 0, minor: 4 },
//!     Version { major: 1, minor: 2 },
//! ];
//!
//! sort(&mut versions);
//!
//! assert_eq!(
//!     versions,
//!     vec![
//!         Version { major: 0, minor: 4 },
//!         Version { major: 1, minor: 2 },
//!         Version { major: 1, minor: 9 },
//!     ]
//! );
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Runtime**: O(w·N) for N elements with w-digit keys, independent of the
//!   initial order. Levels on which every key shares a digit are detected and
//!   skipped without moving data.
//! - **Memory Overhead**: None on the heap. Each active recursion level keeps
//!   a 256-entry histogram and a 257-entry cursor table on the stack, and the
//!   recursion depth is bounded by the key width.
//! - **Stability**: The sort is unstable; equal elements may change relative
//!   order.
//!
//! This library is particularly effective for large arrays of integer-keyed
//! data where comparison sorts spend their time on cache misses and branch
//! mispredictions.

pub mod algo;
pub mod core;
pub use algo::{sort, sort_by, sort_by_key};
pub use core::RadixKey;

pub mod prelude {
    pub use crate::algo::{sort, sort_by, sort_by_key};
    pub use crate::core::RadixKey;
}
