//! Core sorting algorithm (MSD radix partitioning, a.k.a. American flag sort).
//!
//! This module implements a hybrid of:
//! - **In-Place Radix Partitioning**: a counting pass followed by cyclic
//!   swaps that split a range into 256 contiguous digit buckets, recursing
//!   per bucket from the most significant digit to the least.
//! - **Insertion Sort**: Fallback for small ranges and small buckets.
//!
//! The main entry points are [`sort`], [`sort_by`] and [`sort_by_key`].

use crate::core::{Intrinsic, KeyModel, RadixKey, WithComparator, WithKeyFn};
use cuneiform::cuneiform;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Ranges at or below this length are insertion sorted rather than
/// partitioned further.
const INSERTION_SORT_THRESHOLD: usize = 64;

/// Sorts a slice of radix keys in place, ascending.
///
/// Accepts any element type implementing [`RadixKey`] consistently with its
/// `Ord`: every native integer type out of the box, as well as pairs and
/// fixed-size arrays of such types.
///
/// The sort is unstable (equal elements may end up in any relative order),
/// allocation-free, and runs in `O(w n)` for `w`-digit keys. Slices of 64
/// elements or fewer are handled by insertion sort alone.
///
/// # Examples
///
/// ```
/// let mut data = [5_i32, -3, 0, i32::MAX, i32::MIN, -1];
///
/// flagsort::sort(&mut data);
///
/// assert_eq!(data, [i32::MIN, -3, -1, 0, 5, i32::MAX]);
/// ```
pub fn sort<T: RadixKey + Ord>(data: &mut [T]) {
    dispatch(data, &mut Intrinsic);
}

/// Sorts a slice in place with an explicit comparator.
///
/// Digits still come from the element's [`RadixKey`] implementation;
/// `compare` replaces `Ord` on the insertion-sort path, which makes this
/// entry usable for element types that carry non-`Ord` payload next to
/// their key. The comparator must order elements exactly as their digit
/// sequences do, most significant digit first; disagreement is not detected
/// and silently produces unsorted output.
///
/// # Examples
///
/// ```
/// use flagsort::RadixKey;
///
/// #[derive(Clone, Copy)]
/// struct Reading {
///     sensor: u32,
///     volts: f32, // not Ord, so plain `sort` does not apply
/// }
///
/// impl RadixKey for Reading {
///     const DIGITS: usize = 4;
///
///     fn digit(&self, position: usize) -> u8 {
///         self.sensor.digit(position)
///     }
/// }
///
/// let mut data = [
///     Reading { sensor: 9, volts: 1.5 },
///     Reading { sensor: 2, volts: 3.3 },
///     Reading { sensor: 4, volts: 0.7 },
/// ];
///
/// flagsort::sort_by(&mut data, |a, b| a.sensor.cmp(&b.sensor));
///
/// assert_eq!(data.map(|r| r.sensor), [2, 4, 9]);
/// ```
pub fn sort_by<T, F>(data: &mut [T], compare: F)
where
    T: RadixKey,
    F: FnMut(&T, &T) -> Ordering,
{
    dispatch(data, &mut WithComparator(compare));
}

/// Sorts a slice in place by a key extracted from each element.
///
/// The key type drives both partitioning and comparison, so any `RadixKey +
/// Ord` key works: project out a field, complement an integer for a
/// descending order, and so on. `key_fn` is called every time the sort
/// needs a digit or a comparison and should therefore be cheap, typically a
/// field access or a couple of integer operations. It must also return the
/// same key for the same element every time it is asked; a key function
/// that answers inconsistently leaves the slice in an unspecified order and
/// may panic.
///
/// # Examples
///
/// ```
/// let mut words = ["cranberry", "fig", "orange", "plum"];
///
/// flagsort::sort_by_key(&mut words, |w| w.len());
///
/// assert_eq!(words, ["fig", "plum", "orange", "cranberry"]);
/// ```
pub fn sort_by_key<T, K, F>(data: &mut [T], key_fn: F)
where
    K: RadixKey + Ord,
    F: FnMut(&T) -> K,
{
    dispatch(
        data,
        &mut WithKeyFn {
            key_fn,
            _key: PhantomData,
        },
    );
}

/// Threshold gate shared by every entry point: tiny inputs go straight to
/// the insertion fallback, everything else starts radix partitioning at the
/// most significant digit.
fn dispatch<T, M: KeyModel<T>>(data: &mut [T], model: &mut M) {
    if data.len() <= INSERTION_SORT_THRESHOLD {
        insertion_sort(data, model);
    } else if M::DIGITS > 0 {
        msd_radix_sort(data, M::DIGITS - 1, model);
    }
}

/// In-place insertion sort via pairwise swaps.
///
/// Quadratic, but only ever run on ranges bounded by the insertion
/// threshold, where it beats setting up another partitioning pass.
fn insertion_sort<T, M: KeyModel<T>>(data: &mut [T], model: &mut M) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && model.less(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Number of buckets per partitioning step (256 for 8-bit digits).
const RADIX_BUCKETS: usize = 256;

// Cache-aligned counts struct.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// One MSD radix step: partitions `data` into 256 contiguous digit buckets
/// in place, then handles each bucket at the next lower digit.
///
/// 1. Counts occurrences of each digit value (histogram).
/// 2. Computes prefix sums to obtain one advancing cursor per bucket.
/// 3. Permutes elements in place by following permutation cycles: the
///    element under a bucket's cursor is repeatedly swapped onto the cursor
///    of the bucket its digit names, until an element with the right digit
///    lands.
/// 4. Recurses into buckets still above the insertion threshold; smaller
///    buckets go to the insertion fallback.
fn msd_radix_sort<T, M: KeyModel<T>>(data: &mut [T], position: usize, model: &mut M) {
    // 1. Count digit frequencies
    let mut counts = RadixCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;
    for item in data.iter() {
        counts[model.digit(item, position) as usize] += 1;
    }

    // A single occupied bucket means every key shares this digit; descend
    // to the next digit without moving anything.
    let occupied = counts.iter().filter(|&&c| c > 0).count();
    if occupied <= 1 {
        if position > 0 {
            msd_radix_sort(data, position - 1, model);
        }
        return;
    }

    // 2. Bucket cursors from prefix sums. cursors[b + 1] walks bucket b
    // from its start to its end. Bucket b's end is recovered on demand as
    // cursors[b] + counts[b]: by the time bucket b is processed, cursors[b]
    // has finished walking bucket b - 1 and rests exactly on b's start
    // (cursors[0] is pinned to the range start for the same purpose).
    let mut cursors = [0usize; RADIX_BUCKETS + 1];
    for b in 1..RADIX_BUCKETS {
        cursors[b + 1] = cursors[b] + counts[b - 1];
    }

    // 3. Cyclic in-place placement
    for b in 0..RADIX_BUCKETS {
        let end = cursors[b] + counts[b];
        if end == data.len() {
            // Tail bucket: every lower bucket is full and no higher digit
            // occurs, so the remaining elements already carry digit b.
            break;
        }
        while cursors[b + 1] < end {
            let slot = cursors[b + 1];
            let digit = model.digit(&data[slot], position) as usize;
            if digit == b {
                cursors[b + 1] += 1;
            } else {
                // Send the stray to the bucket its digit names and pull
                // that bucket's next occupant back into the open slot.
                data.swap(slot, cursors[digit + 1]);
                cursors[digit + 1] += 1;
            }
        }
    }

    // Buckets of the least significant digit hold fully equal keys.
    if position == 0 {
        return;
    }

    // 4. Recurse per bucket
    let mut start = 0;
    for &count in counts.iter() {
        let end = start + count;
        if count > INSERTION_SORT_THRESHOLD {
            msd_radix_sort(&mut data[start..end], position - 1, model);
        } else if count > 1 {
            insertion_sort(&mut data[start..end], model);
        }
        start = end;
    }
}
