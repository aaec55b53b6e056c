//! Core traits and types for Flagsort.
//!
//! This module defines:
//! - [`RadixKey`]: The main trait users implement to sort their custom types.
//! - `KeyModel`: Internal pairing of digit extraction with a comparator.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A fixed-width sort key, readable as a sequence of 8-bit digits.
///
/// The sort partitions elements one digit at a time, starting from the most
/// significant digit and recursing towards the least significant. Every
/// native integer type implements this trait, as do pairs and fixed-size
/// arrays of implementing types. Implement it yourself to sort by a
/// composite key spread across several fields, without ever packing the
/// fields into a single wide integer.
///
/// # Consistency
///
/// Comparing two keys digit by digit, from position `DIGITS - 1` down to 0,
/// must order them exactly as the comparator used alongside the key model
/// (`Ord` for [`sort`](crate::sort) and [`sort_by_key`](crate::sort_by_key),
/// the explicit comparator for [`sort_by`](crate::sort_by)). The sort
/// performs no validation: an inconsistent pair silently produces unsorted
/// output.
///
/// # Examples
///
/// Implementing for a 128-bit composite key:
///
/// ```
/// use flagsort::RadixKey;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct PageId {
///     file: u64,
///     offset: u64,
/// }
///
/// impl RadixKey for PageId {
///     const DIGITS: usize = 16;
///
///     fn digit(&self, position: usize) -> u8 {
///         if position >= 8 {
///             self.file.digit(position - 8)
///         } else {
///             self.offset.digit(position)
///         }
///     }
/// }
/// ```
pub trait RadixKey {
    /// Number of 8-bit digits that make up the key.
    const DIGITS: usize;

    /// Returns the digit at `position`.
    ///
    /// Position 0 is the least significant digit and `DIGITS - 1` the most
    /// significant. The sort only ever queries positions below `DIGITS`.
    fn digit(&self, position: usize) -> u8;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty)*) => ($(
        impl RadixKey for $t {
            const DIGITS: usize = std::mem::size_of::<$t>();

            #[inline(always)]
            fn digit(&self, position: usize) -> u8 {
                (*self >> (position * 8)) as u8
            }
        }
    )*)
}

impl_radix_key_unsigned! { u8 u16 u32 u64 u128 usize }

macro_rules! impl_radix_key_signed {
    ($($t:ty => $u:ty),* $(,)?) => ($(
        impl RadixKey for $t {
            const DIGITS: usize = std::mem::size_of::<$t>();

            #[inline(always)]
            fn digit(&self, position: usize) -> u8 {
                // Flipping the sign bit maps two's-complement order onto
                // unsigned digit order. The stored value is never touched.
                ((*self as $u) ^ (1 << (<$u>::BITS - 1))).digit(position)
            }
        }
    )*)
}

impl_radix_key_signed! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

// Pairs as composite keys: high digits from the first component, low digits
// from the second, which agrees with tuple ordering.
impl<A: RadixKey, B: RadixKey> RadixKey for (A, B) {
    const DIGITS: usize = A::DIGITS + B::DIGITS;

    #[inline]
    fn digit(&self, position: usize) -> u8 {
        if position >= B::DIGITS {
            self.0.digit(position - B::DIGITS)
        } else {
            self.1.digit(position)
        }
    }
}

// Fixed-size arrays as wide keys: index 0 holds the most significant word,
// which agrees with array ordering.
impl<K: RadixKey, const N: usize> RadixKey for [K; N] {
    const DIGITS: usize = N * K::DIGITS;

    #[inline]
    fn digit(&self, position: usize) -> u8 {
        let word = N - 1 - position / K::DIGITS;
        self[word].digit(position % K::DIGITS)
    }
}

/// Internal pairing of a digit extractor with the comparator that drives the
/// insertion-sort fallback. Each public entry point selects one
/// implementation; the partitioning engine stays generic over it.
pub(crate) trait KeyModel<T> {
    const DIGITS: usize;

    fn digit(&mut self, item: &T, position: usize) -> u8;

    fn less(&mut self, a: &T, b: &T) -> bool;
}

/// Model behind `sort`: digits from the element itself, order from `Ord`.
pub(crate) struct Intrinsic;

impl<T: RadixKey + Ord> KeyModel<T> for Intrinsic {
    const DIGITS: usize = T::DIGITS;

    #[inline]
    fn digit(&mut self, item: &T, position: usize) -> u8 {
        item.digit(position)
    }

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Model behind `sort_by`: digits from the element, order from the caller.
pub(crate) struct WithComparator<F>(pub F);

impl<T, F> KeyModel<T> for WithComparator<F>
where
    T: RadixKey,
    F: FnMut(&T, &T) -> Ordering,
{
    const DIGITS: usize = T::DIGITS;

    #[inline]
    fn digit(&mut self, item: &T, position: usize) -> u8 {
        item.digit(position)
    }

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> bool {
        (self.0)(a, b) == Ordering::Less
    }
}

/// Model behind `sort_by_key`: digits and order both come from the
/// projected key.
pub(crate) struct WithKeyFn<F, K> {
    pub key_fn: F,
    pub _key: PhantomData<K>,
}

impl<T, K, F> KeyModel<T> for WithKeyFn<F, K>
where
    K: RadixKey + Ord,
    F: FnMut(&T) -> K,
{
    const DIGITS: usize = K::DIGITS;

    #[inline]
    fn digit(&mut self, item: &T, position: usize) -> u8 {
        (self.key_fn)(item).digit(position)
    }

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> bool {
        (self.key_fn)(a).lt(&(self.key_fn)(b))
    }
}
