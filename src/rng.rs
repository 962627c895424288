// Copyright 2018-2024 Developers of the Rand project.
// Copyright 2013-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Rng`] trait

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};
use rand_core::RngCore;

use crate::weighted::{self, WeightedEntry};
use crate::Error;

// 2^-32: maps a `u32` onto `[0, 1)` exactly.
const SCALE: f64 = 1.0 / 4294967296.0;

#[cfg(feature = "alloc")]
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[inline]
pub(crate) fn unit_f64(bits: u32) -> f64 {
    f64::from(bits) * SCALE
}

/// User-level interface for reproducible sampling.
///
/// This is an extension trait implemented for every [`RngCore`]. Each method
/// is expressed purely through [`Rng::draw`], which consumes exactly one
/// `u32` from the generator, so the number of draws per call is fixed and
/// documented. Used with a [`Mulberry32`](crate::Mulberry32), results match
/// other Mulberry32-based implementations of the same helpers.
///
/// Methods that can fail check their input before drawing: a returned
/// [`Error`] means the generator was not advanced.
///
/// # Example
///
/// ```
/// use rand_mulberry::{Mulberry32, Rng};
///
/// let mut rng = Mulberry32::new(12345);
/// assert_eq!(rng.int(1, 100), Ok(98));
/// ```
pub trait Rng: RngCore {
    /// Draw a float uniformly from `[0, 1)`.
    ///
    /// Consumes one `u32` and divides it by 2<sup>32</sup>.
    #[inline]
    fn draw(&mut self) -> f64 {
        unit_f64(self.next_u32())
    }

    /// Draw an integer from the inclusive range `[min, max]`.
    ///
    /// Computed as `floor(draw() * (max - min + 1)) + min` with one draw.
    /// Spans wider than 2<sup>32</sup> are reachable only at a granularity
    /// of `span / 2^32`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `max < min`.
    ///
    /// ```
    /// use rand_mulberry::{Error, Mulberry32, Rng};
    ///
    /// let mut rng = Mulberry32::new(1);
    /// let roll = rng.int(1, 6).unwrap();
    /// assert!((1..=6).contains(&roll));
    /// assert_eq!(rng.int(6, 1), Err(Error::InvalidRange));
    /// ```
    fn int(&mut self, min: i64, max: i64) -> Result<i64, Error> {
        if max < min {
            trace!("int: empty range [{}, {}]", min, max);
            return Err(Error::InvalidRange);
        }
        // `max - min` always fits in a `u64`, even for the full `i64` range.
        let width = max.wrapping_sub(min) as u64;
        let span = width as f64 + 1.0;
        // The product is non-negative, so truncation is `floor`. Rounding can
        // land exactly on `span` for very wide ranges.
        let offset = ((self.draw() * span) as u64).min(width);
        Ok(min.wrapping_add(offset as i64))
    }

    /// Draw an integer from `[1, max]`, like rolling a `max`-sided die.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `max < 1`.
    #[inline]
    fn simple(&mut self, max: i64) -> Result<i64, Error> {
        self.int(1, max)
    }

    /// Draw a float from `[min, max)` with one draw.
    ///
    /// Computed as `draw() * (max - min) + min`; rounding may produce `max`
    /// itself for some bounds. Reversed bounds are not rejected and give
    /// values in `(max, min]`.
    #[inline]
    fn float(&mut self, min: f64, max: f64) -> f64 {
        self.draw() * (max - min) + min
    }

    /// Draw a float from `[min, max]`, concentrated towards the middle.
    ///
    /// The result is `min` plus the sum of three independent
    /// `float(0, (max - min) / 3)` draws: a piecewise-quadratic bell shape
    /// (the Irwin–Hall distribution for `n = 3`), not a Gaussian. Always
    /// consumes three draws.
    fn bell_float(&mut self, min: f64, max: f64) -> f64 {
        let third = (max - min) / 3.0;
        let mut result = min;
        for _ in 0..3 {
            result += self.float(0.0, third);
        }
        result
    }

    /// Choose one element of `items` uniformly, with one draw.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `items` is empty.
    fn item<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, Error> {
        if items.is_empty() {
            trace!("item: empty input");
            return Err(Error::EmptyInput);
        }
        let index = self.int(0, items.len() as i64 - 1)?;
        Ok(&items[index as usize])
    }

    /// Choose `count` distinct positions of `items` without replacement.
    ///
    /// A copy of `items` is shuffled with [`Rng::shuffle`] and the result is
    /// taken from its end, last element first. `items` itself is left
    /// untouched. Consumes `items.len() - 1` draws (none for fewer than two
    /// items), whatever `count` is.
    ///
    /// Duplicate values in `items` may appear in the result as often as they
    /// appear in the input.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `count > items.len()`.
    ///
    /// ```
    /// use rand_mulberry::{Mulberry32, Rng};
    ///
    /// let mut rng = Mulberry32::new(12345);
    /// let letters = ["a", "b", "c", "d", "e"];
    /// assert_eq!(rng.random_set(3, &letters), Ok(vec!["e", "b", "d"]));
    /// ```
    #[cfg(feature = "alloc")]
    fn random_set<T: Clone>(&mut self, count: usize, items: &[T]) -> Result<Vec<T>, Error> {
        if count > items.len() {
            trace!("random_set: {} requested from {}", count, items.len());
            return Err(Error::InvalidCount);
        }
        let mut pool = items.to_vec();
        self.shuffle(&mut pool);
        let tail = pool.split_off(pool.len() - count);
        Ok(tail.into_iter().rev().collect())
    }

    /// Build a string of `length` characters from `[0-9a-z]`, one draw per
    /// character.
    ///
    /// Each character is the first base-36 fractional digit of a draw,
    /// `floor(draw() * 36)`. The distribution is approximately uniform: the
    /// 2<sup>32</sup> possible draws do not divide evenly into 36 buckets.
    #[cfg(feature = "alloc")]
    fn random_string(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(ALPHABET[(self.draw() * 36.0) as usize]))
            .collect()
    }

    /// Shuffle `items` in place and return it.
    ///
    /// This is the Durstenfeld form of the Fisher–Yates shuffle: for `i`
    /// from `len - 1` down to `1`, swap `items[i]` with
    /// `items[floor(draw() * (i + 1))]`. Every permutation is equally likely
    /// (up to the resolution of the draws). Copy the slice first if the
    /// original order is still needed.
    fn shuffle<'a, T>(&mut self, items: &'a mut [T]) -> &'a mut [T] {
        for i in (1..items.len()).rev() {
            let j = (self.draw() * (i + 1) as f64) as usize;
            items.swap(i, j);
        }
        items
    }

    /// Choose an entry with probability proportional to its weight.
    ///
    /// See [`WeightedEntry`] for the selection rule. A single entry is
    /// returned without drawing; otherwise exactly one draw is consumed.
    ///
    /// # Errors
    ///
    /// -   [`Error::WeightedSelectionExhausted`] if `entries` is empty.
    /// -   [`Error::InvalidWeight`] if a weight is negative or not finite.
    #[inline]
    fn weighted<'a, T>(&mut self, entries: &'a [WeightedEntry<T>]) -> Result<&'a T, Error> {
        weighted::select(self, entries)
    }
}

impl<R: RngCore + ?Sized> Rng for R {}
