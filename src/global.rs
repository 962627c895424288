// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The process-wide generator
//!
//! One [`Mulberry32`] shared by the whole process, created on first use with
//! a seed taken from the system clock (milliseconds since the Unix epoch,
//! truncated to 32 bits). [`set_seed`] replaces its state at any time.
//!
//! The free functions here mirror the [`Rng`] methods. Each call locks the
//! generator for its whole duration, so a single call is never interleaved
//! with another thread's. The *order* of calls from different threads is
//! still unspecified: code that needs reproducible output should own a
//! [`Mulberry32`] rather than share this one.
//!
//! ```
//! use rand_mulberry::global;
//!
//! global::set_seed(12345);
//! let a = global::int(1, 100).unwrap();
//! global::set_seed(12345);
//! let b = global::int(1, 100).unwrap();
//! # // Other doctests may run concurrently in the same process.
//! # let _ = (a, b);
//! ```

use std::string::String;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};
use std::vec::Vec;

use rand_core::RngCore;

use crate::{Error, IntoSeed, Mulberry32, Rng, WeightedEntry};

static GLOBAL_RNG: Mutex<Option<Mulberry32>> = Mutex::new(None);

fn clock_seed() -> i32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    millis as u32 as i32
}

fn with_rng<F, T>(f: F) -> T
where
    F: FnOnce(&mut Mulberry32) -> T,
{
    // The state is a plain integer, valid even if a holder panicked.
    let mut guard = GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    let rng = guard.get_or_insert_with(|| {
        let seed = clock_seed();
        debug!("global: seeded from clock with {}", seed);
        Mulberry32::new(seed)
    });
    f(rng)
}

/// A handle to the process-wide generator.
///
/// Implements [`RngCore`], and therefore [`Rng`], by locking the generator
/// for every `u32` it takes. Prefer the free functions in this module for
/// multi-draw operations, which lock once per call.
///
/// Construct it with [`rng`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalRng {
    _private: (),
}

/// Retrieve a handle to the process-wide generator.
///
/// ```
/// use rand_mulberry::{global, Rng};
///
/// let mut rng = global::rng();
/// let x = rng.float(0.0, 10.0);
/// assert!((0.0..10.0).contains(&x));
/// ```
#[inline]
pub fn rng() -> GlobalRng {
    GlobalRng { _private: () }
}

impl RngCore for GlobalRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        with_rng(|rng| rng.next_u32())
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        with_rng(|rng| rng.next_u64())
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        with_rng(|rng| rng.fill_bytes(dest))
    }
}

/// Reseed the process-wide generator, from an integer or text.
pub fn set_seed<S: IntoSeed>(seed: S) {
    let seed = seed.into_seed();
    let mut guard = GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Mulberry32::new(seed));
    trace!("global: reseeded with {}", seed);
}

/// Draw a float from `[0, 1)`. See [`Rng::draw`].
pub fn draw() -> f64 {
    with_rng(|rng| rng.draw())
}

/// Draw an integer from `[1, max]`. See [`Rng::simple`].
pub fn simple(max: i64) -> Result<i64, Error> {
    with_rng(|rng| rng.simple(max))
}

/// Draw an integer from `[min, max]`. See [`Rng::int`].
pub fn int(min: i64, max: i64) -> Result<i64, Error> {
    with_rng(|rng| rng.int(min, max))
}

/// Draw a float from `[min, max)`. See [`Rng::float`].
pub fn float(min: f64, max: f64) -> f64 {
    with_rng(|rng| rng.float(min, max))
}

/// Draw a bell-shaped float from `[min, max]`. See [`Rng::bell_float`].
pub fn bell_float(min: f64, max: f64) -> f64 {
    with_rng(|rng| rng.bell_float(min, max))
}

/// Choose one element. See [`Rng::item`].
pub fn item<T>(items: &[T]) -> Result<&T, Error> {
    with_rng(move |rng| rng.item(items))
}

/// Choose `count` elements without replacement, leaving `items` untouched.
/// See [`Rng::random_set`].
pub fn random_set<T: Clone>(count: usize, items: &[T]) -> Result<Vec<T>, Error> {
    with_rng(move |rng| rng.random_set(count, items))
}

/// Build a random `[0-9a-z]` string. See [`Rng::random_string`].
pub fn random_string(length: usize) -> String {
    with_rng(|rng| rng.random_string(length))
}

/// Shuffle `items` in place and return it. See [`Rng::shuffle`].
pub fn shuffle<T>(items: &mut [T]) -> &mut [T] {
    with_rng(|rng| {
        rng.shuffle(&mut *items);
    });
    items
}

/// Choose an entry by weight. See [`Rng::weighted`].
pub fn weighted<T>(entries: &[WeightedEntry<T>]) -> Result<&T, Error> {
    with_rng(move |rng| rng.weighted(entries))
}
