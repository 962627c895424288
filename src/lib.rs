// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Mulberry32 random number generator and a small set of reproducible
//! sampling helpers built on it.
//!
//! Mulberry32 keeps a single 32-bit word of state. Each draw adds a fixed
//! odd constant to that word and scrambles the result with two
//! xorshift-multiply rounds. The output is portable: the same seed yields the
//! same sequence on every platform, and matches other Mulberry32
//! implementations bit for bit.
//!
//! Mulberry32 is **not** cryptographically secure. Its output can be
//! predicted after observing a single value.
//!
//! ## Seeding
//!
//! A generator is seeded from a 32-bit integer or from text. Text is reduced
//! to an integer with a 31-multiplier rolling hash (see [`hash_seed`]), so two
//! different strings may collide.
//!
//! ```
//! use rand_mulberry::{Mulberry32, Rng};
//!
//! let mut a = Mulberry32::new(12345);
//! let mut b = Mulberry32::new("abc123");
//! let x = a.int(1, 100).unwrap();
//! let y = b.int(1, 100).unwrap();
//! # let _ = (x, y);
//! ```
//!
//! Generators also implement [`SeedableRng`], with a four-byte little-endian
//! seed.
//!
//! ## Generation
//!
//! [`Rng`] is an extension trait on every [`RngCore`], providing bounded
//! integers and floats, a bell-shaped float, item and weighted selection,
//! shuffling, sampling without replacement and random strings.
//!
//! ```
//! use rand_mulberry::{Mulberry32, Rng, WeightedEntry};
//!
//! let mut rng = Mulberry32::new(12345);
//! let loot = [
//!     WeightedEntry::new(100.0, "common"),
//!     WeightedEntry::new(1.0, "rare"),
//! ];
//! assert_eq!(rng.weighted(&loot), Ok(&"common"));
//!
//! let mut deck = [1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//! ```
//!
//! ## The global generator
//!
//! With the `std` feature, [`global`] offers the same operations as free
//! functions over one process-wide generator. It is seeded from the clock on
//! first use and can be reseeded with [`global::set_seed`].
//!
//! ```
//! # #[cfg(feature = "std")] {
//! rand_mulberry::global::set_seed("level-1");
//! let roll = rand_mulberry::global::simple(6).unwrap();
//! assert!((1..=6).contains(&roll));
//! # }
//! ```
//!
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://rust-random.github.io/rand/"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod log_macros;

mod error;
mod mulberry;
mod rng;
mod weighted;

#[cfg(feature = "std")]
pub mod global;

pub use rand_core;

pub use crate::error::Error;
pub use crate::mulberry::{hash_seed, IntoSeed, Mulberry32};
pub use crate::rng::Rng;
pub use crate::weighted::WeightedEntry;

#[cfg(test)]
mod test {
    use crate::Mulberry32;

    /// Construct a deterministic generator for a test.
    pub(crate) fn rng(seed: i32) -> Mulberry32 {
        Mulberry32::new(seed)
    }
}
