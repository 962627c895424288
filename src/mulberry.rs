// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Mulberry32 generator

use core::fmt;
use rand_core::{impls, RngCore, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Weyl sequence increment, added to the state on every draw.
const INCREMENT: i32 = 0x6D2B79F5;

/// Reduce text to a 32-bit seed.
///
/// This is the classic `hash * 31 + unit` rolling hash over the UTF-16 code
/// units of `text`, with wrapping 32-bit arithmetic. Distinct strings may
/// collide; the empty string hashes to `0`.
///
/// ```
/// assert_eq!(rand_mulberry::hash_seed("a"), 97);
/// assert_eq!(rand_mulberry::hash_seed("abc123"), -1424436592);
/// ```
pub fn hash_seed(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Values a [`Mulberry32`] can be seeded from.
///
/// Integers are used as-is (`u32` is reinterpreted as `i32`); text is reduced
/// with [`hash_seed`].
pub trait IntoSeed {
    /// Convert `self` into the 32-bit generator state.
    fn into_seed(self) -> i32;
}

impl IntoSeed for i32 {
    #[inline]
    fn into_seed(self) -> i32 {
        self
    }
}

impl IntoSeed for u32 {
    #[inline]
    fn into_seed(self) -> i32 {
        self as i32
    }
}

impl IntoSeed for &str {
    #[inline]
    fn into_seed(self) -> i32 {
        hash_seed(self)
    }
}

#[cfg(feature = "alloc")]
impl IntoSeed for alloc::string::String {
    #[inline]
    fn into_seed(self) -> i32 {
        hash_seed(&self)
    }
}

#[cfg(feature = "alloc")]
impl IntoSeed for &alloc::string::String {
    #[inline]
    fn into_seed(self) -> i32 {
        hash_seed(self)
    }
}

/// The Mulberry32 random number generator.
///
/// The state is a single `i32`. Each draw advances it by `0x6D2B79F5` with
/// wrapping arithmetic, then mixes a copy of it through two
/// xorshift-multiply rounds to produce one `u32`. All arithmetic is 32-bit
/// with wraparound; multiplications keep the low 32 bits of the product.
///
/// The period is 2<sup>32</sup> and every state is valid, including zero.
///
/// This generator is not suitable for cryptography, and a single instance
/// must not be shared between threads without external locking.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mulberry32 {
    seed: i32,
}

impl Mulberry32 {
    /// Construct a generator from an integer or text seed.
    ///
    /// ```
    /// use rand_mulberry::Mulberry32;
    ///
    /// let a = Mulberry32::new(-7);
    /// let b = Mulberry32::new("my world");
    /// # let _ = (a, b);
    /// ```
    #[inline]
    pub fn new<S: IntoSeed>(seed: S) -> Self {
        Mulberry32 {
            seed: seed.into_seed(),
        }
    }

    /// Replace the state, using the same conversion as [`Mulberry32::new`].
    #[inline]
    pub fn set_seed<S: IntoSeed>(&mut self, seed: S) {
        self.seed = seed.into_seed();
    }

    /// The current state.
    ///
    /// A generator rebuilt with `Mulberry32::new(rng.seed())` continues the
    /// exact sequence of `rng`.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Jump ahead by `delta` draws.
    ///
    /// Equivalent to calling [`RngCore::next_u32`] `delta` times and
    /// discarding the results, in constant time.
    #[inline]
    pub fn advance(&mut self, delta: u32) {
        self.seed = self.seed.wrapping_add(INCREMENT.wrapping_mul(delta as i32));
    }

    /// Draw a float uniformly from `[0, 1)`.
    ///
    /// The result is the next 32-bit output divided by 2<sup>32</sup>, so it
    /// takes one of 2<sup>32</sup> evenly spaced values. Identical to
    /// [`Rng::draw`](crate::Rng::draw).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        crate::rng::unit_f64(self.next_u32())
    }
}

impl RngCore for Mulberry32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.seed = self.seed.wrapping_add(INCREMENT);
        let mut t = self.seed as u32;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    /// The seed is the state as a little-endian `i32`.
    #[inline]
    fn from_seed(seed: Self::Seed) -> Self {
        Mulberry32::new(i32::from_le_bytes(seed))
    }

    /// Seed from the low 32 bits of `state`.
    ///
    /// Mulberry32 has no state to spread the bits over, so unlike most
    /// generators this does not hash its input: `seed_from_u64(n)` matches
    /// `Mulberry32::new(n as u32)`.
    #[inline]
    fn seed_from_u64(state: u64) -> Self {
        Mulberry32::new(state as u32)
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Mulberry32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mulberry32 {{}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mulberry32_true_values() {
        let mut rng = Mulberry32::new(12345);
        let mut results = [0u32; 6];
        for x in results.iter_mut() {
            *x = rng.next_u32();
        }
        let expected: [u32; 6] = [
            4207900869, 1317490944, 2079646450, 3513001552, 2187978186, 1492380277,
        ];
        assert_eq!(results, expected);

        let mut rng = Mulberry32::new(0);
        let mut results = [0u32; 4];
        for x in results.iter_mut() {
            *x = rng.next_u32();
        }
        assert_eq!(results, [1144304738, 1416247, 958946056, 627933444]);

        let mut rng = Mulberry32::new(-1);
        let mut results = [0u32; 4];
        for x in results.iter_mut() {
            *x = rng.next_u32();
        }
        assert_eq!(results, [3850105811, 813802916, 3073704848, 4054706436]);
    }

    #[test]
    fn test_mulberry32_next_f64() {
        let mut rng = Mulberry32::new(12345);
        assert_eq!(rng.next_f64(), 0.9797282677609473);
        assert_eq!(rng.next_f64(), 0.3067522644996643);
        assert_eq!(rng.next_f64(), 0.484205421525985);
    }

    #[test]
    fn test_hash_seed() {
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("abc123"), -1424436592);
        assert_eq!(hash_seed("xyz789"), -744033985);
        assert_eq!(hash_seed("hello world"), 1794106052);
        // Outside the BMP: hashed as a surrogate pair.
        assert_eq!(hash_seed("\u{1F600}"), 1772899);
    }

    #[test]
    fn test_text_seed() {
        let mut rng = Mulberry32::new("abc123");
        assert_eq!(rng.seed(), -1424436592);
        let mut results = [0u32; 4];
        for x in results.iter_mut() {
            *x = rng.next_u32();
        }
        assert_eq!(results, [536018598, 2311420536, 89646315, 1313313418]);

        #[cfg(feature = "alloc")]
        {
            let owned = alloc::string::String::from("abc123");
            assert_eq!(Mulberry32::new(&owned), Mulberry32::new("abc123"));
            assert_eq!(Mulberry32::new(owned), Mulberry32::new("abc123"));
        }
    }

    #[test]
    fn test_set_seed() {
        let mut rng = Mulberry32::new(1);
        rng.next_u32();
        rng.set_seed(12345);
        assert_eq!(rng, Mulberry32::new(12345));
        assert_eq!(rng.next_u32(), 4207900869);

        rng.set_seed("abc123");
        assert_eq!(rng.seed(), hash_seed("abc123"));
    }

    #[test]
    fn test_advance() {
        for seed in -10..10 {
            let mut rng1 = Mulberry32::new(seed);
            let mut rng2 = rng1.clone();
            for _ in 0..20 {
                rng1.next_u32();
            }
            rng2.advance(20);
            assert_eq!(rng1, rng2);
        }

        let mut rng = Mulberry32::new(12345);
        rng.advance(20);
        assert_eq!(rng.seed(), -2023377059);
        assert_eq!(rng.next_u32(), 2776561593);
    }

    #[test]
    fn test_construction() {
        let rng = Mulberry32::from_seed(12345i32.to_le_bytes());
        assert_eq!(rng, Mulberry32::new(12345));

        let rng = Mulberry32::seed_from_u64(12345);
        assert_eq!(rng, Mulberry32::new(12345));

        // Only the low 32 bits are used.
        let rng = Mulberry32::seed_from_u64(0xFFFF_FFFF_0000_0001);
        assert_eq!(rng, Mulberry32::new(1));

        assert_eq!(Mulberry32::new(u32::MAX), Mulberry32::new(-1));
    }

    #[test]
    fn test_next_u64_and_bytes() {
        let mut rng = Mulberry32::new(12345);
        let x = rng.next_u64();
        assert_eq!(x, (1317490944u64 << 32) | 4207900869);

        let mut rng = Mulberry32::new(12345);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);
        let w0 = 4207900869u32.to_le_bytes();
        let w1 = 1317490944u32.to_le_bytes();
        assert_eq!(buf, [w0[0], w0[1], w0[2], w0[3], w1[0], w1[1]]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_debug_hides_state() {
        let rng = Mulberry32::new(12345);
        assert_eq!(alloc::format!("{:?}", rng), "Mulberry32 {}");
    }
}
