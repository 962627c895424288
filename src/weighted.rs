// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weighted selection

use crate::{Error, Rng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value paired with its selection weight, for [`Rng::weighted`].
///
/// Selection sums the weights of all entries into a ceiling `c`, draws an
/// integer `r` from `[0, c]` (for fractional `c`, `floor(draw() * (c + 1))`),
/// then walks the entries in order subtracting each weight from `r`. The
/// first entry that brings `r` to zero or below is chosen.
///
/// With integer weights an entry of weight `w` is therefore chosen with
/// probability about `w / (c + 1)`, except that the first entry also
/// receives the draw `r = 0`. A zero-weight entry is only chosen when the
/// draw is `0` and every entry before it also has zero weight.
///
/// ```
/// use rand_mulberry::{Mulberry32, Rng, WeightedEntry};
///
/// let table = [
///     WeightedEntry::new(3.0, 'a'),
///     WeightedEntry::new(1.0, 'b'),
///     (0.5, 'c').into(),
/// ];
/// let mut rng = Mulberry32::new("weights");
/// let pick = rng.weighted(&table).unwrap();
/// assert!(['a', 'b', 'c'].contains(pick));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedEntry<T> {
    /// Relative likelihood; must be finite and non-negative.
    pub weight: f64,
    /// The payload returned when this entry is chosen.
    pub value: T,
}

impl<T> WeightedEntry<T> {
    /// Pair `value` with `weight`.
    #[inline]
    pub const fn new(weight: f64, value: T) -> Self {
        WeightedEntry { weight, value }
    }
}

impl<T> From<(f64, T)> for WeightedEntry<T> {
    #[inline]
    fn from((weight, value): (f64, T)) -> Self {
        WeightedEntry::new(weight, value)
    }
}

// `floor` lives in `std`; for non-negative input this is equivalent.
#[inline]
fn floor_non_negative(x: f64) -> f64 {
    x - x % 1.0
}

pub(crate) fn select<'a, R, T>(rng: &mut R, entries: &'a [WeightedEntry<T>]) -> Result<&'a T, Error>
where
    R: Rng + ?Sized,
{
    match entries {
        [] => {
            trace!("weighted: no entries");
            return Err(Error::WeightedSelectionExhausted);
        }
        [only] => return Ok(&only.value),
        _ => {}
    }

    let mut ceiling = 0.0;
    for entry in entries {
        if !(entry.weight >= 0.0 && entry.weight.is_finite()) {
            trace!("weighted: invalid weight {}", entry.weight);
            return Err(Error::InvalidWeight);
        }
        ceiling += entry.weight;
    }

    let mut remaining = floor_non_negative(rng.draw() * (ceiling + 1.0));
    for entry in entries {
        remaining -= entry.weight;
        if remaining <= 0.0 {
            return Ok(&entry.value);
        }
    }

    // Only reachable when the weight sum overflows or rounds away.
    trace!("weighted: draw exceeded {} entries", entries.len());
    Err(Error::WeightedSelectionExhausted)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::rng;
    use crate::Mulberry32;

    fn loot() -> [WeightedEntry<&'static str>; 2] {
        [
            WeightedEntry::new(100.0, "common"),
            WeightedEntry::new(1.0, "rare"),
        ]
    }

    #[test]
    fn test_weighted_value_stability() {
        let table = loot();
        for _ in 0..10 {
            assert_eq!(rng(12345).weighted(&table), Ok(&"common"));
        }
    }

    #[test]
    fn test_weighted_distribution() {
        let table = loot();
        let mut common = 0;
        for seed in 0..10_000 {
            if *rng(seed).weighted(&table).unwrap() == "common" {
                common += 1;
            }
        }
        // Expected 100/101 of 10000, about 9901.
        assert!((9800..=9960).contains(&common), "common: {}", common);

        let weights = [1.0, 2.0, 3.0, 0.0, 5.0, 6.0, 7.0, 1.0, 2.0, 3.0, 4.0];
        let table: [WeightedEntry<usize>; 11] =
            core::array::from_fn(|i| WeightedEntry::new(weights[i], i));
        let ceiling: f64 = weights.iter().sum();
        let mut r = rng(406);
        let mut counts = [0u32; 11];
        const N_REPS: u32 = 35_000;
        for _ in 0..N_REPS {
            counts[*r.weighted(&table).unwrap()] += 1;
        }
        assert_eq!(counts[3], 0);
        for (i, &count) in counts.iter().enumerate() {
            // The first entry also owns the zero draw.
            let share = if i == 0 { weights[i] + 1.0 } else { weights[i] };
            let exp = share * N_REPS as f64 / (ceiling + 1.0);
            if exp > 0.0 {
                let err = (count as f64 - exp).abs() / exp;
                assert!(err <= 0.15, "entry {}: {} vs {}", i, count, exp);
            }
        }
    }

    #[test]
    fn test_weighted_single_entry() {
        let mut r = rng(12345);
        let only = [WeightedEntry::new(0.0, 'x')];
        assert_eq!(r.weighted(&only), Ok(&'x'));
        assert_eq!(r, Mulberry32::new(12345));
    }

    #[test]
    fn test_weighted_errors() {
        let mut r = rng(12345);
        let empty: [WeightedEntry<u8>; 0] = [];
        assert_eq!(r.weighted(&empty), Err(Error::WeightedSelectionExhausted));

        let negative = [WeightedEntry::new(1.0, 0), WeightedEntry::new(-1.0, 1)];
        assert_eq!(r.weighted(&negative), Err(Error::InvalidWeight));
        let nan = [WeightedEntry::new(f64::NAN, 0), WeightedEntry::new(1.0, 1)];
        assert_eq!(r.weighted(&nan), Err(Error::InvalidWeight));
        let inf = [WeightedEntry::new(f64::INFINITY, 0), WeightedEntry::new(1.0, 1)];
        assert_eq!(r.weighted(&inf), Err(Error::InvalidWeight));

        assert_eq!(r, Mulberry32::new(12345));
    }

    #[test]
    fn test_weighted_zero_weights() {
        let mut r = rng(7);
        let zeros = [WeightedEntry::new(0.0, 'a'), WeightedEntry::new(0.0, 'b')];
        for _ in 0..100 {
            assert_eq!(r.weighted(&zeros), Ok(&'a'));
        }

        let skip = [
            WeightedEntry::new(0.0, 'a'),
            WeightedEntry::new(0.0, 'b'),
            WeightedEntry::new(4.0, 'c'),
        ];
        for _ in 0..100 {
            let pick = *r.weighted(&skip).unwrap();
            assert!(pick == 'a' || pick == 'c');
        }
    }

    #[test]
    fn test_entry_from_tuple() {
        let entry: WeightedEntry<&str> = (2.5, "x").into();
        assert_eq!(entry, WeightedEntry::new(2.5, "x"));
        assert_eq!(entry.weight, 2.5);
        assert_eq!(entry.value, "x");
    }

    #[test]
    fn test_floor_non_negative() {
        assert_eq!(floor_non_negative(0.0), 0.0);
        assert_eq!(floor_non_negative(0.999), 0.0);
        assert_eq!(floor_non_negative(98.97), 98.0);
        assert_eq!(floor_non_negative(4294967296.5), 4294967296.0);
    }
}
