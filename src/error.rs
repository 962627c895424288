// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned by the sampling methods of [`Rng`](crate::Rng).
///
/// Every error is detected before the generator is advanced, so a failed
/// call leaves the generator state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input sequence is empty but at least one element is required.
    EmptyInput,
    /// More elements were requested than the input sequence holds.
    InvalidCount,
    /// `max < min` for a bounded integer range.
    InvalidRange,
    /// A weight is negative or not finite.
    InvalidWeight,
    /// Weighted selection walked every entry without a match.
    ///
    /// With valid weights this only happens for an empty entry list.
    WeightedSelectionExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Error::EmptyInput => "Input sequence is empty",
            Error::InvalidCount => "Requested more items than the sequence holds",
            Error::InvalidRange => "Range is empty: max < min",
            Error::InvalidWeight => "A weight is negative or not a valid number",
            Error::WeightedSelectionExhausted => "Weighted selection found no entry",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
