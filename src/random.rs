/*
random.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Source of randomness for the generator.
//!
//! The generator never calls a global random function.
//! Every random draw goes through a [`RandomSource`] that the caller provides, so that tests
//! can inject a seeded generator and reproduce a puzzle exactly.
//!
//! Any [`rand::Rng`] is a [`RandomSource`]:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordsearch::random::RandomSource;
//!
//! let mut rng: StdRng = StdRng::seed_from_u64(42);
//! let i: usize = rng.random_int(0, 26);
//! assert!(i < 26);
//! ```

use rand::Rng;

/// Uniform integer source.
pub trait RandomSource {
    /// Return a uniformly distributed integer in `[min, max)`.
    ///
    /// When the range is empty (`min >= max`), `min` is returned.
    fn random_int(&mut self, min: usize, max: usize) -> usize;

    /// Return a uniformly distributed uppercase letter, `A` to `Z`, as an ASCII code.
    fn random_letter(&mut self) -> u8 {
        b'A' + self.random_int(0, 26) as u8
    }
}

impl<R: Rng> RandomSource for R {
    fn random_int(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.random_range(min..max)
    }
}
