/*
placement.rs

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

//! Place words in the grid.
//!
//! [`Placement`] owns the grid while the words are placed.
//! For each word, a random direction is selected among the directions that can hold the word,
//! then a random start cell in the valid range for that direction.
//! The word is written if every cell on its path is empty or already holds the same letter.
//! Otherwise another random position is tried, up to [`MAX_ATTEMPTS`] times.

use log::{Level, debug, log_enabled};

use super::directions::{Candidate, Candidates, Direction};
use super::grid::{EMPTY, Grid};
use super::word_location::WordLocation;
use crate::random::RandomSource;

/// Number of random positions tried for a word before giving up.
pub const MAX_ATTEMPTS: usize = 100;

/// Word placement engine.
#[derive(Debug)]
pub struct Placement {
    grid: Grid,
    candidates: Candidates,

    /// Number of attempts it took for the last placed word.
    pub attempts: usize,
}

impl Placement {
    /// Create the object with an empty grid.
    pub fn new(width: usize, height: usize, directions: Vec<Direction>) -> Self {
        Self {
            grid: Grid::new(width, height),
            candidates: Candidates::new(directions, width, height),
            attempts: 0,
        }
    }

    /// Return a reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Stop placing words and return the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Try to place the word and return its location.
    ///
    /// The word must be cleaned (uppercase letters only).
    /// Return None if the word does not fit in any direction, or if no compatible position was
    /// found in [`MAX_ATTEMPTS`] attempts. In that case, the grid is not modified.
    pub fn place<R: RandomSource + ?Sized>(
        &mut self,
        word: &str,
        rng: &mut R,
    ) -> Option<WordLocation> {
        self.attempts = 0;
        let letters: &[u8] = word.as_bytes();
        if letters.is_empty() {
            return None;
        }

        let candidates: Vec<Candidate> = self.candidates.get(letters.len()).to_vec();
        if candidates.is_empty() {
            debug!("{word}: too long for the grid");
            return None;
        }

        while self.attempts < MAX_ATTEMPTS {
            self.attempts += 1;
            let c: &Candidate = &candidates[rng.random_int(0, candidates.len())];
            let x: usize = rng.random_int(c.min_x, c.max_x + 1);
            let y: usize = rng.random_int(c.min_y, c.max_y + 1);

            if self.fits(letters, x, y, c.direction) {
                self.write(letters, x, y, c.direction);
                let location: WordLocation = WordLocation::new(word, x, y, c.direction);
                debug!(
                    "{word}: placed at ({x}, {y}) going {} after {} attempts",
                    c.direction, self.attempts
                );
                return Some(location);
            }
        }
        debug!("{word}: no room after {MAX_ATTEMPTS} attempts");
        if log_enabled!(Level::Debug) {
            debug!("{} empty cells left", self.grid.num_empty());
        }
        None
    }

    /// Return the buffer offset between two consecutive letters.
    fn stride(&self, direction: Direction) -> isize {
        let (dx, dy) = direction.step();
        dy * self.grid.width() as isize + dx
    }

    /// Whether every cell along the path is empty or holds the required letter.
    fn fits(&self, letters: &[u8], x: usize, y: usize, direction: Direction) -> bool {
        let stride: isize = self.stride(direction);
        let mut index: isize = self.grid.index(x, y) as isize;
        for &letter in letters {
            let code: u8 = self.grid.code(index as usize);
            if code != EMPTY && code != letter {
                return false;
            }
            index += stride;
        }
        true
    }

    /// Write the letters along the path.
    fn write(&mut self, letters: &[u8], x: usize, y: usize, direction: Direction) {
        let stride: isize = self.stride(direction);
        let mut index: isize = self.grid.index(x, y) as isize;
        for &letter in letters {
            self.grid.set_code(index as usize, letter);
            index += stride;
        }
    }
}
