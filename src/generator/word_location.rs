/*
word_location.rs

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

//! Position of a word in the grid.

use serde::{Deserialize, Serialize};

use super::directions::Direction;

/// A word written as a straight line in the grid.
///
/// The start and end coordinates are the cells of the first and the last letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordLocation {
    /// Cleaned word: uppercase letters only.
    pub word: String,
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: usize,
    pub end_y: usize,
}

impl WordLocation {
    /// Create the location of `word` written from `(x, y)` along `direction`.
    ///
    /// The caller ensures that the whole word fits in the grid.
    pub fn new(word: &str, x: usize, y: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.step();
        let span: isize = word.len() as isize - 1;
        Self {
            word: word.to_string(),
            start_x: x,
            start_y: y,
            end_x: (x as isize + span * dx) as usize,
            end_y: (y as isize + span * dy) as usize,
        }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Return the writing direction, or None for a single-letter word.
    pub fn direction(&self) -> Option<Direction> {
        let dx: isize = (self.end_x as isize - self.start_x as isize).signum();
        let dy: isize = (self.end_y as isize - self.start_y as isize).signum();
        Direction::from_step(dx, dy)
    }

    /// Return the cells from the first letter to the last one.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dx, dy) = self.direction().map_or((0, 0), Direction::step);
        let steps: usize = self
            .start_x
            .abs_diff(self.end_x)
            .max(self.start_y.abs_diff(self.end_y));
        (0..=steps)
            .map(|i| {
                (
                    (self.start_x as isize + i as isize * dx) as usize,
                    (self.start_y as isize + i as isize * dy) as usize,
                )
            })
            .collect()
    }

    /// Whether the word goes through the given cell.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells().contains(&(x, y))
    }

    /// Whether a selection from `start` to `end` covers exactly this word, in either direction.
    pub fn matches_selection(&self, start: (usize, usize), end: (usize, usize)) -> bool {
        let first: (usize, usize) = (self.start_x, self.start_y);
        let last: (usize, usize) = (self.end_x, self.end_y);
        (start == first && end == last) || (start == last && end == first)
    }
}
