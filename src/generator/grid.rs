/*
grid.rs

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

//! Letter grid.
//!
//! The grid is stored as a single buffer of ASCII codes, row after row.
//! `0` marks an empty cell, `b'A'` to `b'Z'` a letter.
//! Walking a word is a matter of adding `dy * width + dx` to the cell index.

use serde::ser::{Serialize, Serializer};
use std::fmt;

use super::word_location::WordLocation;
use crate::random::RandomSource;

/// Code of an empty cell.
pub const EMPTY: u8 = 0;

/// Letter grid.
///
/// Only the generator modifies the grid. Once returned in a
/// [`super::puzzle::GeneratedPuzzle`], the grid is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the index of the cell in the buffer.
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Return the code at the given buffer index.
    pub(crate) fn code(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Set the code at the given buffer index.
    pub(crate) fn set_code(&mut self, index: usize, code: u8) {
        self.cells[index] = code;
    }

    /// Return the letter in the given cell, or None if the cell is empty or outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        match self.cells[self.index(x, y)] {
            EMPTY => None,
            c => Some(c as char),
        }
    }

    /// Number of empty cells.
    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }

    /// Put a random letter in every empty cell and return how many cells were filled.
    pub(crate) fn fill_empty<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut filled: usize = 0;
        for c in self.cells.iter_mut().filter(|c| **c == EMPTY) {
            *c = rng.random_letter();
            filled += 1;
        }
        filled
    }

    /// Return the rows as strings. Empty cells are shown as spaces.
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&c| if c == EMPTY { ' ' } else { c as char })
                    .collect()
            })
            .collect()
    }

    /// Return the letters found along the location.
    ///
    /// Cells outside the grid are skipped and empty cells are read as spaces.
    pub fn read(&self, location: &WordLocation) -> String {
        location
            .cells()
            .into_iter()
            .filter(|&(x, y)| x < self.width && y < self.height)
            .map(|(x, y)| self.get(x, y).unwrap_or(' '))
            .collect()
    }
}

/// The grid serializes as a list of row strings.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::directions::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_empty() {
        let grid: Grid = Grid::new(6, 5);
        assert_eq!(grid.num_empty(), 30);
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(6, 0), None);
        assert_eq!(grid.rows(), vec!["      "; 5]);
    }

    #[test]
    fn fill_only_touches_empty_cells() {
        let mut grid: Grid = Grid::new(5, 5);
        let i: usize = grid.index(2, 3);
        grid.set_code(i, b'Q');
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        assert_eq!(grid.fill_empty(&mut rng), 24);
        assert_eq!(grid.num_empty(), 0);
        assert_eq!(grid.get(2, 3), Some('Q'));
        assert!(
            grid.rows()
                .iter()
                .all(|r| r.len() == 5 && r.chars().all(|c| c.is_ascii_uppercase()))
        );
    }

    #[test]
    fn read_location() {
        let mut grid: Grid = Grid::new(5, 5);
        for (i, letter) in b"OWL".iter().enumerate() {
            let index: usize = grid.index(4 - i, 0);
            grid.set_code(index, *letter);
        }
        let loc: WordLocation = WordLocation::new("OWL", 4, 0, Direction::Left);
        assert_eq!(grid.read(&loc), "OWL");
        assert_eq!(grid.code(grid.index(2, 0)), b'L');
    }

    #[test]
    fn serializes_as_rows() {
        let mut grid: Grid = Grid::new(5, 5);
        let mut rng: StdRng = StdRng::seed_from_u64(8);
        grid.fill_empty(&mut rng);
        let json: serde_json::Value = serde_json::to_value(&grid).unwrap();
        let rows: &Vec<serde_json::Value> = json.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].as_str().unwrap(), grid.rows()[0]);
    }
}
