/*
solution.rs

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

//! Look up the words of a generated puzzle by cell, and track the words a player has found.
//!
//! [`SolutionIndex`] precomputes, for every cell, the placed words that go through it.
//! Without it, finding the word under a cell requires walking every placed word.
//!
//! [`FoundWords`] keeps the list of the words that the player has found so far by selecting a
//! line of cells.

use log::debug;
use std::collections::HashSet;

use crate::generator::puzzle::GeneratedPuzzle;

/// Cell to word index.
#[derive(Debug, Clone)]
pub struct SolutionIndex {
    width: usize,
    height: usize,

    /// For each cell, row after row, the indexes of the placed words that cover it.
    cells: Vec<Vec<usize>>,
}

impl SolutionIndex {
    /// Build the index for the placed (real) words of the puzzle. Distractors are ignored.
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        let width: usize = puzzle.grid().width();
        let height: usize = puzzle.grid().height();
        let mut cells: Vec<Vec<usize>> = vec![Vec::new(); width * height];

        for (i, word) in puzzle.placed_words().iter().enumerate() {
            for (x, y) in word.cells() {
                if x < width && y < height {
                    cells[y * width + x].push(i);
                }
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Return the indexes, in [`GeneratedPuzzle::placed_words`], of the words that go through
    /// the cell.
    pub fn words_at(&self, x: usize, y: usize) -> &[usize] {
        if x >= self.width || y >= self.height {
            return &[];
        }
        &self.cells[y * self.width + x]
    }

    /// Whether the cell belongs to a placed word. Used to draw the answer key.
    pub fn is_solution_cell(&self, x: usize, y: usize) -> bool {
        !self.words_at(x, y).is_empty()
    }
}

/// Words found by the player.
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    found: HashSet<usize>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a selection from `start` to `end`.
    ///
    /// If the selection matches a placed word that was not found yet, in either direction, the
    /// word is marked as found and returned.
    pub fn select<'a>(
        &mut self,
        puzzle: &'a GeneratedPuzzle,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Option<&'a str> {
        let (i, word) = puzzle
            .placed_words()
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.found.contains(i))
            .find(|(_, w)| w.matches_selection(start, end))?;
        self.found.insert(i);
        debug!(
            "Found {} ({} of {})",
            word.word,
            self.found.len(),
            puzzle.placed_words().len()
        );
        Some(word.word.as_str())
    }

    /// Whether the placed word at the given index has been found.
    pub fn is_found(&self, index: usize) -> bool {
        self.found.contains(&index)
    }

    /// Number of words found.
    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Whether all the placed words have been found.
    pub fn is_done(&self, puzzle: &GeneratedPuzzle) -> bool {
        self.found.len() == puzzle.placed_words().len()
    }

    /// Forget all the found words.
    pub fn clear(&mut self) {
        self.found.clear();
    }
}
