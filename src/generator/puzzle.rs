/*
puzzle.rs

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

//! Generated puzzle.

use serde::Serialize;

use super::grid::Grid;
use super::word_location::WordLocation;
use crate::config::ValidatedConfig;

/// Result of a generation: the filled grid and the position of the words.
///
/// The object is never modified after the generator returns it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPuzzle {
    grid: Grid,
    placed_words: Vec<WordLocation>,
    distractors: Vec<WordLocation>,
}

impl GeneratedPuzzle {
    pub(crate) fn new(
        grid: Grid,
        placed_words: Vec<WordLocation>,
        distractors: Vec<WordLocation>,
    ) -> Self {
        Self {
            grid,
            placed_words,
            distractors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Real words that made it to the grid, longest first.
    pub fn placed_words(&self) -> &[WordLocation] {
        &self.placed_words
    }

    /// Decoy words that made it to the grid.
    pub fn distractors(&self) -> &[WordLocation] {
        &self.distractors
    }

    /// Return the words of the configuration that could not be placed, in configuration order.
    pub fn missing_words<'a>(&self, config: &'a ValidatedConfig) -> Vec<&'a str> {
        config
            .words()
            .iter()
            .filter(|w| !self.placed_words.iter().any(|p| &p.word == *w))
            .map(String::as_str)
            .collect()
    }

    /// Whether all the words of the configuration were placed.
    pub fn is_complete(&self, config: &ValidatedConfig) -> bool {
        self.placed_words.len() == config.words().len()
    }

    /// Return the placed word that the selection from `start` to `end` covers, in either
    /// direction.
    pub fn find_selection(
        &self,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Option<&WordLocation> {
        self.placed_words
            .iter()
            .find(|w| w.matches_selection(start, end))
    }
}
