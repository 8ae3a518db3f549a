/*
render.rs

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

//! Plain-text rendering of a puzzle.
//!
//! The command-line driver uses these functions to print the grid, the answer key, and the list
//! of the hidden words.

use std::fmt::Write;

use crate::generator::grid::Grid;
use crate::generator::puzzle::GeneratedPuzzle;
use crate::solution::SolutionIndex;

/// Character shown in the answer key for the cells that do not belong to a word.
const HIDDEN_CELL: char = '.';

/// Return the grid, one row per line, letters separated by a space.
pub fn grid_text(grid: &Grid) -> String {
    let mut s: String = String::with_capacity(grid.width() * grid.height() * 2);
    for row in grid.rows() {
        let line: Vec<String> = row.chars().map(String::from).collect();
        s.push_str(&line.join(" "));
        s.push('\n');
    }
    s
}

/// Return the answer key: only the letters of the placed words are shown.
pub fn answer_key_text(puzzle: &GeneratedPuzzle) -> String {
    let grid: &Grid = puzzle.grid();
    let index: SolutionIndex = SolutionIndex::new(puzzle);
    let mut s: String = String::with_capacity(grid.width() * grid.height() * 2);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if x > 0 {
                s.push(' ');
            }
            let c: char = if index.is_solution_cell(x, y) {
                grid.get(x, y).unwrap_or(HIDDEN_CELL)
            } else {
                HIDDEN_CELL
            };
            s.push(c);
        }
        s.push('\n');
    }
    s
}

/// Return the list of the placed words with their position and direction.
pub fn word_list_text(puzzle: &GeneratedPuzzle) -> String {
    let mut s: String = String::new();
    for w in puzzle.placed_words() {
        let direction: String = w
            .direction()
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let _ = writeln!(
            s,
            "{:<20} ({}, {}) -> ({}, {})  {direction}",
            w.word, w.start_x, w.start_y, w.end_x, w.end_y
        );
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::generate_with_rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle() -> GeneratedPuzzle {
        let mut rng: StdRng = StdRng::seed_from_u64(51);
        let config: GeneratorConfig = GeneratorConfig {
            width: 8,
            height: 6,
            ..GeneratorConfig::with_words(&["owl", "hawk"])
        };
        generate_with_rng(&config, &mut rng).unwrap()
    }

    #[test]
    fn grid_layout() {
        let p: GeneratedPuzzle = puzzle();
        let text: String = grid_text(p.grid());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        for line in lines {
            assert_eq!(line.len(), 8 * 2 - 1);
            assert!(line.split(' ').all(|l| l.len() == 1));
        }
    }

    #[test]
    fn answer_key_shows_words_only() {
        let p: GeneratedPuzzle = puzzle();
        let key: Vec<Vec<char>> = answer_key_text(&p)
            .lines()
            .map(|l| l.split(' ').filter_map(|c| c.chars().next()).collect())
            .collect();
        assert_eq!(key.len(), 6);
        for w in p.placed_words() {
            for (i, (x, y)) in w.cells().into_iter().enumerate() {
                assert_eq!(key[y][x], w.word.as_bytes()[i] as char);
            }
        }
        let shown: usize = key.iter().flatten().filter(|&&c| c != HIDDEN_CELL).count();
        let letters: usize = p.placed_words().iter().map(|w| w.len()).sum();
        assert!(shown <= letters);
    }

    #[test]
    fn word_list_lines() {
        let p: GeneratedPuzzle = puzzle();
        let text: String = word_list_text(&p);
        assert_eq!(text.lines().count(), p.placed_words().len());
        assert!(text.lines().next().unwrap().starts_with("HAWK"));
    }
}
