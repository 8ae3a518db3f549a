/*
distractors.rs

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

//! Generate distractors.
//!
//! A distractor is a copy of one of the real words with a single letter changed.
//! It is placed in the grid like the real words, so that a player looking for the real word
//! can lock onto the near match.
//! The number of distractors grows with the difficulty level.

use log::debug;

use super::placement::Placement;
use super::word_location::WordLocation;
use crate::random::RandomSource;

/// Shortest word that can be used as a distractor source.
pub const MIN_SOURCE_LENGTH: usize = 3;

/// Number of distractors to try for the given number of words and difficulty level.
///
/// This is `ceil(word_count * difficulty / 3)`.
pub fn distractor_count(word_count: usize, difficulty: u8) -> usize {
    (word_count * difficulty as usize).div_ceil(3)
}

/// Return a copy of `source` with one letter replaced by a different random letter.
///
/// `source` must be cleaned (uppercase letters only) and not empty.
pub fn mutate<R: RandomSource + ?Sized>(source: &str, rng: &mut R) -> String {
    let mut letters: Vec<u8> = source.as_bytes().to_vec();
    let i: usize = rng.random_int(0, letters.len());
    let original: u8 = letters[i];

    // Draw among the 25 other letters: skip over the original one
    let mut letter: u8 = b'A' + rng.random_int(0, 25) as u8;
    if letter >= original {
        letter += 1;
    }
    letters[i] = letter;
    letters.into_iter().map(char::from).collect()
}

/// Generate the distractors and place them in the grid.
///
/// Only the words with at least [`MIN_SOURCE_LENGTH`] letters are used as sources.
/// Distractors that cannot be placed are dropped.
pub fn place_distractors<R: RandomSource + ?Sized>(
    words: &[String],
    difficulty: u8,
    placement: &mut Placement,
    rng: &mut R,
) -> Vec<WordLocation> {
    let count: usize = distractor_count(words.len(), difficulty);
    let sources: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| w.len() >= MIN_SOURCE_LENGTH)
        .collect();

    debug!(
        "Distractors: {count} to try from {} source words",
        sources.len()
    );
    if sources.is_empty() {
        return Vec::new();
    }

    let mut distractors: Vec<WordLocation> = Vec::with_capacity(count);
    for _ in 0..count {
        let source: &str = sources[rng.random_int(0, sources.len())];
        let decoy: String = mutate(source, rng);
        match placement.place(&decoy, rng) {
            Some(location) => distractors.push(location),
            None => debug!("Distractor {decoy} (from {source}) dropped"),
        }
    }
    distractors
}
