/*
generator.rs

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

//! Generate word search puzzles.
//!
//! Generation runs in three steps, all in a single call to [`generate_with_rng`]:
//!
//! * The configuration is validated by [`crate::config::GeneratorConfig::validate`].
//!   An invalid configuration stops the generation with a
//!   [`crate::config::ValidationError`].
//!
//! * The words are placed in an empty grid by a [`placement::Placement`] object, longest word
//!   first. The allowed directions come from [`directions::enumerate`].
//!   Then [`distractors::place_distractors`] adds decoy words derived from the real words.
//!   A word that cannot be placed is not an error: it is just missing from
//!   [`puzzle::GeneratedPuzzle::placed_words`].
//!
//! * The remaining empty cells receive random letters.
//!
//! Each call owns its grid and draws from the random source it is given; no state is shared
//! between calls. With the same seeded source and configuration, two calls return the same
//! puzzle.

pub mod directions;
pub mod distractors;
pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod word_location;

use log::{Level, debug, info, log_enabled, warn};
use std::time::Instant;

use crate::config::{GeneratorConfig, ValidatedConfig, ValidationError};
use crate::random::RandomSource;

/// Generate a puzzle with the thread-local random generator.
///
/// # Errors
///
/// The function returns an error if the configuration is not valid.
pub fn generate(config: &GeneratorConfig) -> Result<puzzle::GeneratedPuzzle, ValidationError> {
    generate_with_rng(config, &mut rand::rng())
}

/// Generate a puzzle with the given random source.
///
/// # Errors
///
/// The function returns an error if the configuration is not valid.
pub fn generate_with_rng<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<puzzle::GeneratedPuzzle, ValidationError> {
    let config: ValidatedConfig = config.validate()?;
    Ok(generate_validated(&config, rng))
}

/// Generate a puzzle from an already validated configuration.
pub fn generate_validated<R: RandomSource + ?Sized>(
    config: &ValidatedConfig,
    rng: &mut R,
) -> puzzle::GeneratedPuzzle {
    let start: Instant = Instant::now();
    let directions: Vec<directions::Direction> =
        directions::enumerate(config.allow_backwards(), config.allow_diagonals());
    debug!(
        "Grid {}x{}  directions = {directions:?}",
        config.width(),
        config.height()
    );

    let mut placement: placement::Placement =
        placement::Placement::new(config.width(), config.height(), directions);

    // Longest words first. The sort is stable: words of the same length keep their order.
    let mut words: Vec<&String> = config.words().iter().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut placed_words: Vec<word_location::WordLocation> = Vec::with_capacity(words.len());
    for word in words {
        if let Some(location) = placement.place(word, rng) {
            placed_words.push(location);
        }
    }
    if placed_words.len() < config.words().len() {
        warn!(
            "{} of {} words could not be placed",
            config.words().len() - placed_words.len(),
            config.words().len()
        );
    }

    let distractors: Vec<word_location::WordLocation> = distractors::place_distractors(
        config.words(),
        config.difficulty(),
        &mut placement,
        rng,
    );

    let mut grid: grid::Grid = placement.into_grid();
    let filled: usize = grid.fill_empty(rng);

    if log_enabled!(Level::Debug) {
        debug!("Filled {filled} empty cells");
        for row in grid.rows() {
            debug!("    {row}");
        }
    }
    info!(
        "Generated {}x{} puzzle: {} words, {} distractors in {}s",
        grid.width(),
        grid.height(),
        placed_words.len(),
        distractors.len(),
        start.elapsed().as_secs_f32()
    );
    puzzle::GeneratedPuzzle::new(grid, placed_words, distractors)
}
