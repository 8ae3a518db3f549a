/*
lib.rs

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

//! Word search puzzle generator.
//!
//! Given a grid size, a list of words, and placement options, the generator returns a grid
//! filled with letters, the position of each hidden word, and a set of distractors: decoy
//! words that differ from a real word by one letter.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordsearch::{GeneratorConfig, generate_with_rng};
//!
//! let config = GeneratorConfig::with_words(&["apple", "banana", "cherry"]);
//! let mut rng = StdRng::seed_from_u64(7);
//! let puzzle = generate_with_rng(&config, &mut rng).unwrap();
//! assert_eq!(puzzle.grid().rows().len(), 15);
//! ```

pub mod config;
pub mod generator;
pub mod random;
pub mod render;
pub mod solution;

pub use config::{GeneratorConfig, ValidatedConfig, ValidationError};
pub use generator::puzzle::GeneratedPuzzle;
pub use generator::word_location::WordLocation;
pub use generator::{generate, generate_validated, generate_with_rng};
