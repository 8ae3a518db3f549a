/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line is a diagnostic driver for the generator: it prints a generated grid, and
//! optionally its answer key, the word positions, or the whole puzzle in JSON.
//!
//! # Examples
//!
//! Generate a 10x10 puzzle without backwards words:
//!
//! ```
//! $ wordsearch --width 10 --height 10 --backwards false lion tiger bear
//! ```
//!
//! Generate the same puzzle again, with its answer key:
//!
//! ```
//! $ wordsearch -s 42 -k "lion, tiger, bear"
//! ```
//!
//! Read the configuration from a file and print the puzzle in JSON:
//!
//! ```
//! $ cat zoo.json
//! {"width": 12, "height": 12, "words": ["lion", "tiger"], "difficulty": 8}
//! $ wordsearch --config zoo.json --json
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use wordsearch::config::{self, GeneratorConfig, ValidatedConfig};
use wordsearch::generator;
use wordsearch::generator::puzzle::GeneratedPuzzle;
use wordsearch::render;

/// Generate word search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Words to hide. Each argument can hold several words separated by commas or new lines
    words: Vec<String>,

    /// Number of columns
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    width: i64,

    /// Number of rows
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    height: i64,

    /// Allow words written backwards
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    backwards: bool,

    /// Allow words written diagonally
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    diagonals: bool,

    /// Difficulty level, from 0 (no distractors) to 10
    #[arg(short = 'f', long, default_value_t = 5, allow_negative_numbers = true)]
    difficulty: i64,

    /// JSON configuration file. Replaces the words and the grid options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random generator, to reproduce a puzzle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the answer key and the word positions
    #[arg(short = 'k', long, default_value_t = false)]
    answers: bool,

    /// Print the puzzles in JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the configuration from the file or from the options.
    fn generator_config(&self) -> Result<GeneratorConfig, String> {
        if let Some(path) = &self.config {
            return GeneratorConfig::from_file(path)
                .map_err(|e| format!("Cannot read the configuration file {path:?}: {e}"));
        }
        Ok(GeneratorConfig {
            width: self.width,
            height: self.height,
            words: self
                .words
                .iter()
                .flat_map(|w| config::parse_word_list(w))
                .collect(),
            allow_backwards: self.backwards,
            allow_diagonals: self.diagonals,
            difficulty: self.difficulty,
        })
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let raw_config: GeneratorConfig = match args.generator_config() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };

    let config: ValidatedConfig = match raw_config.validate() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration:");
            for v in e.violations() {
                eprintln!("    {}: {}", v.field, v.message);
            }
            return 1;
        }
    };
    debug!("Configuration: {config:?}");

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut shortfalls: usize = 0;
    let mut distractors: usize = 0;
    let mut puzzles: Vec<GeneratedPuzzle> = Vec::with_capacity(args.count);

    for i in 0..args.count {
        debug!("Puzzle {i}");
        let start: Instant = Instant::now();
        let puzzle: GeneratedPuzzle = generator::generate_validated(&config, &mut rng);
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }
        distractors += puzzle.distractors().len();

        let missing: Vec<&str> = puzzle.missing_words(&config);
        if !missing.is_empty() {
            shortfalls += 1;
            eprintln!(
                "Warning: some words could not be placed, enlarge the grid: {}",
                missing.join(", ")
            );
        }

        if args.json {
            puzzles.push(puzzle);
            continue;
        }

        if i > 0 {
            println!();
        }
        print!("{}", render::grid_text(puzzle.grid()));
        if args.answers {
            println!();
            print!("{}", render::answer_key_text(&puzzle));
            println!();
            print!("{}", render::word_list_text(&puzzle));
        }
    }

    if args.json {
        let out: Result<String, serde_json::Error> = match puzzles.as_slice() {
            [puzzle] => serde_json::to_string_pretty(puzzle),
            list => serde_json::to_string_pretty(list),
        };
        match out {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzle: {e}");
                return 1;
            }
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average distractors = {}
   incomplete grids = {}",
            total,
            total / args.count as f32,
            max,
            distractors as f32 / args.count as f32,
            shortfalls
        );
    }
    0
}
