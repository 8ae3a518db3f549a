//! Integration tests for the word search generator.
//!
//! These tests go through the public API only: configuration, generation with a seeded random
//! source, and the properties that every generated puzzle must have.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use wordsearch::config::Field;
use wordsearch::generator::distractors::distractor_count;
use wordsearch::{GeneratedPuzzle, GeneratorConfig, WordLocation, generate_with_rng};

/// Helper to build a configuration.
fn config(width: i64, height: i64, words: &[&str], difficulty: i64) -> GeneratorConfig {
    GeneratorConfig {
        width,
        height,
        difficulty,
        ..GeneratorConfig::with_words(words)
    }
}

/// Helper to generate with a seed.
fn generate(config: &GeneratorConfig, seed: u64) -> GeneratedPuzzle {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    generate_with_rng(config, &mut rng).unwrap()
}

/// Check that every location is a straight line inside the grid and spells its word.
fn assert_locations(puzzle: &GeneratedPuzzle, locations: &[WordLocation]) {
    let grid = puzzle.grid();
    for loc in locations {
        let dx: usize = loc.start_x.abs_diff(loc.end_x);
        let dy: usize = loc.start_y.abs_diff(loc.end_y);
        assert!(dx == 0 || dy == 0 || dx == dy, "{loc:?} is not a straight line");
        assert_eq!(dx.max(dy) + 1, loc.word.len(), "{loc:?} has the wrong length");
        assert!(loc.end_x < grid.width() && loc.end_y < grid.height());
        assert_eq!(grid.read(loc), loc.word);
    }
}

#[cfg(test)]
mod grid_shape {
    use super::*;

    #[test]
    fn grid_is_fully_filled() {
        for (seed, (w, h)) in [(5, 5), (15, 15), (50, 7), (9, 50)].into_iter().enumerate() {
            let p: GeneratedPuzzle = generate(&config(w, h, &["apple", "kiwi"], 3), seed as u64);
            let rows: Vec<String> = p.grid().rows();
            assert_eq!(rows.len(), h as usize);
            for row in rows {
                assert_eq!(row.len(), w as usize);
                assert!(row.chars().all(|c| c.is_ascii_uppercase()));
            }
            assert_eq!(p.grid().num_empty(), 0);
        }
    }
}

#[cfg(test)]
mod placement {
    use super::*;

    #[test]
    fn reference_configuration() {
        let c: GeneratorConfig = config(15, 15, &["APPLE", "BANANA", "CHERRY"], 5);
        for seed in 0..20 {
            let p: GeneratedPuzzle = generate(&c, seed);
            assert_eq!(p.placed_words().len(), 3);
            assert!(p.distractors().len() <= 5);
            assert_locations(&p, p.placed_words());
            assert_locations(&p, p.distractors());
        }
        assert_eq!(distractor_count(3, 5), 5);
    }

    #[test]
    fn words_are_cleaned() {
        let p: GeneratedPuzzle = generate(&config(10, 10, &["Sun-Set!", "o'clock"], 0), 3);
        let mut words: Vec<&str> = p.placed_words().iter().map(|w| w.word.as_str()).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["OCLOCK", "SUNSET"]);
    }

    #[test]
    fn no_conflicting_cells() {
        let words: Vec<String> = (0..30)
            .map(|i| {
                let base: &str = ["CASTLE", "RIVER", "MOUNTAIN", "FOREST", "VALLEY"][i % 5];
                format!("{base}{}", (b'A' + i as u8) as char)
            })
            .collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        for seed in 0..10 {
            let p: GeneratedPuzzle = generate(&config(12, 12, &refs, 10), seed);
            let mut cells: HashMap<(usize, usize), u8> = HashMap::new();
            for loc in p.placed_words().iter().chain(p.distractors()) {
                for ((x, y), letter) in loc.cells().into_iter().zip(loc.word.bytes()) {
                    let previous: u8 = *cells.entry((x, y)).or_insert(letter);
                    assert_eq!(previous, letter, "conflict at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn too_long_word_is_a_shortfall() {
        let c: GeneratorConfig = config(6, 5, &["abcdefg", "cat"], 0);
        let validated = c.validate().unwrap();
        for seed in 0..10 {
            let p: GeneratedPuzzle = generate(&c, seed);
            assert!(p.placed_words().iter().all(|w| w.word != "ABCDEFG"));
            assert_eq!(p.missing_words(&validated), vec!["ABCDEFG"]);
            assert!(!p.is_complete(&validated));
        }
    }

    #[test]
    fn word_as_long_as_the_grid_fits() {
        let c: GeneratorConfig = GeneratorConfig {
            allow_backwards: false,
            allow_diagonals: false,
            ..config(5, 5, &["abcde"], 0)
        };
        let p: GeneratedPuzzle = generate(&c, 4);
        assert_eq!(p.placed_words().len(), 1);
        let w: &WordLocation = &p.placed_words()[0];
        assert!(
            (w.start_x == 0 && w.end_x == 4 && w.start_y == w.end_y)
                || (w.start_y == 0 && w.end_y == 4 && w.start_x == w.end_x)
        );
    }

    #[test]
    fn selection_finds_words() {
        let p: GeneratedPuzzle = generate(&config(15, 15, &["lion", "zebra"], 2), 6);
        for w in p.placed_words() {
            let found: &WordLocation = p
                .find_selection((w.end_x, w.end_y), (w.start_x, w.start_y))
                .unwrap();
            assert_eq!(found, w);
        }
    }
}

#[cfg(test)]
mod distractors {
    use super::*;

    #[test]
    fn difficulty_zero_means_no_distractor() {
        for seed in 0..10 {
            let p: GeneratedPuzzle = generate(&config(20, 20, &["apple", "pear", "plum"], 0), seed);
            assert!(p.distractors().is_empty());
        }
    }

    #[test]
    fn short_words_give_no_distractor() {
        let p: GeneratedPuzzle = generate(&config(10, 10, &["ox", "a", "be"], 10), 7);
        assert!(p.distractors().is_empty());
    }

    #[test]
    fn distractors_differ_by_one_letter() {
        let words: [&str; 4] = ["planet", "comet", "star", "moon"];
        let p: GeneratedPuzzle = generate(&config(20, 20, &words, 10), 8);
        assert!(p.distractors().len() <= distractor_count(4, 10));
        assert!(!p.distractors().is_empty());
        for d in p.distractors() {
            assert!(words.iter().any(|w| {
                let w: String = w.to_uppercase();
                w.len() == d.word.len()
                    && w.bytes().zip(d.word.bytes()).filter(|(a, b)| a != b).count() == 1
            }));
        }
    }
}

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn same_seed_same_puzzle() {
        let c: GeneratorConfig = config(15, 12, &["apple", "banana", "cherry", "date"], 7);
        let a: GeneratedPuzzle = generate(&c, 1234);
        let b: GeneratedPuzzle = generate(&c, 1234);
        assert_eq!(a.grid().rows(), b.grid().rows());
        assert_eq!(a.placed_words(), b.placed_words());
        assert_eq!(a.distractors(), b.distractors());
        assert_eq!(a, b);
    }

    #[test]
    fn json_output_shape() {
        let p: GeneratedPuzzle = generate(&config(6, 5, &["owl"], 3), 9);
        let json: serde_json::Value = serde_json::to_value(&p).unwrap();
        assert_eq!(json["grid"].as_array().unwrap().len(), 5);
        assert_eq!(json["grid"][0].as_str().unwrap().len(), 6);
        assert_eq!(json["placedWords"][0]["word"], "OWL");
        assert!(json["placedWords"][0]["startX"].is_u64());
        assert!(json["distractors"].is_array());
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn width_below_minimum() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let err = generate_with_rng(&config(3, 10, &["apple"], 5), &mut rng).unwrap_err();
        assert!(err.has_field(Field::Width));
        assert!(!err.has_field(Field::Height));
    }

    #[test]
    fn all_errors_reported_at_once() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let err = generate_with_rng(&config(100, -1, &["", "42"], 12), &mut rng).unwrap_err();
        assert!(err.has_field(Field::Width));
        assert!(err.has_field(Field::Height));
        assert!(err.has_field(Field::Word(0)));
        assert!(err.has_field(Field::Word(1)));
        assert!(err.has_field(Field::Difficulty));
    }
}
