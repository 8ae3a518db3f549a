/*
config.rs

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

//! Puzzle configuration and its validation.
//!
//! A [`GeneratorConfig`] is the raw configuration as provided by the caller, either built in
//! code, parsed from the command line, or loaded from a JSON file.
//! It must be turned into a [`ValidatedConfig`] by [`GeneratorConfig::validate`] before the
//! generator can use it.
//! Validation collects every violated constraint in a [`ValidationError`] so that the caller
//! can present a complete list of corrections.

use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Smallest grid width or height.
pub const MIN_DIMENSION: i64 = 5;

/// Largest grid width or height.
pub const MAX_DIMENSION: i64 = 50;

/// Largest number of letters in a cleaned word.
pub const MAX_WORD_LENGTH: usize = 20;

/// Largest number of words in the list.
pub const MAX_WORDS: usize = 100;

/// Largest difficulty level. Difficulty 0 means no distractors.
pub const MAX_DIFFICULTY: i64 = 10;

/// Raw puzzle configuration.
///
/// Numeric fields are signed on purpose: a negative width read from a JSON file is reported by
/// [`GeneratorConfig::validate`] instead of being rejected by the deserializer with a less
/// helpful message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Number of columns.
    pub width: i64,

    /// Number of rows.
    pub height: i64,

    /// Words to hide in the grid, as typed by the user.
    pub words: Vec<String>,

    /// Whether words can be written right to left, bottom to top, and so on.
    pub allow_backwards: bool,

    /// Whether words can be written diagonally.
    pub allow_diagonals: bool,

    /// Density of the distractors, from 0 (none) to 10.
    pub difficulty: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            words: Vec::new(),
            allow_backwards: true,
            allow_diagonals: true,
            difficulty: 5,
        }
    }
}

/// Configuration field that a [`Violation`] refers to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    /// The word list as a whole.
    Words,
    /// One word of the list, by its position in the raw list.
    Word(usize),
    Difficulty,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Width => write!(f, "width"),
            Field::Height => write!(f, "height"),
            Field::Words => write!(f, "words"),
            Field::Word(i) => write!(f, "words[{i}]"),
            Field::Difficulty => write!(f, "difficulty"),
        }
    }
}

/// One violated constraint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

/// Configuration errors.
///
/// The error always holds at least one [`Violation`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Return the list of violated constraints.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether one of the violations refers to the given field.
    pub fn has_field(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid configuration: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Configuration that passed validation. Only [`GeneratorConfig::validate`] creates it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedConfig {
    width: usize,
    height: usize,
    words: Vec<String>,
    allow_backwards: bool,
    allow_diagonals: bool,
    difficulty: u8,
}

impl ValidatedConfig {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cleaned words, without duplicates, in the order of the raw list.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn allow_backwards(&self) -> bool {
        self.allow_backwards
    }

    pub fn allow_diagonals(&self) -> bool {
        self.allow_diagonals
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

/// Normalize a word: uppercase, and only the letters `A` to `Z` are kept.
///
/// `"Sun-Set!"` becomes `"SUNSET"`.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Split a raw word list on commas and new lines.
///
/// Entries are trimmed and empty entries are dropped.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

impl GeneratorConfig {
    /// Create a configuration with the default grid settings and the given words.
    pub fn with_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default value. The returned configuration is not validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        debug!("Loading configuration from {:?}", path.as_ref());
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: GeneratorConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Check every constraint and return the normalized configuration.
    ///
    /// # Errors
    ///
    /// The method returns a [`ValidationError`] listing all the violated constraints.
    pub fn validate(&self) -> Result<ValidatedConfig, ValidationError> {
        let mut violations: Vec<Violation> = Vec::new();

        let mut check_dimension = |field: Field, value: i64| {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                violations.push(Violation {
                    field,
                    message: format!(
                        "must be between {MIN_DIMENSION} and {MAX_DIMENSION} (got {value})"
                    ),
                });
            }
        };
        check_dimension(Field::Width, self.width);
        check_dimension(Field::Height, self.height);

        if self.words.is_empty() {
            violations.push(Violation {
                field: Field::Words,
                message: "at least one word is required".to_string(),
            });
        } else if self.words.len() > MAX_WORDS {
            violations.push(Violation {
                field: Field::Words,
                message: format!(
                    "at most {MAX_WORDS} words are allowed (got {})",
                    self.words.len()
                ),
            });
        }

        // Words longer than the grid are accepted here: they fail placement later and the
        // caller sees them in the missing word list.
        let mut seen: HashSet<String> = HashSet::with_capacity(self.words.len());
        let mut words: Vec<String> = Vec::with_capacity(self.words.len());
        for (i, raw) in self.words.iter().enumerate() {
            let word: String = clean_word(raw);
            if word.is_empty() {
                violations.push(Violation {
                    field: Field::Word(i),
                    message: format!("\"{raw}\" does not contain any letter"),
                });
                continue;
            }
            if word.len() > MAX_WORD_LENGTH {
                violations.push(Violation {
                    field: Field::Word(i),
                    message: format!(
                        "\"{raw}\" has {} letters (at most {MAX_WORD_LENGTH} allowed)",
                        word.len()
                    ),
                });
                continue;
            }
            if seen.insert(word.clone()) {
                words.push(word);
            } else {
                debug!("Duplicated word {word} ignored");
            }
        }

        if !(0..=MAX_DIFFICULTY).contains(&self.difficulty) {
            violations.push(Violation {
                field: Field::Difficulty,
                message: format!(
                    "must be between 0 and {MAX_DIFFICULTY} (got {})",
                    self.difficulty
                ),
            });
        }

        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(ValidatedConfig {
            width: self.width as usize,
            height: self.height as usize,
            words,
            allow_backwards: self.allow_backwards,
            allow_diagonals: self.allow_diagonals,
            difficulty: self.difficulty as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_word_keeps_letters_only() {
        assert_eq!(clean_word("Sun-Set!"), "SUNSET");
        assert_eq!(clean_word("  ice cream 2 "), "ICECREAM");
        assert_eq!(clean_word("été"), "T");
        assert_eq!(clean_word("123"), "");
    }

    #[test]
    fn word_list_split() {
        assert_eq!(
            parse_word_list("lion, tiger\nbear,,\n  \nowl"),
            vec!["lion", "tiger", "bear", "owl"]
        );
        assert!(parse_word_list(" , \n").is_empty());
    }

    #[test]
    fn default_config_with_words_is_valid() {
        let config: ValidatedConfig = GeneratorConfig::with_words(&["apple", "Banana"])
            .validate()
            .unwrap();
        assert_eq!(config.width(), 15);
        assert_eq!(config.height(), 15);
        assert_eq!(config.words(), ["APPLE", "BANANA"]);
        assert!(config.allow_backwards());
        assert!(config.allow_diagonals());
        assert_eq!(config.difficulty(), 5);
    }

    #[test]
    fn width_too_small() {
        let config: GeneratorConfig = GeneratorConfig {
            width: 3,
            ..GeneratorConfig::with_words(&["apple"])
        };
        let err: ValidationError = config.validate().unwrap_err();
        assert!(err.has_field(Field::Width));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn every_violation_is_reported() {
        let config: GeneratorConfig = GeneratorConfig {
            width: 0,
            height: 51,
            words: vec!["ok".to_string(), "!!!".to_string(), "a".repeat(21)],
            allow_backwards: false,
            allow_diagonals: false,
            difficulty: 11,
        };
        let err: ValidationError = config.validate().unwrap_err();
        assert!(err.has_field(Field::Width));
        assert!(err.has_field(Field::Height));
        assert!(err.has_field(Field::Word(1)));
        assert!(err.has_field(Field::Word(2)));
        assert!(err.has_field(Field::Difficulty));
        assert!(!err.has_field(Field::Word(0)));
        assert_eq!(err.violations().len(), 5);
    }

    #[test]
    fn word_list_size() {
        let err: ValidationError = GeneratorConfig::default().validate().unwrap_err();
        assert!(err.has_field(Field::Words));

        let words: Vec<String> = (0..101).map(|i| format!("w{i}")).collect();
        let err: ValidationError = GeneratorConfig::with_words(&words).validate().unwrap_err();
        assert!(err.has_field(Field::Words));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let words: Vec<String> = (0..100).map(|_| "a".repeat(20)).collect();
        let config: GeneratorConfig = GeneratorConfig {
            width: 5,
            height: 50,
            difficulty: 0,
            ..GeneratorConfig::with_words(&words)
        };
        assert!(config.validate().is_ok());
        let config: GeneratorConfig = GeneratorConfig {
            difficulty: 10,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duplicates_are_removed_after_cleaning() {
        let config: ValidatedConfig = GeneratorConfig::with_words(&["Owl", "o-w-l", "Cat", "OWL"])
            .validate()
            .unwrap();
        assert_eq!(config.words(), ["OWL", "CAT"]);
    }

    #[test]
    fn long_word_passes_validation() {
        let config: GeneratorConfig = GeneratorConfig {
            width: 5,
            height: 5,
            ..GeneratorConfig::with_words(&["abcdefghij"])
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_shape() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{"width": 12, "words": ["a", "b"], "allowBackwards": false, "difficulty": -1}"#,
        )
        .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 15);
        assert!(!config.allow_backwards);
        assert!(config.allow_diagonals);
        let err: ValidationError = config.validate().unwrap_err();
        assert!(err.has_field(Field::Difficulty));
    }

    #[test]
    fn error_message_lists_fields() {
        let config: GeneratorConfig = GeneratorConfig {
            width: 3,
            difficulty: 20,
            ..GeneratorConfig::with_words(&["apple"])
        };
        let msg: String = config.validate().unwrap_err().to_string();
        assert!(msg.starts_with("Invalid configuration: width: "));
        assert!(msg.contains("; difficulty: "));
    }
}
