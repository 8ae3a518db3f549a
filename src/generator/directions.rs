/*
directions.rs

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

//! Writing directions and valid start ranges.
//!
//! A word is written along one of eight [`Direction`] objects.
//! For a given word length, only some start cells keep the whole word inside the grid.
//! [`Candidates`] computes, for each length, the list of directions that can hold the word and
//! the rectangle of valid start cells for each of them.
//! The result only depends on the length, the direction set, and the grid size, so it is
//! computed once per length and reused for all the attempts and all the words of that length.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, FromRepr};

/// Writing direction.
///
/// The first four variants are the forward directions. Adding four to a variant gives the
/// opposite direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, FromRepr)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
    Left,
    Up,
    UpLeft,
    DownLeft,
}

impl Direction {
    /// Return the `(dx, dy)` unit step.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (-1, 1),
        }
    }

    /// Return the direction pointing the other way.
    pub fn reversed(self) -> Self {
        Direction::from_repr((self as u8 + 4) % 8).unwrap_or(self)
    }

    /// Return the direction for a `(dx, dy)` unit step, or None for `(0, 0)` or a step that is
    /// not a unit step.
    pub fn from_step(dx: isize, dy: isize) -> Option<Self> {
        (0..8)
            .filter_map(Direction::from_repr)
            .find(|d| d.step() == (dx, dy))
    }

    /// Whether the direction is diagonal.
    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.step();
        dx != 0 && dy != 0
    }
}

/// Return the directions allowed by the options.
///
/// The base set is right and down. Diagonals add down-right and up-right. Backwards adds the
/// opposite of every direction already in the set.
pub fn enumerate(allow_backwards: bool, allow_diagonals: bool) -> Vec<Direction> {
    let mut directions: Vec<Direction> = vec![Direction::Right, Direction::Down];
    if allow_diagonals {
        directions.push(Direction::DownRight);
        directions.push(Direction::UpRight);
    }
    if allow_backwards {
        let backward: Vec<Direction> = directions.iter().map(|d| d.reversed()).collect();
        directions.extend(backward);
    }
    directions
}

/// A direction with the rectangle of valid start cells for a given word length.
///
/// Bounds are inclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
    pub direction: Direction,
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

/// Return the inclusive range of start coordinates along one axis, or None if a word of `len`
/// letters does not fit.
fn start_range(step: isize, len: usize, size: usize) -> Option<(usize, usize)> {
    if len == 0 || size == 0 {
        return None;
    }
    if step == 0 {
        return Some((0, size - 1));
    }
    if len > size {
        return None;
    }
    let span: usize = len - 1;
    if step > 0 {
        Some((0, size - 1 - span))
    } else {
        Some((span, size - 1))
    }
}

/// Cache of the [`Candidate`] lists, indexed by word length.
#[derive(Debug)]
pub struct Candidates {
    directions: Vec<Direction>,
    width: usize,
    height: usize,
    by_length: HashMap<usize, Vec<Candidate>>,
}

impl Candidates {
    /// Create the object. No candidate is computed until a length is requested.
    pub fn new(directions: Vec<Direction>, width: usize, height: usize) -> Self {
        Self {
            directions,
            width,
            height,
            by_length: HashMap::new(),
        }
    }

    /// Return the candidates for a word of `len` letters.
    ///
    /// The list is empty when the word does not fit in any direction.
    pub fn get(&mut self, len: usize) -> &[Candidate] {
        let directions: &[Direction] = &self.directions;
        let (width, height) = (self.width, self.height);
        self.by_length.entry(len).or_insert_with(|| {
            let list: Vec<Candidate> = directions
                .iter()
                .filter_map(|&direction| {
                    let (dx, dy) = direction.step();
                    let (min_x, max_x) = start_range(dx, len, width)?;
                    let (min_y, max_y) = start_range(dy, len, height)?;
                    Some(Candidate {
                        direction,
                        min_x,
                        max_x,
                        min_y,
                        max_y,
                    })
                })
                .collect();
            debug!("Length {len}: {} candidate directions", list.len());
            list
        })
    }
}
