// Wordsearch – A daily word search puzzle
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::grid::{self, Grid};
use super::dictionary;
use super::directions::{self, Directions};
#[cfg(not(target_arch = "wasm32"))]
use super::counts::GridCounts;
use super::puzzle::Puzzle;
#[cfg(not(target_arch = "wasm32"))]
use super::word_finder;
use std::collections::HashSet;
use rand::Rng;
use log::{debug, info};

// Number of placement attempts per cell of the grid
pub const EFFORT: u64 = 10000;

static ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub width: u32,
    pub height: u32,
    pub min_length: usize,
    pub max_length: usize,
    pub diagonals: bool,
}

impl Default for GenerateConfig {
    fn default() -> GenerateConfig {
        GenerateConfig {
            width: 10,
            height: 10,
            min_length: 3,
            max_length: 10,
            diagonals: true,
        }
    }
}

fn word_fits_in_grid(
    grid: &Grid,
    word: &str,
    mut x: u32,
    mut y: u32,
    direction: (i32, i32),
) -> bool {
    let mut has_blank = false;

    for letter in word.chars() {
        if !grid.contains(x, y) {
            return false;
        }

        let current = grid.at(x, y);

        if current == grid::BLANK {
            has_blank = true;
        } else if current != letter {
            return false;
        }

        (x, y) = directions::step(x, y, direction);
    }

    // A word whose letters are all already in the grid would add
    // nothing
    has_blank
}

fn put_word_in_grid(
    grid: &mut Grid,
    word: &str,
    mut x: u32,
    mut y: u32,
    direction: (i32, i32),
) {
    for letter in word.chars() {
        grid.set(x, y, letter);
        (x, y) = directions::step(x, y, direction);
    }
}

// Writes the word if it fits. Nothing is modified otherwise.
fn try_place_word(
    grid: &mut Grid,
    word: &str,
    x: u32,
    y: u32,
    direction: (i32, i32),
) -> bool {
    if word_fits_in_grid(grid, word, x, y, direction) {
        put_word_in_grid(grid, word, x, y, direction);
        true
    } else {
        false
    }
}

fn fill_blanks<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for letter in grid.letters_mut().iter_mut() {
        if *letter == grid::BLANK {
            *letter = ALPHABET[rng.gen_range(0..ALPHABET.len())];
        }
    }
}

fn normalize_word(word: &str) -> String {
    word.chars().map(|ch| ch.to_ascii_uppercase()).collect()
}

// Only words made entirely of the letters A to Z can go in the grid
fn is_placeable(word: &str) -> bool {
    word.chars().all(|ch| ch.is_ascii_uppercase())
}

pub fn generate<R: Rng + ?Sized>(
    config: &GenerateConfig,
    dictionary: &[String],
    rng: &mut R,
) -> Result<Puzzle, grid::Error> {
    let mut grid = Grid::new(config.width, config.height)?;

    let candidates = dictionary::filter_words(
        dictionary,
        config.min_length,
        config.max_length,
    ).iter()
        .map(|word| normalize_word(word))
        .filter(|word| is_placeable(word))
        .collect::<Vec<String>>();

    let n_distinct = candidates.iter().collect::<HashSet<_>>().len();
    let directions = Directions::new(config.diagonals);

    let mut used = HashSet::new();
    let mut words = Vec::new();

    let max_trials = config.width as u64 * config.height as u64 * EFFORT;
    let mut n_trials = 0;

    while n_trials < max_trials && used.len() < n_distinct {
        n_trials += 1;

        let word = &candidates[rng.gen_range(0..candidates.len())];

        if used.contains(word.as_str()) {
            continue;
        }

        let x = rng.gen_range(0..config.width);
        let y = rng.gen_range(0..config.height);
        let direction = directions.get(rng.gen_range(0..directions.len()));

        if try_place_word(&mut grid, word, x, y, direction) {
            debug!("placed {} at {},{} going {:?}", word, x, y, direction);
            used.insert(word.as_str());
            words.push(word.clone());
        }
    }

    info!(
        "placed {} of {} words in {} trials",
        words.len(),
        n_distinct,
        n_trials,
    );

    fill_blanks(&mut grid, rng);

    words.sort();

    Ok(Puzzle::new(grid, words))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn count_visits<I, T>(
    grid: &Grid,
    words: I,
    directions: Directions,
) -> GridCounts
    where I: IntoIterator<Item = T>,
          T: AsRef<str>
{
    let mut counts = GridCounts::new(grid.width(), grid.height());

    for word in words {
        let Some(route) = word_finder::find(grid, word.as_ref(), directions)
        else {
            continue;
        };

        let start = counts.at_mut(route.start_x, route.start_y);
        start.starts += 1;

        for (x, y) in route.positions() {
            counts.at_mut(x, y).visits += 1;
        }
    }

    counts
}
