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

use super::grid::Grid;
use std::fmt;

// A finished puzzle. It is either the result of generating a new
// grid or a copy of one that was loaded from the store. Either way
// it isn’t modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<String>,
}

impl Puzzle {
    pub fn new(grid: Grid, words: Vec<String>) -> Puzzle {
        Puzzle { grid, words }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn at(&self, x: u32, y: u32) -> char {
        self.grid.at(x, y)
    }

    // The grid split into rows, which is what gets drawn
    pub fn board(&self) -> Vec<Vec<char>> {
        self.grid.rows().map(<[char]>::to_vec).collect()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_puzzle() -> Puzzle {
        Puzzle::new(
            Grid::from_letters(3, 2, "CATXYZ".chars().collect()).unwrap(),
            vec!["CAT".to_string()],
        )
    }

    #[test]
    fn accessors() {
        let puzzle = make_puzzle();

        assert_eq!(puzzle.width(), 3);
        assert_eq!(puzzle.height(), 2);
        assert_eq!(puzzle.words(), &["CAT"]);
        assert_eq!(puzzle.at(1, 0), 'A');
        assert_eq!(puzzle.at(2, 1), 'Z');
    }

    #[test]
    fn board() {
        assert_eq!(
            make_puzzle().board(),
            vec![vec!['C', 'A', 'T'], vec!['X', 'Y', 'Z']],
        );
    }

    #[test]
    fn display() {
        assert_eq!(&make_puzzle().to_string(), "C A T\nX Y Z\n");
    }
}
