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

use std::fmt;

// Placeholder for a cell that hasn’t been given a letter yet
pub const BLANK: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: Box<[char]>,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    WrongSize { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "empty grid"),
            Error::WrongSize { expected, actual } => write!(
                f,
                "grid has {} letters but {} were expected",
                actual,
                expected,
            ),
        }
    }
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Grid, Error> {
        if width < 1 || height < 1 {
            return Err(Error::EmptyGrid);
        }

        Ok(Grid {
            values: vec![BLANK; width as usize * height as usize].into_boxed_slice(),
            width,
            height,
        })
    }

    pub fn from_letters(
        width: u32,
        height: u32,
        letters: Vec<char>,
    ) -> Result<Grid, Error> {
        if width < 1 || height < 1 {
            return Err(Error::EmptyGrid);
        }

        let expected = width as usize * height as usize;

        if letters.len() != expected {
            return Err(Error::WrongSize {
                expected,
                actual: letters.len(),
            });
        }

        Ok(Grid {
            values: letters.into_boxed_slice(),
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width);

        y as usize * self.width as usize + x as usize
    }

    pub fn at(&self, x: u32, y: u32) -> char {
        self.values[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, letter: char) {
        let index = self.index(x, y);
        self.values[index] = letter;
    }

    pub fn is_blank(&self, x: u32, y: u32) -> bool {
        self.at(x, y) == BLANK
    }

    pub fn letters(&self) -> &[char] {
        &self.values
    }

    pub fn letters_mut(&mut self) -> &mut [char] {
        &mut self.values
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.values.chunks(self.width as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for (x, letter) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
