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

// Conversion between a puzzle and the four fields that are stored
// for it:
//
//   width   decimal number
//   height  decimal number
//   words   JSON array of strings
//   grid    JSON array of one-letter strings in row-major order

use std::fmt;
use super::grid::{self, Grid};
use super::puzzle::Puzzle;
use super::store::{self, Record, Store};
use log::debug;

pub const N_FIELDS: usize = 4;

#[derive(Debug)]
pub enum Error {
    StoreError(store::Error),
    GridError(grid::Error),
    NotFound(String),
    KeyExists(String),
    FieldCount(usize),
    MissingField(&'static str),
    InvalidNumber(&'static str),
    InvalidJson(&'static str, serde_json::Error),
    InvalidLetter(String),
}

impl From<store::Error> for Error {
    fn from(e: store::Error) -> Error {
        Error::StoreError(e)
    }
}

impl From<grid::Error> for Error {
    fn from(e: grid::Error) -> Error {
        Error::GridError(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::StoreError(e) => write!(f, "{}", e),
            Error::GridError(e) => write!(f, "{}", e),
            Error::NotFound(key) => {
                write!(f, "no wordsearch found with key {}", key)
            },
            Error::KeyExists(key) => {
                write!(f, "a wordsearch already exists with key {}", key)
            },
            Error::FieldCount(n) => write!(
                f,
                "expected to save {} fields but {} were written",
                N_FIELDS,
                n,
            ),
            Error::MissingField(name) => write!(f, "missing field {}", name),
            Error::InvalidNumber(name) => {
                write!(f, "invalid number in field {}", name)
            },
            Error::InvalidJson(name, e) => {
                write!(f, "invalid JSON in field {}: {}", name, e)
            },
            Error::InvalidLetter(s) => {
                write!(f, "grid entry “{}” is not a single letter", s)
            },
        }
    }
}

pub fn to_fields(puzzle: &Puzzle) -> [(&'static str, String); N_FIELDS] {
    let grid = puzzle.grid().letters().iter()
        .map(|letter| letter.to_string())
        .collect::<Vec<String>>();

    [
        ("width", puzzle.width().to_string()),
        ("height", puzzle.height().to_string()),
        // Serializing a list of strings can’t fail
        ("words", serde_json::Value::from(puzzle.words()).to_string()),
        ("grid", serde_json::Value::from(grid).to_string()),
    ]
}

fn get_field<'a>(
    record: &'a Record,
    name: &'static str,
) -> Result<&'a str, Error> {
    record.get(name)
        .map(String::as_str)
        .ok_or(Error::MissingField(name))
}

fn parse_number(record: &Record, name: &'static str) -> Result<u32, Error> {
    get_field(record, name)?
        .parse::<u32>()
        .map_err(|_| Error::InvalidNumber(name))
}

fn parse_strings(
    record: &Record,
    name: &'static str,
) -> Result<Vec<String>, Error> {
    serde_json::from_str::<Vec<String>>(get_field(record, name)?)
        .map_err(|e| Error::InvalidJson(name, e))
}

fn parse_letter(s: String) -> Result<char, Error> {
    let mut chars = s.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(Error::InvalidLetter(s)),
    }
}

pub fn from_fields(record: &Record) -> Result<Puzzle, Error> {
    let width = parse_number(record, "width")?;
    let height = parse_number(record, "height")?;
    let words = parse_strings(record, "words")?;

    let letters = parse_strings(record, "grid")?
        .into_iter()
        .map(parse_letter)
        .collect::<Result<Vec<char>, Error>>()?;

    let grid = Grid::from_letters(width, height, letters)?;

    Ok(Puzzle::new(grid, words))
}

pub fn save<S: Store + ?Sized>(
    puzzle: &Puzzle,
    key: &str,
    store: &mut S,
) -> Result<(), Error> {
    if store.hgetall(key)?.is_some() {
        return Err(Error::KeyExists(key.to_string()));
    }

    let n_written = store.hset(key, &to_fields(puzzle))?;

    if n_written != N_FIELDS {
        return Err(Error::FieldCount(n_written));
    }

    debug!("saved puzzle {}", key);

    Ok(())
}

pub fn load<S: Store + ?Sized>(key: &str, store: &S) -> Result<Puzzle, Error> {
    let Some(record) = store.hgetall(key)?
    else {
        return Err(Error::NotFound(key.to_string()));
    };

    debug!("loaded puzzle {}", key);

    from_fields(&record)
}
