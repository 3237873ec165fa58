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
use super::puzzle::Puzzle;
use super::puzzle_data;
use super::selection::Selection;
use super::store::Store;

#[derive(Debug)]
pub enum Error {
    MissingKey,
    LoadError(puzzle_data::Error),
}

impl From<puzzle_data::Error> for Error {
    fn from(e: puzzle_data::Error) -> Error {
        Error::LoadError(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingKey => write!(f, "a puzzle key is required"),
            Error::LoadError(e) => write!(f, "{}", e),
        }
    }
}

// One session of looking at a puzzle. The selection starts out empty
// every time and is never saved.
pub struct Game {
    puzzle: Puzzle,
    selection: Selection,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Game {
        Game {
            puzzle,
            selection: Selection::new(),
        }
    }

    pub fn load<S: Store + ?Sized>(
        key: Option<&str>,
        store: &S,
    ) -> Result<Game, Error> {
        let Some(key) = key.filter(|key| !key.is_empty())
        else {
            return Err(Error::MissingKey);
        };

        Ok(Game::new(puzzle_data::load(key, store)?))
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn board(&self) -> Vec<Vec<char>> {
        self.puzzle.board()
    }

    pub fn select(&mut self, x: i32, y: i32) {
        self.selection = self.selection.select(x, y);
    }

    pub fn is_selected(&self, x: i32, y: i32) -> bool {
        self.selection.is_selected(x, y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::grid::Grid;
    use super::super::selection::Mode;
    use super::super::store::MemoryStore;

    fn make_store() -> (MemoryStore, Puzzle) {
        let puzzle = Puzzle::new(
            Grid::from_letters(
                4, 4,
                "CATX\
                 XOXX\
                 XXGX\
                 XXXX".chars().collect(),
            ).unwrap(),
            vec!["CAT".to_string(), "COG".to_string()],
        );

        let mut store = MemoryStore::new();
        puzzle_data::save(&puzzle, "t3_post", &mut store).unwrap();

        (store, puzzle)
    }

    #[test]
    fn missing_key() {
        let (store, _) = make_store();

        assert!(matches!(Game::load(None, &store), Err(Error::MissingKey)));
        assert!(matches!(Game::load(Some(""), &store), Err(Error::MissingKey)));
    }

    #[test]
    fn missing_puzzle() {
        let (store, _) = make_store();

        let Err(e) = Game::load(Some("t3_other"), &store)
        else {
            unreachable!();
        };

        assert_eq!(&e.to_string(), "no wordsearch found with key t3_other");
    }

    #[test]
    fn select_line() {
        let (store, puzzle) = make_store();
        let mut game = Game::load(Some("t3_post"), &store).unwrap();

        assert_eq!(game.puzzle(), &puzzle);
        assert_eq!(game.board()[0], vec!['C', 'A', 'T', 'X']);
        assert_eq!(game.selection().mode(), Mode::None);

        game.select(0, 0);
        assert!(game.is_selected(0, 0));
        assert!(!game.is_selected(1, 1));

        game.select(2, 2);
        assert_eq!(game.selection().mode(), Mode::Selected);

        let selected = (0..4).flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| game.is_selected(x, y))
            .map(|(x, y)| game.puzzle().at(x as u32, y as u32))
            .collect::<String>();

        assert_eq!(&selected, "COG");

        // Selecting never touches the puzzle
        assert_eq!(game.puzzle(), &puzzle);

        game.select(3, 3);
        assert_eq!(game.selection().mode(), Mode::Selecting);
        assert!(game.is_selected(3, 3));
        assert!(!game.is_selected(0, 0));
    }
}
