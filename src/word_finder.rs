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
use super::directions::{self, Directions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub start_x: u32,
    pub start_y: u32,
    pub direction: (i32, i32),
    pub length: usize,
}

impl Route {
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> {
        let direction = self.direction;

        std::iter::successors(
            Some((self.start_x, self.start_y)),
            move |&(x, y)| Some(directions::step(x, y, direction)),
        ).take(self.length)
    }
}

fn matches_from_position(
    grid: &Grid,
    word: &str,
    mut x: u32,
    mut y: u32,
    direction: (i32, i32),
) -> bool {
    for letter in word.chars() {
        if !grid.contains(x, y) || grid.at(x, y) != letter {
            return false;
        }

        (x, y) = directions::step(x, y, direction);
    }

    true
}

// Finds the first straight run of cells that spells the word, scanning
// the grid in row-major order and trying each direction in turn.
pub fn find(grid: &Grid, word: &str, directions: Directions) -> Option<Route> {
    let length = word.chars().count();

    if length == 0 {
        return None;
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            for direction in directions.iter() {
                if matches_from_position(grid, word, x, y, direction) {
                    return Some(Route {
                        start_x: x,
                        start_y: y,
                        direction,
                        length,
                    });
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_grid() -> Grid {
        Grid::from_letters(
            3, 3,
            "ABC\
             DEF\
             GHI".chars().collect(),
        ).unwrap()
    }

    #[test]
    fn all_directions() {
        let grid = make_grid();
        let all = Directions::new(true);

        let route = find(&grid, "ABC", all).unwrap();
        assert_eq!((route.start_x, route.start_y), (0, 0));
        assert_eq!(route.direction, (1, 0));

        let route = find(&grid, "CBA", all).unwrap();
        assert_eq!((route.start_x, route.start_y), (2, 0));
        assert_eq!(route.direction, (-1, 0));

        let route = find(&grid, "ADG", all).unwrap();
        assert_eq!((route.start_x, route.start_y), (0, 0));
        assert_eq!(route.direction, (0, 1));

        let route = find(&grid, "IEA", all).unwrap();
        assert_eq!((route.start_x, route.start_y), (2, 2));
        assert_eq!(route.direction, (-1, -1));

        let route = find(&grid, "GEC", all).unwrap();
        assert_eq!((route.start_x, route.start_y), (0, 2));
        assert_eq!(route.direction, (1, -1));
    }

    #[test]
    fn no_diagonals() {
        let grid = make_grid();

        assert!(find(&grid, "AEI", Directions::new(false)).is_none());
        assert!(find(&grid, "AEI", Directions::new(true)).is_some());
        assert!(find(&grid, "FED", Directions::new(false)).is_some());
    }

    #[test]
    fn no_bends() {
        let grid = make_grid();

        assert!(find(&grid, "ABE", Directions::new(true)).is_none());
    }

    #[test]
    fn not_found() {
        let grid = make_grid();

        assert!(find(&grid, "ABCD", Directions::new(true)).is_none());
        assert!(find(&grid, "", Directions::new(true)).is_none());
        assert!(find(&grid, "Z", Directions::new(true)).is_none());
    }

    #[test]
    fn positions() {
        let grid = make_grid();
        let route = find(&grid, "CEG", Directions::new(true)).unwrap();

        assert_eq!(
            route.positions().collect::<Vec<_>>(),
            [(2, 0), (1, 1), (0, 2)],
        );
    }
}
