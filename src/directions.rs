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

// The directions go clockwise starting from north. y grows downwards.
//
// 7 0 1
// 6 . 2
// 5 4 3

pub const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const AXIS_DIRECTIONS: [(i32, i32); 4] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directions {
    vectors: &'static [(i32, i32)],
}

impl Directions {
    pub fn new(diagonals: bool) -> Directions {
        let vectors: &'static [(i32, i32)] = if diagonals {
            &ALL_DIRECTIONS
        } else {
            &AXIS_DIRECTIONS
        };

        Directions { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn get(&self, index: usize) -> (i32, i32) {
        self.vectors[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + 'static {
        self.vectors.iter().copied()
    }
}

pub fn step(x: u32, y: u32, (dx, dy): (i32, i32)) -> (u32, u32) {
    (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn direction_sets() {
        let all = Directions::new(true);
        assert_eq!(all.len(), 8);
        assert_eq!(all.get(0), (0, -1));
        assert_eq!(all.get(3), (1, 1));

        let axes = Directions::new(false);
        assert_eq!(axes.len(), 4);
        assert!(axes.iter().all(|(dx, dy)| dx == 0 || dy == 0));

        // Every axis direction is also in the full set
        assert!(axes.iter().all(|d| all.iter().any(|a| a == d)));
    }

    #[test]
    fn step_all_directions() {
        assert_eq!(step(1, 1, ALL_DIRECTIONS[0]), (1, 0));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[1]), (2, 0));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[2]), (2, 1));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[3]), (2, 2));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[4]), (1, 2));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[5]), (0, 2));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[6]), (0, 1));
        assert_eq!(step(1, 1, ALL_DIRECTIONS[7]), (0, 0));
    }

    #[test]
    fn overflow() {
        // Going off the top or left of the grid should wrap the
        // coordinates around the integer maximum so that an invalid
        // position can be detected with a single comparison against
        // the dimensions of the grid.
        assert_eq!(step(0, 0, (-1, 0)), (u32::MAX, 0));
        assert_eq!(step(0, 0, (0, -1)), (0, u32::MAX));
        assert_eq!(step(0, 0, (-1, -1)), (u32::MAX, u32::MAX));
    }
}
