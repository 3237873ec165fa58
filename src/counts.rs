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

// How many of the placed words start at or pass through each cell
#[derive(Debug)]
pub struct GridCounts {
    values: Box<[CellCounts]>,
    width: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub starts: u8,
    pub visits: u8,
}

impl GridCounts {
    pub fn new(width: u32, height: u32) -> GridCounts {
        GridCounts {
            values: vec![
                CellCounts::default();
                width as usize * height as usize
            ].into_boxed_slice(),
            width,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width);

        y as usize * self.width as usize + x as usize
    }

    pub fn at(&self, x: u32, y: u32) -> &CellCounts {
        &self.values[self.index(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut CellCounts {
        let index = self.index(x, y);
        &mut self.values[index]
    }

    // Number of cells that aren’t part of any word
    pub fn n_filler_cells(&self) -> usize {
        self.values.iter().filter(|counts| counts.visits == 0).count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major() {
        let mut counts = GridCounts::new(3, 2);

        counts.at_mut(2, 1).visits = 4;
        counts.at_mut(0, 1).starts = 1;

        assert_eq!(counts.values[5].visits, 4);
        assert_eq!(counts.values[3].starts, 1);
        assert_eq!(counts.at(2, 1), &CellCounts { starts: 0, visits: 4 });
        assert_eq!(counts.n_filler_cells(), 5);
    }
}
