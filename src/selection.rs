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

// The cells that the player has clicked on. The first click sets the
// start of a line, the second sets the end and the third starts a new
// line again. Coordinates aren’t checked against any grid so the
// caller should make sure they are in range.

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Mode {
    None,
    Selecting,
    Selected,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Selection {
    #[default]
    None,
    Selecting { start: (i32, i32) },
    Selected { start: (i32, i32), end: (i32, i32) },
}

impl Selection {
    pub fn new() -> Selection {
        Selection::None
    }

    pub fn mode(&self) -> Mode {
        match self {
            Selection::None => Mode::None,
            Selection::Selecting { .. } => Mode::Selecting,
            Selection::Selected { .. } => Mode::Selected,
        }
    }

    pub fn start(&self) -> Option<(i32, i32)> {
        match *self {
            Selection::None => None,
            Selection::Selecting { start } => Some(start),
            Selection::Selected { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<(i32, i32)> {
        match *self {
            Selection::Selected { end, .. } => Some(end),
            _ => None,
        }
    }

    #[must_use]
    pub fn select(self, x: i32, y: i32) -> Selection {
        match self {
            Selection::None | Selection::Selected { .. } => {
                Selection::Selecting { start: (x, y) }
            },
            Selection::Selecting { start } => {
                Selection::Selected { start, end: (x, y) }
            },
        }
    }

    pub fn is_selected(&self, x: i32, y: i32) -> bool {
        match *self {
            Selection::None => false,
            Selection::Selecting { start } => start == (x, y),
            Selection::Selected { start, end } => {
                is_on_line(start, end, (x, y))
            },
        }
    }
}

fn is_on_line(
    (start_x, start_y): (i32, i32),
    (end_x, end_y): (i32, i32),
    (x, y): (i32, i32),
) -> bool {
    if x < start_x.min(end_x) || x > start_x.max(end_x) ||
        y < start_y.min(end_y) || y > start_y.max(end_y)
    {
        return false;
    }

    if (x, y) == (start_x, start_y) || (x, y) == (end_x, end_y) {
        return true;
    }

    // Cross product of the two vectors from the start. i64 so that
    // large coordinates can’t overflow.
    let (x, y) = (x as i64, y as i64);
    let (start_x, start_y) = (start_x as i64, start_y as i64);
    let (end_x, end_y) = (end_x as i64, end_y as i64);

    (y - start_y) * (end_x - start_x) == (end_y - start_y) * (x - start_x)
}
