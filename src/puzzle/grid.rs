// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rectangular character grid and its coordinates.

use crate::error::InvalidInput;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A cell position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    pub fn distance(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four moves a snaking path may take, in exploration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a choice index (0..Direction::COUNT) to a direction.
    pub fn from_choice(choice: usize) -> Option<Self> {
        Self::iter().nth(choice)
    }
}

/// An immutable rectangular grid of characters, stored row-major.
///
/// Construction rejects empty and ragged input, so every `Grid` has
/// `width >= 1`, `height >= 1` and exactly `width * height` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows of characters.
    ///
    /// # Errors
    ///
    /// - [`InvalidInput::EmptyGrid`] if there are no rows or the first row is empty
    /// - [`InvalidInput::RaggedGrid`] if a row's length differs from the first row's
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, InvalidInput> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(InvalidInput::EmptyGrid);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, chars) in rows.into_iter().enumerate() {
            if chars.len() != width {
                return Err(InvalidInput::RaggedGrid {
                    row,
                    expected: width,
                    found: chars.len(),
                });
            }
            cells.extend(chars);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from string rows, one character per cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidInput> {
        Self::new(rows.iter().map(|row| row.as_ref().chars().collect()).collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The character at `coord`, or None when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<char> {
        if self.contains(coord) {
            Some(self.cells[self.index_of(coord)])
        } else {
            None
        }
    }

    /// True if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Row-major index of an in-bounds `coord`.
    pub fn index_of(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }

    /// Inverse of [`Grid::index_of`].
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index % self.width, index / self.width)
    }

    /// The cell one step from `coord` in `direction`, if it is inside the grid.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = match direction {
            Direction::Left => Coord::new(coord.x.checked_sub(1)?, coord.y),
            Direction::Right => Coord::new(coord.x + 1, coord.y),
            Direction::Up => Coord::new(coord.x, coord.y.checked_sub(1)?),
            Direction::Down => Coord::new(coord.x, coord.y + 1),
        };
        self.contains(next).then_some(next)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |index| self.coord_of(index))
    }

    /// The characters of row `y`.
    pub fn row(&self, y: usize) -> Option<&[char]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }
}

/// Parses whitespace-separated rows, e.g. `"AB\nCD"` or `"AB CD"`.
impl FromStr for Grid {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
