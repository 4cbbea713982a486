use std::iter;

use rand::Rng;

use super::{error::GridError, pos::Position, rule::Rule};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A toroidal board of live (`true`) and dead (`false`) cells, stored row-major.
///
/// The dimensions are fixed at creation, every row has `columns` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid of the given size with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_cells(rows, columns, vec![false; rows * columns])
    }

    /// Creates a grid where each cell is independently alive with `life_probability`,
    /// using the thread-local random generator.
    ///
    /// The probability is not validated: values at or below `0.0` give an all-dead grid
    /// and values at or above `1.0` give an all-alive one.
    pub fn new_random(rows: usize, columns: usize, life_probability: f64) -> Self {
        Self::new_random_with_rng(rows, columns, life_probability, &mut rand::rng())
    }

    /// Same as [`Grid::new_random`] but drawing from the given generator, so a seeded
    /// generator reproduces the same grid.
    pub fn new_random_with_rng<R>(
        rows: usize,
        columns: usize,
        life_probability: f64,
        rng: &mut R,
    ) -> Self
    where
        R: Rng,
    {
        let cells = iter::repeat_with(|| rng.random::<f64>() < life_probability)
            .take(rows * columns)
            .collect();

        Self::with_cells(rows, columns, cells)
    }

    /// Builds a grid from nested rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(GridError::RaggedRows {
                row,
                expected: columns,
                found,
            });
        }

        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();

        Ok(Self::with_cells(row_count, columns, cells))
    }

    pub(crate) fn with_cells(rows: usize, columns: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);

        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the grid has no cells at all (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell<P>(&self, pos: P) -> Option<bool>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut bool>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, alive)| (self.index_to_pos(index), *alive))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.enumerate_cells()
            .filter_map(|(pos, alive)| alive.then_some(pos))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| self.cells[row * self.columns..(row + 1) * self.columns].to_vec())
            .collect()
    }

    /// Stamps `pattern` onto this grid with its top left corner at `(row_offset, col_offset)`.
    ///
    /// Dead pattern cells overwrite live board cells too. The grid is modified in place and
    /// returned for chaining. Nothing is written if the pattern does not fit entirely.
    pub fn insert_pattern(
        &mut self,
        pattern: &Grid,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<&mut Self, GridError> {
        if pattern.rows == 0 {
            return Err(GridError::EmptyPattern);
        }

        let fits = |offset: usize, len: usize, bound: usize| {
            offset.checked_add(len).is_some_and(|end| end <= bound)
        };

        if !fits(row_offset, pattern.rows, self.rows)
            || !fits(col_offset, pattern.columns, self.columns)
        {
            return Err(GridError::PatternOutOfBounds {
                pattern_rows: pattern.rows,
                pattern_columns: pattern.columns,
                row_offset,
                col_offset,
                rows: self.rows,
                columns: self.columns,
            });
        }

        for (Position { row, col }, alive) in pattern.enumerate_cells() {
            let index = (row_offset + row) * self.columns + col_offset + col;
            self.cells[index] = alive;
        }

        Ok(self)
    }

    /// Counts the live cells among the eight neighbors of `(row, col)`, wrapping around
    /// the edges. Coordinates past the edge wrap as well.
    ///
    /// On boards narrower than three cells a neighbor can be reached through more than one
    /// offset, and each such offset is counted.
    pub fn count_neighbors(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        Ok(self.alive_neighbor_count(Position { row, col }))
    }

    /// Computes the following generation under Conway's rule (B3/S23).
    ///
    /// Returns a new grid; `self` is left untouched.
    pub fn next_generation(&self) -> Result<Grid, GridError> {
        self.next_generation_with_rule(&Rule::default())
    }

    pub fn next_generation_with_rule(&self, rule: &Rule) -> Result<Grid, GridError> {
        if self.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        Ok(self.step(rule))
    }

    pub(crate) fn step(&self, rule: &Rule) -> Grid {
        let next_cells = self
            .enumerate_cells()
            .map(|(pos, alive)| rule.next_state(alive, self.alive_neighbor_count(pos)))
            .collect();

        Self::with_cells(self.rows, self.columns, next_cells)
    }

    fn alive_neighbor_count(&self, pos: Position) -> usize {
        fn wrap(center: usize, offset: isize, len: usize) -> usize {
            ((center % len) as isize + offset).rem_euclid(len as isize) as usize
        }

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter(|[row_offset, col_offset]| {
                let row = wrap(pos.row, *row_offset, self.rows);
                let col = wrap(pos.col, *col_offset, self.columns);
                self.cells[row * self.columns + col]
            })
            .count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.columns {
            return None;
        }

        Some(col + (row * self.columns))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.columns;
        let col = index % self.columns;
        Position { row, col }
    }
}
