use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{board::Grid, error::GridError};

const DEAD_CELL: char = '.';
const ALIVE_CELL: char = 'O';
const ALIVE_CELL_ALT: char = '*';
const COMMENT_PREFIX: char = '!';

/// Well-known patterns that can be stamped onto a board with [`Grid::insert_pattern`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatternKind {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    LightweightSpaceship,
    RPentomino,
}

struct PatternShape {
    rows: usize,
    columns: usize,
    cells: &'static [(usize, usize)],
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn grid(&self) -> Grid {
        let PatternShape {
            rows,
            columns,
            cells,
        } = self.shape();

        let mut grid = Grid::new(rows, columns);
        for &pos in cells {
            if let Some(cell) = grid.cell_mut(pos) {
                *cell = true;
            }
        }

        grid
    }

    fn shape(&self) -> PatternShape {
        match self {
            PatternKind::Block => PatternShape {
                rows: 2,
                columns: 2,
                cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
            },
            PatternKind::Blinker => PatternShape {
                rows: 1,
                columns: 3,
                cells: &[(0, 0), (0, 1), (0, 2)],
            },
            PatternKind::Toad => PatternShape {
                rows: 2,
                columns: 4,
                cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            },
            PatternKind::Beacon => PatternShape {
                rows: 4,
                columns: 4,
                cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
            },
            // Travels down and to the right, one cell every four generations.
            PatternKind::Glider => PatternShape {
                rows: 3,
                columns: 3,
                cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            },
            // Travels left, two cells every four generations.
            PatternKind::LightweightSpaceship => PatternShape {
                rows: 4,
                columns: 5,
                cells: &[
                    (0, 1),
                    (0, 4),
                    (1, 0),
                    (2, 0),
                    (2, 4),
                    (3, 0),
                    (3, 1),
                    (3, 2),
                    (3, 3),
                ],
            },
            PatternKind::RPentomino => PatternShape {
                rows: 3,
                columns: 3,
                cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
            },
        }
    }
}

impl Grid {
    /// Parses the plaintext pattern format: `.` for dead cells, `O` (or `*`) for live ones,
    /// one line per row.
    ///
    /// Lines starting with `!` are comments. Short lines are padded with dead cells up to
    /// the longest line, so an empty line is an all-dead row.
    pub fn from_plaintext(text: &str) -> Result<Self, GridError> {
        let rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.starts_with(COMMENT_PREFIX))
            .map(|(line_index, line)| parse_plaintext_row(line_index, line.trim_end()))
            .collect::<Result<Vec<_>, _>>()?;

        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns, false);
                row
            })
            .collect();

        Grid::from_rows(rows)
    }
}

fn parse_plaintext_row(line_index: usize, line: &str) -> Result<Vec<bool>, GridError> {
    line.chars()
        .enumerate()
        .map(|(column_index, c)| match c {
            DEAD_CELL => Ok(false),
            ALIVE_CELL | ALIVE_CELL_ALT => Ok(true),
            found => Err(GridError::InvalidCell {
                line: line_index + 1,
                column: column_index + 1,
                found,
            }),
        })
        .collect()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            for alive in row {
                let c = if alive { ALIVE_CELL } else { DEAD_CELL };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
