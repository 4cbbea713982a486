use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("pattern has no rows")]
    EmptyPattern,

    #[error(
        "pattern of {pattern_rows}x{pattern_columns} at ({row_offset}, {col_offset}) \
         does not fit in a {rows}x{columns} grid"
    )]
    PatternOutOfBounds {
        pattern_rows: usize,
        pattern_columns: usize,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        columns: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell {found:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("invalid rule {0:?}, expected B/S notation like \"B3/S23\"")]
    InvalidRule(String),
}
