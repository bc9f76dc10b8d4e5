//! Text instance loader.
//!
//! # Format
//!
//! Whitespace-separated tokens.  Every count is preceded by a free-form
//! label token, which is read and ignored:
//!
//! ```text
//! ROWS 5
//! COLS 5
//! OBSTACLES 2
//! 1 1
//! 2 2
//! URGENCIES 1
//! 4 4 10
//! BASES 1
//! 0 0 0
//! ```
//!
//! | Section     | Entry                   |
//! |-------------|-------------------------|
//! | `OBSTACLES` | `<row> <col>`           |
//! | `URGENCIES` | `<row> <col> <weight>`  |
//! | `BASES`     | `<id> <row> <col>`      |
//!
//! Entries outside the grid are ignored, the same way [`GridBuilder`]
//! ignores them.  Anything after the last base is not read.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use uav_core::{BaseId, Position};

use crate::grid::{Grid, GridBuilder};
use crate::GridError;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Grid`] from an instance file.
pub fn load_grid_file(path: &Path) -> Result<Grid, GridError> {
    let file = std::fs::File::open(path).map_err(GridError::Io)?;
    load_grid_reader(file)
}

/// Like [`load_grid_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice).
pub fn load_grid_reader<R: Read>(mut reader: R) -> Result<Grid, GridError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = Tokens { inner: text.split_whitespace() };

    // ── Dimensions ────────────────────────────────────────────────────────
    let rows: usize = tokens.labelled("row count")?;
    let cols: usize = tokens.labelled("column count")?;
    let mut builder = GridBuilder::new(rows, cols);

    // ── Obstacles ─────────────────────────────────────────────────────────
    let n: usize = tokens.labelled("obstacle count")?;
    for _ in 0..n {
        let pos = tokens.position()?;
        builder.set_obstacle(pos);
    }

    // ── Urgencies ─────────────────────────────────────────────────────────
    let n: usize = tokens.labelled("urgency count")?;
    for _ in 0..n {
        let pos = tokens.position()?;
        let weight: u32 = tokens.value("urgency weight")?;
        builder.set_urgency(pos, weight);
    }

    // ── Bases ─────────────────────────────────────────────────────────────
    let n: usize = tokens.labelled("base count")?;
    for _ in 0..n {
        let id: u32 = tokens.value("base id")?;
        let pos = tokens.position()?;
        builder.add_base(BaseId(id), pos);
    }

    let grid = builder.build();
    tracing::debug!(
        rows,
        cols,
        urgent = grid.urgent_positions().len(),
        bases = grid.bases().len(),
        "instance loaded"
    );
    Ok(grid)
}

// ── Tokenizer ─────────────────────────────────────────────────────────────────

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl Tokens<'_> {
    /// Next token parsed as `T`.
    fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, GridError> {
        let token = self.inner.next().ok_or_else(|| GridError::Parse {
            expected,
            found: "end of input".to_string(),
        })?;
        token.parse().map_err(|_| GridError::Parse {
            expected,
            found: format!("`{token}`"),
        })
    }

    /// Skip a label token, then parse the value after it.
    fn labelled<T: FromStr>(&mut self, expected: &'static str) -> Result<T, GridError> {
        self.inner.next().ok_or_else(|| GridError::Parse {
            expected: "section label",
            found: "end of input".to_string(),
        })?;
        self.value(expected)
    }

    fn position(&mut self) -> Result<Position, GridError> {
        let row = self.value("row")?;
        let col = self.value("column")?;
        Ok(Position::new(row, col))
    }
}
