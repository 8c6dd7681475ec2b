//! Board model: a flat, row-major buffer of two-valued cells.

use crate::error::GridError;
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Off,
    On,
}

impl CellState {
    /// Normalize a raw integer. Only `1` is ON; every other value collapses to OFF.
    pub fn from_value(value: i64) -> Self {
        if value == 1 {
            CellState::On
        } else {
            CellState::Off
        }
    }

    /// Numeric value as printed by the text renderer
    pub fn value(self) -> u8 {
        match self {
            CellState::Off => 0,
            CellState::On => 1,
        }
    }

    pub fn is_on(self) -> bool {
        self == CellState::On
    }
}

impl From<bool> for CellState {
    fn from(on: bool) -> Self {
        if on { CellState::On } else { CellState::Off }
    }
}

/// One generation of the board.
///
/// Grids are values: every "modifying" operation returns a new grid and leaves the
/// receiver untouched. Coordinates outside `[0, width) x [0, height)` read as OFF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// All-OFF grid. Zero dimensions are allowed.
    ///
    /// Panics if `width * height` cells cannot be allocated; configured sizes are
    /// bounded by [`crate::config::MAX_BOARD_CELLS`] before they get here.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Off; width.saturating_mul(height)],
        }
    }

    /// Build from a closure evaluated once per coordinate, row by row
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> CellState) -> Self {
        let mut cells = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build from explicit rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<CellState>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow { row: y, expected: width, found: row.len() });
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Build from raw integers in row-major order, normalizing anything but `1` to OFF.
    pub fn from_values(width: usize, height: usize, values: &[i64]) -> Result<Self, GridError> {
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if values.len() != expected {
            return Err(GridError::CellCount { expected, found: values.len() });
        }
        Ok(Self {
            width,
            height,
            cells: values.iter().map(|&v| CellState::from_value(v)).collect(),
        })
    }

    /// Parse the text rendering format: `.` or `0` is OFF, `1` is ON, whitespace is ignored.
    /// Blank lines are skipped so a rendered frame (with its trailing blank line) parses back.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let state = match ch {
                    '.' | '0' => CellState::Off,
                    '1' => CellState::On,
                    other => {
                        return Err(GridError::InvalidChar { line: line_no + 1, ch: other });
                    }
                };
                row.push(state);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Bounded point query; out-of-range coordinates are OFF
    pub fn get(&self, x: i64, y: i64) -> CellState {
        self.index(x, y).map_or(CellState::Off, |i| self.cells[i])
    }

    /// Copy of this grid with `(x, y)` set to `state`.
    /// Out-of-range coordinates leave the copy unchanged.
    pub fn with_cell(&self, x: i64, y: i64, state: CellState) -> Self {
        let mut next = self.clone();
        if let Some(i) = self.index(x, y) {
            next.cells[i] = state;
        }
        next
    }

    /// Like [`Grid::with_cell`] but takes a raw value, normalized with [`CellState::from_value`]
    pub fn with_value(&self, x: i64, y: i64, value: i64) -> Self {
        self.with_cell(x, y, CellState::from_value(value))
    }

    /// Number of ON cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_on()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// One slice per row, `height` of them even when the grid has zero width
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_text(self))
    }
}
