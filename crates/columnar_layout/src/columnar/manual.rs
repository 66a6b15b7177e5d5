use super::grid::{Cell, CellGrid};
use crate::PlacementHint;
use tracing::warn;

/// Cell constraint carried by a grid node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    /// Exact cell, taken as is
    Cell(Cell),
    /// First free column of a row
    Row(usize),
    /// First free row of a column
    Column(usize),
}

impl Pin {
    /// Pin described by a hint, `None` for automatic placement
    pub fn from_hint(hint: &PlacementHint) -> Option<Self> {
        match (hint.row, hint.column) {
            (Some(row), Some(column)) => Some(Self::Cell(Cell::new(row, column))),
            (Some(row), None) => Some(Self::Row(row)),
            (None, Some(column)) => Some(Self::Column(column)),
            (None, None) => None,
        }
    }
}

/// Resolve a pin to a cell and reserve it
///
/// Exact cells are never checked against earlier pins, so two nodes pinned to
/// the same cell end up on top of each other.
pub fn resolve_pin(grid: &mut CellGrid, pin: Pin) -> Cell {
    let cell = match pin {
        Pin::Cell(cell) => cell,
        Pin::Row(row) => {
            let mut cell = Cell::new(row, 0);
            while grid.is_reserved(cell) {
                cell.column += 1;
            }
            cell
        }
        Pin::Column(column) => {
            let mut cell = Cell::new(0, column);
            while grid.is_reserved(cell) {
                cell.row += 1;
            }
            cell
        }
    };

    if !grid.reserve(cell) {
        warn!("Cell {cell:?} is pinned more than once, nodes will overlap");
    }
    cell
}
