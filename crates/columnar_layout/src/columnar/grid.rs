use super::shape::GridSpec;
use crate::{BoundingBox, Point, Vec2};
use std::collections::HashSet;
use tracing::warn;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Uniform cells covering the bounding box, with a reservation map
///
/// Cells past the last row are valid: they extend the grid downwards with the
/// same cell size. They are only reached when the grid was forced smaller
/// than the number of nodes it holds.
#[derive(Debug, Clone)]
pub struct CellGrid {
    spec: GridSpec,
    origin: Point,
    cell_size: Vec2,
    reserved: HashSet<Cell>,
    cursor: Cell,
}

impl CellGrid {
    /// Split `bounds` into `spec` cells
    ///
    /// With `avoid_overlap`, every cell grows to at least `max_node_size` so
    /// the largest node fits, even if the grid then spills out of `bounds`.
    pub fn new(
        spec: GridSpec,
        bounds: &BoundingBox,
        avoid_overlap: bool,
        max_node_size: Vec2,
    ) -> Self {
        let mut cell_size = Vec2::new(
            bounds.width / spec.columns as f32,
            bounds.height / spec.rows as f32,
        );
        if avoid_overlap {
            cell_size = cell_size.max(max_node_size);
        }

        Self {
            spec,
            origin: bounds.origin(),
            cell_size,
            reserved: HashSet::new(),
            cursor: Cell::new(0, 0),
        }
    }

    /// Shift every cell down by `offset`
    pub fn with_vertical_offset(mut self, offset: f32) -> Self {
        self.origin.y += offset;
        self
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Mark a cell as occupied, returns false if it already was
    pub fn reserve(&mut self, cell: Cell) -> bool {
        self.reserved.insert(cell)
    }

    pub fn is_reserved(&self, cell: Cell) -> bool {
        self.reserved.contains(&cell)
    }

    /// Cell following `cell` in row-major order
    pub fn successor(&self, cell: Cell) -> Cell {
        if cell.column + 1 >= self.spec.columns {
            Cell::new(cell.row + 1, 0)
        } else {
            Cell::new(cell.row, cell.column + 1)
        }
    }

    /// First free cell at or after `start` in row-major order
    pub fn next_free(&self, start: Cell) -> Cell {
        let mut cell = start;
        while self.is_reserved(cell) {
            cell = self.successor(cell);
        }
        cell
    }

    /// Reserve the next free cell after the previously taken one
    ///
    /// The cursor is shared by every call on this grid, so automatically
    /// placed nodes fill the grid in the order they are taken.
    pub fn take_next(&mut self) -> Cell {
        let cell = self.next_free(self.cursor);
        if cell.row >= self.spec.rows {
            warn!(
                "Grid of {}x{} is full, placing a node in overflow cell {cell:?}",
                self.spec.rows, self.spec.columns
            );
        }
        self.reserve(cell);
        self.cursor = self.successor(cell);
        cell
    }

    /// Center of a cell in layout coordinates
    pub fn center(&self, cell: Cell) -> Point {
        Point::new(
            self.origin.x + cell.column as f32 * self.cell_size.x + self.cell_size.x / 2.0,
            self.origin.y + cell.row as f32 * self.cell_size.y + self.cell_size.y / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn grid(rows: usize, columns: usize) -> CellGrid {
        CellGrid::new(
            GridSpec::new(rows, columns),
            &BoundingBox::new(0.0, 0.0, 300.0, 200.0),
            false,
            Vec2::zero(),
        )
    }

    #[test]
    fn cells_split_the_box_evenly() {
        let grid = grid(2, 3);
        assert_eq!(grid.cell_size(), Vec2::new(100.0, 100.0));
        assert_eq!(grid.center(Cell::new(0, 0)), Point::new(50.0, 50.0));
        assert_eq!(grid.center(Cell::new(1, 2)), Point::new(250.0, 150.0));
    }

    #[test]
    fn avoid_overlap_grows_cells_to_the_largest_node() {
        let bounds = BoundingBox::new(10.0, 20.0, 300.0, 200.0);
        let spec = GridSpec::new(2, 3);
        let node = Vec2::new(40.0, 150.0);

        let packed = CellGrid::new(spec, &bounds, false, node);
        assert_eq!(packed.cell_size(), Vec2::new(100.0, 100.0));

        let spread = CellGrid::new(spec, &bounds, true, node);
        assert_eq!(spread.cell_size(), Vec2::new(100.0, 150.0));
        assert_eq!(spread.center(Cell::new(1, 0)), Point::new(60.0, 245.0));
    }

    #[test]
    fn vertical_offset_moves_every_cell() {
        let grid = grid(2, 3).with_vertical_offset(40.0);
        assert_eq!(grid.center(Cell::new(0, 1)), Point::new(150.0, 90.0));
    }

    #[test]
    fn take_next_walks_row_major_once() {
        let mut grid = grid(2, 3);
        let taken: Vec<_> = (0..6).map(|_| grid.take_next()).collect();
        let expected: Vec<_> = (0..2)
            .flat_map(|row| (0..3).map(move |column| Cell::new(row, column)))
            .collect();
        assert_eq!(taken, expected);
        assert!(taken.iter().all(|&cell| grid.is_reserved(cell)));
    }

    #[test]
    fn take_next_skips_reserved_cells() {
        let mut grid = grid(2, 2);
        grid.reserve(Cell::new(0, 0));
        grid.reserve(Cell::new(1, 0));

        assert_eq!(grid.take_next(), Cell::new(0, 1));
        assert_eq!(grid.take_next(), Cell::new(1, 1));
    }

    #[test]
    fn full_grid_spills_into_the_next_row() {
        let mut grid = grid(1, 2);
        grid.take_next();
        grid.take_next();
        let overflow = grid.take_next();
        assert_eq!(overflow, Cell::new(1, 0));
        assert_eq!(grid.center(overflow), Point::new(75.0, 300.0));
    }

    #[test]
    fn reserve_reports_duplicates() {
        let mut grid = grid(2, 2);
        assert!(grid.reserve(Cell::new(1, 1)));
        assert!(!grid.reserve(Cell::new(1, 1)));
        assert_eq!(grid.next_free(Cell::new(1, 1)), Cell::new(2, 0));
    }
}
