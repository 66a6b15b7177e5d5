use crate::Vec2;

/// Number of rows and columns of the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
}

impl GridSpec {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells the grid holds, saturating at `usize::MAX`
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    fn smaller(&self) -> usize {
        self.rows.min(self.columns)
    }

    fn larger(&self) -> usize {
        self.rows.max(self.columns)
    }

    // On a square grid both accessors resolve to `rows`
    fn smaller_mut(&mut self) -> &mut usize {
        if self.rows <= self.columns {
            &mut self.rows
        } else {
            &mut self.columns
        }
    }

    fn larger_mut(&mut self) -> &mut usize {
        if self.rows >= self.columns {
            &mut self.rows
        } else {
            &mut self.columns
        }
    }
}

/// Solve the grid shape for `cells` nodes in an area of `area` size
///
/// Overrides are taken as given: when both are set the grid may hold fewer
/// cells than requested. With a single override the other dimension is the
/// smallest that fits every cell. Otherwise the grid follows the aspect ratio
/// of the area, then gets corrected for rounding.
///
/// The area must have non-zero width and height.
pub fn solve_grid_shape(
    cells: usize,
    area: Vec2,
    rows: Option<usize>,
    columns: Option<usize>,
) -> GridSpec {
    match (rows, columns) {
        (Some(rows), Some(columns)) => GridSpec::new(rows, columns),
        (Some(rows), None) => GridSpec::new(rows, cells.div_ceil(rows)),
        (None, Some(columns)) => GridSpec::new(cells.div_ceil(columns), columns),
        (None, None) => {
            // width/height * splits^2 = cells, where splits is the number of
            // times the height gets split. Ratios of extreme f32 sides only
            // stay finite in f64.
            let (width, height) = (f64::from(area.x), f64::from(area.y));
            let splits = (cells as f64 * height / width).sqrt();
            let estimate = GridSpec::new(
                splits.round() as usize,
                (width / height * splits).round() as usize,
            );
            fit_capacity(estimate, cells)
        }
    }
}

/// Correct a rounded grid estimate so it holds `cells` without gross excess
///
/// An oversized grid loses at most one row or column, trying the smaller side
/// first since it removes more cells. An undersized grid grows one step at a
/// time, preferring the larger side, until it holds every cell.
pub fn fit_capacity(mut spec: GridSpec, cells: usize) -> GridSpec {
    if spec.capacity() > cells {
        let (small, large) = (spec.smaller(), spec.larger());
        if (small - 1).saturating_mul(large) >= cells {
            *spec.smaller_mut() = small - 1;
        } else if (large - 1).saturating_mul(small) >= cells {
            *spec.larger_mut() = large - 1;
        }
    } else {
        while spec.capacity() < cells {
            let (small, large) = (spec.smaller(), spec.larger());
            let grown = large.saturating_add(1);
            if grown.saturating_mul(small) >= cells {
                *spec.larger_mut() = grown;
            } else {
                *spec.smaller_mut() = small + 1;
            }
        }
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn square() -> Vec2 {
        Vec2::new(100.0, 100.0)
    }

    #[test]
    fn four_cells_in_a_square_make_two_by_two() {
        assert_eq!(solve_grid_shape(4, square(), None, None), GridSpec::new(2, 2));
    }

    #[test]
    fn follows_the_area_aspect_ratio() {
        assert_eq!(
            solve_grid_shape(10, Vec2::new(300.0, 100.0), None, None),
            GridSpec::new(2, 5)
        );
    }

    #[test]
    fn undersized_estimate_grows_larger_side_first() {
        // sqrt(5) rounds to a 2x2 grid, one more row is enough
        assert_eq!(solve_grid_shape(5, square(), None, None), GridSpec::new(3, 2));
        // 2x5 holds 10, a sixth column reaches 11
        assert_eq!(
            solve_grid_shape(11, Vec2::new(200.0, 100.0), None, None),
            GridSpec::new(2, 6)
        );
    }

    #[test]
    fn oversized_estimate_drops_a_column() {
        // 2x3 estimate for 4 cells, dropping a row leaves 3 so a column goes
        assert_eq!(
            solve_grid_shape(4, Vec2::new(160.0, 100.0), None, None),
            GridSpec::new(2, 2)
        );
    }

    #[test]
    fn oversized_estimate_is_kept_when_no_single_step_fits() {
        assert_eq!(solve_grid_shape(3, square(), None, None), GridSpec::new(2, 2));
        assert_eq!(solve_grid_shape(7, square(), None, None), GridSpec::new(3, 3));
    }

    #[test]
    fn shrink_prefers_the_smaller_side() {
        assert_eq!(fit_capacity(GridSpec::new(3, 4), 8), GridSpec::new(2, 4));
        assert_eq!(fit_capacity(GridSpec::new(4, 3), 8), GridSpec::new(4, 2));
        // Only a single step is taken
        assert_eq!(fit_capacity(GridSpec::new(4, 4), 4), GridSpec::new(3, 4));
    }

    #[test]
    fn grow_stops_at_first_fit() {
        assert_eq!(fit_capacity(GridSpec::new(0, 0), 1), GridSpec::new(1, 1));
        assert_eq!(fit_capacity(GridSpec::new(1, 1), 7), GridSpec::new(4, 2));
        assert_eq!(fit_capacity(GridSpec::new(2, 2), 4), GridSpec::new(2, 2));
    }

    #[test]
    fn single_override_derives_the_other_side() {
        assert_eq!(solve_grid_shape(7, square(), Some(2), None), GridSpec::new(2, 4));
        assert_eq!(solve_grid_shape(7, square(), None, Some(3)), GridSpec::new(3, 3));
        assert_eq!(solve_grid_shape(1, square(), None, Some(5)), GridSpec::new(1, 5));
    }

    #[test]
    fn both_overrides_are_taken_as_is() {
        let spec = solve_grid_shape(10, square(), Some(2), Some(2));
        assert_eq!(spec, GridSpec::new(2, 2));
        assert!(spec.capacity() < 10);
    }

    #[test]
    fn always_holds_every_cell() {
        let areas = [
            square(),
            Vec2::new(1000.0, 10.0),
            Vec2::new(10.0, 1000.0),
            Vec2::new(640.0, 480.0),
            Vec2::new(1.0, 3.0),
        ];
        for area in areas {
            for cells in 1..300 {
                let spec = solve_grid_shape(cells, area, None, None);
                assert!(spec.rows >= 1 && spec.columns >= 1, "{cells} in {area:?}: {spec:?}");
                assert!(spec.capacity() >= cells, "{cells} in {area:?}: {spec:?}");
            }
        }
    }

    #[test]
    fn extreme_areas_do_not_overflow() {
        // cells * height overflows f32 here, the ratio itself is 1
        assert_eq!(
            solve_grid_shape(2, Vec2::new(3.0e38, 3.0e38), None, None),
            GridSpec::new(2, 1)
        );

        // height / width is out of f32 range
        let spec = solve_grid_shape(2, Vec2::new(1.0e-20, 1.0e20), None, None);
        assert!(spec.rows >= 1 && spec.columns >= 1, "{spec:?}");
        assert!(spec.capacity() >= 2, "{spec:?}");
    }

    #[test]
    fn capacity_saturates() {
        assert_eq!(GridSpec::new(usize::MAX, 2).capacity(), usize::MAX);
        assert_eq!(
            fit_capacity(GridSpec::new(usize::MAX, 0), 3),
            GridSpec::new(usize::MAX, 1)
        );
    }
}
