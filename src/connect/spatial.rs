//! Grid-based spatial index for cutoff neighbor search.

use std::collections::HashMap;

use super::error::Error;

/// Uniform cubic grid of atom indices.
///
/// With the cell edge equal to the search radius, every neighbor of a query
/// point lies in the query's cell or one of its 26 surrounding cells.
#[derive(Debug)]
pub struct SpatialGrid {
    inv_cell_size: f64,
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    /// Fails with [`Error::InvalidCutoff`] unless `cell_size` is finite and positive.
    pub fn new(cell_size: f64) -> Result<Self, Error> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(Error::InvalidCutoff { value: cell_size });
        }
        Ok(Self {
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        })
    }

    /// Cell of `pos`. Float-to-int casts saturate, so coordinates far outside
    /// the `i64` cell range collapse onto the outermost cells.
    fn cell_coords(&self, pos: [f64; 3]) -> (i64, i64, i64) {
        (
            (pos[0] * self.inv_cell_size).floor() as i64,
            (pos[1] * self.inv_cell_size).floor() as i64,
            (pos[2] * self.inv_cell_size).floor() as i64,
        )
    }

    pub fn insert(&mut self, idx: usize, pos: [f64; 3]) {
        let cell = self.cell_coords(pos);
        self.cells.entry(cell).or_default().push(idx);
    }

    /// Visits every stored index in the (up to) 27 cells around `query`.
    ///
    /// Candidates are not distance-filtered; callers apply their own test.
    /// Neighbor cells past the end of the `i64` range do not exist and are skipped.
    pub fn for_each_candidate(&self, query: [f64; 3], mut visit: impl FnMut(usize)) {
        let (cx, cy, cz) = self.cell_coords(query);
        for dx in -1..=1 {
            let Some(x) = cx.checked_add(dx) else { continue };
            for dy in -1..=1 {
                let Some(y) = cy.checked_add(dy) else { continue };
                for dz in -1..=1 {
                    let Some(z) = cz.checked_add(dz) else { continue };
                    if let Some(indices) = self.cells.get(&(x, y, z)) {
                        indices.iter().for_each(|&idx| visit(idx));
                    }
                }
            }
        }
    }

    #[cfg(test)]
    fn candidates(&self, query: [f64; 3]) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_candidate(query, |idx| out.push(idx));
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid() {
        let grid = SpatialGrid::new(2.0).unwrap();
        assert!(grid.candidates([0.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn neighbor_cells_are_visited() {
        let mut grid = SpatialGrid::new(2.0).unwrap();
        grid.insert(0, [1.0, 0.0, 0.0]);
        grid.insert(1, [-1.5, 0.0, 0.0]);
        grid.insert(2, [0.0, 3.9, 0.0]);
        assert_eq!(grid.candidates([0.1, 0.1, 0.1]), vec![0, 1, 2]);
    }

    #[test]
    fn far_cells_are_skipped() {
        let mut grid = SpatialGrid::new(2.0).unwrap();
        grid.insert(0, [4.5, 0.0, 0.0]);
        assert!(grid.candidates([0.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn negative_coordinates_floor_correctly() {
        let mut grid = SpatialGrid::new(1.0).unwrap();
        grid.insert(0, [-0.1, -0.1, -0.1]);
        assert_eq!(grid.candidates([0.05, 0.05, 0.05]), vec![0]);
        assert!(grid.candidates([1.5, 1.5, 1.5]).is_empty());
    }

    #[test]
    fn non_positive_or_non_finite_cell_size_is_rejected() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SpatialGrid::new(size),
                Err(Error::InvalidCutoff { .. })
            ));
        }
    }

    #[test]
    fn saturated_cells_do_not_overflow() {
        let mut grid = SpatialGrid::new(1.0).unwrap();
        grid.insert(0, [f64::MAX, f64::MAX, 0.0]);
        grid.insert(1, [-f64::MAX, 0.0, 0.0]);
        grid.insert(2, [f64::INFINITY, 0.0, 0.0]);

        assert_eq!(grid.candidates([f64::MAX, f64::MAX, 0.0]), vec![0]);
        assert_eq!(grid.candidates([-f64::MAX, 0.0, 0.0]), vec![1]);
        assert_eq!(grid.candidates([1e300, 0.0, 0.0]), vec![2]);
    }
}
