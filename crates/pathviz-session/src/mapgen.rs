//! Random wall scattering.
//!
//! The grid is reset, every cell becomes a wall with a fixed probability,
//! and the two endpoints are dropped on distinct open cells.

use pathviz_core::{Cell, Coord, Grid};
use rand::Rng;

/// Default probability of a cell turning into a wall.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Wall generator over a caller-provided random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reset `grid` and turn each cell into a wall with probability
    /// `density`, clamped to `0.0..=1.0`. Returns the number of walls.
    pub fn scatter_walls(&mut self, grid: &mut Grid, density: f64) -> usize {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        grid.fill(Cell::Empty);
        let mut walls = 0;
        for c in grid.size() {
            if self.rng.random_bool(density) && grid.set(c, Cell::Wall).is_ok() {
                walls += 1;
            }
        }
        walls
    }

    /// Place `Start` and `End` on two distinct open cells chosen uniformly.
    ///
    /// Returns `None`, leaving the grid untouched, if fewer than two open
    /// cells exist.
    pub fn place_endpoints(&mut self, grid: &mut Grid) -> Option<(Coord, Coord)> {
        let open: Vec<Coord> = grid
            .iter()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(c, _)| c)
            .collect();
        if open.len() < 2 {
            return None;
        }
        let si = self.rng.random_range(0..open.len());
        let mut ei = self.rng.random_range(0..open.len() - 1);
        if ei >= si {
            ei += 1;
        }
        let (start, end) = (open[si], open[ei]);
        grid.set(start, Cell::Start).ok()?;
        grid.set(end, Cell::End).ok()?;
        Some((start, end))
    }
}

/// Scatter walls over `grid` and place both endpoints.
///
/// On `None` the grid holds only walls and empty cells, with no endpoint.
pub fn generate_walls(grid: &mut Grid, rng: &mut impl Rng, density: f64) -> Option<(Coord, Coord)> {
    let mut mg = MapGen::new(rng);
    let walls = mg.scatter_walls(grid, density);
    let endpoints = mg.place_endpoints(grid);
    log::debug!(
        "scattered {} walls over {} cells, endpoints {:?}",
        walls,
        grid.size().len(),
        endpoints
    );
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn endpoints_are_distinct_and_open() {
        let mut grid = Grid::new(18, 48).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let (s, e) = generate_walls(&mut grid, &mut rng, DEFAULT_DENSITY).unwrap();
            assert_ne!(s, e);
            assert_eq!(grid.cell_at(s), Some(Cell::Start));
            assert_eq!(grid.cell_at(e), Some(Cell::End));
            assert_eq!(grid.count(Cell::Start), 1);
            assert_eq!(grid.count(Cell::End), 1);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(10, 10).unwrap();
        let mut b = Grid::new(10, 10).unwrap();
        let ea = generate_walls(&mut a, &mut StdRng::seed_from_u64(42), 0.3);
        let eb = generate_walls(&mut b, &mut StdRng::seed_from_u64(42), 0.3);
        assert_eq!(ea, eb);
        assert_eq!(a, b);
    }

    #[test]
    fn density_extremes() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_walls(&mut grid, &mut rng, 0.0).is_some());
        assert_eq!(grid.count(Cell::Wall), 0);

        assert_eq!(generate_walls(&mut grid, &mut rng, 1.0), None);
        assert_eq!(grid.count(Cell::Wall), 16);

        let walls = MapGen::new(&mut rng).scatter_walls(&mut grid, 7.5);
        assert_eq!(walls, 16);
    }

    #[test]
    fn two_open_cells_are_enough() {
        let mut grid = Grid::new(1, 2).unwrap();
        let mut mg = MapGen::new(StdRng::seed_from_u64(3));
        let (s, e) = mg.place_endpoints(&mut grid).unwrap();
        assert_ne!(s, e);
        assert_eq!(grid.count(Cell::Empty), 0);
    }
}
