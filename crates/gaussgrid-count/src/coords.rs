//! Coordinate extraction for plotting collaborators.

use gaussgrid_core::GaussianInteger;

use crate::config::CountConfig;
use crate::counter::count_with;
use crate::error::Result;

/// Split a sequence of points into parallel `a` and `b` vectors.
///
/// With `prime_only`, non-prime points are skipped. Relative order is kept.
pub fn coord_data<'a, I>(points: I, prime_only: bool) -> (Vec<i32>, Vec<i32>)
where
    I: IntoIterator<Item = &'a GaussianInteger>,
{
    points
        .into_iter()
        .filter(|z| !prime_only || z.is_prime())
        .map(GaussianInteger::coords)
        .unzip()
}

/// Coordinates of every Gaussian prime materialized by `count(size)` on a
/// fresh grid, row by row.
pub fn prime_points(size: f64) -> Result<(Vec<i32>, Vec<i32>)> {
    grid_coords(size, true)
}

/// Coordinates of every point materialized by `count(size)` on a fresh grid.
pub fn grid_points(size: f64) -> Result<(Vec<i32>, Vec<i32>)> {
    grid_coords(size, false)
}

fn grid_coords(size: f64, prime_only: bool) -> Result<(Vec<i32>, Vec<i32>)> {
    let (_, grid) = count_with(size, None, &CountConfig::default())?;
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for row in grid.iter_rows() {
        let (row_x, row_y) = coord_data(row, prime_only);
        xs.extend(row_x);
        ys.extend(row_y);
    }
    Ok((xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_points() -> Vec<GaussianInteger> {
        [(0, 0), (0, 1), (1, 0), (1, 1)]
            .into_iter()
            .map(GaussianInteger::from)
            .collect()
    }

    #[test]
    fn prime_only_keeps_primes_in_order() {
        let points = seed_points();
        assert_eq!(coord_data(&points, true), (vec![1], vec![1]));
    }

    #[test]
    fn all_points_are_kept_without_filter() {
        let points = seed_points();
        assert_eq!(
            coord_data(&points, false),
            (vec![0, 0, 1, 1], vec![0, 1, 0, 1])
        );
    }

    #[test]
    fn order_is_preserved_across_mixed_input() {
        let points: Vec<_> = [(2, 3), (2, 2), (3, 0), (0, 3), (1, 2)]
            .into_iter()
            .map(GaussianInteger::from)
            .collect();
        assert_eq!(coord_data(&points, true), (vec![2, 3, 1], vec![3, 0, 2]));
    }

    #[test]
    fn empty_input() {
        let none: [GaussianInteger; 0] = [];
        let (xs, ys) = coord_data(&none, true);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }

    #[test]
    fn prime_points_small_region() {
        // limit 3 for size 5: primes (1,1), (1,2), (2,1), row by row.
        let (xs, ys) = prime_points(5.0).unwrap();
        assert_eq!(xs, vec![1, 1, 2]);
        assert_eq!(ys, vec![1, 2, 1]);
    }

    #[test]
    fn prime_points_include_primes_beyond_radius() {
        // The grid covers [0, limit)², so corners past the radius show up too.
        // size 9 -> limit 4; (2,3) and (3,2) have norm 13 > 9.
        let (xs, ys) = prime_points(9.0).unwrap();
        let pairs: Vec<_> = xs.into_iter().zip(ys).collect();
        assert!(pairs.contains(&(3, 0)));
        assert!(pairs.contains(&(2, 3)));
        assert!(!pairs.contains(&(0, 3)));
    }

    #[test]
    fn grid_points_cover_square() {
        let (xs, ys) = grid_points(8.0).unwrap();
        assert_eq!(xs.len(), 9);
        assert_eq!(ys.len(), 9);
    }
}
