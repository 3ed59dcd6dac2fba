use rand::Rng;

use super::snapshot::Snapshot;
use crate::error::{Error, Result};

/// Periodic 2D spin lattice.
///
/// Spins are stored in a single flat buffer in row-major order: cell `(i, j)`
/// lives at `i * cols + j`. The extents never change after construction and every
/// entry is `+1` or `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    spins: Vec<i8>,
}

#[inline]
fn check_spin(spin: i8) -> Result<i8> {
    match spin {
        1 | -1 => Ok(spin),
        other => Err(Error::InvalidSpinValue(other)),
    }
}

/// Number of cells for a `rows x cols` grid. Both extents must be positive and the
/// product must be addressable as a `Vec` length.
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(n_spins) if n_spins > 0 && n_spins <= isize::MAX as usize => Ok(n_spins),
        _ => Err(Error::InvalidDimension { rows, cols }),
    }
}

impl Lattice {
    /// Random lattice: each spin is independently `+1` or `-1` with equal probability.
    pub fn build<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let n_spins = check_dims(rows, cols)?;
        let spins = (0..n_spins)
            .map(|_| if rng.gen::<f32>() < 0.5 { -1 } else { 1 })
            .collect();
        Ok(Self { rows, cols, spins })
    }

    /// Lattice with every spin set to `spin`.
    pub fn filled(rows: usize, cols: usize, spin: i8) -> Result<Self> {
        let n_spins = check_dims(rows, cols)?;
        let spin = check_spin(spin)?;
        Ok(Self {
            rows,
            cols,
            spins: vec![spin; n_spins],
        })
    }

    /// Lattice from an explicit row-major spin buffer.
    pub fn from_spins(rows: usize, cols: usize, spins: Vec<i8>) -> Result<Self> {
        let n_spins = check_dims(rows, cols)?;
        if spins.len() != n_spins {
            return Err(Error::ShapeMismatch {
                expected: n_spins,
                actual: spins.len(),
            });
        }
        for &s in &spins {
            check_spin(s)?;
        }
        Ok(Self { rows, cols, spins })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    /// Row-major spin buffer.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) out of bounds for {}x{} lattice",
            self.rows,
            self.cols,
        );
        i * self.cols + j
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.spins[self.index(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, spin: i8) -> Result<()> {
        let spin = check_spin(spin)?;
        let idx = self.index(i, j);
        self.spins[idx] = spin;
        Ok(())
    }

    #[inline]
    pub fn flip(&mut self, i: usize, j: usize) {
        let idx = self.index(i, j);
        self.spins[idx] = -self.spins[idx];
    }

    /// Sum of the four nearest-neighbor spins of `(i, j)` with periodic wraparound
    /// on both axes.
    ///
    /// This is the only place boundary conditions are applied. On a 1-wide axis
    /// both neighbors along it are the cell itself.
    #[inline]
    pub fn neighbor_sum(&self, i: usize, j: usize) -> f64 {
        let idx = self.index(i, j);
        let (rows, cols) = (self.rows, self.cols);

        let down = if i + 1 == rows { 0 } else { i + 1 };
        let up = if i == 0 { rows - 1 } else { i - 1 };
        let right = if j + 1 == cols { 0 } else { j + 1 };
        let left = if j == 0 { cols - 1 } else { j - 1 };

        // idx - j strips the column, leaving the row base.
        let row_base = idx - j;
        let sum = self.spins[down * cols + j] as i32
            + self.spins[up * cols + j] as i32
            + self.spins[row_base + right] as i32
            + self.spins[row_base + left] as i32;
        sum as f64
    }

    /// Row-major traversal of all `(row, col)` pairs. Each call starts a fresh pass.
    pub fn cells(&self) -> Cells {
        Cells {
            cols: self.cols,
            next: 0,
            end: self.spins.len(),
        }
    }

    /// Read-only view of the current configuration.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.rows, self.cols, &self.spins)
    }
}

/// Iterator over lattice coordinates in row-major order.
#[derive(Debug, Clone)]
pub struct Cells {
    cols: usize,
    next: usize,
    end: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let flat = self.next;
        self.next += 1;
        Some((flat / self.cols, flat % self.cols))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_build_rejects_empty_extent() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        assert!(matches!(
            Lattice::build(0, 4, &mut rng),
            Err(Error::InvalidDimension { rows: 0, cols: 4 })
        ));
        assert!(matches!(
            Lattice::build(3, 0, &mut rng),
            Err(Error::InvalidDimension { rows: 3, cols: 0 })
        ));
        assert!(matches!(
            Lattice::filled(0, 0, 1),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_build_rejects_oversized_extent() {
        let half = 1usize << (usize::BITS / 2);
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);

        // rows * cols wraps to zero.
        assert!(matches!(
            Lattice::filled(half * 2, half / 2, 1),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Lattice::build(half, half, &mut rng),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Lattice::from_spins(usize::MAX, 2, vec![]),
            Err(Error::InvalidDimension { .. })
        ));

        // Fits in usize but not in a Vec.
        let too_long = isize::MAX as usize + 1;
        assert!(matches!(
            Lattice::filled(too_long, 1, -1),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_build_unbiased() {
        // Chi-square with one degree of freedom; 10.83 is the p = 0.001 cutoff.
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let lat = Lattice::build(200, 200, &mut rng).unwrap();
        let n = lat.n_spins() as f64;
        let up = lat.spins().iter().filter(|&&s| s == 1).count() as f64;
        let down = n - up;
        let expected = n / 2.0;
        let chi2 = (up - expected).powi(2) / expected + (down - expected).powi(2) / expected;
        assert!(chi2 < 10.83, "chi2 = {chi2}");
    }

    #[test]
    fn test_neighbor_sum_single_cell() {
        let up = Lattice::filled(1, 1, 1).unwrap();
        assert_eq!(up.neighbor_sum(0, 0), 4.0);
        let down = Lattice::filled(1, 1, -1).unwrap();
        assert_eq!(down.neighbor_sum(0, 0), -4.0);
    }

    #[test]
    fn test_neighbor_sum_2x2() {
        // Each cell sees its row partner and column partner twice.
        // [ 1  1 ]
        // [-1  1 ]
        let lat = Lattice::from_spins(2, 2, vec![1, 1, -1, 1]).unwrap();
        assert_eq!(lat.neighbor_sum(0, 0), 2.0 * 1.0 + 2.0 * -1.0);
        assert_eq!(lat.neighbor_sum(0, 1), 2.0 * 1.0 + 2.0 * 1.0);
        assert_eq!(lat.neighbor_sum(1, 0), 2.0 * 1.0 + 2.0 * 1.0);
        assert_eq!(lat.neighbor_sum(1, 1), 2.0 * -1.0 + 2.0 * 1.0);
    }

    #[test]
    fn test_neighbor_sum_wraps_edges() {
        // 3x4 lattice, all up except the opposite corner (2,3).
        let mut lat = Lattice::filled(3, 4, 1).unwrap();
        lat.set(2, 3, -1).unwrap();

        // (0,0) couples to (2,0) and (0,3) through the boundary, not to (2,3).
        assert_eq!(lat.neighbor_sum(0, 0), 4.0);
        // (0,3) wraps up to (2,3).
        assert_eq!(lat.neighbor_sum(0, 3), 2.0);
        // (2,0) wraps left to (2,3).
        assert_eq!(lat.neighbor_sum(2, 0), 2.0);
        // (2,3) itself is not its own neighbor.
        assert_eq!(lat.neighbor_sum(2, 3), 4.0);
        // Interior cell adjacent to (2,3).
        assert_eq!(lat.neighbor_sum(1, 3), 2.0);
    }

    #[test]
    fn test_set_rejects_invalid_spin() {
        let mut lat = Lattice::filled(2, 2, 1).unwrap();
        assert!(matches!(lat.set(0, 1, 0), Err(Error::InvalidSpinValue(0))));
        assert!(matches!(lat.set(0, 1, 2), Err(Error::InvalidSpinValue(2))));
        assert_eq!(lat.get(0, 1), 1);
        lat.set(0, 1, -1).unwrap();
        assert_eq!(lat.get(0, 1), -1);

        assert!(matches!(
            Lattice::filled(2, 2, 3),
            Err(Error::InvalidSpinValue(3))
        ));
        assert!(matches!(
            Lattice::from_spins(1, 2, vec![1, 0]),
            Err(Error::InvalidSpinValue(0))
        ));
        assert!(matches!(
            Lattice::from_spins(2, 2, vec![1, -1, 1]),
            Err(Error::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let lat = Lattice::filled(2, 3, 1).unwrap();
        lat.get(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_neighbor_sum_out_of_bounds_panics() {
        let lat = Lattice::filled(2, 3, 1).unwrap();
        lat.neighbor_sum(2, 0);
    }

    #[test]
    fn test_cells_row_major_and_restartable() {
        let lat = Lattice::filled(2, 3, 1).unwrap();
        let first: Vec<_> = lat.cells().collect();
        assert_eq!(first, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(lat.cells().len(), 6);
        let second: Vec<_> = lat.cells().collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_built_spins_are_unit(rows in 1usize..24, cols in 1usize..24, seed in any::<u64>()) {
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            let lat = Lattice::build(rows, cols, &mut rng).unwrap();
            prop_assert_eq!(lat.n_spins(), rows * cols);
            for (i, j) in lat.cells() {
                let s = lat.get(i, j);
                prop_assert!(s == 1 || s == -1);
            }
        }

        #[test]
        fn prop_double_flip_restores(rows in 1usize..12, cols in 1usize..12, seed in any::<u64>()) {
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            let mut lat = Lattice::build(rows, cols, &mut rng).unwrap();
            let before = lat.clone();
            let (i, j) = (seed as usize % rows, (seed >> 32) as usize % cols);
            lat.flip(i, j);
            prop_assert_eq!(lat.get(i, j), -before.get(i, j));
            lat.flip(i, j);
            prop_assert_eq!(lat, before);
        }
    }
}
