/// Borrowed, read-only view of a lattice configuration.
///
/// This is what a renderer consumes once per frame; it exposes the grid shape and
/// spin values and nothing that can mutate the simulation.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    rows: usize,
    cols: usize,
    spins: &'a [i8],
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(rows: usize, cols: usize, spins: &'a [i8]) -> Self {
        debug_assert_eq!(spins.len(), rows * cols);
        Self { rows, cols, spins }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> i8 {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) out of bounds"
        );
        self.spins[i * self.cols + j]
    }

    /// Spins of row `i`, left to right.
    pub fn row(&self, i: usize) -> &'a [i8] {
        &self.spins[i * self.cols..(i + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &'a [i8]> + 'a {
        self.spins.chunks_exact(self.cols)
    }

    /// Full row-major spin buffer.
    pub fn spins(&self) -> &'a [i8] {
        self.spins
    }

    /// Owned copy as nested rows.
    pub fn to_grid(&self) -> Vec<Vec<i8>> {
        self.rows_iter().map(<[i8]>::to_vec).collect()
    }
}
