//! Dense storage for the adjacency matrix.

/// Row-major square matrix of edge weights.
///
/// A zero cell means "no edge between the two vertices". The matrix only
/// ever grows; growing preserves existing cells in place and zero-fills the
/// added row and column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquareMatrix {
    side: usize,
    cells: Vec<u64>,
}

impl SquareMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the matrix, equal to the number of vertices it covers.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, weight: u64) {
        let index = self.index(row, col);
        self.cells[index] = weight;
    }

    /// One full row of the matrix.
    pub fn row(&self, row: usize) -> &[u64] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// Grows the matrix to `side × side`.
    pub fn grow(&mut self, side: usize) {
        if side <= self.side {
            // This routine is only for growing.
            return;
        }

        // Each old row lands at a wider stride in the new storage, leaving
        // the tail of the row and the whole bottom stripe zeroed.
        let mut next = vec![0; side * side];

        for row in 0..self.side {
            let old = row * self.side;
            let new = row * side;
            next[new..new + self.side].copy_from_slice(&self.cells[old..old + self.side]);
        }

        self.side = side;
        self.cells = next;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side && col < self.side);
        row * self.side + col
    }
}
