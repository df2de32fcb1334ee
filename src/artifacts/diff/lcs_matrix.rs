/// Suffix-LCS table between two line sequences.
///
/// `get(i, j)` is the length of the longest common subsequence of `a[i..]`
/// and `b[j..]`; the last row and last column stay zero. The table is one
/// flat preallocated buffer filled backward from the far corner, so no
/// resizing happens mid-computation.
///
/// Line equality is exact string equality; callers pass normalized lines.
/// O(n·m) time and space, with no enforced upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl LcsMatrix {
    pub fn build(a: &[String], b: &[String]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut matrix = Self {
            cells: vec![0; rows * cols],
            rows,
            cols,
        };

        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                let value = if a[i] == b[j] {
                    matrix.get(i + 1, j + 1) + 1
                } else {
                    matrix.get(i + 1, j).max(matrix.get(i, j + 1))
                };
                matrix.set(i, j, value);
            }
        }

        matrix
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
