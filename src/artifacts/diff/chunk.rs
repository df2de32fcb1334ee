use crate::artifacts::diff::lcs_matrix::LcsMatrix;
use derive_new::new;

/// One contiguous edit region: `deleted` lines removed from the first file
/// starting at `start_a`, `added` lines inserted into the second file
/// starting at `start_b`.
///
/// An empty chunk (`deleted == 0 && added == 0`) only appears as the final
/// chunk and means no further differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Chunk {
    pub start_a: usize,
    pub start_b: usize,
    pub deleted: usize,
    pub added: usize,
}

impl Chunk {
    pub fn is_empty(&self) -> bool {
        self.deleted == 0 && self.added == 0
    }

    /// Classic diff header for this chunk, `None` for the empty chunk.
    ///
    /// A pure addition keys on the 0-based line *before* the insertion
    /// point on the left side, hence the bare `start_a` instead of
    /// `start_a + 1`; pure deletions mirror that on the right side.
    pub fn header(&self) -> Option<String> {
        let range = |from: usize, to: usize| {
            if from == to {
                format!("{from}")
            } else {
                format!("{from},{to}")
            }
        };

        let Chunk {
            start_a: i,
            start_b: j,
            deleted: d,
            added: a,
        } = *self;

        if d > 0 && a > 0 {
            Some(format!("{}c{}", range(i + 1, i + d), range(j + 1, j + a)))
        } else if a > 0 {
            Some(format!("{}a{}", i, range(j + 1, j + a)))
        } else if d > 0 {
            Some(format!("{}d{}", range(i + 1, i + d), j))
        } else {
            None
        }
    }
}

/// Partitions both files into edit chunks by walking the suffix-LCS table.
///
/// At each position the walk decides between deletion, addition, and a
/// one-for-one substitution: when stepping along either single axis keeps
/// the remaining LCS value (a plateau on both), the current lines are off
/// the common subsequence, and the diagonal cell distinguishes a genuine
/// substitution pair from two adjacent independent edits. A position whose
/// value drops on both axes sits on the common subsequence and closes the
/// current chunk.
///
/// Once one side is exhausted the remainder of the other is absorbed as a
/// trailing run of pure deletions or additions, and the final chunk is
/// emitted unconditionally, empty or not.
///
/// Returns the chunks in file order plus the all-equal verdict: true only
/// when every chunk, the final one included, carried no edits.
pub fn extract_chunks(
    orig_a: &[String],
    orig_b: &[String],
    matrix: &LcsMatrix,
) -> (Vec<Chunk>, bool) {
    let mut chunks = Vec::new();
    let mut all_equal = true;

    let (mut i, mut j) = (0usize, 0usize);
    let (mut d, mut a) = (0usize, 0usize);

    while i + d < orig_a.len() && j + a < orig_b.len() {
        let value = matrix.get(i + d, j + a);

        if value == matrix.get(i + d + 1, j + a) && value == matrix.get(i + d, j + a + 1) {
            // Off the common subsequence on both axes; a plateauing
            // diagonal marks the lines as substituting for each other.
            if value == matrix.get(i + d + 1, j + a + 1) {
                a += 1;
            }
            d += 1;
        } else if value == matrix.get(i + d + 1, j + a) {
            d += 1;
        } else if value == matrix.get(i + d, j + a + 1) {
            a += 1;
        } else {
            // On the common subsequence: close the chunk and step over the
            // matched line on both sides.
            let chunk = Chunk::new(i, j, d, a);
            all_equal = all_equal && chunk.is_empty();
            chunks.push(chunk);

            i += d + 1;
            j += a + 1;
            d = 0;
            a = 0;
        }
    }

    if i + d < orig_a.len() {
        d = orig_a.len() - i;
    }
    if j + a < orig_b.len() {
        a = orig_b.len() - j;
    }

    let last = Chunk::new(i, j, d, a);
    all_equal = all_equal && last.is_empty();
    chunks.push(last);

    (chunks, all_equal)
}
