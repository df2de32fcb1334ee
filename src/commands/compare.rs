use crate::areas::comparison::Comparison;
use crate::artifacts::diff::chunk::{Chunk, extract_chunks};
use crate::artifacts::diff::diff_source::DiffSource;
use crate::artifacts::diff::lcs_matrix::LcsMatrix;
use colored::Colorize;
use std::io::Write;

const IDENTICAL_MESSAGE: &str = "files identical";
const IDENTICAL_NORMALIZED_MESSAGE: &str = "files identical ignoring build time and location";

impl Comparison {
    /// Compares two artifacts and writes their differences in classic diff
    /// notation.
    ///
    /// Byte-for-byte equal inputs short-circuit before the engine runs.
    /// When the inputs differ only in build noise, every extracted chunk is
    /// empty and the normalized-identical verdict is reported instead of a
    /// diff. Finding differences is not an error: the run succeeds either
    /// way, and only the fatal intake/identity failures propagate.
    pub fn compare(&self, path_a: &str, path_b: &str) -> anyhow::Result<()> {
        let a = DiffSource::from_path(path_a, self.workspace())?;
        let b = DiffSource::from_path(path_b, self.workspace())?;

        if a.lines == b.lines {
            writeln!(self.writer(), "{IDENTICAL_MESSAGE}")?;
            return Ok(());
        }

        let matrix = LcsMatrix::build(&a.normalized, &b.normalized);
        let (chunks, all_equal) = extract_chunks(&a.lines, &b.lines, &matrix);

        for chunk in &chunks {
            self.print_chunk(chunk, &a.lines, &b.lines)?;
        }

        if all_equal {
            writeln!(self.writer(), "{IDENTICAL_NORMALIZED_MESSAGE}")?;
        }

        Ok(())
    }

    /// Renders one chunk: cyan header, deleted lines in red, the `---`
    /// separator when the chunk is a change, added lines in green.
    ///
    /// Body lines carry their original terminators verbatim, so they are
    /// written with `write!` and nothing is appended or stripped.
    fn print_chunk(
        &self,
        chunk: &Chunk,
        lines_a: &[String],
        lines_b: &[String],
    ) -> anyhow::Result<()> {
        let Some(header) = chunk.header() else {
            return Ok(());
        };

        writeln!(self.writer(), "{}", header.cyan())?;

        for line in &lines_a[chunk.start_a..chunk.start_a + chunk.deleted] {
            write!(self.writer(), "{}", format!("< {line}").red())?;
        }

        if chunk.deleted > 0 && chunk.added > 0 {
            writeln!(self.writer(), "---")?;
        }

        for line in &lines_b[chunk.start_b..chunk.start_b + chunk.added] {
            write!(self.writer(), "{}", format!("> {line}").green())?;
        }

        Ok(())
    }
}
