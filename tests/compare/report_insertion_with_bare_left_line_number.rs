use crate::common::command::{captured_stdout, workdir_with_artifacts};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_insertion_with_bare_left_line_number(
    #[with("a\nb\n", "a\nb\nc\n")] workdir_with_artifacts: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workdir = workdir_with_artifacts;

    let actual_output = captured_stdout(workdir.path(), &["left.log", "right.log"]);

    // The left side of an `a` header is the line *before* the insertion
    // point, so it stays bare and 0-based.
    pretty_assertions::assert_eq!(actual_output, "2a3\n> c\n");

    Ok(())
}
