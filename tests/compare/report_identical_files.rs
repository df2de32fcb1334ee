use crate::common::command::{captured_stdout, workdir_with_artifacts};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_identical_files(
    #[with("a\nb\n", "a\nb\n")] workdir_with_artifacts: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workdir = workdir_with_artifacts;

    let actual_output = captured_stdout(workdir.path(), &["left.log", "right.log"]);

    pretty_assertions::assert_eq!(actual_output, "files identical\n");

    Ok(())
}
