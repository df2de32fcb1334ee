use crate::common::command::{run_logdiff_command, workdir_with_artifacts};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_input_file_is_missing(
    workdir_with_artifacts: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workdir = workdir_with_artifacts;

    run_logdiff_command(workdir.path(), &["absent.log", "right.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file 'absent.log' not found"));

    Ok(())
}
