use crate::common::command::{run_logdiff_command, workdir_with_artifacts};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_file_name_has_no_identity(
    workdir_with_artifacts: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workdir = workdir_with_artifacts;
    // The file exists; only its name defeats identity extraction.
    write_file(FileSpec::new(
        workdir.path().join("###.log"),
        "a\nb\n".to_string(),
    ));

    run_logdiff_command(workdir.path(), &["left.log", "###.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot extract a name and version from file name '###.log'",
        ));

    Ok(())
}
