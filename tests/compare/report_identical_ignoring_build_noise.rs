use crate::common::command::{captured_stdout, run_logdiff_command, workdir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_identical_ignoring_timestamps(
    workdir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workdir.path().join("left.log"),
        "step one done 01-01-2024 10:00:00\nall good\n".to_string(),
    ));
    write_file(FileSpec::new(
        workdir.path().join("right.log"),
        "step one done 31-12-2025 23:59:59\nall good\n".to_string(),
    ));

    let actual_output = captured_stdout(workdir.path(), &["left.log", "right.log"]);

    pretty_assertions::assert_eq!(
        actual_output,
        "files identical ignoring build time and location\n"
    );

    Ok(())
}

#[rstest]
fn report_identical_ignoring_name_version_and_paths(
    workdir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workdir.path().join("report-1.2.3.log"),
        "report 1.2.3 written to /home/alice/build/report/out.bin\ndone\n".to_string(),
    ));
    write_file(FileSpec::new(
        workdir.path().join("report-2.0.0.log"),
        "report 2.0.0 written to /srv/ci/jobs/42/report/out.bin\ndone\n".to_string(),
    ));

    let actual_output =
        captured_stdout(workdir.path(), &["report-1.2.3.log", "report-2.0.0.log"]);

    pretty_assertions::assert_eq!(
        actual_output,
        "files identical ignoring build time and location\n"
    );

    Ok(())
}

#[rstest]
fn real_differences_still_surface_next_to_build_noise(
    workdir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workdir.path().join("left.log"),
        "built 01-01-2024 10:00:00\nstatus: ok\n".to_string(),
    ));
    write_file(FileSpec::new(
        workdir.path().join("right.log"),
        "built 02-01-2024 09:30:00\nstatus: failed\n".to_string(),
    ));

    let assertion = run_logdiff_command(workdir.path(), &["left.log", "right.log"])
        .assert()
        .success();
    let actual_output = String::from_utf8(assertion.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(
        actual_output,
        "2c2\n< status: ok\n---\n> status: failed\n"
    );

    Ok(())
}
