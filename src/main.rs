use anyhow::Result;
use clap::Parser;
use logdiff::areas::comparison::Comparison;

#[derive(Parser)]
#[command(
    name = "logdiff",
    version = "0.1.0",
    about = "Compare two build artifacts ignoring build time and location",
    long_about = "This tool compares two generated text artifacts (build logs, reports) \
    line by line, after stripping the metadata noise that varies between builds: \
    embedded timestamps, file-system paths, and the artifact's own name and version tokens. \
    Differences are reported in classic range-operation-range diff notation.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The first file to compare")]
    file1: String,
    #[arg(index = 2, help = "The second file to compare")]
    file2: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let comparison = Comparison::new(Box::new(std::io::stdout()));
    comparison.compare(&cli.file1, &cli.file2)?;

    Ok(())
}
