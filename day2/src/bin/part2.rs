use anyhow::{Context, Result};
use clap::Parser;
use day2::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let reports = day2::read_reports(&args.input_path).with_context(|| {
        format!(
            "Failed to read reports from given file({}).",
            args.input_path.display()
        )
    })?;

    let safe_n = reports
        .iter()
        .filter(|report| report.is_safe_with_dampener())
        .count();
    println!(
        "There is(are) {} safe report(s) with the Problem Dampener.",
        safe_n
    );

    Ok(())
}
