use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let memory = day3::read_memory(&args.input_path).with_context(|| {
        format!(
            "Failed to read corrupted memory from given file({}).",
            args.input_path.display()
        )
    })?;

    let total = day3::sum_mul_products(&memory);
    println!(
        "The sum of all multiplication results in given memory is {}.",
        total
    );

    Ok(())
}
