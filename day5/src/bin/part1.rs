use anyhow::{Context, Result};
use clap::Parser;
use day5::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (rules, updates) = day5::read_print_queue(&args.input_path).with_context(|| {
        format!(
            "Failed to read print queue from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = day5::ordered_middle_page_sum(&rules, &updates);
    println!(
        "The sum of middle page numbers in correctly-ordered updates is {}.",
        sum
    );

    Ok(())
}
