use anyhow::{Context, Result};
use clap::Parser;
use day7::{CLIArgs, Operator};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let equations = day7::read_equations(&args.input_path).with_context(|| {
        format!(
            "Failed to read calibration equations from given file({}).",
            args.input_path.display()
        )
    })?;

    let total = day7::total_calibration(&equations, &[Operator::Add, Operator::Multiply]);
    println!("The total calibration result is {}.", total);

    Ok(())
}
