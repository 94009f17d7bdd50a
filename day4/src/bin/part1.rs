use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let grid = day4::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read letter grid from given file({}).",
            args.input_path.display()
        )
    })?;

    let count = grid.xmas_count();
    println!("XMAS appears {} time(s) in given word search.", count);

    Ok(())
}
