use anyhow::{Context, Result};
use clap::Parser;
use day11::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let stones = day11::read_stones(&args.input_path).with_context(|| {
        format!(
            "Failed to read stones from given file({}).",
            args.input_path.display()
        )
    })?;

    let count = day11::stone_count_after_blinks(&stones, 75);
    println!("There will be {} stone(s) after blinking 75 times.", count);

    Ok(())
}
