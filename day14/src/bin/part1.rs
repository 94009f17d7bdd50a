use anyhow::{Context, Result};
use clap::Parser;
use day14::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let robots = day14::read_robots(&args.input_path).with_context(|| {
        format!(
            "Failed to read robots from given file({}).",
            args.input_path.display()
        )
    })?;

    let factor = day14::safety_factor(&robots, args.map_width, args.map_height, 100);
    println!("The safety factor after 100 seconds is {}.", factor);

    Ok(())
}
