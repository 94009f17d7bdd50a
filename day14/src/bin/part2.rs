use anyhow::{bail, Context, Result};
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

    let Some(seconds) = day14::first_non_overlapping_second(&robots, args.map_width, args.map_height)
    else {
        bail!("No second within one motion period leaves all robots on distinct tiles.");
    };

    println!(
        "The robots first stand on all-distinct tiles after {} second(s).",
        seconds
    );
    print!(
        "{}",
        day14::render(&robots, args.map_width, args.map_height, seconds)
    );

    Ok(())
}
