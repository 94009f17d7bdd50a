use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (left_list, right_list) = day1::read_location_lists(&args.input_path).with_context(|| {
        format!(
            "Failed to read location ID lists from given file({}).",
            args.input_path.display()
        )
    })?;

    let distance = day1::total_distance(&left_list, &right_list);
    println!(
        "The total distance between given location ID lists is {}.",
        distance
    );

    Ok(())
}
