use anyhow::{Context, Result};
use clap::Parser;
use day15::{CLIArgs, Warehouse};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (map_text, moves) = day15::read_document(&args.input_path).with_context(|| {
        format!(
            "Failed to read warehouse document from given file({}).",
            args.input_path.display()
        )
    })?;
    let mut warehouse = Warehouse::try_from(map_text.as_str()).with_context(|| {
        format!(
            "Failed to parse warehouse map from given file({}).",
            args.input_path.display()
        )
    })?;

    warehouse.apply_moves(&moves);
    println!(
        "The sum of all boxes' GPS coordinates after the robot finishes is {}.",
        warehouse.gps_sum()
    );

    Ok(())
}
