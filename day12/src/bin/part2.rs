use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day12::read_garden_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;

    let price = map.total_discounted_fence_price();
    println!(
        "The total price of fencing all regions with the bulk discount is {}.",
        price
    );

    Ok(())
}
