use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day8::read_antenna_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read antenna map from given file({}).",
            args.input_path.display()
        )
    })?;

    let count = map.antinode_count();
    println!(
        "There is(are) {} unique location(s) containing an antinode.",
        count
    );

    Ok(())
}
