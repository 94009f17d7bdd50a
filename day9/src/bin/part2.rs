use anyhow::{Context, Result};
use clap::Parser;
use day9::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let disk_map = day9::read_disk_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read disk map from given file({}).",
            args.input_path.display()
        )
    })?;

    let checksum = disk_map.defragmented_checksum();
    println!(
        "The filesystem checksum after moving whole files is {}.",
        checksum
    );

    Ok(())
}
