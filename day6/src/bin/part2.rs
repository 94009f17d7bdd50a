use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let lab = day6::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let loop_n = lab.loop_obstacle_count();
    println!(
        "There is(are) {} position(s) where a new obstruction traps the guard in a loop.",
        loop_n
    );

    Ok(())
}
