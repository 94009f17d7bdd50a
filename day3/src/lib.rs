use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

static MUL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)").unwrap());
static INSTRUCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap());

pub fn read_memory<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))
}

pub fn sum_mul_products(memory: &str) -> u64 {
    MUL_PATTERN
        .captures_iter(memory)
        .map(|caps| caps[1].parse::<u64>().unwrap() * caps[2].parse::<u64>().unwrap())
        .sum()
}

pub fn sum_enabled_mul_products(memory: &str) -> u64 {
    let mut enabled = true;
    let mut total = 0;
    for caps in INSTRUCTION_PATTERN.captures_iter(memory) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ if enabled => {
                total += caps[1].parse::<u64>().unwrap() * caps[2].parse::<u64>().unwrap();
            }
            _ => (),
        }
    }

    total
}
