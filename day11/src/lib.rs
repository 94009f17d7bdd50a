use std::{
    collections::HashMap,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    EmptyFile,
    InvalidStoneText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyFile => write!(
                f,
                "Can't read stones from empty file, expect one line in it."
            ),
            Error::InvalidStoneText(s) => write!(f, "Invalid text({}) for stone.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Stones with equal numbers evolve identically, so one blink maps a
/// number-to-count table to the next table instead of a growing list.
pub fn stone_count_after_blinks(stones: &[u64], blink_n: usize) -> u64 {
    let mut stone_counts = HashMap::<u64, u64>::new();
    for stone in stones {
        *stone_counts.entry(*stone).or_insert(0) += 1;
    }

    for _ in 0..blink_n {
        let mut next_counts = HashMap::with_capacity(stone_counts.len());
        for (stone, count) in &stone_counts {
            match blink_stone(*stone) {
                (left, Some(right)) => {
                    *next_counts.entry(left).or_insert(0) += count;
                    *next_counts.entry(right).or_insert(0) += count;
                }
                (changed, None) => *next_counts.entry(changed).or_insert(0) += count,
            }
        }

        stone_counts = next_counts;
    }

    stone_counts.values().sum()
}

fn blink_stone(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }

    if let Some((left, right)) = split_digits(stone) {
        (left, Some(right))
    } else {
        (stone * 2024, None)
    }
}

fn split_digits(n: u64) -> Option<(u64, u64)> {
    let mut digit_n = 1;
    let mut bound = 10;
    while bound <= n {
        bound *= 10;
        digit_n += 1;
    }

    if digit_n % 2 == 0 {
        let split_factor = 10u64.pow(digit_n / 2);
        Some((n / split_factor, n % split_factor))
    } else {
        None
    }
}

pub fn read_stones<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let s = reader
        .lines()
        .next()
        .ok_or(Error::EmptyFile)?
        .with_context(|| {
            format!(
                "Failed to read the first line of given file({}).",
                path.as_ref().display()
            )
        })?;
    s.split_ascii_whitespace()
        .map(|text| {
            text.parse::<u64>()
                .map_err(|_| Error::InvalidStoneText(text.to_string()).into())
        })
        .collect()
}
