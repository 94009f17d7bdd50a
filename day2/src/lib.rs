use std::{
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
    InvalidLevelText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLevelText(s) => write!(f, "Invalid text({}) for report level.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Report {
    levels: Vec<isize>,
}

impl TryFrom<&str> for Report {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let levels = value
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<isize>()
                    .map_err(|_| Error::InvalidLevelText(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { levels })
    }
}

impl Report {
    pub fn is_safe(&self) -> bool {
        Self::levels_are_safe(&self.levels)
    }

    pub fn is_safe_with_dampener(&self) -> bool {
        if self.is_safe() {
            return true;
        }

        (0..self.levels.len()).any(|skip_ind| {
            let dampened = self
                .levels
                .iter()
                .enumerate()
                .filter(|(ind, _)| *ind != skip_ind)
                .map(|(_, level)| *level)
                .collect::<Vec<_>>();
            Self::levels_are_safe(&dampened)
        })
    }

    fn levels_are_safe(levels: &[isize]) -> bool {
        let all_gaps_gradual = levels
            .windows(2)
            .all(|pair| (1..=3).contains(&(pair[1] - pair[0]).abs()));
        let all_increasing = levels.windows(2).all(|pair| pair[0] < pair[1]);
        let all_decreasing = levels.windows(2).all(|pair| pair[0] > pair[1]);

        all_gaps_gradual && (all_increasing || all_decreasing)
    }
}

pub fn read_reports<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                Report::try_from(s.as_str())
                    .with_context(|| format!("Failed to read report from line {}.", ind + 1))
            })
        })
        .collect()
}
