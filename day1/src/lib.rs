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
    InvalidLocationId(String),
    MissingLocationId(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLocationId(s) => write!(f, "Invalid text({}) for location ID.", s),
            Error::MissingLocationId(found_n) => write!(
                f,
                "Expect two location IDs in each line, given {}.",
                found_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_location_lists<P: AsRef<Path>>(path: P) -> Result<(Vec<u64>, Vec<u64>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut left_list = Vec::new();
    let mut right_list = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let (left_id, right_id) = read_id_pair(&s)
            .with_context(|| format!("Failed to read location IDs from line {}.", ind + 1))?;
        left_list.push(left_id);
        right_list.push(right_id);
    }

    Ok((left_list, right_list))
}

fn read_id_pair(s: &str) -> Result<(u64, u64), Error> {
    let mut ids = s.split_ascii_whitespace().map(|text| {
        text.parse::<u64>()
            .map_err(|_| Error::InvalidLocationId(text.to_string()))
    });
    match (ids.next(), ids.next()) {
        (Some(left), Some(right)) => Ok((left?, right?)),
        (Some(_), None) => Err(Error::MissingLocationId(1)),
        _ => Err(Error::MissingLocationId(0)),
    }
}

pub fn total_distance(left_list: &[u64], right_list: &[u64]) -> u64 {
    let mut left_sorted = left_list.to_vec();
    let mut right_sorted = right_list.to_vec();
    left_sorted.sort_unstable();
    right_sorted.sort_unstable();

    left_sorted
        .iter()
        .zip(right_sorted.iter())
        .map(|(left_id, right_id)| left_id.abs_diff(*right_id))
        .sum()
}

pub fn similarity_score(left_list: &[u64], right_list: &[u64]) -> u64 {
    let mut right_counts = HashMap::new();
    for id in right_list {
        *right_counts.entry(*id).or_insert(0u64) += 1;
    }

    left_list
        .iter()
        .map(|id| id * right_counts.get(id).copied().unwrap_or(0))
        .sum()
}
