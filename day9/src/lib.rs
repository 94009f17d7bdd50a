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
    EmptyFile,
    InvalidDigit(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyFile => write!(
                f,
                "Can't read disk map from empty file, expect one line in it."
            ),
            Error::InvalidDigit(c) => write!(f, "Invalid character({}) in disk map text.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct DiskMap {
    // One entry per block, file ID or free.
    blocks: Vec<Option<usize>>,
    files: Vec<Span>,
    frees: Vec<Span>,
}

impl TryFrom<&str> for DiskMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut blocks = Vec::new();
        let mut files = Vec::new();
        let mut frees = Vec::new();
        for (ind, c) in value.chars().enumerate() {
            let len = c.to_digit(10).ok_or(Error::InvalidDigit(c))? as usize;
            let span = Span {
                start: blocks.len(),
                len,
            };
            if ind % 2 == 0 {
                let file_id = files.len();
                files.push(span);
                blocks.extend(std::iter::repeat(Some(file_id)).take(len));
            } else {
                frees.push(span);
                blocks.extend(std::iter::repeat(None).take(len));
            }
        }

        Ok(Self {
            blocks,
            files,
            frees,
        })
    }
}

impl DiskMap {
    /// Checksum after moving blocks one at a time from the disk end into the
    /// leftmost free block.
    pub fn compacted_checksum(&self) -> u64 {
        let mut blocks = self.blocks.clone();
        let mut left = 0;
        let mut right = blocks.len().saturating_sub(1);
        while left < right {
            if blocks[left].is_some() {
                left += 1;
            } else if blocks[right].is_none() {
                right -= 1;
            } else {
                blocks.swap(left, right);
            }
        }

        blocks
            .iter()
            .enumerate()
            .map(|(ind, id)| ind as u64 * id.unwrap_or(0) as u64)
            .sum()
    }

    /// Checksum after moving whole files, in decreasing ID order, each into
    /// the leftmost free span that fits and sits left of the file.
    pub fn defragmented_checksum(&self) -> u64 {
        let mut files = self.files.clone();
        let mut frees = self.frees.clone();
        for file in files.iter_mut().rev() {
            let Some(free) = frees
                .iter_mut()
                .take_while(|free| free.start < file.start)
                .find(|free| free.len >= file.len)
            else {
                continue;
            };

            file.start = free.start;
            free.start += file.len;
            free.len -= file.len;
        }

        files
            .iter()
            .enumerate()
            .map(|(file_id, file)| {
                // file_id * (start + start+1 + ... + start+len-1)
                let block_ind_sum = file.len * file.start + file.len * file.len.saturating_sub(1) / 2;
                file_id as u64 * block_ind_sum as u64
            })
            .sum()
    }
}

pub fn read_disk_map<P: AsRef<Path>>(path: P) -> Result<DiskMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .next()
        .ok_or(Error::EmptyFile)?
        .with_context(|| {
            format!(
                "Failed to read the first line of given file({}).",
                path.as_ref().display()
            )
        })
        .and_then(|s| {
            DiskMap::try_from(s.trim_end())
                .with_context(|| format!("Failed to parse disk map from given text({}).", s))
        })
}
