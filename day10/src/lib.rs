use std::{
    collections::HashSet,
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
    InconsistentRow(usize, usize),
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} character(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) in height map text.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        let up = self.r.checked_sub(1).map(|r| Position::new(r, self.c));
        let left = self.c.checked_sub(1).map(|c| Position::new(self.r, c));
        let right = Some(Position::new(self.r, self.c + 1));
        let down = Some(Position::new(self.r + 1, self.c));

        [up, right, down, left].into_iter().flatten()
    }
}

const TRAIL_TOP: u8 = 9;

#[derive(Debug)]
pub struct HeightMap {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl HeightMap {
    pub fn trailheads(&self) -> Vec<Position> {
        (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| Position::new(r, c)))
            .filter(|pos| self.height(pos) == Some(0))
            .collect()
    }

    /// How many distinct top cells this trailhead can reach.
    pub fn trailhead_score(&self, trailhead: &Position) -> usize {
        let mut frontier = HashSet::from([*trailhead]);
        for height in 1..=TRAIL_TOP {
            frontier = frontier
                .iter()
                .flat_map(|pos| pos.neighbors())
                .filter(|pos| self.height(pos) == Some(height))
                .collect();
        }

        frontier.len()
    }

    /// How many distinct trails lead from this trailhead to any top cell.
    pub fn trailhead_rating(&self, trailhead: &Position) -> usize {
        let mut leads = vec![*trailhead];
        for height in 1..=TRAIL_TOP {
            leads = leads
                .iter()
                .flat_map(|pos| pos.neighbors())
                .filter(|pos| self.height(pos) == Some(height))
                .collect();
        }

        leads.len()
    }

    pub fn total_score(&self) -> usize {
        self.trailheads()
            .iter()
            .map(|trailhead| self.trailhead_score(trailhead))
            .sum()
    }

    pub fn total_rating(&self) -> usize {
        self.trailheads()
            .iter()
            .map(|trailhead| self.trailhead_rating(trailhead))
            .sum()
    }

    fn height(&self, pos: &Position) -> Option<u8> {
        if pos.r < self.row_n && pos.c < self.col_n {
            self.heights.get(pos.r * self.col_n + pos.c).copied()
        } else {
            None
        }
    }
}

impl TryFrom<&str> for HeightMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut heights = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines() {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            for c in line.chars() {
                let height = c.to_digit(10).ok_or(Error::InvalidChar(c))?;
                heights.push(height as u8);
            }
            row_n += 1;
        }

        Ok(Self {
            heights,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }
}

pub fn read_height_map<P: AsRef<Path>>(path: P) -> Result<HeightMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut text = String::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        text.push_str(&s);
        text.push('\n');
    }

    Ok(HeightMap::try_from(text.as_str())?)
}
