use std::{
    collections::{HashSet, VecDeque},
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
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} character(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
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

    fn neighbors(&self) -> [Option<Position>; 4] {
        [
            self.r.checked_sub(1).map(|r| Position::new(r, self.c)),
            Some(Position::new(self.r, self.c + 1)),
            Some(Position::new(self.r + 1, self.c)),
            self.c.checked_sub(1).map(|c| Position::new(self.r, c)),
        ]
    }
}

#[derive(Debug)]
pub struct GardenMap {
    plants: Vec<char>,
    row_n: usize,
    col_n: usize,
}

impl GardenMap {
    pub fn total_fence_price(&self) -> usize {
        self.regions()
            .iter()
            .map(|region| region.len() * Self::perimeter(region))
            .sum()
    }

    pub fn total_discounted_fence_price(&self) -> usize {
        self.regions()
            .iter()
            .map(|region| region.len() * Self::side_count(region))
            .sum()
    }

    /// Orthogonally connected same-plant plots, found by flood fill.
    pub fn regions(&self) -> Vec<HashSet<Position>> {
        let mut regions = Vec::new();
        let mut visited = vec![false; self.row_n * self.col_n];
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                if visited[r * self.col_n + c] {
                    continue;
                }

                let region = self.flood_region(Position::new(r, c));
                for pos in &region {
                    visited[pos.r * self.col_n + pos.c] = true;
                }
                regions.push(region);
            }
        }

        regions
    }

    fn flood_region(&self, start: Position) -> HashSet<Position> {
        let plant = self.plant(&start);
        let mut region = HashSet::from([start]);
        let mut leads = VecDeque::from([start]);
        while let Some(pos) = leads.pop_front() {
            for neighbor in pos.neighbors().into_iter().flatten() {
                if self.plant(&neighbor) == plant && region.insert(neighbor) {
                    leads.push_back(neighbor);
                }
            }
        }

        region
    }

    fn perimeter(region: &HashSet<Position>) -> usize {
        region
            .iter()
            .map(|pos| {
                4 - pos
                    .neighbors()
                    .into_iter()
                    .flatten()
                    .filter(|neighbor| region.contains(neighbor))
                    .count()
            })
            .sum()
    }

    /// A region has as many sides as its outline has corners; every corner
    /// shows up in some 2x2 window over the region's cell mask.
    fn side_count(region: &HashSet<Position>) -> usize {
        let in_region = |r: usize, c: usize, dr: usize, dc: usize| {
            r.checked_sub(dr)
                .zip(c.checked_sub(dc))
                .is_some_and(|(r, c)| region.contains(&Position::new(r, c)))
        };

        let max_r = region.iter().map(|pos| pos.r).max().unwrap_or(0);
        let max_c = region.iter().map(|pos| pos.c).max().unwrap_or(0);
        let mut corners = 0;
        for r in 0..=max_r + 1 {
            for c in 0..=max_c + 1 {
                let top_left = in_region(r, c, 1, 1);
                let top_right = in_region(r, c, 1, 0);
                let bottom_left = in_region(r, c, 0, 1);
                let bottom_right = in_region(r, c, 0, 0);
                corners += match [top_left, top_right, bottom_left, bottom_right]
                    .into_iter()
                    .filter(|in_it| *in_it)
                    .count()
                {
                    1 | 3 => 1,
                    2 if top_left == bottom_right => 2,
                    _ => 0,
                };
            }
        }

        corners
    }

    fn plant(&self, pos: &Position) -> Option<char> {
        if pos.r < self.row_n && pos.c < self.col_n {
            self.plants.get(pos.r * self.col_n + pos.c).copied()
        } else {
            None
        }
    }
}

impl TryFrom<&str> for GardenMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut plants = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines() {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            plants.extend(line.chars());
            row_n += 1;
        }

        Ok(Self {
            plants,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }
}

pub fn read_garden_map<P: AsRef<Path>>(path: P) -> Result<GardenMap> {
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

    Ok(GardenMap::try_from(text.as_str())?)
}
