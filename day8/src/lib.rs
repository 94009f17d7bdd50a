use std::{
    collections::{HashMap, HashSet},
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
    r: isize,
    c: isize,
}

impl Position {
    pub fn new(r: isize, c: isize) -> Self {
        Self { r, c }
    }
}

#[derive(Debug)]
pub struct AntennaMap {
    row_n: isize,
    col_n: isize,
    antennas: HashMap<char, Vec<Position>>,
}

impl AntennaMap {
    /// Distinct in-bounds antinodes, one mirror point on each side of every
    /// same-frequency antenna pair.
    pub fn antinode_count(&self) -> usize {
        let mut antinodes = HashSet::new();
        self.for_each_pair(|map, pos0, pos1| {
            let (delta_r, delta_c) = (pos1.r - pos0.r, pos1.c - pos0.c);
            for antinode in [
                Position::new(pos0.r - delta_r, pos0.c - delta_c),
                Position::new(pos1.r + delta_r, pos1.c + delta_c),
            ] {
                if map.contains(&antinode) {
                    antinodes.insert(antinode);
                }
            }
        });

        antinodes.len()
    }

    /// Distinct in-bounds antinodes under resonant harmonics, every grid
    /// point in line with a same-frequency antenna pair.
    pub fn harmonic_antinode_count(&self) -> usize {
        let mut antinodes = HashSet::new();
        self.for_each_pair(|map, pos0, pos1| {
            let (delta_r, delta_c) = (pos1.r - pos0.r, pos1.c - pos0.c);
            let mut walk = |start: Position, step_r: isize, step_c: isize| {
                let mut harmonic = start;
                while map.contains(&harmonic) {
                    antinodes.insert(harmonic);
                    harmonic = Position::new(harmonic.r + step_r, harmonic.c + step_c);
                }
            };
            walk(*pos0, -delta_r, -delta_c);
            walk(*pos1, delta_r, delta_c);
        });

        antinodes.len()
    }

    fn for_each_pair(&self, mut visit: impl FnMut(&Self, &Position, &Position)) {
        for positions in self.antennas.values() {
            for (ind, pos0) in positions.iter().enumerate() {
                for pos1 in &positions[ind + 1..] {
                    visit(self, pos0, pos1);
                }
            }
        }
    }

    fn contains(&self, pos: &Position) -> bool {
        pos.r >= 0 && pos.r < self.row_n && pos.c >= 0 && pos.c < self.col_n
    }
}

impl TryFrom<&str> for AntennaMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut antennas = HashMap::<char, Vec<Position>>::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines() {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            for (ind, c) in line.chars().enumerate() {
                if c != '.' && c != '#' {
                    antennas
                        .entry(c)
                        .or_default()
                        .push(Position::new(row_n, ind as isize));
                }
            }
            row_n += 1;
        }

        Ok(Self {
            row_n,
            col_n: col_n.unwrap_or(0) as isize,
            antennas,
        })
    }
}

pub fn read_antenna_map<P: AsRef<Path>>(path: P) -> Result<AntennaMap> {
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

    Ok(AntennaMap::try_from(text.as_str())?)
}
