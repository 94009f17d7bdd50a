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
use rayon::prelude::*;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(char),
    MultipleGuards(Position, Position),
    NoGuard,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => {
                write!(f, "Invalid character({}) in laboratory map text.", c)
            }
            Error::MultipleGuards(pos0, pos1) => write!(
                f,
                "Found multiple guards({}, {}) in given laboratory, expect one only.",
                pos0, pos1
            ),
            Error::NoGuard => write!(f, "There's no guard in given laboratory, but expect one."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn along(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Guard {
    pos: Position,
    dir: Direction,
}

impl Guard {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    fn ahead_pos(&self) -> Option<Position> {
        self.pos.along(self.dir)
    }

    fn turn_right(&mut self) {
        self.dir = self.dir.turn_right();
    }
}

// Obstacles never change during a patrol, so one parsed laboratory can back
// any number of simulation runs; the guard is the only moving state.
pub struct Laboratory {
    obstacles: Vec<bool>,
    row_n: usize,
    col_n: usize,
    guard: Guard,
}

impl Laboratory {
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Every distinct position the guard occupies before walking off the map.
    pub fn patrol_path(&self) -> HashSet<Position> {
        let mut guard = self.guard;
        let mut visited = HashSet::new();
        loop {
            visited.insert(guard.pos());
            match guard.ahead_pos() {
                Some(ahead_pos) if self.contains(&ahead_pos) => {
                    if self.is_obstacle(&ahead_pos) {
                        guard.turn_right();
                    } else {
                        guard.pos = ahead_pos;
                    }
                }
                _ => break,
            }
        }

        visited
    }

    /// Whether the patrol cycles forever once an extra obstacle sits at
    /// `extra_pos`. A cycle is declared as soon as any (direction, position)
    /// state repeats.
    pub fn loops_with_obstacle(&self, extra_pos: &Position) -> bool {
        let mut guard = self.guard;
        let mut visited_states = HashSet::new();
        loop {
            if !visited_states.insert((guard.dir(), guard.pos())) {
                return true;
            }

            match guard.ahead_pos() {
                Some(ahead_pos) if self.contains(&ahead_pos) => {
                    if self.is_obstacle(&ahead_pos) || ahead_pos == *extra_pos {
                        guard.turn_right();
                    } else {
                        guard.pos = ahead_pos;
                    }
                }
                _ => return false,
            }
        }
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| Position::new(r, c)))
            .filter(|pos| !self.is_obstacle(pos) && *pos != self.guard.pos())
            .collect()
    }

    /// Count of empty positions whose extra obstacle traps the guard in a
    /// cycle. Trials share this laboratory immutably and run in parallel,
    /// each with its own state history.
    pub fn loop_obstacle_count(&self) -> usize {
        self.empty_positions()
            .into_par_iter()
            .filter(|pos| self.loops_with_obstacle(pos))
            .count()
    }

    fn contains(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    fn is_obstacle(&self, pos: &Position) -> bool {
        self.contains(pos) && self.obstacles[pos.r * self.col_n + pos.c]
    }
}

impl TryFrom<&str> for Laboratory {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = LaboratoryBuilder::new();
        for line in value.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

struct LaboratoryBuilder {
    obstacles: Vec<bool>,
    row_n: usize,
    col_n: Option<usize>,
    guard: Option<Guard>,
}

impl LaboratoryBuilder {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            row_n: 0,
            col_n: None,
            guard: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let this_col_n = row_text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for (ind, c) in row_text.chars().enumerate() {
            match c {
                '.' => self.obstacles.push(false),
                '#' => self.obstacles.push(true),
                marker => {
                    let dir = Direction::from_marker(marker).ok_or(Error::InvalidChar(marker))?;
                    let guard = Guard::new(Position::new(self.row_n, ind), dir);
                    if let Some(last_guard) = &self.guard {
                        return Err(Error::MultipleGuards(last_guard.pos(), guard.pos()));
                    }

                    self.guard = Some(guard);
                    self.obstacles.push(false);
                }
            }
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Laboratory, Error> {
        let guard = self.guard.ok_or(Error::NoGuard)?;

        Ok(Laboratory {
            obstacles: self.obstacles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            guard,
        })
    }
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Laboratory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = LaboratoryBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(s.as_str())?;
    }

    Ok(builder.build()?)
}
