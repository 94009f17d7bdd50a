use std::{
    collections::{HashMap, HashSet, VecDeque},
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidMapChar(char),
    MultipleRobots(Position, Position),
    NoRobot,
    InvalidMoveChar(char),
    NoMovesSection,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidMapChar(c) => write!(f, "Invalid character({}) in warehouse map.", c),
            Error::MultipleRobots(pos0, pos1) => write!(
                f,
                "Found multiple robots({}, {}) in given warehouse, expect one only.",
                pos0, pos1
            ),
            Error::NoRobot => write!(f, "There's no robot in given warehouse, but expect one."),
            Error::InvalidMoveChar(c) => write!(f, "Invalid character({}) for robot move.", c),
            Error::NoMovesSection => write!(
                f,
                "Expect a blank line between warehouse map and move sequence."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '^' => Ok(Direction::Up),
            '>' => Ok(Direction::Right),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            other => Err(Error::InvalidMoveChar(other)),
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

    fn gps(&self) -> usize {
        self.r * 100 + self.c
    }
}

/// Single-width warehouse, each box one cell.
pub struct Warehouse {
    walls: Vec<bool>,
    row_n: usize,
    col_n: usize,
    boxes: HashSet<Position>,
    robot: Position,
}

impl Warehouse {
    pub fn apply_moves(&mut self, moves: &[Direction]) {
        for dir in moves {
            self.apply_move(*dir);
        }
    }

    pub fn gps_sum(&self) -> usize {
        self.boxes.iter().map(Position::gps).sum()
    }

    pub fn robot(&self) -> Position {
        self.robot
    }

    fn apply_move(&mut self, dir: Direction) {
        let Some(ahead) = self.robot.along(dir).filter(|pos| self.is_floor(pos)) else {
            return;
        };

        if !self.boxes.contains(&ahead) {
            self.robot = ahead;
            return;
        }

        // Push the whole box chain by moving its first box behind its last.
        let mut past_chain = ahead;
        while self.boxes.contains(&past_chain) {
            match past_chain.along(dir).filter(|pos| self.is_floor(pos)) {
                Some(next) => past_chain = next,
                None => return,
            }
        }

        self.boxes.remove(&ahead);
        self.boxes.insert(past_chain);
        self.robot = ahead;
    }

    fn is_floor(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n && !self.walls[pos.r * self.col_n + pos.c]
    }
}

impl TryFrom<&str> for Warehouse {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut walls = Vec::new();
        let mut boxes = HashSet::new();
        let mut robot = None;
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines() {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            for (ind, c) in line.chars().enumerate() {
                let pos = Position::new(row_n, ind);
                match c {
                    '#' => walls.push(true),
                    '.' => walls.push(false),
                    'O' => {
                        boxes.insert(pos);
                        walls.push(false);
                    }
                    '@' => {
                        if let Some(last_pos) = robot {
                            return Err(Error::MultipleRobots(last_pos, pos));
                        }

                        robot = Some(pos);
                        walls.push(false);
                    }
                    other => return Err(Error::InvalidMapChar(other)),
                }
            }
            row_n += 1;
        }

        Ok(Self {
            walls,
            row_n,
            col_n: col_n.unwrap_or(0),
            boxes,
            robot: robot.ok_or(Error::NoRobot)?,
        })
    }
}

/// Double-width warehouse. Boxes span two cells and live in an arena
/// indexed by position of their left half, so pushes track box identity
/// without aliasing.
pub struct WideWarehouse {
    walls: Vec<bool>,
    row_n: usize,
    col_n: usize,
    boxes: Vec<Position>,
    box_cells: HashMap<Position, usize>,
    robot: Position,
}

impl WideWarehouse {
    pub fn apply_moves(&mut self, moves: &[Direction]) {
        for dir in moves {
            self.apply_move(*dir);
        }
    }

    pub fn gps_sum(&self) -> usize {
        self.boxes.iter().map(Position::gps).sum()
    }

    pub fn robot(&self) -> Position {
        self.robot
    }

    fn apply_move(&mut self, dir: Direction) {
        let Some(ahead) = self.robot.along(dir).filter(|pos| self.is_floor(pos)) else {
            return;
        };

        let Some(pushed) = self.box_cells.get(&ahead).copied() else {
            self.robot = ahead;
            return;
        };

        let Some(moved_boxes) = self.collect_moved_boxes(pushed, dir) else {
            return;
        };

        for box_ind in &moved_boxes {
            let left_half = self.boxes[*box_ind];
            self.box_cells.remove(&left_half);
            self.box_cells.remove(&left_half.along(Direction::Right).unwrap());
        }
        for box_ind in moved_boxes {
            let left_half = self.boxes[box_ind].along(dir).unwrap();
            self.boxes[box_ind] = left_half;
            self.box_cells.insert(left_half, box_ind);
            self.box_cells
                .insert(left_half.along(Direction::Right).unwrap(), box_ind);
        }
        self.robot = ahead;
    }

    /// Every box the push drags along, or None when a wall blocks any of
    /// them. Nothing moves until the whole set is known to be free.
    fn collect_moved_boxes(&self, first_box: usize, dir: Direction) -> Option<Vec<usize>> {
        let mut moved = vec![first_box];
        let mut seen = HashSet::from([first_box]);
        let mut to_check = VecDeque::from([first_box]);
        while let Some(box_ind) = to_check.pop_front() {
            for target in self.push_targets(box_ind, dir) {
                let target = target.filter(|pos| self.is_floor(pos))?;
                if let Some(next_box) = self.box_cells.get(&target).copied() {
                    if seen.insert(next_box) {
                        moved.push(next_box);
                        to_check.push_back(next_box);
                    }
                }
            }
        }

        Some(moved)
    }

    fn push_targets(&self, box_ind: usize, dir: Direction) -> Vec<Option<Position>> {
        let left_half = self.boxes[box_ind];
        let right_half = left_half.along(Direction::Right).unwrap();
        match dir {
            Direction::Up | Direction::Down => {
                vec![left_half.along(dir), right_half.along(dir)]
            }
            Direction::Left => vec![left_half.along(dir)],
            Direction::Right => vec![right_half.along(dir)],
        }
    }

    fn is_floor(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n && !self.walls[pos.r * self.col_n + pos.c]
    }
}

impl TryFrom<&str> for WideWarehouse {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut walls = Vec::new();
        let mut boxes = Vec::new();
        let mut box_cells = HashMap::new();
        let mut robot = None;
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines() {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            for (ind, c) in line.chars().enumerate() {
                let left_pos = Position::new(row_n, ind * 2);
                let right_pos = Position::new(row_n, ind * 2 + 1);
                match c {
                    '#' => walls.extend([true, true]),
                    '.' => walls.extend([false, false]),
                    'O' => {
                        let box_ind = boxes.len();
                        boxes.push(left_pos);
                        box_cells.insert(left_pos, box_ind);
                        box_cells.insert(right_pos, box_ind);
                        walls.extend([false, false]);
                    }
                    '@' => {
                        if let Some(last_pos) = robot {
                            return Err(Error::MultipleRobots(last_pos, left_pos));
                        }

                        robot = Some(left_pos);
                        walls.extend([false, false]);
                    }
                    other => return Err(Error::InvalidMapChar(other)),
                }
            }
            row_n += 1;
        }

        Ok(Self {
            walls,
            row_n,
            col_n: col_n.unwrap_or(0) * 2,
            boxes,
            box_cells,
            robot: robot.ok_or(Error::NoRobot)?,
        })
    }
}

pub fn parse_moves(moves_text: &str) -> Result<Vec<Direction>, Error> {
    moves_text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(Direction::try_from)
        .collect()
}

pub fn read_document<P: AsRef<Path>>(path: P) -> Result<(String, Vec<Direction>)> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let (map_text, moves_text) = text
        .split_once("\n\n")
        .ok_or(Error::NoMovesSection)
        .with_context(|| {
            format!(
                "Failed to split given file({}) into map and moves.",
                path.as_ref().display()
            )
        })?;
    let moves = parse_moves(moves_text)
        .with_context(|| "Failed to parse robot moves from given file.".to_string())?;

    Ok((map_text.to_string(), moves))
}
