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
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidRobotText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRobotText(s) => write!(f, "Invalid text({}) for robot.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub map_width: i64,
    pub map_height: i64,
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Robot {
    pos_x: i64,
    pos_y: i64,
    vel_x: i64,
    vel_y: i64,
}

impl TryFrom<&str> for Robot {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static ROBOT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)").unwrap());

        let caps = ROBOT_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidRobotText(value.to_string()))?;

        Ok(Self {
            pos_x: caps[1].parse().unwrap(),
            pos_y: caps[2].parse().unwrap(),
            vel_x: caps[3].parse().unwrap(),
            vel_y: caps[4].parse().unwrap(),
        })
    }
}

impl Robot {
    pub fn pos_after(&self, seconds: i64, map_width: i64, map_height: i64) -> (i64, i64) {
        (
            (self.pos_x + self.vel_x * seconds).rem_euclid(map_width),
            (self.pos_y + self.vel_y * seconds).rem_euclid(map_height),
        )
    }
}

/// Product of the per-quadrant robot counts; robots on the middle row or
/// column belong to no quadrant.
pub fn safety_factor(robots: &[Robot], map_width: i64, map_height: i64, seconds: i64) -> u64 {
    let middle_x = map_width / 2;
    let middle_y = map_height / 2;
    let mut quad_counts = [0u64; 4];
    for robot in robots {
        let (x, y) = robot.pos_after(seconds, map_width, map_height);
        if x == middle_x || y == middle_y {
            continue;
        }

        let mut quad_ind = if x < middle_x { 0 } else { 1 };
        if y > middle_y {
            quad_ind += 2;
        }
        quad_counts[quad_ind] += 1;
    }

    quad_counts.iter().product()
}

/// The Easter egg shows up the first second no two robots overlap. Robot
/// motion repeats every map_width * map_height seconds, which bounds the
/// search.
pub fn first_non_overlapping_second(
    robots: &[Robot],
    map_width: i64,
    map_height: i64,
) -> Option<i64> {
    (0..map_width * map_height).find(|seconds| {
        let mut occupied = HashSet::new();
        robots
            .iter()
            .all(|robot| occupied.insert(robot.pos_after(*seconds, map_width, map_height)))
    })
}

pub fn render(robots: &[Robot], map_width: i64, map_height: i64, seconds: i64) -> String {
    let occupied = robots
        .iter()
        .map(|robot| robot.pos_after(seconds, map_width, map_height))
        .collect::<HashSet<_>>();
    let mut text = String::new();
    for y in 0..map_height {
        for x in 0..map_width {
            text.push(if occupied.contains(&(x, y)) { '#' } else { '.' });
        }
        text.push('\n');
    }

    text
}

pub fn read_robots<P: AsRef<Path>>(path: P) -> Result<Vec<Robot>> {
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
                Robot::try_from(s.as_str())
                    .with_context(|| format!("Failed to read robot from line {}.", ind + 1))
            })
        })
        .collect()
}
