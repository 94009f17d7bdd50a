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
    NoTargetSeparator(String),
    InvalidNumberText(String),
    NoOperand(u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoTargetSeparator(s) => write!(
                f,
                "Expect a ':' between test value and operands in given text({}).",
                s
            ),
            Error::InvalidNumberText(s) => write!(f, "Invalid text({}) for number.", s),
            Error::NoOperand(target) => write!(
                f,
                "Equation with test value {} has no operands, expect at least one.",
                target
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
pub enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    fn apply(&self, left: u64, right: u64) -> u64 {
        match self {
            Operator::Add => left + right,
            Operator::Multiply => left * right,
            Operator::Concatenate => {
                let mut shift = 10;
                while shift <= right {
                    shift *= 10;
                }

                left * shift + right
            }
        }
    }
}

#[derive(Debug)]
pub struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl TryFrom<&str> for Equation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (target_text, operands_text) = value
            .split_once(':')
            .ok_or_else(|| Error::NoTargetSeparator(value.to_string()))?;
        let test_value = target_text
            .parse::<u64>()
            .map_err(|_| Error::InvalidNumberText(target_text.to_string()))?;
        let operands = operands_text
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| Error::InvalidNumberText(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(Error::NoOperand(test_value));
        }

        Ok(Self {
            test_value,
            operands,
        })
    }
}

impl Equation {
    pub fn test_value(&self) -> u64 {
        self.test_value
    }

    pub fn can_be_true(&self, operators: &[Operator]) -> bool {
        Self::search(
            self.test_value,
            self.operands[0],
            &self.operands[1..],
            operators,
        )
    }

    fn search(test_value: u64, accumulated: u64, rest: &[u64], operators: &[Operator]) -> bool {
        let Some((next, rest)) = rest.split_first() else {
            return accumulated == test_value;
        };

        operators
            .iter()
            .any(|op| Self::search(test_value, op.apply(accumulated, *next), rest, operators))
    }
}

pub fn read_equations<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>> {
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
                Equation::try_from(s.as_str())
                    .with_context(|| format!("Failed to read equation from line {}.", ind + 1))
            })
        })
        .collect()
}

pub fn total_calibration(equations: &[Equation], operators: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|equation| equation.can_be_true(operators))
        .map(|equation| equation.test_value())
        .sum()
}
