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

const SEARCH_WORD: &[char] = &['X', 'M', 'A', 'S'];

pub struct LetterGrid {
    letters: Vec<char>,
    row_n: usize,
    col_n: usize,
}

impl LetterGrid {
    pub fn xmas_count(&self) -> usize {
        let mut count = 0;
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                for (dr, dc) in Self::all_deltas() {
                    if self.word_starts_at(r, c, *dr, *dc) {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    pub fn cross_mas_count(&self) -> usize {
        let mut count = 0;
        for r in 1..self.row_n.saturating_sub(1) {
            for c in 1..self.col_n.saturating_sub(1) {
                if self.letter(r, c) == Some('A') && self.cross_arms_match(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    fn all_deltas() -> &'static [(isize, isize)] {
        static DELTAS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];

        &DELTAS
    }

    fn word_starts_at(&self, r: usize, c: usize, dr: isize, dc: isize) -> bool {
        SEARCH_WORD.iter().enumerate().all(|(step, expect_char)| {
            let step = step as isize;
            self.offset_letter(r, c, dr * step, dc * step) == Some(*expect_char)
        })
    }

    fn cross_arms_match(&self, r: usize, c: usize) -> bool {
        let arm_matches = |letter0: Option<char>, letter1: Option<char>| {
            matches!(
                (letter0, letter1),
                (Some('M'), Some('S')) | (Some('S'), Some('M'))
            )
        };

        arm_matches(
            self.offset_letter(r, c, -1, -1),
            self.offset_letter(r, c, 1, 1),
        ) && arm_matches(
            self.offset_letter(r, c, -1, 1),
            self.offset_letter(r, c, 1, -1),
        )
    }

    fn offset_letter(&self, r: usize, c: usize, dr: isize, dc: isize) -> Option<char> {
        let r = r.checked_add_signed(dr)?;
        let c = c.checked_add_signed(dc)?;
        self.letter(r, c)
    }

    fn letter(&self, r: usize, c: usize) -> Option<char> {
        if r < self.row_n && c < self.col_n {
            self.letters.get(r * self.col_n + c).copied()
        } else {
            None
        }
    }
}

impl TryFrom<&str> for LetterGrid {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut letters = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines() {
            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            letters.extend(line.chars());
            row_n += 1;
        }

        Ok(Self {
            letters,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<LetterGrid> {
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

    Ok(LetterGrid::try_from(text.as_str())?)
}
