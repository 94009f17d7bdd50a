use std::{
    cmp::Ordering,
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
    InvalidRuleText(String),
    InvalidPageText(String),
    EmptyUpdate,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRuleText(s) => {
                write!(f, "Invalid text({}) for page ordering rule.", s)
            }
            Error::InvalidPageText(s) => write!(f, "Invalid text({}) for page number.", s),
            Error::EmptyUpdate => write!(f, "Given update has no pages, expect at least one."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct OrderingRules {
    before_pairs: HashSet<(u32, u32)>,
}

impl OrderingRules {
    pub fn add_rule(&mut self, rule_text: &str) -> Result<(), Error> {
        let (early_text, late_text) = rule_text
            .split_once('|')
            .ok_or_else(|| Error::InvalidRuleText(rule_text.to_string()))?;
        let early_page = early_text
            .parse::<u32>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        let late_page = late_text
            .parse::<u32>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        self.before_pairs.insert((early_page, late_page));

        Ok(())
    }

    pub fn page_cmp(&self, left: u32, right: u32) -> Ordering {
        if self.before_pairs.contains(&(left, right)) {
            Ordering::Less
        } else if self.before_pairs.contains(&(right, left)) {
            Ordering::Greater
        } else {
            left.cmp(&right)
        }
    }
}

#[derive(Debug)]
pub struct Update {
    pages: Vec<u32>,
}

impl TryFrom<&str> for Update {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let pages = value
            .split(',')
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| Error::InvalidPageText(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if pages.is_empty() {
            return Err(Error::EmptyUpdate);
        }

        Ok(Self { pages })
    }
}

impl Update {
    pub fn is_ordered(&self, rules: &OrderingRules) -> bool {
        self.pages == self.sorted_pages(rules)
    }

    pub fn middle_page(&self) -> u32 {
        self.pages[self.pages.len() / 2]
    }

    pub fn sorted_middle_page(&self, rules: &OrderingRules) -> u32 {
        let sorted_pages = self.sorted_pages(rules);
        sorted_pages[sorted_pages.len() / 2]
    }

    fn sorted_pages(&self, rules: &OrderingRules) -> Vec<u32> {
        let mut sorted_pages = self.pages.clone();
        sorted_pages.sort_by(|left, right| rules.page_cmp(*left, *right));

        sorted_pages
    }
}

pub fn ordered_middle_page_sum(rules: &OrderingRules, updates: &[Update]) -> u32 {
    updates
        .iter()
        .filter(|update| update.is_ordered(rules))
        .map(|update| update.middle_page())
        .sum()
}

pub fn reordered_middle_page_sum(rules: &OrderingRules, updates: &[Update]) -> u32 {
    updates
        .iter()
        .filter(|update| !update.is_ordered(rules))
        .map(|update| update.sorted_middle_page(rules))
        .sum()
}

pub fn read_print_queue<P: AsRef<Path>>(path: P) -> Result<(OrderingRules, Vec<Update>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rules = OrderingRules::default();
    let mut updates = Vec::new();
    let mut in_update_section = false;
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.is_empty() {
            in_update_section = true;
            continue;
        }

        if in_update_section {
            let update = Update::try_from(s.as_str())
                .with_context(|| format!("Failed to read update from line {}.", ind + 1))?;
            updates.push(update);
        } else {
            rules
                .add_rule(s.as_str())
                .with_context(|| format!("Failed to read ordering rule from line {}.", ind + 1))?;
        }
    }

    Ok((rules, updates))
}
