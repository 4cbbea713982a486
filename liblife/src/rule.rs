use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Neighbor counts at which a dead cell is born and a live cell survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn new(birth: Vec<usize>, survive: Vec<usize>) -> Self {
        Self { birth, survive }
    }

    pub fn next_state(&self, alive: bool, alive_neighbor_count: usize) -> bool {
        if alive {
            self.survive.contains(&alive_neighbor_count)
        } else {
            self.birth.contains(&alive_neighbor_count)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

impl FromStr for Rule {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidRule(s.to_owned());

        let (birth_part, survive_part) = s.trim().split_once('/').ok_or_else(invalid)?;

        let birth = parse_counts(birth_part, 'B').ok_or_else(invalid)?;
        let survive = parse_counts(survive_part, 'S').ok_or_else(invalid)?;

        Ok(Self { birth, survive })
    }
}

fn parse_counts(part: &str, prefix: char) -> Option<Vec<usize>> {
    let mut chars = part.chars();
    if !chars.next()?.eq_ignore_ascii_case(&prefix) {
        return None;
    }

    chars
        .map(|c| c.to_digit(10).filter(|digit| *digit <= 8).map(|digit| digit as usize))
        .collect::<Option<Vec<_>>>()
        .map(|counts| counts.into_iter().sorted().dedup().collect())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |counts: &[usize]| counts.iter().sorted().dedup().join("");
        write!(f, "B{}/S{}", digits(self.birth.as_slice()), digits(self.survive.as_slice()))
    }
}

impl TryFrom<String> for Rule {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(value: Rule) -> Self {
        value.to_string()
    }
}
