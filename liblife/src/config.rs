use std::{fs, path::Path};

use anyhow::Context;
use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{Simulation, board::Grid, pattern::PatternKind, rule::Rule};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,

    /// The chance of each cell starting out alive, patterns are stamped on top afterwards.
    #[serde(default)]
    pub life_probability: f64,

    /// Seed for the random starting board, the thread-local generator is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub rule: Rule,

    #[serde(default)]
    pub patterns: Vec<PatternPlacement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternPlacement {
    pub kind: PatternKind,

    // Top left corner of the pattern on the board.
    pub row: usize,
    pub col: usize,
}

impl SimulationConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            life_probability: 0.0,
            seed: None,
            rule: Rule::default(),
            patterns: Vec::new(),
        }
    }

    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read simulation config")?;
        let config = serde_json::from_slice(&config_serialized)
            .context("Couldn't deserialize simulation config")?;
        Ok(config)
    }

    pub fn save<P>(&self, path: P) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
    {
        let config_serialized =
            serde_json::to_string_pretty(&self).context("Couldn't serialize simulation config")?;
        fs::write(path, config_serialized).context("Couldn't write simulation config")?;

        Ok(())
    }

    pub fn build_board(&self) -> anyhow::Result<Grid> {
        let mut board = match self.seed {
            Some(seed) => Grid::new_random_with_rng(
                self.rows,
                self.columns,
                self.life_probability,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Grid::new_random(self.rows, self.columns, self.life_probability),
        };

        for placement in &self.patterns {
            board
                .insert_pattern(&placement.kind.grid(), placement.row, placement.col)
                .with_context(|| {
                    format!(
                        "Couldn't place {} at ({}, {})",
                        placement.kind.name(),
                        placement.row,
                        placement.col
                    )
                })?;
        }

        Ok(board)
    }

    pub fn build(&self) -> anyhow::Result<Simulation> {
        let board = self.build_board()?;

        debug!(
            "built {}x{} board with {} live cells and {} patterns under {}",
            self.rows,
            self.columns,
            board.population(),
            self.patterns.len(),
            self.rule
        );

        let simulation =
            Simulation::new(board, self.rule.clone()).context("Couldn't start simulation")?;
        Ok(simulation)
    }
}
