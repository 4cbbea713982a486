//! Conway's Game of Life on a toroidal grid.

use board::Grid;
use error::GridError;
use log::{debug, trace};
use rule::Rule;

pub mod board;
pub mod config;
pub mod error;
pub mod pattern;
pub mod pos;
pub mod rule;

/// A board advancing through generations under a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    board: Grid,
    rule: Rule,
    generation: u64,
}

impl Simulation {
    pub fn new(board: Grid, rule: Rule) -> Result<Self, GridError> {
        if board.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        Ok(Self {
            board,
            rule,
            generation: 0,
        })
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    pub fn tick(&mut self) {
        // The board was checked non-empty on construction and stepping keeps its size.
        self.board = self.board.step(&self.rule);
        self.generation += 1;

        trace!(
            "generation {}: population {}",
            self.generation,
            self.board.population()
        );
    }

    pub fn tick_n(&mut self, generations: u64) {
        debug!(
            "advancing {generations} generations from generation {} under {}",
            self.generation, self.rule
        );

        for _ in 0..generations {
            self.tick();
        }
    }

    pub fn into_board(self) -> Grid {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternKind;

    #[test]
    fn rejects_empty_board() {
        assert_eq!(
            Simulation::new(Grid::new(0, 4), Rule::default()),
            Err(GridError::EmptyGrid)
        );
    }

    #[test]
    fn tick_matches_next_generation() {
        let board = Grid::new_random(12, 9, 0.35);
        let expected = board.next_generation().unwrap().next_generation().unwrap();

        let mut simulation = Simulation::new(board, Rule::default()).unwrap();
        simulation.tick();
        simulation.tick();

        assert_eq!(simulation.generation(), 2);
        assert_eq!(simulation.board(), &expected);
    }

    #[test]
    fn glider_keeps_its_population() {
        let mut board = Grid::new(10, 10);
        board
            .insert_pattern(&PatternKind::Glider.grid(), 4, 4)
            .unwrap();

        let mut simulation = Simulation::new(board.clone(), Rule::default()).unwrap();
        simulation.tick_n(40);

        assert_eq!(simulation.generation(), 40);
        assert_eq!(simulation.population(), 5);
        assert_eq!(simulation.into_board(), board);
    }
}
