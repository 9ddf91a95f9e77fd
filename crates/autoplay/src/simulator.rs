use crate::{
    AutoAction, AutoplayConfig, AutoplayError, BatchResult, GameRecord, RunStatus, StepRecord,
    SummaryStats,
};
use patience_core::{EventBus, RngState, Table};
use std::time::Instant;

/// Drives one table to completion with the fixed-priority greedy policy.
#[derive(Debug)]
pub struct Simulator {
    pub table: Table,
    pub events: EventBus,
    seed: u64,
    iterations: u32,
}

impl Simulator {
    /// Build a freshly dealt table from the rng's next shuffle.
    pub fn new(config: &AutoplayConfig, rng: &mut RngState) -> Result<Self, AutoplayError> {
        let mut table = Table::new(config.table);
        let mut events = EventBus::default();
        let seed = rng.seed();
        table.deal(rng, &mut events)?;
        // dealing is setup, not a step
        events.drain().count();
        Ok(Self {
            table,
            events,
            seed,
            iterations: 0,
        })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Try every action in priority order; apply the first that changes
    /// state. None means the game has halted.
    pub fn step(&mut self) -> Result<Option<AutoAction>, AutoplayError> {
        for action in AutoAction::PRIORITY {
            if self.apply(action)? {
                self.iterations += 1;
                return Ok(Some(action));
            }
        }
        Ok(None)
    }

    fn apply(&mut self, action: AutoAction) -> Result<bool, AutoplayError> {
        let changed = match action {
            AutoAction::FlipTableau => self.table.flip_tableaus(&mut self.events)?,
            AutoAction::MoveStack => self.table.move_whole_tableau_stack(&mut self.events)?,
            AutoAction::MoveToFoundation => self.table.move_onto_foundation(&mut self.events)?,
            AutoAction::MoveFromWaste => self.table.move_from_deck(&mut self.events)?,
            AutoAction::Draw => self.table.draw(&mut self.events)?,
        };
        Ok(changed)
    }

    /// Play until no action succeeds and report the outcome.
    pub fn run(&mut self, record_steps: bool) -> Result<GameRecord, AutoplayError> {
        let mut steps = Vec::new();
        while let Some(action) = self.step()? {
            let event_count = self.events.drain().count();
            if record_steps {
                steps.push(StepRecord {
                    step: self.iterations,
                    action,
                    event_count,
                });
            }
        }
        let status = if self.table.is_won() {
            RunStatus::Won
        } else {
            RunStatus::Lost
        };
        Ok(GameRecord {
            seed: self.seed,
            status,
            iterations: self.iterations,
            steps,
        })
    }
}

/// Play one game from a fresh shuffle.
pub fn play_one(config: &AutoplayConfig, rng: &mut RngState) -> Result<GameRecord, AutoplayError> {
    let mut simulator = Simulator::new(config, rng)?;
    simulator.run(config.record_steps)
}

/// Play `config.games` independent games, each on its own forked rng, and
/// aggregate the outcomes.
pub fn run_batch(config: &AutoplayConfig) -> Result<BatchResult, AutoplayError> {
    let started_at = Instant::now();
    let mut base = RngState::from_seed(config.seed);
    let mut games = Vec::with_capacity(config.games as usize);
    let mut wins = 0;
    let mut total_iterations = 0u64;
    for _ in 0..config.games {
        let mut rng = base.fork();
        let record = play_one(config, &mut rng)?;
        if record.status == RunStatus::Won {
            wins += 1;
        }
        total_iterations += u64::from(record.iterations);
        games.push(record);
    }
    Ok(BatchResult {
        summary: SummaryStats {
            games: config.games,
            wins,
            total_iterations,
            wall_time_ms: started_at.elapsed().as_millis() as u64,
        },
        games,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_game_halts_with_a_consistent_record() {
        let config = AutoplayConfig::default();
        let mut rng = RngState::from_seed(11);
        let mut simulator = Simulator::new(&config, &mut rng).unwrap();
        let record = simulator.run(true).unwrap();
        assert!(record.iterations > 0);
        assert_eq!(record.steps.len(), record.iterations as usize);
        assert_eq!(record.status == RunStatus::Won, simulator.table.is_won());
        assert_eq!(simulator.table.card_count(), 52);
        // halted: a further step finds nothing
        assert!(simulator.step().unwrap().is_none());
    }

    #[test]
    fn first_step_flips_nothing_and_acts_by_priority() {
        // a fresh deal has no flippable tableau (every run holds one card),
        // so the first step is never FlipTableau
        let config = AutoplayConfig::default();
        let mut rng = RngState::from_seed(3);
        let mut simulator = Simulator::new(&config, &mut rng).unwrap();
        let action = simulator.step().unwrap().unwrap();
        assert_ne!(action, AutoAction::FlipTableau);
    }
}
