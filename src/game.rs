//! Frame-level game context
//!
//! `Game` owns the simulation state, the fixed-step accumulator, and the input
//! sampled for the current frame. The frame driver hands it to each phase in
//! turn: input, update, render.

use crate::consts::FIXED_TIMESTEP;
use crate::sim::{FixedTimestep, GameState, Outcome, SpriteSet, TickInput, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: TickInput,
    timestep: FixedTimestep,
    last_outcome: Outcome,
}

impl Game {
    pub fn new(sprites: &SpriteSet) -> Self {
        Self {
            state: GameState::new(sprites),
            input: TickInput::default(),
            timestep: FixedTimestep::new(FIXED_TIMESTEP),
            last_outcome: Outcome::Flying,
        }
    }

    /// Fold `dt` seconds of wall-clock time into the simulation.
    /// Returns the number of fixed ticks that ran.
    pub fn update(&mut self, dt: f32) -> u32 {
        let steps = self.timestep.advance(dt);
        let step = self.timestep.step();
        for _ in 0..steps {
            tick(&mut self.state, &self.input, step);
        }

        let outcome = self.state.outcome();
        if outcome != self.last_outcome {
            match outcome {
                Outcome::Success => log::info!(
                    "Touchdown after {} ticks at ({:.2}, {:.2})",
                    self.state.time_ticks,
                    self.state.player.position.x,
                    self.state.player.position.y
                ),
                Outcome::Failure => log::info!(
                    "Crashed after {} ticks at ({:.2}, {:.2})",
                    self.state.time_ticks,
                    self.state.player.position.x,
                    self.state.player.position.y
                ),
                Outcome::Flying => {}
            }
            self.last_outcome = outcome;
        }

        steps
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Time banked toward the next tick
    pub fn accumulator(&self) -> f32 {
        self.timestep.accumulator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_short_frame_runs_no_ticks() {
        let mut game = Game::new(&SpriteSet::default());
        let before = game.state.player.position;

        assert_eq!(game.update(0.01), 0);

        assert!((game.accumulator() - 0.01).abs() < 1e-7);
        assert_eq!(game.state.player.position, before);
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn test_ticks_match_elapsed_time() {
        let mut game = Game::new(&SpriteSet::default());

        assert_eq!(game.update(0.05), 3);
        assert_eq!(game.state.time_ticks, 3);
        // Lander has started to fall
        assert!(game.state.player.velocity.y < 0.0);
    }

    #[test]
    fn test_free_fall_onto_pad() {
        let mut game = Game::new(&SpriteSet::default());
        // Straight above landing pad 1, between pillars 2 and 3
        game.state.player.position = Vec3::new(1.0, 3.0, 0.0);

        // Plenty of simulated time for the lander to reach the pad
        for _ in 0..2000 {
            game.update(FIXED_TIMESTEP);
            if game.outcome() != Outcome::Flying {
                break;
            }
        }

        assert_eq!(game.outcome(), Outcome::Success);
        assert!(!game.state.player.is_active());

        // Once stopped, nothing moves any more
        let rest = game.state.player.position;
        game.input.up = true;
        game.update(0.5);
        assert_eq!(game.state.player.position, rest);
        assert_ne!(game.state.player.position, Vec3::ZERO);
    }
}
