use rand_chacha::ChaCha8Rng;

use crate::state::GameState;
use crate::types::*;

mod bootstrap;
mod combat;
mod engine;
mod hash;
mod observe;
mod pathfinding;
mod perception;
mod policy;
mod rng;
#[cfg(test)]
mod test_support;

pub use combat::{BLEED_DAMAGE, BLEED_TICKS, STUN_TICKS};
pub use observe::{ActorView, Surroundings};
pub use pathfinding::shortest_path;
pub use perception::has_line_of_sight;
pub use rng::Dice;

/// One simulated run: the seeded dice stream, the world state, and the
/// domain event log, advanced one tick per external trigger.
pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    pub(crate) state: GameState,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }
}
