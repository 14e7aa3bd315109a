pub mod content;
pub mod game;
pub mod state;
pub mod types;

pub use content::{LevelPlan, Weapon};
pub use game::{ActorView, Dice, Game, Surroundings, has_line_of_sight, shortest_path};
pub use state::{Actor, Field, GameState, Item, Tile};
pub use types::*;
