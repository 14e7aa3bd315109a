use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dy, dx) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Unit `(Δrow, Δcol)` offset for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
}

/// Behavior an enemy settled on for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiState {
    Waiting,
    Wandering,
    Pursuing,
    Attacking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Attacker was stunned or unarmed; no state changed.
    Withheld,
    Dodged,
    Hit { damage: i32, critical: bool, stunned: bool, bled: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    AttackHit { attacker: EntityId, defender: EntityId, damage: i32, critical: bool, stunned: bool, bled: bool },
    AttackDodged { attacker: EntityId, defender: EntityId },
    PlayerStrike { defender: EntityId, damage: i32 },
    BleedTick { entity: EntityId, damage: i32 },
    ActorDied { entity: EntityId },
}

/// What one call to `Game::advance_tick` did to the roster.
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    pub slain: Vec<EntityId>,
    pub player_defeated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    OutOfBounds { pos: Pos },
    Blocked { pos: Pos },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    EmptyField,
    SpawnOutOfBounds { name: String, pos: Pos },
    SpawnBlocked { name: String, pos: Pos },
    ItemOutOfBounds { name: String, pos: Pos },
}
