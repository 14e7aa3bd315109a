//! Read-only display snapshots for the presentation layer.
//! This module exists so renderers never reach into mutable state.
//! It does not own any simulation rules.

use super::*;
use crate::game::pathfinding::manhattan;

const SURROUNDINGS_LIMIT: usize = 3;

/// Display snapshot of one actor. Health is clamped for display; raw state
/// may hold a transiently negative value until the dead sweep runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorView {
    pub health: i32,
    pub armor: f32,
    pub pos: Pos,
}

/// Bounded neighborhood summary; both lists truncate at three entries. The
/// cap is a display contract, not a tunable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Surroundings {
    pub items_around: Vec<String>,
    pub enemies_around: Vec<String>,
}

impl Game {
    pub fn actor_info(&self, id: EntityId) -> Option<ActorView> {
        let actor = self.state.actors.get(id)?;
        Some(ActorView { health: actor.hp.max(0), armor: actor.armor, pos: actor.pos })
    }

    /// Item names on the player's tile and enemy names within the player's
    /// detection range, nearest first with a (distance, y, x) tie-break.
    pub fn player_surroundings(&self) -> Surroundings {
        let player = &self.state.actors[self.state.player_id];

        let items_around = self
            .state
            .field
            .tile(player.pos)
            .map(|tile| {
                tile.items
                    .iter()
                    .filter_map(|item_id| self.state.items.get(*item_id))
                    .map(|item| item.name.clone())
                    .take(SURROUNDINGS_LIMIT)
                    .collect()
            })
            .unwrap_or_default();

        let mut nearby: Vec<(u32, Pos, &str)> = self
            .state
            .actors
            .iter()
            .filter(|(id, actor)| {
                *id != self.state.player_id
                    && manhattan(player.pos, actor.pos) <= player.detection_range
            })
            .map(|(_, actor)| (manhattan(player.pos, actor.pos), actor.pos, actor.name.as_str()))
            .collect();
        nearby.sort_by_key(|(distance, pos, _)| (*distance, pos.y, pos.x));
        let enemies_around = nearby
            .into_iter()
            .take(SURROUNDINGS_LIMIT)
            .map(|(_, _, name)| name.to_string())
            .collect();

        Surroundings { items_around, enemies_around }
    }
}
