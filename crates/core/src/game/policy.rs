//! Per-tick enemy decision making.
//! This module exists to keep the pursue/attack/idle switch in one place.
//! It does not own damage math or path search; it composes them.

use std::collections::VecDeque;

use super::*;
use crate::game::pathfinding::manhattan;

impl Game {
    /// One enemy turn against the player: swing in melee range, pursue on
    /// sight, otherwise sit out the idle timer or wander one step.
    pub(super) fn enemy_act(&mut self, enemy_id: EntityId) -> AiState {
        let player_id = self.state.player_id;
        let player_pos = self.state.actors[player_id].pos;
        let (enemy_pos, detection_range) = {
            let enemy = &self.state.actors[enemy_id];
            (enemy.pos, enemy.detection_range)
        };

        if has_line_of_sight(&self.state.field, enemy_pos, player_pos, detection_range) {
            if manhattan(enemy_pos, player_pos) == 1 {
                self.enemy_strike(enemy_id, player_id);
                AiState::Attacking
            } else {
                self.pursue(enemy_id, player_pos);
                AiState::Pursuing
            }
        } else {
            let enemy = self.state.actors.get_mut(enemy_id).expect("acting enemy should exist");
            if enemy.idle_wait_ticks > 0 {
                enemy.idle_wait_ticks -= 1;
                AiState::Waiting
            } else {
                self.wander(enemy_id);
                AiState::Wandering
            }
        }
    }

    /// Walks the cached route one step, or plans a fresh one when the cache
    /// is empty. The cache is never refreshed mid-route even if the target
    /// has moved since it was planned; stale chases resolve on arrival.
    fn pursue(&mut self, enemy_id: EntityId, target: Pos) {
        let next_step = {
            let enemy = self.state.actors.get_mut(enemy_id).expect("pursuing enemy should exist");
            match enemy.pending_path.as_mut() {
                Some(path) => {
                    let step = path.pop_front();
                    if path.is_empty() {
                        enemy.pending_path = None;
                    }
                    step
                }
                None => None,
            }
        };

        match next_step {
            // The step is spent even when the move bounces off a transient
            // blocker; collision was already deferred to move time.
            Some(step) => {
                self.try_move_actor(enemy_id, step);
            }
            None => {
                let enemy_pos = self.state.actors[enemy_id].pos;
                let path = shortest_path(&self.state.field, enemy_pos, target);
                let enemy =
                    self.state.actors.get_mut(enemy_id).expect("pursuing enemy should exist");
                enemy.pending_path = path.map(VecDeque::from);
            }
        }
    }

    /// One uniformly random cardinal step; blocked destinations waste the
    /// move. The idle wait re-arms to 1-3 ticks whether or not it succeeded.
    fn wander(&mut self, enemy_id: EntityId) {
        let direction = Direction::ALL[self.rng.pick(0, 3) as usize];
        let dest = self.state.actors[enemy_id].pos.step(direction);
        self.try_move_actor(enemy_id, dest);

        let wait = self.rng.pick(1, 3);
        let enemy = self.state.actors.get_mut(enemy_id).expect("wandering enemy should exist");
        enemy.idle_wait_ticks = wait;
    }

    /// Executes a single-tile move through the field's occupancy rules.
    /// Rejections are silent; the requested action simply has no effect.
    pub(super) fn try_move_actor(&mut self, id: EntityId, to: Pos) -> bool {
        let from = self.state.actors[id].pos;
        if self.state.field.relocate(id, from, to).is_ok() {
            self.state.actors[id].pos = to;
            true
        } else {
            false
        }
    }
}
