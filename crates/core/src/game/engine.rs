//! Tick orchestration: enemy turns, status decay, and the dead sweep.
//! This module exists to keep the per-tick sequence in one place.
//! It does not own decision or damage rules; it runs them in order.

use super::*;

impl Game {
    /// Advances one simulated tick: every enemy acts once in a fixed
    /// sequential order, every actor takes its status decay, then dead
    /// enemies are swept off the field.
    pub fn advance_tick(&mut self) -> TickReport {
        self.tick += 1;

        let enemy_ids: Vec<EntityId> = self
            .state
            .actors
            .iter()
            .filter(|(id, _)| *id != self.state.player_id)
            .map(|(id, _)| id)
            .collect();
        for enemy_id in enemy_ids {
            self.enemy_act(enemy_id);
        }

        let actor_ids: Vec<EntityId> = self.state.actors.keys().collect();
        for id in actor_ids {
            let actor = self.state.actors.get_mut(id).expect("ticked actor should exist");
            if let Some(damage) = combat::apply_effects(actor) {
                self.log.push(LogEvent::BleedTick { entity: id, damage });
            }
        }

        self.sweep_dead()
    }

    /// Player step in a cardinal direction. Bounds and collision rejections
    /// are silent no-ops; the return value says whether the step happened.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let player_id = self.state.player_id;
        let dest = self.state.actors[player_id].pos.step(direction);
        self.try_move_actor(player_id, dest)
    }

    /// Player swing at the adjacent tile in `direction`. Returns the damage
    /// dealt, or `None` when the player is stunned, unarmed, or swinging at
    /// an empty tile.
    pub fn player_attack(&mut self, direction: Direction) -> Option<i32> {
        let player_id = self.state.player_id;
        if self.state.actors[player_id].stunned {
            return None;
        }
        let weapon = self.state.actors[player_id].weapon.clone()?;
        let target_pos = self.state.actors[player_id].pos.step(direction);
        let target_id = self.state.field.tile(target_pos).ok()?.occupant?;

        let target = self.state.actors.get_mut(target_id).expect("occupied tile holds an actor");
        let damage = combat::simple_strike(target, &weapon);
        self.log.push(LogEvent::PlayerStrike { defender: target_id, damage });

        if self.state.actors[target_id].hp <= 0 {
            self.remove_dead_enemy(target_id, target_pos);
        }
        Some(damage)
    }

    fn sweep_dead(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let dead: Vec<(EntityId, Pos)> = self
            .state
            .actors
            .iter()
            .filter(|(id, actor)| *id != self.state.player_id && actor.hp <= 0)
            .map(|(id, actor)| (id, actor.pos))
            .collect();
        for (id, pos) in dead {
            self.remove_dead_enemy(id, pos);
            report.slain.push(id);
        }
        report.player_defeated = self.state.actors[self.state.player_id].hp <= 0;
        report
    }

    /// Occupancy is released before the actor leaves the arena so no tile
    /// ever holds a handle to a removed entity.
    fn remove_dead_enemy(&mut self, id: EntityId, pos: Pos) {
        self.state.field.clear_occupant(pos);
        self.state.actors.remove(id);
        self.log.push(LogEvent::ActorDied { entity: id });
    }
}
