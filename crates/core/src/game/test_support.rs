//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating field and actor setup across tests.
//! It does not own production gameplay logic.

use std::collections::VecDeque;

use slotmap::SlotMap;

use super::*;
use crate::content::{EnemySpawn, LevelPlan, PlayerSpawn, Weapon};
use crate::state::{Actor, Field, Item};

/// Plays back a fixed script of unit rolls; an exhausted script keeps
/// returning 0.0. Bounded picks always take the minimum.
pub(super) struct ScriptedDice {
    rolls: VecDeque<f32>,
}

impl ScriptedDice {
    pub(super) fn new(rolls: &[f32]) -> Self {
        Self { rolls: rolls.iter().copied().collect() }
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> f32 {
        self.rolls.pop_front().unwrap_or(0.0)
    }

    fn pick(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

pub(super) fn open_field(width: usize, height: usize) -> Field {
    Field::new(width, height)
}

/// Claims a tile with a fresh throwaway entity id, for field-level tests
/// that only care about occupancy.
pub(super) fn place_marker(field: &mut Field, pos: Pos) -> EntityId {
    let mut arena: SlotMap<EntityId, ()> = SlotMap::with_key();
    let id = arena.insert(());
    field.place_entity(id, pos).expect("marker tile should be open");
    id
}

pub(super) fn flat_weapon(damage: i32) -> Weapon {
    proc_weapon(damage, 1.0, 0.0, 0.0, 0.0)
}

pub(super) fn proc_weapon(damage: i32, pen: f32, crit: f32, stun: f32, bleed: f32) -> Weapon {
    Weapon {
        name: "Test Blade".to_string(),
        damage,
        armor_penetration: pen,
        critical_chance: crit,
        stun_chance: stun,
        bleed_chance: bleed,
    }
}

pub(super) fn bare_actor(name: &str, pos: Pos) -> Actor {
    Actor {
        id: EntityId::default(),
        kind: ActorKind::Enemy,
        name: name.to_string(),
        pos,
        hp: 100,
        armor: 0.0,
        dodge_chance: 0.0,
        detection_range: 10,
        weapon: None,
        stun_ticks: 0,
        bleed_ticks: 0,
        stunned: false,
        pending_path: None,
        idle_wait_ticks: 0,
    }
}

pub(super) fn enemy_at(pos: Pos) -> EnemySpawn {
    EnemySpawn {
        name: "Enemy".to_string(),
        pos,
        hp: 30,
        armor: 0.0,
        dodge_chance: 0.0,
        detection_range: 10,
        weapon: Some(flat_weapon(5)),
    }
}

pub(super) fn skirmish_plan(
    width: usize,
    height: usize,
    player_pos: Pos,
    enemies: &[EnemySpawn],
) -> LevelPlan {
    LevelPlan {
        width,
        height,
        player: PlayerSpawn {
            pos: player_pos,
            hp: 100,
            armor: 0.0,
            dodge_chance: 0.0,
            detection_range: 10,
            weapon: Some(flat_weapon(10)),
        },
        walls: Vec::new(),
        enemies: enemies.to_vec(),
        items: Vec::new(),
    }
}

pub(super) fn skirmish_game(
    width: usize,
    height: usize,
    player_pos: Pos,
    enemies: &[EnemySpawn],
) -> Game {
    Game::new(12345, &skirmish_plan(width, height, player_pos, enemies))
        .expect("fixture plan should load")
}

/// Player and a single short-sighted enemy far apart: no line of sight, so
/// the enemy runs its idle states.
pub(super) fn out_of_sight_game() -> Game {
    let mut spawn = enemy_at(Pos { y: 6, x: 6 });
    spawn.detection_range = 2;
    skirmish_game(9, 9, Pos { y: 0, x: 0 }, &[spawn])
}

pub(super) fn sole_enemy(game: &Game) -> EntityId {
    game.state
        .actors
        .iter()
        .find(|(id, _)| *id != game.state.player_id)
        .map(|(id, _)| id)
        .expect("fixture should contain an enemy")
}

pub(super) fn sole_enemy_at(game: &Game, pos: Pos) -> EntityId {
    game.state
        .actors
        .iter()
        .find(|(id, actor)| *id != game.state.player_id && actor.pos == pos)
        .map(|(id, _)| id)
        .expect("fixture should contain an enemy at that tile")
}

pub(super) fn drop_item(game: &mut Game, name: &str, pos: Pos) {
    let item_id = game.state.items.insert(Item { id: ItemId::default(), name: name.to_string() });
    game.state.items[item_id].id = item_id;
    game.state
        .field
        .tile_mut(pos)
        .expect("item tile should be in bounds")
        .items
        .push(item_id);
}
