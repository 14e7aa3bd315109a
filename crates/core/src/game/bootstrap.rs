//! Level-plan application and initial world construction.
//! This module exists to isolate loading details from runtime simulation flow.
//! It does not own tick advancement once a run has started.

use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::content::{EnemySpawn, LevelPlan, PlayerSpawn};
use crate::state::{Actor, Field, Item};

impl Game {
    /// Builds a run from a level plan. Wall segments tolerate out-of-bounds
    /// tails, but actor and item placements must land on open tiles; a plan
    /// that stacks spawns is a data error, not a silent skip.
    pub fn new(seed: u64, plan: &LevelPlan) -> Result<Self, LevelError> {
        if plan.width == 0 || plan.height == 0 {
            return Err(LevelError::EmptyField);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut field = Field::new(plan.width, plan.height);
        for wall in &plan.walls {
            field.add_wall(wall.origin, wall.direction, wall.length);
        }

        let mut items: SlotMap<ItemId, Item> = SlotMap::with_key();
        for spawn in &plan.items {
            let tile = field.tile_mut(spawn.pos).map_err(|_| LevelError::ItemOutOfBounds {
                name: spawn.name.clone(),
                pos: spawn.pos,
            })?;
            let item_id = items.insert(Item { id: ItemId::default(), name: spawn.name.clone() });
            items[item_id].id = item_id;
            tile.items.push(item_id);
        }

        let mut actors: SlotMap<EntityId, Actor> = SlotMap::with_key();
        let player_id = spawn_actor(&mut actors, &mut field, player_actor(&plan.player))?;
        for spawn in &plan.enemies {
            let mut enemy = enemy_actor(spawn);
            enemy.idle_wait_ticks = rng.pick(1, 3);
            spawn_actor(&mut actors, &mut field, enemy)?;
        }

        Ok(Self {
            seed,
            tick: 0,
            rng,
            state: GameState { field, actors, items, player_id },
            log: Vec::new(),
        })
    }
}

fn player_actor(spawn: &PlayerSpawn) -> Actor {
    Actor {
        id: EntityId::default(),
        kind: ActorKind::Player,
        name: "Player".to_string(),
        pos: spawn.pos,
        hp: spawn.hp,
        armor: spawn.armor,
        dodge_chance: spawn.dodge_chance,
        detection_range: spawn.detection_range,
        weapon: spawn.weapon.clone(),
        stun_ticks: 0,
        bleed_ticks: 0,
        stunned: false,
        pending_path: None,
        idle_wait_ticks: 0,
    }
}

fn enemy_actor(spawn: &EnemySpawn) -> Actor {
    Actor {
        id: EntityId::default(),
        kind: ActorKind::Enemy,
        name: spawn.name.clone(),
        pos: spawn.pos,
        hp: spawn.hp,
        armor: spawn.armor,
        dodge_chance: spawn.dodge_chance,
        detection_range: spawn.detection_range,
        weapon: spawn.weapon.clone(),
        stun_ticks: 0,
        bleed_ticks: 0,
        stunned: false,
        pending_path: None,
        idle_wait_ticks: 0,
    }
}

fn spawn_actor(
    actors: &mut SlotMap<EntityId, Actor>,
    field: &mut Field,
    actor: Actor,
) -> Result<EntityId, LevelError> {
    let name = actor.name.clone();
    let pos = actor.pos;
    let id = actors.insert(actor);
    actors[id].id = id;
    match field.place_entity(id, pos) {
        Ok(()) => Ok(id),
        Err(FieldError::OutOfBounds { .. }) => {
            actors.remove(id);
            Err(LevelError::SpawnOutOfBounds { name, pos })
        }
        Err(FieldError::Blocked { .. }) => {
            actors.remove(id);
            Err(LevelError::SpawnBlocked { name, pos })
        }
    }
}
