use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::content::Weapon;
use crate::types::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tile {
    pub collidable: bool,
    pub occupant: Option<EntityId>,
    pub items: Vec<ItemId>,
}

/// Tile grid. Sole owner of the occupancy relation: actors record a
/// position, but only the field says which tile holds which entity.
#[derive(Clone)]
pub struct Field {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl Field {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![Tile::default(); width * height] }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile(&self, pos: Pos) -> Result<&Tile, FieldError> {
        if !self.in_bounds(pos) {
            return Err(FieldError::OutOfBounds { pos });
        }
        Ok(&self.tiles[self.index(pos)])
    }

    pub fn tile_mut(&mut self, pos: Pos) -> Result<&mut Tile, FieldError> {
        if !self.in_bounds(pos) {
            return Err(FieldError::OutOfBounds { pos });
        }
        let idx = self.index(pos);
        Ok(&mut self.tiles[idx])
    }

    /// Overwrites `length` tiles from `origin` along `direction` with bare
    /// wall tiles. Steps that leave the grid are skipped, not an error.
    pub fn add_wall(&mut self, origin: Pos, direction: Direction, length: u32) {
        let (dy, dx) = direction.delta();
        for i in 0..length as i32 {
            let pos = Pos { y: origin.y + dy * i, x: origin.x + dx * i };
            if !self.in_bounds(pos) {
                continue;
            }
            let idx = self.index(pos);
            self.tiles[idx] = Tile { collidable: true, occupant: None, items: Vec::new() };
        }
    }

    /// Initial placement onto an unclaimed tile. Walls and occupied tiles
    /// are both collidable, so one flag rejects either.
    pub fn place_entity(&mut self, id: EntityId, pos: Pos) -> Result<(), FieldError> {
        let tile = self.tile_mut(pos)?;
        if tile.collidable {
            return Err(FieldError::Blocked { pos });
        }
        tile.occupant = Some(id);
        tile.collidable = true;
        Ok(())
    }

    /// Movement. Validates the target before touching the source tile, so a
    /// rejected move leaves the field unchanged.
    pub fn relocate(&mut self, id: EntityId, from: Pos, to: Pos) -> Result<(), FieldError> {
        {
            let target = self.tile(to)?;
            if target.collidable {
                return Err(FieldError::Blocked { pos: to });
            }
        }
        let source = self.tile_mut(from)?;
        debug_assert_eq!(source.occupant, Some(id));
        source.occupant = None;
        source.collidable = false;
        let target = self.tile_mut(to)?;
        target.occupant = Some(id);
        target.collidable = true;
        Ok(())
    }

    /// Death cleanup. Must run before the actor is dropped from the arena so
    /// no tile keeps a handle to a removed entity.
    pub fn clear_occupant(&mut self, pos: Pos) {
        if let Ok(tile) = self.tile_mut(pos) {
            tile.occupant = None;
            tile.collidable = false;
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub name: String,
    pub pos: Pos,
    /// May dip below zero inside a tick; the dead sweep and display
    /// snapshots are the ones that care.
    pub hp: i32,
    pub armor: f32,
    pub dodge_chance: f32,
    pub detection_range: u32,
    pub weapon: Option<Weapon>,
    pub stun_ticks: u32,
    pub bleed_ticks: u32,
    pub stunned: bool,
    /// Cached pursuit route, consumed one step per tick. Not refreshed while
    /// non-empty even if the target moves.
    pub pending_path: Option<VecDeque<Pos>>,
    pub idle_wait_ticks: u32,
}

#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

pub struct GameState {
    pub field: Field,
    pub actors: SlotMap<EntityId, Actor>,
    pub items: SlotMap<ItemId, Item>,
    pub player_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_id() -> EntityId {
        let mut arena: SlotMap<EntityId, ()> = SlotMap::with_key();
        arena.insert(())
    }

    fn id_pair() -> (EntityId, EntityId) {
        let mut arena: SlotMap<EntityId, ()> = SlotMap::with_key();
        (arena.insert(()), arena.insert(()))
    }

    #[test]
    fn tile_lookup_succeeds_exactly_inside_the_grid_extent() {
        let field = Field::new(4, 3);
        for y in -1..4 {
            for x in -1..5 {
                let pos = Pos { y, x };
                let expect_ok = (0..3).contains(&y) && (0..4).contains(&x);
                assert_eq!(field.tile(pos).is_ok(), expect_ok, "at {pos:?}");
            }
        }
        assert_eq!(
            field.tile(Pos { y: 3, x: 0 }),
            Err(FieldError::OutOfBounds { pos: Pos { y: 3, x: 0 } })
        );
    }

    #[test]
    fn placement_rejects_walls_and_occupied_tiles() {
        let mut field = Field::new(5, 5);
        field.add_wall(Pos { y: 2, x: 2 }, Direction::East, 1);
        let (a, b) = id_pair();

        assert_eq!(
            field.place_entity(a, Pos { y: 2, x: 2 }),
            Err(FieldError::Blocked { pos: Pos { y: 2, x: 2 } })
        );
        field.place_entity(a, Pos { y: 1, x: 1 }).unwrap();
        assert_eq!(
            field.place_entity(b, Pos { y: 1, x: 1 }),
            Err(FieldError::Blocked { pos: Pos { y: 1, x: 1 } })
        );
        let tile = field.tile(Pos { y: 1, x: 1 }).unwrap();
        assert_eq!(tile.occupant, Some(a));
        assert!(tile.collidable);
    }

    #[test]
    fn relocate_moves_occupancy_and_frees_the_source_tile() {
        let mut field = Field::new(5, 5);
        let id = some_id();
        field.place_entity(id, Pos { y: 0, x: 0 }).unwrap();
        field.relocate(id, Pos { y: 0, x: 0 }, Pos { y: 0, x: 1 }).unwrap();

        let old = field.tile(Pos { y: 0, x: 0 }).unwrap();
        assert_eq!(old.occupant, None);
        assert!(!old.collidable);
        assert_eq!(field.tile(Pos { y: 0, x: 1 }).unwrap().occupant, Some(id));
    }

    #[test]
    fn rejected_relocate_leaves_the_source_tile_claimed() {
        let mut field = Field::new(5, 5);
        field.add_wall(Pos { y: 0, x: 1 }, Direction::South, 1);
        let id = some_id();
        field.place_entity(id, Pos { y: 0, x: 0 }).unwrap();

        let result = field.relocate(id, Pos { y: 0, x: 0 }, Pos { y: 0, x: 1 });
        assert_eq!(result, Err(FieldError::Blocked { pos: Pos { y: 0, x: 1 } }));
        assert_eq!(field.tile(Pos { y: 0, x: 0 }).unwrap().occupant, Some(id));
    }

    #[test]
    fn wall_segments_skip_out_of_bounds_steps() {
        let mut field = Field::new(4, 4);
        field.add_wall(Pos { y: 2, x: 0 }, Direction::South, 6);

        assert!(field.tile(Pos { y: 2, x: 0 }).unwrap().collidable);
        assert!(field.tile(Pos { y: 3, x: 0 }).unwrap().collidable);
        // Remaining steps fell off the grid; nothing else changed.
        for y in 0..2 {
            assert!(!field.tile(Pos { y, x: 0 }).unwrap().collidable);
        }
    }

    #[test]
    fn wall_placement_overwrites_whatever_the_tile_held() {
        let mut field = Field::new(4, 4);
        let id = some_id();
        field.place_entity(id, Pos { y: 1, x: 1 }).unwrap();
        field.add_wall(Pos { y: 1, x: 1 }, Direction::East, 1);

        let tile = field.tile(Pos { y: 1, x: 1 }).unwrap();
        assert!(tile.collidable);
        assert_eq!(tile.occupant, None);
        assert!(tile.items.is_empty());
    }
}
