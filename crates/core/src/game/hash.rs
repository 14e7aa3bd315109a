//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation code.
//! It does not own any gameplay state.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    /// Folds the observable simulation state into one digest. Two runs that
    /// made the same moves from the same seed hash identically.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);

        hasher.write_usize(self.state.field.width);
        hasher.write_usize(self.state.field.height);
        for tile in &self.state.field.tiles {
            hasher.write_u8(u8::from(tile.collidable));
            hasher.write_u8(u8::from(tile.occupant.is_some()));
            hasher.write_usize(tile.items.len());
        }

        hasher.write_usize(self.state.actors.len());
        for (_, actor) in &self.state.actors {
            hasher.write_u8(match actor.kind {
                ActorKind::Player => 0,
                ActorKind::Enemy => 1,
            });
            hasher.write_i32(actor.pos.y);
            hasher.write_i32(actor.pos.x);
            hasher.write_i32(actor.hp);
            hasher.write_u32(actor.armor.to_bits());
            hasher.write_u32(actor.stun_ticks);
            hasher.write_u32(actor.bleed_ticks);
            hasher.write_u8(u8::from(actor.stunned));
            hasher.write_u32(actor.idle_wait_ticks);
            hasher.write_usize(actor.pending_path.as_ref().map_or(0, |path| path.len()));
        }
        hasher.finish()
    }
}
