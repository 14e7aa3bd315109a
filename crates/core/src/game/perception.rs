//! Line-of-sight checks between grid positions.
//! This module exists to keep sight rules apart from movement planning.
//! It does not own detection ranges; callers pass the observer's.

use super::*;
use crate::game::pathfinding::manhattan;
use crate::state::Field;

/// Range-gated discrete sight check. Walks from `from` toward `to`, each
/// step moving row and column by the sign of their remaining deltas, so the
/// walk cuts diagonally before straightening out. An integer approximation,
/// not a geometric raycast.
///
/// A collidable tile blocks only while unoccupied: a tile holding an entity
/// is something the observer can see past (and at).
pub fn has_line_of_sight(field: &Field, from: Pos, to: Pos, detection_range: u32) -> bool {
    if manhattan(from, to) > detection_range {
        return false;
    }
    let mut pos = from;
    while pos != to {
        pos = Pos { y: pos.y + (to.y - pos.y).signum(), x: pos.x + (to.x - pos.x).signum() };
        let Ok(tile) = field.tile(pos) else {
            return false;
        };
        if tile.collidable && tile.occupant.is_none() {
            return false;
        }
    }
    true
}
