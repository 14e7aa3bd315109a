//! Shortest-path search over the tile field.
//! This module exists so route queries stay separate from per-tick policy.
//! It does not own move execution; collision is re-checked at move time.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::*;
use crate::state::Field;

/// Breadth-first shortest path over cardinal steps. Returns `Some(vec![])`
/// when `start == goal` and `None` when the goal cannot be reached; an
/// empty route and no route are different answers. The returned route
/// excludes `start` and ends on `goal`.
///
/// A collidable tile that currently holds an entity still counts as
/// traversable: occupants shift between ticks, and the mover re-validates
/// each step when executing it.
pub fn shortest_path(field: &Field, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    if start == goal {
        return Some(Vec::new());
    }

    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();
    let mut visited: BTreeSet<Pos> = BTreeSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }
        for next in neighbors(current) {
            if visited.contains(&next) || !is_traversable(field, next) {
                continue;
            }
            visited.insert(next);
            came_from.insert(next, current);
            queue.push_back(next);
        }
    }
    None
}

fn is_traversable(field: &Field, pos: Pos) -> bool {
    match field.tile(pos) {
        Ok(tile) => !tile.collidable || tile.occupant.is_some(),
        Err(_) => false,
    }
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut pos = goal;
    let mut path = vec![pos];
    while pos != start {
        pos = *came_from.get(&pos).expect("every queued node has a predecessor");
        path.push(pos);
    }
    path.reverse();
    path.remove(0);
    path
}

/// Cardinal neighbors in fixed N/E/S/W visiting order.
pub(super) fn neighbors(p: Pos) -> [Pos; 4] {
    [
        Pos { y: p.y - 1, x: p.x },
        Pos { y: p.y, x: p.x + 1 },
        Pos { y: p.y + 1, x: p.x },
        Pos { y: p.y, x: p.x - 1 },
    ]
}

pub(super) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
