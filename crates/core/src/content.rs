use serde::{Deserialize, Serialize};

use crate::types::{Direction, Pos};

pub mod keys {
    pub const WEAPON_RUSTY_SWORD: &str = "weapon_rusty_sword";
    pub const WEAPON_IRON_MACE: &str = "weapon_iron_mace";
    pub const WEAPON_HUNTING_KNIFE: &str = "weapon_hunting_knife";
    pub const WEAPON_GUARD_HALBERD: &str = "weapon_guard_halberd";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
    /// Fraction of damage that punches through armor, in `(0, 1]`.
    pub armor_penetration: f32,
    pub critical_chance: f32,
    pub stun_chance: f32,
    pub bleed_chance: f32,
}

/// Built-in weapon stats, keyed by the `keys` constants. Level plans may
/// also carry bespoke `Weapon` values inline instead of a catalog key.
pub fn weapon(key: &str) -> Option<Weapon> {
    let (name, damage, pen, crit, stun, bleed) = match key {
        keys::WEAPON_RUSTY_SWORD => ("Rusty Sword", 10, 0.6, 0.10, 0.05, 0.10),
        keys::WEAPON_IRON_MACE => ("Iron Mace", 14, 0.4, 0.10, 0.30, 0.0),
        keys::WEAPON_HUNTING_KNIFE => ("Hunting Knife", 6, 0.9, 0.25, 0.0, 0.40),
        keys::WEAPON_GUARD_HALBERD => ("Guard Halberd", 12, 0.7, 0.15, 0.10, 0.15),
        _ => return None,
    };
    Some(Weapon {
        name: name.to_string(),
        damage,
        armor_penetration: pen,
        critical_chance: crit,
        stun_chance: stun,
        bleed_chance: bleed,
    })
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WallSpec {
    pub origin: Pos,
    pub direction: Direction,
    pub length: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub pos: Pos,
    pub hp: i32,
    pub armor: f32,
    pub dodge_chance: f32,
    pub detection_range: u32,
    pub weapon: Option<Weapon>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub name: String,
    pub pos: Pos,
    pub hp: i32,
    pub armor: f32,
    pub dodge_chance: f32,
    pub detection_range: u32,
    pub weapon: Option<Weapon>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemSpawn {
    pub name: String,
    pub pos: Pos,
}

/// Plain-data description of a level: everything the loading collaborator
/// supplies, applied through field and actor operations at bootstrap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelPlan {
    pub width: usize,
    pub height: usize,
    pub player: PlayerSpawn,
    pub walls: Vec<WallSpec>,
    pub enemies: Vec<EnemySpawn>,
    pub items: Vec<ItemSpawn>,
}

impl LevelPlan {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Starter layout used by the headless tools and the smoke suites.
    pub fn demo() -> Self {
        Self {
            width: 32,
            height: 20,
            player: PlayerSpawn {
                pos: Pos { y: 0, x: 0 },
                hp: 100,
                armor: 0.0,
                dodge_chance: 0.05,
                detection_range: 10,
                weapon: weapon(keys::WEAPON_RUSTY_SWORD),
            },
            walls: vec![
                WallSpec { origin: Pos { y: 7, x: 7 }, direction: Direction::North, length: 5 },
                WallSpec { origin: Pos { y: 12, x: 4 }, direction: Direction::East, length: 9 },
                WallSpec { origin: Pos { y: 3, x: 20 }, direction: Direction::South, length: 7 },
            ],
            enemies: vec![
                EnemySpawn {
                    name: "Vault Sentry".to_string(),
                    pos: Pos { y: 5, x: 14 },
                    hp: 40,
                    armor: 10.0,
                    dodge_chance: 0.1,
                    detection_range: 8,
                    weapon: weapon(keys::WEAPON_GUARD_HALBERD),
                },
                EnemySpawn {
                    name: "Gutter Rat".to_string(),
                    pos: Pos { y: 16, x: 9 },
                    hp: 18,
                    armor: 0.0,
                    dodge_chance: 0.25,
                    detection_range: 6,
                    weapon: weapon(keys::WEAPON_HUNTING_KNIFE),
                },
                EnemySpawn {
                    name: "Mace Brute".to_string(),
                    pos: Pos { y: 14, x: 26 },
                    hp: 55,
                    armor: 6.0,
                    dodge_chance: 0.0,
                    detection_range: 7,
                    weapon: weapon(keys::WEAPON_IRON_MACE),
                },
            ],
            items: vec![
                ItemSpawn { name: "Bandage Roll".to_string(), pos: Pos { y: 0, x: 0 } },
                ItemSpawn { name: "Torch Stub".to_string(), pos: Pos { y: 9, x: 12 } },
            ],
        }
    }
}
