//! Attack resolution and status-effect decay.
//! This module owns the damage/armor/status math and nothing else; target
//! selection and adjacency live in the policy layer.

use super::*;
use crate::content::Weapon;
use crate::state::Actor;

pub const STUN_TICKS: u32 = 2;
pub const BLEED_TICKS: u32 = 3;
pub const BLEED_DAMAGE: i32 = 2;

const CRIT_MULTIPLIER: f32 = 1.5;
const ARMOR_BYPASS_DIVISOR: f32 = 3.0;

/// Full resolution for an enemy-initiated hit: dodge gate, then independent
/// critical/stun/bleed Bernoulli rolls, then the armor interaction. Roll
/// order is fixed (dodge, crit, stun, bleed) so a seeded stream replays.
pub(super) fn strike(defender: &mut Actor, weapon: &Weapon, dice: &mut impl Dice) -> AttackOutcome {
    if dice.unit() < defender.dodge_chance {
        return AttackOutcome::Dodged;
    }

    let mut damage = weapon.damage as f32;
    let critical = dice.unit() < weapon.critical_chance;
    if critical {
        damage *= CRIT_MULTIPLIER;
    }
    let stunned = dice.unit() < weapon.stun_chance;
    if stunned {
        defender.stun_ticks = STUN_TICKS;
        defender.stunned = true;
    }
    let bled = dice.unit() < weapon.bleed_chance;
    if bled {
        defender.bleed_ticks += BLEED_TICKS;
    }

    let dealt = if defender.armor > weapon.armor_penetration {
        // Armor soaks the blow: it degrades by the unpenetrated share while
        // the penetrating share leaks through at a third of its value.
        defender.armor = (defender.armor - damage * (1.0 - weapon.armor_penetration)).max(0.0);
        (damage * weapon.armor_penetration / ARMOR_BYPASS_DIVISOR).floor() as i32
    } else {
        damage.floor() as i32
    };
    defender.hp -= dealt;

    AttackOutcome::Hit { damage: dealt, critical, stunned, bled }
}

/// Player-initiated hit: flat weapon damage, no dodge/armor/status model.
/// Deliberately asymmetric with `strike`; folding the two together would
/// change balance.
pub(super) fn simple_strike(defender: &mut Actor, weapon: &Weapon) -> i32 {
    defender.hp -= weapon.damage;
    weapon.damage
}

/// Once-per-tick status decay. Bleed and stun run on separate counters and
/// both are checked every tick; `stunned` is recomputed from its counter
/// rather than toggled anywhere else.
pub(super) fn apply_effects(actor: &mut Actor) -> Option<i32> {
    let mut bleed_damage = None;
    if actor.bleed_ticks > 0 {
        actor.bleed_ticks -= 1;
        actor.hp -= BLEED_DAMAGE;
        bleed_damage = Some(BLEED_DAMAGE);
    }
    if actor.stun_ticks > 0 {
        actor.stun_ticks -= 1;
        actor.stunned = true;
    } else {
        actor.stunned = false;
    }
    bleed_damage
}

impl Game {
    /// Enemy swing at a target. Withheld without state changes while the
    /// attacker is stunned or unarmed; otherwise resolves and logs the hit.
    pub(super) fn enemy_strike(&mut self, attacker: EntityId, defender: EntityId) -> AttackOutcome {
        let (weapon, attacker_stunned) = {
            let a = &self.state.actors[attacker];
            (a.weapon.clone(), a.stunned)
        };
        let Some(weapon) = weapon else {
            return AttackOutcome::Withheld;
        };
        if attacker_stunned {
            return AttackOutcome::Withheld;
        }

        let target = self.state.actors.get_mut(defender).expect("strike target should exist");
        let outcome = strike(target, &weapon, &mut self.rng);
        match outcome {
            AttackOutcome::Dodged => {
                self.log.push(LogEvent::AttackDodged { attacker, defender });
            }
            AttackOutcome::Hit { damage, critical, stunned, bled } => {
                self.log.push(LogEvent::AttackHit {
                    attacker,
                    defender,
                    damage,
                    critical,
                    stunned,
                    bled,
                });
            }
            AttackOutcome::Withheld => {}
        }
        outcome
    }
}
