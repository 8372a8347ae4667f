//! Combat resolution for a single attack.
//!
//! ## Combat flow
//!
//! 1. Power is the attacker's attack plus the weapon's attack bonus.
//! 2. Defense is the defender's defense plus the armor's defense bonus.
//! 3. If power beats defense, the defender loses the difference in health.
//! 4. Otherwise the attack is defended. If the defender wears armor, the
//!    armor's attack value strikes back at the attacker.
//!
//! Health is not clamped; a combatant can end up below zero. Deciding what
//! happens to a depleted combatant is left to the caller.

use delve_types::{Capabilities, Item};
use tracing::debug;

use crate::result::{ActionData, ActionResult, CombatReport, Rejection};

/// The participants in one attack.
pub struct Engagement<'a> {
    /// Who strikes.
    pub attacker: &'a mut dyn Capabilities,
    /// Who is struck.
    pub defender: &'a mut dyn Capabilities,
    /// The attacker's weapon, if any.
    pub weapon: Option<&'a Item>,
    /// The defender's armor, if any.
    pub armor: Option<&'a Item>,
}

impl core::fmt::Debug for Engagement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engagement")
            .field("weapon", &self.weapon)
            .field("armor", &self.armor)
            .finish_non_exhaustive()
    }
}

/// Resolve one attack and apply its damage.
///
/// Missing stats count as 0: an attacker without an attack capability has
/// no power, a defender without a health capability takes no damage.
pub fn attack(engagement: Engagement<'_>) -> ActionResult {
    let Engagement {
        attacker,
        defender,
        weapon,
        armor,
    } = engagement;

    let power = attacker
        .attack()
        .unwrap_or(0)
        .saturating_add(weapon.and_then(|w| w.attack).unwrap_or(0));
    let defense = defender
        .defense()
        .unwrap_or(0)
        .saturating_add(armor.and_then(|a| a.defense).unwrap_or(0));

    debug!(power, defense, "Attack resolved");
    let report = ActionData::Combat(CombatReport { power, defense });

    if power > defense {
        let damage = power.saturating_sub(defense);
        if let Some(health) = defender.health_mut() {
            health.reduce(damage);
        }
        return ActionResult::succeeded().with_data(report);
    }

    if let Some(armor) = armor {
        let counter = armor.attack.unwrap_or(0);
        if let Some(health) = attacker.health_mut() {
            health.reduce(counter);
        }
        debug!(counter, "Armor struck back");
    }

    ActionResult::rejected(Rejection::Defended).with_data(report)
}
