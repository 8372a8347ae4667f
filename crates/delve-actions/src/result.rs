//! The result value every action returns.
//!
//! Actions never fail with an `Err`. A rule that refuses the action produces
//! an [`ActionResult`] with `success == false` and a [`Rejection`] naming the
//! rule. Serialized, a result has the shape
//! `{"success": bool, "error"?: "kebab-code", "data"?: {...}}`.

use serde::{Deserialize, Serialize};

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// The source does not hold the requested item.
    #[error("item unavailable")]
    ItemUnavailable,
    /// The source has a gate and it is closed.
    #[error("source is closed")]
    FromClosed,
    /// The destination has a gate and it is closed.
    #[error("destination is closed")]
    ToClosed,
    /// The destination's rank is below the item's rank.
    #[error("rank too low")]
    RankTooLow,
    /// The destination does not have enough free slots.
    #[error("insufficient slots")]
    InsufficientSlots,
    /// The actor is not dexterous enough to open the container.
    #[error("insufficient dexterity")]
    Dexterity,
    /// The attack did not beat the defender's defense.
    #[error("attack defended")]
    Defended,
    /// The door's path does not lead from this place to another known place.
    #[error("no linked place")]
    NoLinkedPlace,
    /// The group is not at the place it is leaving from.
    #[error("group not present")]
    GroupNotPresent,
    /// The place the action starts from is not in the world.
    #[error("place not found")]
    PlaceNotFound,
    /// A post-condition failed even though every rule passed.
    #[error("unknown failure")]
    Unknown,
}

impl Rejection {
    /// Stable kebab-case code, matching the serialized form.
    pub const fn code(self) -> &'static str {
        match self {
            Self::ItemUnavailable => "item-unavailable",
            Self::FromClosed => "from-closed",
            Self::ToClosed => "to-closed",
            Self::RankTooLow => "rank-too-low",
            Self::InsufficientSlots => "insufficient-slots",
            Self::Dexterity => "dexterity",
            Self::Defended => "defended",
            Self::NoLinkedPlace => "no-linked-place",
            Self::GroupNotPresent => "group-not-present",
            Self::PlaceNotFound => "place-not-found",
            Self::Unknown => "unknown",
        }
    }
}

/// Power and defense computed for one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    /// Attacker's attack plus weapon bonus.
    pub power: i64,
    /// Defender's defense plus armor bonus.
    pub defense: i64,
}

/// Extra data attached to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionData {
    /// Numbers from an attack.
    Combat(CombatReport),
}

/// Outcome of a single action.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action took effect.
    pub success: bool,
    /// The rule that refused the action, if it failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Rejection>,
    /// Extra data, if the action produces any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
}

impl ActionResult {
    /// A successful result without data.
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    /// A failed result.
    pub const fn rejected(reason: Rejection) -> Self {
        Self {
            success: false,
            error: Some(reason),
            data: None,
        }
    }

    /// Attach data to this result.
    pub const fn with_data(mut self, data: ActionData) -> Self {
        self.data = Some(data);
        self
    }

    /// Whether the action took effect.
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The rejection, if the action failed.
    pub const fn rejection(&self) -> Option<Rejection> {
        self.error
    }

    /// Combat numbers, if this is the result of an attack.
    pub const fn combat(&self) -> Option<CombatReport> {
        match self.data {
            Some(ActionData::Combat(report)) => Some(report),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_serde_names() {
        let all = [
            Rejection::ItemUnavailable,
            Rejection::FromClosed,
            Rejection::ToClosed,
            Rejection::RankTooLow,
            Rejection::InsufficientSlots,
            Rejection::Dexterity,
            Rejection::Defended,
            Rejection::NoLinkedPlace,
            Rejection::GroupNotPresent,
            Rejection::PlaceNotFound,
            Rejection::Unknown,
        ];
        for reason in all {
            let json = serde_json::to_string(&reason).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", reason.code()));
        }
    }

    #[test]
    fn success_serializes_without_optional_fields() {
        let json = serde_json::to_value(ActionResult::succeeded()).unwrap_or_default();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn failure_with_data_serializes_flat() {
        let result = ActionResult::rejected(Rejection::Defended).with_data(ActionData::Combat(
            CombatReport {
                power: 10,
                defense: 20,
            },
        ));
        let json = serde_json::to_value(result).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "defended",
                "data": { "power": 10, "defense": 20 }
            })
        );
    }

    #[test]
    fn rejection_without_data() {
        let refused = ActionResult::rejected(Rejection::RankTooLow);
        assert!(!refused.is_success());
        assert_eq!(refused.rejection(), Some(Rejection::RankTooLow));
        assert!(refused.combat().is_none());
    }

    #[test]
    fn rejection_display() {
        assert_eq!(Rejection::InsufficientSlots.to_string(), "insufficient slots");
    }
}
