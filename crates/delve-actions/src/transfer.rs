//! Item transfer between any two item holders.
//!
//! Box to character, character to character, creature to character: any
//! pair of [`ItemHolder`]s. Rules are checked in a fixed order and the first
//! failing rule decides the rejection:
//!
//! 1. the source holds the item (`item-unavailable`)
//! 2. the source's gate, if it has one, is open (`from-closed`)
//! 3. the destination's gate, if it has one, is open (`to-closed`)
//! 4. when both destination and item carry a rank, the destination's rank is
//!    at least the item's (`rank-too-low`)
//! 5. when the destination has slot capacity and the item a slot cost, the
//!    free slots cover the cost (`insufficient-slots`)
//!
//! Nothing is mutated until every rule passes. The item is then stored in the
//! destination, checked for, and only then removed from the source.

use delve_types::{Capabilities, Item, ItemHolder, ItemId};
use tracing::{debug, warn};

use crate::result::{ActionResult, Rejection};

/// Move one item from `from` to `to`.
///
/// On success the item is held by `to` and no longer by `from`. On failure
/// neither collection has changed.
pub fn transfer<F, T>(from: &mut F, to: &mut T, item_id: ItemId) -> ActionResult
where
    F: ItemHolder + ?Sized,
    T: ItemHolder + ?Sized,
{
    let item = match from.items().find(item_id) {
        Some(item) => {
            if let Err(reason) = check_rules(&*from, &*to, item) {
                debug!(item = %item_id, reason = reason.code(), "Transfer refused");
                return ActionResult::rejected(reason);
            }
            item.clone()
        }
        None => {
            debug!(item = %item_id, "Transfer refused: item not held");
            return ActionResult::rejected(Rejection::ItemUnavailable);
        }
    };

    to.store(item);

    if !to.items().contains(item_id) {
        warn!(item = %item_id, "Destination did not keep transferred item");
        return ActionResult::rejected(Rejection::Unknown);
    }

    from.items_mut().remove(item_id);
    debug!(item = %item_id, "Item transferred");
    ActionResult::succeeded()
}

/// Rules 2 to 5, in order.
fn check_rules<F, T>(from: &F, to: &T, item: &Item) -> Result<(), Rejection>
where
    F: ItemHolder + ?Sized,
    T: ItemHolder + ?Sized,
{
    if from.gate().is_some_and(|gate| !gate.is_open()) {
        return Err(Rejection::FromClosed);
    }

    if to.gate().is_some_and(|gate| !gate.is_open()) {
        return Err(Rejection::ToClosed);
    }

    if let (Some(holder_rank), Some(item_rank)) = (to.rank(), item.rank()) {
        if holder_rank < item_rank {
            return Err(Rejection::RankTooLow);
        }
    }

    if let (Some(free), Some(cost)) = (to.free_slots(), item.slot_cost()) {
        if free < cost {
            return Err(Rejection::InsufficientSlots);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use delve_types::{Attributes, Character, CharacterKind, Container, Inventory};

    use super::*;

    fn hero() -> Character {
        Character::new(
            "hero",
            CharacterKind::Adventurer,
            Attributes {
                dexterity: 10.0,
                attack: 5,
                defense: 5,
                health: 20,
            },
        )
    }

    fn open_box_with(item: Item) -> Container {
        let items: Inventory = std::iter::once(item).collect();
        Container::new("chest", items).opened()
    }

    fn ids(inv: &Inventory) -> Vec<ItemId> {
        inv.iter().map(|i| i.id).collect()
    }

    #[test]
    fn moves_item_from_open_box_to_character() {
        let gem = Item::new("gem");
        let gem_id = gem.id;
        let mut chest = open_box_with(gem);
        let mut h = hero();

        let result = transfer(&mut chest, &mut h, gem_id);

        assert!(result.is_success());
        assert!(chest.items.is_empty());
        assert_eq!(ids(&h.items), vec![gem_id]);
    }

    #[test]
    fn missing_item_is_unavailable() {
        let mut chest = open_box_with(Item::new("gem"));
        let mut h = hero();
        let result = transfer(&mut chest, &mut h, ItemId::new());
        assert_eq!(result.rejection(), Some(Rejection::ItemUnavailable));
        assert_eq!(chest.items.len(), 1);
        assert!(h.items.is_empty());
    }

    #[test]
    fn closed_source_is_refused() {
        let gem = Item::new("gem");
        let gem_id = gem.id;
        let mut chest = Container::new("chest", std::iter::once(gem).collect());
        let mut h = hero();
        let result = transfer(&mut chest, &mut h, gem_id);
        assert_eq!(result.rejection(), Some(Rejection::FromClosed));
        assert!(chest.items.contains(gem_id));
    }

    #[test]
    fn closed_destination_is_refused() {
        let gem = Item::new("gem");
        let gem_id = gem.id;
        let mut h = hero();
        h.items.add(gem);
        let mut chest = Container::new("chest", Inventory::new());
        let result = transfer(&mut h, &mut chest, gem_id);
        assert_eq!(result.rejection(), Some(Rejection::ToClosed));
        assert!(h.items.contains(gem_id));
        assert!(chest.items.is_empty());
    }

    #[test]
    fn rank_checked_before_slots() {
        let crown = Item::new("crown").with_rank(5).with_slots(100);
        let crown_id = crown.id;
        let mut chest = open_box_with(crown);
        let mut h = hero().with_rank(3).with_slots(1);
        let result = transfer(&mut chest, &mut h, crown_id);
        assert_eq!(result.rejection(), Some(Rejection::RankTooLow));
        assert!(chest.items.contains(crown_id));
        assert!(h.items.is_empty());
    }

    #[test]
    fn equal_rank_is_enough() {
        let crown = Item::new("crown").with_rank(3);
        let crown_id = crown.id;
        let mut chest = open_box_with(crown);
        let mut h = hero().with_rank(3);
        assert!(transfer(&mut chest, &mut h, crown_id).is_success());
    }

    #[test]
    fn rank_ignored_when_holder_has_none() {
        let crown = Item::new("crown").with_rank(9);
        let crown_id = crown.id;
        let mut chest = open_box_with(crown);
        let mut h = hero();
        assert!(transfer(&mut chest, &mut h, crown_id).is_success());
    }

    #[test]
    fn insufficient_slots_counts_carried_load() {
        let shield = Item::new("shield").with_slots(3);
        let shield_id = shield.id;
        let mut chest = open_box_with(shield);
        let mut h = hero().with_slots(4);
        h.items.add(Item::new("pack").with_slots(2));
        let result = transfer(&mut chest, &mut h, shield_id);
        assert_eq!(result.rejection(), Some(Rejection::InsufficientSlots));
        assert_eq!(h.items.len(), 1);
    }

    #[test]
    fn exact_fit_is_allowed() {
        let shield = Item::new("shield").with_slots(2);
        let shield_id = shield.id;
        let mut chest = open_box_with(shield);
        let mut h = hero().with_slots(4);
        h.items.add(Item::new("pack").with_slots(2));
        assert!(transfer(&mut chest, &mut h, shield_id).is_success());
        assert_eq!(h.items.slot_load(), Some(4));
    }

    #[test]
    fn character_to_character() {
        let coin = Item::new("coin");
        let coin_id = coin.id;
        let mut giver = hero();
        giver.items.add(coin);
        let mut taker = hero();
        assert!(transfer(&mut giver, &mut taker, coin_id).is_success());
        assert!(giver.items.is_empty());
        assert!(taker.items.contains(coin_id));
    }

    /// A holder that silently drops everything it is given.
    struct Sinkhole {
        items: Inventory,
    }

    impl Capabilities for Sinkhole {}

    impl ItemHolder for Sinkhole {
        fn items(&self) -> &Inventory {
            &self.items
        }

        fn items_mut(&mut self) -> &mut Inventory {
            &mut self.items
        }

        fn store(&mut self, _item: Item) {}
    }

    #[test]
    fn destination_that_loses_items_reports_unknown() {
        let gem = Item::new("gem");
        let gem_id = gem.id;
        let mut chest = open_box_with(gem);
        let mut sink = Sinkhole {
            items: Inventory::new(),
        };
        let result = transfer(&mut chest, &mut sink, gem_id);
        assert_eq!(result.rejection(), Some(Rejection::Unknown));
        assert!(chest.items.contains(gem_id));
    }

    #[test]
    fn works_through_trait_objects() {
        let gem = Item::new("gem");
        let gem_id = gem.id;
        let mut chest = open_box_with(gem);
        let mut h = hero();
        let from: &mut dyn ItemHolder = &mut chest;
        let to: &mut dyn ItemHolder = &mut h;
        assert!(transfer(from, to, gem_id).is_success());
    }
}
