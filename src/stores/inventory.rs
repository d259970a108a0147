//! Gamified equipment loadout: six slots on a ring for skill items plus up
//! to three equipped interests. The [`Loadout`] core carries the rules; the
//! store adds reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use log::debug;

/// Most interests that can be equipped at once.
pub const MAX_EQUIPPED_INTERESTS: usize = 3;

/// Item rarity, controlling card color and the effectiveness multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
	Common,
	Rare,
	Legendary,
	Mythical,
}

impl Rarity {
	/// All rarities, common first.
	pub const ALL: [Rarity; 4] = [
		Rarity::Common,
		Rarity::Rare,
		Rarity::Legendary,
		Rarity::Mythical,
	];

	/// Card accent color.
	pub fn color(self) -> &'static str {
		match self {
			Rarity::Common => "#C0C0C0",
			Rarity::Rare => "#9C27B0",
			Rarity::Legendary => "#FFD700",
			Rarity::Mythical => "#000000",
		}
	}

	/// Effectiveness multiplier applied to an item's level.
	pub fn multiplier(self) -> f32 {
		match self {
			Rarity::Common => 1.0,
			Rarity::Rare => 1.5,
			Rarity::Legendary => 2.0,
			Rarity::Mythical => 3.0,
		}
	}

	/// Display label.
	pub fn label(self) -> &'static str {
		match self {
			Rarity::Common => "Common",
			Rarity::Rare => "Rare",
			Rarity::Legendary => "Legendary",
			Rarity::Mythical => "Mythical",
		}
	}
}

/// An equippable soft-skill item.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillItem {
	pub id: String,
	pub name: String,
	pub level: u32,
	pub rarity: Rarity,
	pub icon: String,
	pub description: String,
	pub effects: Vec<String>,
}

impl SkillItem {
	/// Level scaled by the rarity multiplier.
	pub fn effectiveness(&self) -> f32 {
		self.level as f32 * self.rarity.multiplier()
	}
}

/// An equippable interest card.
#[derive(Clone, Debug, PartialEq)]
pub struct InterestItem {
	pub id: String,
	pub name: String,
	pub level: u32,
	pub icon: String,
	pub description: String,
	pub color: String,
	pub expertise: Vec<String>,
}

/// A fixed slot on the equipment ring.
#[derive(Clone, Copy, Debug)]
pub struct EquipSlot {
	pub id: &'static str,
	pub name: &'static str,
	pub default_icon: &'static str,
	pub description: &'static str,
	/// Clockwise from the top, degrees.
	pub angle_deg: f64,
	/// Distance from the ring centre, pixels.
	pub distance: f64,
}

impl EquipSlot {
	/// Pixel offset from the ring centre (y grows downward).
	pub fn offset(&self) -> (f64, f64) {
		let rad = self.angle_deg.to_radians();
		(rad.sin() * self.distance, -rad.cos() * self.distance)
	}
}

/// What is currently equipped: slot → item, plus the interest row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Loadout {
	equipped: HashMap<String, SkillItem>,
	interests: Vec<InterestItem>,
}

impl Loadout {
	/// Item occupying `slot_id`, if any.
	pub fn equipped_in(&self, slot_id: &str) -> Option<&SkillItem> {
		self.equipped.get(slot_id)
	}

	/// Whether `item_id` sits in any slot.
	pub fn is_item_equipped(&self, item_id: &str) -> bool {
		self.equipped.values().any(|item| item.id == item_id)
	}

	/// Place `item` into `slot_id`. An item occupies at most one slot, so a
	/// re-equip moves it; whatever held the slot before is replaced.
	pub fn equip(&mut self, slot_id: &str, item: SkillItem) {
		self.equipped.retain(|_, held| held.id != item.id);
		self.equipped.insert(slot_id.to_string(), item);
	}

	/// Empty `slot_id`, returning the item that was there.
	pub fn unequip(&mut self, slot_id: &str) -> Option<SkillItem> {
		self.equipped.remove(slot_id)
	}

	/// Equipped interests in placement order.
	pub fn interests(&self) -> &[InterestItem] {
		&self.interests
	}

	/// Whether the interest is already placed.
	pub fn is_interest_equipped(&self, id: &str) -> bool {
		self.interests.iter().any(|i| i.id == id)
	}

	/// Append an interest if there is room and it is not already placed.
	pub fn equip_interest(&mut self, interest: InterestItem) -> bool {
		if self.interests.len() >= MAX_EQUIPPED_INTERESTS
			|| self.is_interest_equipped(&interest.id)
		{
			return false;
		}
		self.interests.push(interest);
		true
	}

	/// Place an interest at `index`, replacing whatever held that position.
	/// A re-placed interest moves rather than duplicates; overflow past
	/// [`MAX_EQUIPPED_INTERESTS`] drops from the end.
	pub fn equip_interest_at(&mut self, interest: InterestItem, index: usize) {
		if let Some(current) = self.interests.iter().position(|i| i.id == interest.id) {
			self.interests.remove(current);
		}
		if index < self.interests.len() {
			self.interests.remove(index);
		}
		let index = index.min(self.interests.len());
		self.interests.insert(index, interest);
		self.interests.truncate(MAX_EQUIPPED_INTERESTS);
	}

	/// Remove an interest by id; unknown ids are ignored.
	pub fn unequip_interest(&mut self, id: &str) {
		self.interests.retain(|i| i.id != id);
	}

	/// Empty every slot and the interest row.
	pub fn clear(&mut self) {
		self.equipped.clear();
		self.interests.clear();
	}

	/// Equipped items plus equipped interests.
	pub fn total_equipped(&self) -> usize {
		self.equipped.len() + self.interests.len()
	}
}

/// Loadout handle.
#[derive(Clone, Copy)]
pub struct InventoryStore {
	loadout: RwSignal<Loadout>,
}

impl InventoryStore {
	/// Start with everything unequipped.
	pub fn new() -> Self {
		Self {
			loadout: RwSignal::new(Loadout::default()),
		}
	}

	/// Tracked read access.
	pub fn with<T>(&self, f: impl FnOnce(&Loadout) -> T) -> T {
		self.loadout.with(f)
	}

	/// Equip `item` into `slot_id`.
	pub fn equip(&self, slot_id: &str, item: SkillItem) {
		debug!("equipping `{}` into slot `{slot_id}`", item.id);
		self.loadout.update(|l| l.equip(slot_id, item));
	}

	/// Empty a slot.
	pub fn unequip(&self, slot_id: &str) {
		self.loadout.update(|l| {
			l.unequip(slot_id);
		});
	}

	/// Equip an interest at the end of the row.
	pub fn equip_interest(&self, interest: InterestItem) -> bool {
		let mut placed = false;
		self.loadout.update(|l| placed = l.equip_interest(interest));
		placed
	}

	/// Remove an interest by id.
	pub fn unequip_interest(&self, id: &str) {
		self.loadout.update(|l| l.unequip_interest(id));
	}

	/// Empty the whole loadout.
	pub fn clear_all(&self) {
		self.loadout.update(Loadout::clear);
	}
}

impl Default for InventoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str, level: u32, rarity: Rarity) -> SkillItem {
		SkillItem {
			id: id.to_string(),
			name: id.to_string(),
			level,
			rarity,
			icon: String::new(),
			description: String::new(),
			effects: Vec::new(),
		}
	}

	fn interest(id: &str) -> InterestItem {
		InterestItem {
			id: id.to_string(),
			name: id.to_string(),
			level: 50,
			icon: String::new(),
			description: String::new(),
			color: String::new(),
			expertise: Vec::new(),
		}
	}

	#[test]
	fn equipping_moves_item_between_slots() {
		let mut loadout = Loadout::default();
		loadout.equip("head", item("focus", 80, Rarity::Rare));
		loadout.equip("bottom", item("focus", 80, Rarity::Rare));
		assert!(loadout.equipped_in("head").is_none());
		assert_eq!(loadout.equipped_in("bottom").unwrap().id, "focus");
		assert!(loadout.is_item_equipped("focus"));
		assert_eq!(loadout.total_equipped(), 1);
	}

	#[test]
	fn equipping_replaces_slot_occupant() {
		let mut loadout = Loadout::default();
		loadout.equip("head", item("a", 10, Rarity::Common));
		loadout.equip("head", item("b", 20, Rarity::Common));
		assert_eq!(loadout.equipped_in("head").unwrap().id, "b");
		assert!(!loadout.is_item_equipped("a"));
	}

	#[test]
	fn interest_row_holds_at_most_three_without_duplicates() {
		let mut loadout = Loadout::default();
		assert!(loadout.equip_interest(interest("a")));
		assert!(!loadout.equip_interest(interest("a")));
		assert!(loadout.equip_interest(interest("b")));
		assert!(loadout.equip_interest(interest("c")));
		assert!(!loadout.equip_interest(interest("d")));
		assert_eq!(loadout.interests().len(), 3);
	}

	#[test]
	fn interest_placement_at_index_replaces_and_moves() {
		let mut loadout = Loadout::default();
		loadout.equip_interest(interest("a"));
		loadout.equip_interest(interest("b"));
		loadout.equip_interest(interest("c"));

		// Replace the middle position.
		loadout.equip_interest_at(interest("d"), 1);
		let ids: Vec<&str> = loadout.interests().iter().map(|i| i.id.as_str()).collect();
		assert_eq!(ids, ["a", "d", "c"]);

		// Re-placing an equipped interest moves it instead of duplicating.
		loadout.equip_interest_at(interest("c"), 0);
		let ids: Vec<&str> = loadout.interests().iter().map(|i| i.id.as_str()).collect();
		assert_eq!(ids, ["c", "d"]);
	}

	#[test]
	fn clear_empties_everything() {
		let mut loadout = Loadout::default();
		loadout.equip("head", item("a", 10, Rarity::Common));
		loadout.equip_interest(interest("b"));
		loadout.clear();
		assert_eq!(loadout.total_equipped(), 0);
	}

	#[test]
	fn effectiveness_scales_with_rarity() {
		assert_eq!(item("a", 50, Rarity::Common).effectiveness(), 50.0);
		assert_eq!(item("a", 50, Rarity::Rare).effectiveness(), 75.0);
		assert_eq!(item("a", 50, Rarity::Legendary).effectiveness(), 100.0);
		assert_eq!(item("a", 50, Rarity::Mythical).effectiveness(), 150.0);
	}

	#[test]
	fn slot_offsets_sit_on_the_ring() {
		let slot = EquipSlot {
			id: "head",
			name: "Head",
			default_icon: "",
			description: "",
			angle_deg: 0.0,
			distance: 160.0,
		};
		let (x, y) = slot.offset();
		assert!(x.abs() < 1e-9);
		assert!((y + 160.0).abs() < 1e-9);
	}
}
