//! Equipment-ring seed data: the six slots, the equippable skill items and
//! the interest cards.

use crate::stores::inventory::{EquipSlot, InterestItem, Rarity, SkillItem};

/// The six fixed slots, clockwise from the top of the ring.
pub fn equipment_slots() -> [EquipSlot; 6] {
	const DISTANCE: f64 = 160.0;
	[
		EquipSlot {
			id: "head",
			name: "Head Equipment",
			default_icon: "🎩",
			description: "Slot for leadership and strategic thinking",
			angle_deg: 0.0,
			distance: DISTANCE,
		},
		EquipSlot {
			id: "right1",
			name: "Upper Right Equipment",
			default_icon: "💬",
			description: "Slot for communication and social skills",
			angle_deg: 60.0,
			distance: DISTANCE,
		},
		EquipSlot {
			id: "right2",
			name: "Lower Right Equipment",
			default_icon: "🧩",
			description: "Slot for problem-solving abilities",
			angle_deg: 120.0,
			distance: DISTANCE,
		},
		EquipSlot {
			id: "bottom",
			name: "Bottom Equipment",
			default_icon: "🔄",
			description: "Slot for adaptability and versatility",
			angle_deg: 180.0,
			distance: DISTANCE,
		},
		EquipSlot {
			id: "left2",
			name: "Lower Left Equipment",
			default_icon: "👥",
			description: "Slot for teamwork and collaboration",
			angle_deg: 240.0,
			distance: DISTANCE,
		},
		EquipSlot {
			id: "left1",
			name: "Upper Left Equipment",
			default_icon: "⏱️",
			description: "Slot for time management and efficiency",
			angle_deg: 300.0,
			distance: DISTANCE,
		},
	]
}

fn item(
	id: &str,
	name: &str,
	level: u32,
	rarity: Rarity,
	icon: &str,
	description: &str,
	effects: &[&str],
) -> SkillItem {
	SkillItem {
		id: id.to_string(),
		name: name.to_string(),
		level,
		rarity,
		icon: icon.to_string(),
		description: description.to_string(),
		effects: effects.iter().map(|e| e.to_string()).collect(),
	}
}

/// Equippable soft-skill items, shelf order.
pub fn skill_items() -> Vec<SkillItem> {
	vec![
		item(
			"multitasking",
			"Multitasking",
			56,
			Rarity::Rare,
			"🗂️",
			"Juggles parallel workstreams without dropping threads.",
			&["Increased throughput", "Better time management"],
		),
		item(
			"multidisciplinary",
			"Multidisciplinary",
			36,
			Rarity::Legendary,
			"⚛️",
			"Cross-field background that unlocks sideways solutions.",
			&["Cross-domain expertise", "Unusual angles"],
		),
		item(
			"creativity",
			"Creativity",
			88,
			Rarity::Mythical,
			"💡",
			"Generates approaches nobody asked for and some that work.",
			&["Revolutionary thinking", "Unique approaches"],
		),
		item(
			"quick_learner",
			"Quick Learner",
			82,
			Rarity::Rare,
			"📖",
			"Ramps up on a new stack before the onboarding doc loads.",
			&["Fast adaptation", "Knowledge retention"],
		),
		item(
			"adaptability",
			"Adaptability",
			77,
			Rarity::Rare,
			"🧭",
			"Comfortable when requirements move mid-sprint.",
			&["Environmental adaptation", "Situational awareness"],
		),
		item(
			"communication",
			"Communication",
			71,
			Rarity::Common,
			"💬",
			"Says the thing clearly, in writing, the first time.",
			&["Clear expression", "Active listening"],
		),
		item(
			"leadership",
			"Leadership",
			83,
			Rarity::Rare,
			"🧑‍✈️",
			"Keeps a team pointed at the goal and growing on the way.",
			&["Team inspiration", "Strategic guidance"],
		),
		item(
			"problem_solving",
			"Problem Solving",
			96,
			Rarity::Common,
			"🧩",
			"Decomposes messy situations into shippable steps.",
			&["Analytical thinking", "Solution crafting"],
		),
		item(
			"teamwork",
			"Teamwork",
			66,
			Rarity::Common,
			"👥",
			"Makes the people around them measurably faster.",
			&["Collaboration", "Team synergy"],
		),
		item(
			"innovation",
			"Innovation",
			74,
			Rarity::Common,
			"🚀",
			"Prototypes first, argues later.",
			&["Creative solutions", "Forward thinking"],
		),
	]
}

fn interest(
	id: &str,
	name: &str,
	level: u32,
	icon: &str,
	color: &str,
	description: &str,
	expertise: &[&str],
) -> InterestItem {
	InterestItem {
		id: id.to_string(),
		name: name.to_string(),
		level,
		icon: icon.to_string(),
		description: description.to_string(),
		color: color.to_string(),
		expertise: expertise.iter().map(|e| e.to_string()).collect(),
	}
}

/// Equippable interest cards.
pub fn interest_items() -> Vec<InterestItem> {
	vec![
		interest(
			"manga",
			"Manga & Anime",
			85,
			"📚",
			"#FF69B4",
			"Long-running appreciation for Japanese storytelling and art.",
			&["Story analysis", "Art appreciation"],
		),
		interest(
			"reading",
			"Reading",
			65,
			"📖",
			"#8B4513",
			"Wide-ranging reader, heavier on non-fiction lately.",
			&["Literary analysis", "Knowledge acquisition"],
		),
		interest(
			"football",
			"Football",
			92,
			"⚽",
			"#228B22",
			"Club player with a tactical streak.",
			&["Team tactics", "Coordination"],
		),
		interest(
			"chess",
			"Chess",
			60,
			"♞",
			"#4B0082",
			"Steady club-level player, still improving.",
			&["Strategic thinking", "Pattern recognition"],
		),
		interest(
			"traveling",
			"Traveling",
			78,
			"✈️",
			"#20B2AA",
			"Collects cities and the food that comes with them.",
			&["Cultural awareness", "Adaptation"],
		),
		interest(
			"tinkering",
			"Tinkering",
			88,
			"🔧",
			"#9932CC",
			"Tries every new tool the week it ships.",
			&["Experimental mindset", "Quick adaptation"],
		),
	]
}
