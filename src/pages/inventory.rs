use leptos::prelude::*;
use log::debug;

use crate::content;
use crate::stores::inventory::{InventoryStore, SkillItem};

/// Equipment ring plus the item and interest shelves. Clicking a shelf item
/// equips it into the first free slot; clicking a slot empties it.
#[component]
pub fn Inventory() -> impl IntoView {
	let inventory: InventoryStore = expect_context();
	let slots = content::equipment_slots();
	let items = content::skill_items();
	let interests = content::interest_items();

	let equip_item = move |item: SkillItem| {
		let free = inventory.with(|l| {
			slots
				.iter()
				.map(|s| s.id)
				.find(|id| l.equipped_in(id).is_none())
		});
		match free {
			Some(slot_id) => inventory.equip(slot_id, item),
			None => debug!("no free slot for `{}`", item.id),
		}
	};

	view! {
		<div class="page inventory">
			<header class="inventory-header">
				<h1>"Inventory"</h1>
				<p class="subtitle">
					"Equip soft skills into the ring and pin up to three interests. Click an equipped slot to empty it."
				</p>
				<p class="inventory-count">
					{move || {
						inventory.with(|l| format!("{} equipped", l.total_equipped()))
					}}
				</p>
				<button on:click=move |_| inventory.clear_all()>"Clear all"</button>
			</header>

			<div class="slot-ring">
				{slots
					.iter()
					.map(|slot| {
						let slot_id = slot.id;
						let default_icon = slot.default_icon;
						let (x, y) = slot.offset();
						let style = format!(
							"transform: translate({x:.0}px, {y:.0}px);",
						);
						view! {
							<div
								class="equip-slot"
								style=style
								title=slot.description
								on:click=move |_| inventory.unequip(slot_id)
							>
								{move || {
									inventory
										.with(|l| match l.equipped_in(slot_id) {
											Some(item) => {
												view! {
													<span class="slot-icon">{item.icon.clone()}</span>
												}
													.into_any()
											}
											None => {
												view! {
													<span class="slot-icon slot-empty">
														{default_icon}
													</span>
												}
													.into_any()
											}
										})
								}}
							</div>
						}
					})
					.collect_view()}
			</div>

			<section class="shelf">
				<h2>"Skills"</h2>
				<div class="card-grid">
					{items
						.into_iter()
						.map(|item| {
							let id = item.id.clone();
							let style = format!("border-color: {};", item.rarity.color());
							let meta = format!(
								"{} · lvl {} · {:.0} eff",
								item.rarity.label(),
								item.level,
								item.effectiveness(),
							);
							let on_equip = {
								let item = item.clone();
								move |_| equip_item(item.clone())
							};
							view! {
								<div
									class="item-card"
									class:equipped=move || {
										inventory.with(|l| l.is_item_equipped(&id))
									}
									style=style
									on:click=on_equip
								>
									<span class="item-icon">{item.icon.clone()}</span>
									<h3>{item.name.clone()}</h3>
									<p class="item-meta">{meta}</p>
									<p>{item.description.clone()}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="shelf">
				<h2>"Interests"</h2>
				<div class="interest-row">
					{move || {
						inventory
							.with(|l| {
								l.interests()
									.iter()
									.map(|i| {
										let id = i.id.clone();
										let style = format!("background: {};", i.color);
										view! {
											<button
												class="interest-chip"
												style=style
												on:click=move |_| inventory.unequip_interest(&id)
											>
												{i.icon.clone()}
												" "
												{i.name.clone()}
											</button>
										}
									})
									.collect_view()
							})
					}}
				</div>
				<div class="card-grid">
					{interests
						.into_iter()
						.map(|interest| {
							let id = interest.id.clone();
							let meta = format!("lvl {}", interest.level);
							let on_equip = {
								let interest = interest.clone();
								move |_| {
									if !inventory.equip_interest(interest.clone()) {
										debug!("interest row full or `{}` already pinned", interest.id);
									}
								}
							};
							view! {
								<div
									class="item-card interest-card"
									class:equipped=move || {
										inventory.with(|l| l.is_interest_equipped(&id))
									}
									on:click=on_equip
								>
									<span class="item-icon">{interest.icon.clone()}</span>
									<h3>{interest.name.clone()}</h3>
									<p class="item-meta">{meta}</p>
									<p>{interest.description.clone()}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>
		</div>
	}
}
