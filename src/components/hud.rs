//! HUD overlay for the skill tree: budget readout, bulk actions and the
//! selected-node panel.

use leptos::prelude::*;
use log::{info, warn};

use crate::stores::skills::SkillsStore;

#[component]
pub fn SkillHud(store: SkillsStore, selected: RwSignal<Option<String>>) -> impl IntoView {
	let points_line = move || {
		let (done, total) = store.progress();
		format!(
			"{} / {} points · {done}/{total} skills",
			store.available_points(),
			store.max_points(),
		)
	};

	// Title, description and status line for the selected node, if any.
	let detail = move || {
		selected.get().and_then(|id| {
			store.with(|g| {
				g.get(&id).map(|node| {
					let status = if node.unlocked {
						"Unlocked".to_string()
					} else {
						format!(
							"{} pts to unlock · {}% of prerequisites met",
							g.total_cost(&id),
							g.skill_progress(&id),
						)
					};
					(
						format!("{} {}", node.meta.icon, node.meta.name),
						node.meta.description.clone(),
						status,
					)
				})
			})
		})
	};

	view! {
		<div class="hud">
			<p class="hud-points">{points_line}</p>
			<div class="hud-actions">
				<button on:click=move |_| store.reset()>"Reset"</button>
				<button on:click=move |_| {
					store.unlock_all();
				}>"Unlock all"</button>
				<button on:click=move |_| {
					info!("exported build: {}", store.export_json());
				}>"Export build"</button>
				<button on:click=move |_| {
					let raw = web_sys::window()
						.and_then(|w| {
							w.prompt_with_message("Paste a build snapshot:").ok().flatten()
						});
					if let Some(raw) = raw {
						if let Err(err) = store.import_json(&raw) {
							warn!("import refused: {err}");
						}
					}
				}>"Import build"</button>
			</div>
			<div class="hud-branches">
				{move || {
					store
						.branches()
						.into_iter()
						.map(|tag| {
							let label = tag.clone();
							view! {
								<button on:click=move |_| {
									store.unlock_branch(&tag);
								}>{label}</button>
							}
						})
						.collect_view()
				}}
			</div>
			{move || {
				detail()
					.map(|(title, description, status)| {
						view! {
							<div class="hud-node">
								<h3>{title}</h3>
								<p>{description}</p>
								<p class="hud-node-status">{status}</p>
							</div>
						}
					})
			}}
		</div>
	}
}
