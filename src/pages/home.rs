use leptos::prelude::*;

use crate::components::hud::SkillHud;
use crate::components::skill_tree::SkillTreeCanvas;
use crate::stores::skills::SkillsStore;

/// Fullscreen skill tree with the HUD overlay.
#[component]
pub fn Home() -> impl IntoView {
	let store: SkillsStore = expect_context();
	let selected: RwSignal<Option<String>> = RwSignal::new(None);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<SkillTreeCanvas store=store selected=selected fullscreen=true />
				<div class="graph-overlay">
					<h1>"Skill Tree"</h1>
					<p class="subtitle">
						"Click a glowing skill to spend points on it. Drag nodes to rearrange, scroll to zoom, drag the background to pan."
					</p>
					<SkillHud store=store selected=selected />
				</div>
			</div>
		</ErrorBoundary>
	}
}
