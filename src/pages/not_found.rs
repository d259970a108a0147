use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page not-found">
			<h1>"404"</h1>
			<p>"This corner of the cave is unexplored."</p>
			<a href="/">"Back to the skill tree"</a>
		</div>
	}
}
