//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod content;
pub mod engine;
mod pages;
pub mod stores;

// Top-Level pages
use crate::pages::about::About;
use crate::pages::home::Home;
use crate::pages::inventory::Inventory;
use crate::pages::not_found::NotFound;
use crate::stores::cave::CaveStore;
use crate::stores::experience::ExperienceStore;
use crate::stores::inventory::InventoryStore;
use crate::stores::profile::ProfileStore;
use crate::stores::projects::ProjectsStore;
use crate::stores::skills::SkillsStore;
use crate::stores::theme::ThemeStore;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the portfolio pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// One context object per concern, constructed once per session.
	let graph = crate::engine::SkillGraph::new(
		content::skill_seeds(),
		content::STARTING_POINTS,
		content::MAX_POINTS,
	)
	.expect("shipped skill tree is valid");
	let skills = SkillsStore::new(graph);
	let theme = ThemeStore::new();
	let cave = CaveStore::new();
	provide_context(skills);
	provide_context(theme);
	provide_context(cave);
	provide_context(ProfileStore::new(content::profile()));
	provide_context(ExperienceStore::new(content::experience_entries()));
	provide_context(ProjectsStore::new(content::projects()));
	provide_context(InventoryStore::new());

	// Theme changes re-skin the document; dark mode also blows out the
	// torches.
	Effect::new(move |_| {
		theme.apply();
		if theme.is_dark.get() {
			cave.disable();
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Sam Keller — Skill Tree Portfolio" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="top-nav">
				<A href="/">"Skill Tree"</A>
				<A href="/inventory">"Inventory"</A>
				<A href="/about">"About"</A>
				<span class="nav-spacer"></span>
				<button
					class="nav-toggle"
					title="Toggle dark mode"
					on:click=move |_| theme.toggle()
				>
					{move || if theme.is_dark.get() { "☀️" } else { "🌙" }}
				</button>
				<button
					class="nav-toggle"
					title="Toggle cave mode"
					on:click=move |_| {
						if !theme.is_dark.get() {
							cave.toggle();
						}
					}
				>
					"🕯️"
				</button>
			</nav>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/inventory") view=Inventory />
				<Route path=path!("/about") view=About />
			</Routes>
		</Router>
	}
}
