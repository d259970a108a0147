//! Cave-mode visual toggle: flips a `cave-mode` class on `<body>` that the
//! stylesheet uses for the torchlit treatment.

use leptos::prelude::*;

/// Cave-mode handle.
#[derive(Clone, Copy)]
pub struct CaveStore {
	pub is_cave_mode: RwSignal<bool>,
}

impl CaveStore {
	/// Cave mode starts off.
	pub fn new() -> Self {
		Self {
			is_cave_mode: RwSignal::new(false),
		}
	}

	/// Flip cave mode.
	pub fn toggle(&self) {
		let on = !self.is_cave_mode.get();
		self.is_cave_mode.set(on);
		set_body_class(on);
	}

	/// Force cave mode off. The dark theme and cave mode are mutually
	/// exclusive; the theme effect calls this when dark comes on.
	pub fn disable(&self) {
		if self.is_cave_mode.get_untracked() {
			self.is_cave_mode.set(false);
			set_body_class(false);
		}
	}
}

impl Default for CaveStore {
	fn default() -> Self {
		Self::new()
	}
}

fn set_body_class(on: bool) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let _ = body.class_list().toggle_with_force("cave-mode", on);
}
