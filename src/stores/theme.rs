//! Dark/light theme: palette lookup, CSS variable injection and a
//! best-effort localStorage mirror (single writer, fire and forget).

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;

const STORAGE_KEY: &str = "theme";

/// The nine named colors a theme exposes to the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
	pub primary: &'static str,
	pub secondary: &'static str,
	pub accent: &'static str,
	pub background: &'static str,
	pub surface: &'static str,
	pub error: &'static str,
	pub info: &'static str,
	pub success: &'static str,
	pub warning: &'static str,
}

/// Light palette.
pub const LIGHT: ThemePalette = ThemePalette {
	primary: "#42b983",
	secondary: "#2c3e50",
	accent: "#ff4081",
	background: "#ffffff",
	surface: "#ffffff",
	error: "#ff5252",
	info: "#2196f3",
	success: "#4caf50",
	warning: "#fb8c00",
};

/// Dark palette.
pub const DARK: ThemePalette = ThemePalette {
	primary: "#42b983",
	secondary: "#34495e",
	accent: "#ff4081",
	background: "#1e1e1e",
	surface: "#2d2d2d",
	error: "#ff5252",
	info: "#2196f3",
	success: "#4caf50",
	warning: "#fb8c00",
};

impl ThemePalette {
	/// CSS variable name / value pairs in injection order.
	pub fn entries(&self) -> [(&'static str, &'static str); 9] {
		[
			("--color-primary", self.primary),
			("--color-secondary", self.secondary),
			("--color-accent", self.accent),
			("--color-background", self.background),
			("--color-surface", self.surface),
			("--color-error", self.error),
			("--color-info", self.info),
			("--color-success", self.success),
			("--color-warning", self.warning),
		]
	}
}

/// Theme handle: one boolean signal, everything else derives from it.
#[derive(Clone, Copy)]
pub struct ThemeStore {
	pub is_dark: RwSignal<bool>,
}

impl ThemeStore {
	/// Start from the stored preference, falling back to the OS scheme.
	pub fn new() -> Self {
		Self {
			is_dark: RwSignal::new(initial_preference()),
		}
	}

	/// `"dark"` or `"light"`, the value persisted and set as `data-theme`.
	pub fn theme_name(&self) -> &'static str {
		if self.is_dark.get() { "dark" } else { "light" }
	}

	/// Palette for the current theme.
	pub fn palette(&self) -> ThemePalette {
		if self.is_dark.get() { DARK } else { LIGHT }
	}

	/// Flip the theme and persist the choice.
	pub fn toggle(&self) {
		self.is_dark.update(|dark| *dark = !*dark);
		let name = self.theme_name();
		if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
			let _ = storage.set_item(STORAGE_KEY, name);
		}
		debug!("theme switched to {name}");
	}

	/// Push the current theme into the document: `data-theme` on the root
	/// element plus the palette as `--color-*` variables. Called from an
	/// effect so it re-runs on every toggle.
	pub fn apply(&self) {
		let name = self.theme_name();
		let palette = self.palette();
		let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		else {
			return;
		};
		let _ = root.set_attribute("data-theme", name);
		if let Ok(el) = root.dyn_into::<web_sys::HtmlElement>() {
			let style = el.style();
			for (var, value) in palette.entries() {
				let _ = style.set_property(var, value);
			}
		}
	}
}

impl Default for ThemeStore {
	fn default() -> Self {
		Self::new()
	}
}

fn initial_preference() -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	if let Ok(Some(storage)) = window.local_storage() {
		if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
			return saved == "dark";
		}
	}
	window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten()
		.is_some_and(|m| m.matches())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palettes_share_brand_colors() {
		assert_eq!(LIGHT.primary, DARK.primary);
		assert_eq!(LIGHT.accent, DARK.accent);
		assert_ne!(LIGHT.background, DARK.background);
		assert_ne!(LIGHT.surface, DARK.surface);
	}

	#[test]
	fn entries_expose_every_color_once() {
		let entries = LIGHT.entries();
		assert_eq!(entries.len(), 9);
		let mut names: Vec<&str> = entries.iter().map(|(n, _)| *n).collect();
		names.dedup();
		assert_eq!(names.len(), 9);
		assert!(names.iter().all(|n| n.starts_with("--color-")));
	}
}
