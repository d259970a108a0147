//! Work-experience entries for the about page timeline.

use leptos::prelude::*;

/// One role on the timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
	pub position: String,
	pub company: String,
	pub period: String,
	pub responsibilities: Vec<String>,
}

/// Experience handle.
#[derive(Clone, Copy)]
pub struct ExperienceStore {
	entries: RwSignal<Vec<ExperienceEntry>>,
}

impl ExperienceStore {
	/// Wrap seeded entries.
	pub fn new(entries: Vec<ExperienceEntry>) -> Self {
		Self {
			entries: RwSignal::new(entries),
		}
	}

	/// Tracked read access.
	pub fn with<T>(&self, f: impl FnOnce(&[ExperienceEntry]) -> T) -> T {
		self.entries.with(|e| f(e))
	}

	/// Append an entry.
	pub fn add(&self, entry: ExperienceEntry) {
		self.entries.update(|e| e.push(entry));
	}

	/// Replace the entry at `index`; out-of-range indices are ignored.
	pub fn update_at(&self, index: usize, entry: ExperienceEntry) {
		self.entries.update(|e| {
			if let Some(slot) = e.get_mut(index) {
				*slot = entry;
			}
		});
	}

	/// Remove the entry at `index`; out-of-range indices are ignored.
	pub fn remove(&self, index: usize) {
		self.entries.update(|e| {
			if index < e.len() {
				e.remove(index);
			}
		});
	}
}
