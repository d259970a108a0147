//! Identity, personal-info rows and interests for the about page.

use leptos::prelude::*;

/// A named interest with a one-line description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interest {
	pub name: String,
	pub description: String,
}

/// Everything the profile card shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
	pub name: String,
	pub title: String,
	pub portrait: String,
	/// Label/value rows in display order.
	pub personal_info: Vec<(String, String)>,
	pub interests: Vec<Interest>,
}

/// Profile handle.
#[derive(Clone, Copy)]
pub struct ProfileStore {
	profile: RwSignal<Profile>,
}

impl ProfileStore {
	/// Wrap seeded profile data.
	pub fn new(profile: Profile) -> Self {
		Self {
			profile: RwSignal::new(profile),
		}
	}

	/// Tracked read access.
	pub fn with<T>(&self, f: impl FnOnce(&Profile) -> T) -> T {
		self.profile.with(f)
	}

	/// Merge label/value rows into the personal-info table, replacing rows
	/// whose label already exists.
	pub fn update_personal_info(&self, rows: Vec<(String, String)>) {
		self.profile.update(|p| {
			for (label, value) in rows {
				match p.personal_info.iter_mut().find(|(l, _)| *l == label) {
					Some(row) => row.1 = value,
					None => p.personal_info.push((label, value)),
				}
			}
		});
	}

	/// Append an interest.
	pub fn add_interest(&self, interest: Interest) {
		self.profile.update(|p| p.interests.push(interest));
	}

	/// Remove the interest at `index`, if it exists.
	pub fn remove_interest(&self, index: usize) {
		self.profile.update(|p| {
			if index < p.interests.len() {
				p.interests.remove(index);
			}
		});
	}
}
