//! Project catalogue for the about page.

use leptos::prelude::*;

/// Visual treatment used by the showcase cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseKind {
	TestTube,
	Laser,
	Diffusion,
}

/// Outbound links attached to a project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectLinks {
	pub github: Option<String>,
	pub demo: Option<String>,
}

/// One project record. `showcase` selects the animated card treatment;
/// plain projects render in the classic grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
	pub title: String,
	pub showcase: Option<ShowcaseKind>,
	pub short_desc: String,
	pub full_desc: String,
	pub context: Option<String>,
	pub technologies: Vec<String>,
	pub links: ProjectLinks,
}

/// Projects handle.
#[derive(Clone, Copy)]
pub struct ProjectsStore {
	projects: RwSignal<Vec<Project>>,
}

impl ProjectsStore {
	/// Wrap seeded projects.
	pub fn new(projects: Vec<Project>) -> Self {
		Self {
			projects: RwSignal::new(projects),
		}
	}

	/// Tracked read access.
	pub fn with<T>(&self, f: impl FnOnce(&[Project]) -> T) -> T {
		self.projects.with(|p| f(p))
	}

	/// Projects with a showcase treatment, in declared order.
	pub fn showcase(&self) -> Vec<Project> {
		self.projects
			.with(|p| p.iter().filter(|p| p.showcase.is_some()).cloned().collect())
	}

	/// Plain projects for the classic grid.
	pub fn classic(&self) -> Vec<Project> {
		self.projects
			.with(|p| p.iter().filter(|p| p.showcase.is_none()).cloned().collect())
	}
}
