//! Reactive wrapper over the skill-graph engine.

use leptos::prelude::*;
use log::{debug, info};

use crate::engine::{SkillGraph, Snapshot, UnlockError};

/// Handle to the session's skill graph. Cheap to copy into closures; every
/// mutation goes through the engine's gates and notifies subscribers.
#[derive(Clone, Copy)]
pub struct SkillsStore {
	graph: RwSignal<SkillGraph>,
}

impl SkillsStore {
	/// Wrap an already-constructed graph.
	pub fn new(graph: SkillGraph) -> Self {
		Self {
			graph: RwSignal::new(graph),
		}
	}

	/// Tracked read access.
	pub fn with<T>(&self, f: impl FnOnce(&SkillGraph) -> T) -> T {
		self.graph.with(f)
	}

	/// Untracked read access, for per-frame canvas reads.
	pub fn with_untracked<T>(&self, f: impl FnOnce(&SkillGraph) -> T) -> T {
		self.graph.with_untracked(f)
	}

	/// Attempt an unlock; refusals come back typed and are logged at debug.
	pub fn unlock(&self, id: &str) -> Result<(), UnlockError> {
		let result = self.graph.write().unlock(id);
		match &result {
			Ok(()) => info!("unlocked skill `{id}`"),
			Err(err) => debug!("unlock refused: {err}"),
		}
		result
	}

	/// Re-lock everything but the roots and refill the budget.
	pub fn reset(&self) {
		self.graph.write().reset();
		info!("skill tree reset");
	}

	/// Greedy first-fit unlock over the whole tree.
	pub fn unlock_all(&self) -> usize {
		let n = self.graph.write().unlock_all();
		info!("unlock-all opened {n} skills");
		n
	}

	/// Greedy depth-ordered unlock of one branch.
	pub fn unlock_branch(&self, tag: &str) -> usize {
		let n = self.graph.write().unlock_branch(tag);
		info!("unlocked {n} skills in branch `{tag}`");
		n
	}

	/// Canvas drag write-back; display metadata only.
	pub fn set_position(&self, id: &str, x: f64, y: f64) {
		self.graph.write().set_position(id, x, y);
	}

	/// Current build as JSON.
	pub fn export_json(&self) -> String {
		self.graph.with_untracked(|g| g.export_state()).to_json()
	}

	/// Restore a build from JSON. A malformed snapshot refuses and leaves
	/// the graph untouched; a parseable one is applied verbatim.
	pub fn import_json(&self, raw: &str) -> Result<(), UnlockError> {
		let snapshot = Snapshot::from_json(raw)?;
		self.graph.write().import_state(&snapshot);
		info!("imported build ({} skills)", snapshot.unlocked_skills.len());
		Ok(())
	}

	/// Spendable points (tracked).
	pub fn available_points(&self) -> u32 {
		self.graph.with(|g| g.available_points())
	}

	/// Budget ceiling.
	pub fn max_points(&self) -> u32 {
		self.graph.with(|g| g.max_points())
	}

	/// `(unlocked, unlockable)` non-root counts for the HUD progress line.
	pub fn progress(&self) -> (usize, usize) {
		self.graph.with(|g| (g.unlocked_count(), g.unlockable_total()))
	}

	/// Distinct branch tags in first-appearance order.
	pub fn branches(&self) -> Vec<String> {
		self.graph.with(|g| {
			let mut tags: Vec<String> = Vec::new();
			for node in g.nodes() {
				if let Some(tag) = &node.branch {
					if !tags.iter().any(|t| t == tag) {
						tags.push(tag.clone());
					}
				}
			}
			tags
		})
	}
}
