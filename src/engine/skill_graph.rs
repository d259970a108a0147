//! Skill-tree dependency and unlock engine.
//!
//! A [`SkillGraph`] owns a fixed set of skill nodes, the dependency edges
//! between them and a spendable point budget. The graph shape is immutable
//! after construction; only unlock flags, the budget and display positions
//! mutate during a session.
//!
//! Nodes without dependencies are roots: they start unlocked and never cost
//! points. Every other node unlocks through [`SkillGraph::unlock`], which
//! refuses with a typed [`UnlockError`] instead of mutating when any gate
//! fails.
//!
//! ```
//! use skilltree_portfolio::engine::{SkillGraph, SkillSeed};
//!
//! let seeds = vec![
//! 	SkillSeed::new("root", 0, &[]),
//! 	SkillSeed::new("child", 2, &["root"]),
//! ];
//! let mut graph = SkillGraph::new(seeds, 5, 20).unwrap();
//! assert!(graph.is_unlocked("root"));
//! graph.unlock("child").unwrap();
//! assert_eq!(graph.available_points(), 3);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current snapshot format version, written by [`SkillGraph::export_state`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Display-only node metadata. The engine stores it but never reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillMeta {
	pub name: String,
	pub description: String,
	pub icon: String,
	/// Authored canvas coordinate, mutated only by drag repositioning.
	pub position: (f64, f64),
}

/// A single skill in the graph.
#[derive(Clone, Debug)]
pub struct SkillNode {
	pub id: String,
	/// Point price to unlock. Roots carry 0 and are never charged.
	pub cost: u32,
	/// Ids that must all be unlocked before this node can be.
	pub dependencies: Vec<String>,
	/// Grouping tag consumed by [`SkillGraph::unlock_branch`] and the view.
	pub branch: Option<String>,
	pub unlocked: bool,
	pub meta: SkillMeta,
}

impl SkillNode {
	/// Whether this node is a root (dependency-free, unlocked by default).
	pub fn is_root(&self) -> bool {
		self.dependencies.is_empty()
	}
}

/// Constructor input record for one node.
#[derive(Clone, Debug)]
pub struct SkillSeed {
	pub id: String,
	pub cost: u32,
	pub dependencies: Vec<String>,
	pub branch: Option<String>,
	pub meta: SkillMeta,
}

impl SkillSeed {
	/// Bare seed with empty display metadata, mostly useful in tests.
	pub fn new(id: &str, cost: u32, dependencies: &[&str]) -> Self {
		Self {
			id: id.to_string(),
			cost,
			dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
			branch: None,
			meta: SkillMeta::default(),
		}
	}

	/// Attach a branch tag.
	pub fn branch(mut self, tag: &str) -> Self {
		self.branch = Some(tag.to_string());
		self
	}

	/// Attach display metadata.
	pub fn meta(mut self, name: &str, description: &str, icon: &str, position: (f64, f64)) -> Self {
		self.meta = SkillMeta {
			name: name.to_string(),
			description: description.to_string(),
			icon: icon.to_string(),
			position,
		};
		self
	}
}

/// Serialized unlock state: the budget and the ids of unlocked skills.
///
/// The wire form is camelCase JSON. `version` was absent from the original
/// format, so it defaults to 0 when reading legacy snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
	#[serde(default)]
	pub version: u32,
	pub available_points: u32,
	pub unlocked_skills: Vec<String>,
}

impl Snapshot {
	/// Serialize to the JSON wire form.
	pub fn to_json(&self) -> String {
		serde_json::to_string(self).unwrap_or_default()
	}

	/// Parse the JSON wire form. A snapshot missing the expected fields is
	/// refused with [`UnlockError::MalformedSnapshot`].
	pub fn from_json(raw: &str) -> Result<Self, UnlockError> {
		serde_json::from_str(raw).map_err(|_| UnlockError::MalformedSnapshot)
	}
}

/// Seed validation failure at graph construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
	#[error("duplicate skill id `{0}`")]
	DuplicateId(String),
	#[error("skill `{id}` depends on unknown id `{dependency}`")]
	UnknownDependency { id: String, dependency: String },
	#[error("cyclic dependency through skill `{0}`")]
	CyclicDependency(String),
}

/// Refused mutation. Every variant leaves the graph untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnlockError {
	#[error("no skill with id `{0}`")]
	NotFound(String),
	#[error("skill `{0}` is already unlocked")]
	AlreadyUnlocked(String),
	#[error("skill `{id}` costs {cost} but only {available} points remain")]
	InsufficientPoints { id: String, cost: u32, available: u32 },
	#[error("skill `{id}` requires `{dependency}` to be unlocked first")]
	DependencyLocked { id: String, dependency: String },
	#[error("snapshot is malformed")]
	MalformedSnapshot,
}

/// The skill-tree store: nodes, edges, unlock flags and the point budget.
#[derive(Clone, Debug)]
pub struct SkillGraph {
	nodes: Vec<SkillNode>,
	index: HashMap<String, usize>,
	available_points: u32,
	max_points: u32,
}

impl SkillGraph {
	/// Build a graph from seed records.
	///
	/// Fails if an id repeats, a dependency does not resolve, or the
	/// dependency relation contains a cycle. Roots come out unlocked.
	pub fn new(
		seeds: Vec<SkillSeed>,
		available_points: u32,
		max_points: u32,
	) -> Result<Self, GraphError> {
		let mut index = HashMap::with_capacity(seeds.len());
		for (i, seed) in seeds.iter().enumerate() {
			if index.insert(seed.id.clone(), i).is_some() {
				return Err(GraphError::DuplicateId(seed.id.clone()));
			}
		}
		for seed in &seeds {
			for dep in &seed.dependencies {
				if !index.contains_key(dep) {
					return Err(GraphError::UnknownDependency {
						id: seed.id.clone(),
						dependency: dep.clone(),
					});
				}
			}
		}

		let nodes: Vec<SkillNode> = seeds
			.into_iter()
			.map(|seed| SkillNode {
				unlocked: seed.dependencies.is_empty(),
				id: seed.id,
				cost: seed.cost,
				dependencies: seed.dependencies,
				branch: seed.branch,
				meta: seed.meta,
			})
			.collect();

		let graph = Self {
			nodes,
			index,
			available_points,
			max_points,
		};
		graph.check_acyclic()?;
		Ok(graph)
	}

	/// DFS over dependency edges; a node revisited while still on the
	/// current path is a cycle.
	fn check_acyclic(&self) -> Result<(), GraphError> {
		let mut done = HashSet::new();
		let mut path = HashSet::new();
		for i in 0..self.nodes.len() {
			self.visit_for_cycle(i, &mut done, &mut path)?;
		}
		Ok(())
	}

	fn visit_for_cycle(
		&self,
		i: usize,
		done: &mut HashSet<usize>,
		path: &mut HashSet<usize>,
	) -> Result<(), GraphError> {
		if done.contains(&i) {
			return Ok(());
		}
		if !path.insert(i) {
			return Err(GraphError::CyclicDependency(self.nodes[i].id.clone()));
		}
		for dep in &self.nodes[i].dependencies {
			let j = self.index[dep];
			if path.contains(&j) {
				return Err(GraphError::CyclicDependency(self.nodes[j].id.clone()));
			}
			self.visit_for_cycle(j, done, path)?;
		}
		path.remove(&i);
		done.insert(i);
		Ok(())
	}

	/// Spendable points remaining.
	pub fn available_points(&self) -> u32 {
		self.available_points
	}

	/// Budget ceiling restored by [`SkillGraph::reset`].
	pub fn max_points(&self) -> u32 {
		self.max_points
	}

	/// All nodes in declared order.
	pub fn nodes(&self) -> &[SkillNode] {
		&self.nodes
	}

	/// Look up a node; `None` is an ordinary "not found" result.
	pub fn get(&self, id: &str) -> Option<&SkillNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	/// Whether `id` names an unlocked node. Unknown ids are locked.
	pub fn is_unlocked(&self, id: &str) -> bool {
		self.get(id).is_some_and(|n| n.unlocked)
	}

	fn deps_satisfied(&self, node: &SkillNode) -> bool {
		node.dependencies.iter().all(|d| self.is_unlocked(d))
	}

	/// Locked nodes whose dependencies are all unlocked. Budget is not
	/// consulted: a node can be available yet unaffordable.
	pub fn available_to_unlock(&self) -> impl Iterator<Item = &SkillNode> {
		self.nodes
			.iter()
			.filter(|n| !n.unlocked && self.deps_satisfied(n))
	}

	/// Unlock `id`, spending its cost. The sole gated mutation path: on any
	/// refusal the graph and budget are left exactly as they were.
	pub fn unlock(&mut self, id: &str) -> Result<(), UnlockError> {
		let i = *self
			.index
			.get(id)
			.ok_or_else(|| UnlockError::NotFound(id.to_string()))?;
		if self.nodes[i].unlocked {
			return Err(UnlockError::AlreadyUnlocked(id.to_string()));
		}
		let cost = self.nodes[i].cost;
		if cost > self.available_points {
			return Err(UnlockError::InsufficientPoints {
				id: id.to_string(),
				cost,
				available: self.available_points,
			});
		}
		if let Some(dep) = self.nodes[i]
			.dependencies
			.iter()
			.find(|d| !self.is_unlocked(d))
		{
			return Err(UnlockError::DependencyLocked {
				id: id.to_string(),
				dependency: dep.clone(),
			});
		}
		self.nodes[i].unlocked = true;
		self.available_points -= cost;
		Ok(())
	}

	/// Restore the full budget and re-lock every non-root node.
	pub fn reset(&mut self) {
		self.available_points = self.max_points;
		for node in &mut self.nodes {
			if !node.is_root() {
				node.unlocked = false;
			}
		}
	}

	/// Greedily unlock everything affordable, first-fit in declared order,
	/// repeating passes until one unlocks nothing. Returns how many nodes
	/// were unlocked. Not a point-optimal selection.
	pub fn unlock_all(&mut self) -> usize {
		let mut total = 0;
		loop {
			let mut pass = 0;
			for i in 0..self.nodes.len() {
				let id = self.nodes[i].id.clone();
				if self.unlock(&id).is_ok() {
					pass += 1;
				}
			}
			if pass == 0 {
				return total;
			}
			total += pass;
		}
	}

	/// Unlock the nodes tagged `tag`, root-most first (ascending dependency
	/// depth, stable within a depth). Each node is attempted once; refusals
	/// are skipped and iteration continues, so an unaffordable node does not
	/// block cheaper nodes behind it.
	pub fn unlock_branch(&mut self, tag: &str) -> usize {
		let mut members: Vec<(u32, String)> = self
			.nodes
			.iter()
			.filter(|n| n.branch.as_deref() == Some(tag))
			.map(|n| (self.depth(&n.id), n.id.clone()))
			.collect();
		members.sort_by_key(|(depth, _)| *depth);

		let mut unlocked = 0;
		for (_, id) in members {
			if self.unlock(&id).is_ok() {
				unlocked += 1;
			}
		}
		unlocked
	}

	/// Longest dependency chain back to a root: 0 for dependency-free
	/// nodes, else 1 + the deepest dependency.
	pub fn depth(&self, id: &str) -> u32 {
		let mut memo = HashMap::new();
		self.depth_walk(id, &mut memo)
	}

	fn depth_walk<'a>(&'a self, id: &'a str, memo: &mut HashMap<&'a str, u32>) -> u32 {
		let Some(node) = self.get(id) else { return 0 };
		if let Some(&d) = memo.get(node.id.as_str()) {
			return d;
		}
		// Marked before recursing so a malformed (cyclic) graph bottoms out
		// instead of recursing forever; construction already rejects cycles.
		memo.insert(&node.id, 0);
		let d = node
			.dependencies
			.iter()
			.map(|dep| 1 + self.depth_walk(dep, memo))
			.max()
			.unwrap_or(0);
		memo.insert(&node.id, d);
		d
	}

	/// Points needed to unlock `id` from the current state: its own cost
	/// plus every still-locked transitive dependency, each counted once even
	/// when reached through multiple paths.
	pub fn total_cost(&self, id: &str) -> u32 {
		let mut visited = HashSet::new();
		self.cost_walk(id, &mut visited)
	}

	fn cost_walk<'a>(&'a self, id: &'a str, visited: &mut HashSet<&'a str>) -> u32 {
		let Some(node) = self.get(id) else { return 0 };
		if node.unlocked || !visited.insert(&node.id) {
			return 0;
		}
		node.cost
			+ node
				.dependencies
				.iter()
				.map(|d| self.cost_walk(d, visited))
				.sum::<u32>()
	}

	/// Percentage of direct dependencies already unlocked; 100 when there
	/// are none, 0 for unknown ids.
	pub fn skill_progress(&self, id: &str) -> u32 {
		let Some(node) = self.get(id) else { return 0 };
		if node.dependencies.is_empty() {
			return 100;
		}
		let unlocked = node
			.dependencies
			.iter()
			.filter(|d| self.is_unlocked(d))
			.count();
		(unlocked * 100 / node.dependencies.len()) as u32
	}

	/// Unlocked non-root nodes.
	pub fn unlocked_count(&self) -> usize {
		self.nodes
			.iter()
			.filter(|n| n.unlocked && !n.is_root())
			.count()
	}

	/// How many nodes can ever be unlocked (roots excluded).
	pub fn unlockable_total(&self) -> usize {
		self.nodes.iter().filter(|n| !n.is_root()).count()
	}

	/// Serialize the mutable state: budget plus unlocked non-root ids.
	pub fn export_state(&self) -> Snapshot {
		Snapshot {
			version: SNAPSHOT_VERSION,
			available_points: self.available_points,
			unlocked_skills: self
				.nodes
				.iter()
				.filter(|n| n.unlocked && !n.is_root())
				.map(|n| n.id.clone())
				.collect(),
		}
	}

	/// Restore from a snapshot: reset, then force-unlock every listed id by
	/// direct flag assignment and take the budget verbatim. Cost and
	/// dependency gates are deliberately bypassed: the snapshot is trusted
	/// input, so a hand-crafted one can produce a state `unlock` would never
	/// reach. Unknown ids are skipped.
	pub fn import_state(&mut self, snapshot: &Snapshot) {
		self.reset();
		for id in &snapshot.unlocked_skills {
			if let Some(&i) = self.index.get(id) {
				self.nodes[i].unlocked = true;
			}
		}
		self.available_points = snapshot.available_points;
	}

	/// Move a node's display position (canvas drag write-back). Display
	/// metadata only; unlock state and budget are untouched.
	pub fn set_position(&mut self, id: &str, x: f64, y: f64) {
		if let Some(&i) = self.index.get(id) {
			self.nodes[i].meta.position = (x, y);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// root ── x (2 pts) ── y (3 pts), budget 4 of 20.
	fn chain() -> SkillGraph {
		SkillGraph::new(
			vec![
				SkillSeed::new("root", 0, &[]),
				SkillSeed::new("x", 2, &["root"]),
				SkillSeed::new("y", 3, &["x"]),
			],
			4,
			20,
		)
		.unwrap()
	}

	/// Diamond: d depends on b and c, both depend on a, all on root.
	fn diamond() -> SkillGraph {
		SkillGraph::new(
			vec![
				SkillSeed::new("root", 0, &[]),
				SkillSeed::new("a", 1, &["root"]),
				SkillSeed::new("b", 2, &["a"]),
				SkillSeed::new("c", 3, &["a"]),
				SkillSeed::new("d", 4, &["b", "c"]),
			],
			20,
			20,
		)
		.unwrap()
	}

	#[test]
	fn roots_start_unlocked() {
		let graph = chain();
		assert!(graph.is_unlocked("root"));
		assert!(!graph.is_unlocked("x"));
		assert_eq!(graph.unlockable_total(), 2);
		assert_eq!(graph.unlocked_count(), 0);
	}

	#[test]
	fn construction_rejects_duplicate_ids() {
		let err = SkillGraph::new(
			vec![SkillSeed::new("a", 0, &[]), SkillSeed::new("a", 1, &[])],
			5,
			20,
		)
		.unwrap_err();
		assert_eq!(err, GraphError::DuplicateId("a".into()));
	}

	#[test]
	fn construction_rejects_unknown_dependency() {
		let err = SkillGraph::new(vec![SkillSeed::new("a", 1, &["ghost"])], 5, 20).unwrap_err();
		assert_eq!(
			err,
			GraphError::UnknownDependency {
				id: "a".into(),
				dependency: "ghost".into(),
			}
		);
	}

	#[test]
	fn construction_rejects_cycles() {
		let err = SkillGraph::new(
			vec![
				SkillSeed::new("a", 1, &["c"]),
				SkillSeed::new("b", 1, &["a"]),
				SkillSeed::new("c", 1, &["b"]),
			],
			5,
			20,
		)
		.unwrap_err();
		assert!(matches!(err, GraphError::CyclicDependency(_)));
	}

	#[test]
	fn unlock_walks_the_spec_scenario() {
		let mut graph = chain();

		// y refused while x is locked; budget untouched.
		assert_eq!(
			graph.unlock("y"),
			Err(UnlockError::DependencyLocked {
				id: "y".into(),
				dependency: "x".into(),
			})
		);
		assert_eq!(graph.available_points(), 4);

		graph.unlock("x").unwrap();
		assert_eq!(graph.available_points(), 2);

		// Dependency satisfied now, but 2 < 3.
		assert_eq!(
			graph.unlock("y"),
			Err(UnlockError::InsufficientPoints {
				id: "y".into(),
				cost: 3,
				available: 2,
			})
		);
		assert_eq!(graph.available_points(), 2);

		graph.reset();
		assert_eq!(graph.available_points(), 20);
		assert!(!graph.is_unlocked("x"));
		assert!(graph.is_unlocked("root"));
	}

	#[test]
	fn unlock_error_kinds_are_distinct() {
		let mut graph = chain();
		assert_eq!(
			graph.unlock("nope"),
			Err(UnlockError::NotFound("nope".into()))
		);
		assert_eq!(
			graph.unlock("root"),
			Err(UnlockError::AlreadyUnlocked("root".into()))
		);
	}

	#[test]
	fn budget_never_goes_negative() {
		let mut graph = chain();
		let _ = graph.unlock("x");
		let _ = graph.unlock("y");
		let _ = graph.unlock("y");
		assert!(graph.available_points() <= 4);
		assert_eq!(graph.available_points(), 2);
	}

	#[test]
	fn available_ignores_budget() {
		let mut graph = SkillGraph::new(
			vec![SkillSeed::new("root", 0, &[]), SkillSeed::new("pricey", 99, &["root"])],
			1,
			1,
		)
		.unwrap();
		let ids: Vec<&str> = graph.available_to_unlock().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["pricey"]);
		assert!(graph.unlock("pricey").is_err());
	}

	#[test]
	fn reset_makes_root_children_available() {
		let mut graph = diamond();
		graph.unlock_all();
		graph.reset();
		let ids: Vec<&str> = graph.available_to_unlock().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["a"]);
	}

	#[test]
	fn total_cost_counts_diamond_base_once() {
		let graph = diamond();
		// d(4) + b(2) + c(3) + a(1), with a reached via both paths but counted once.
		assert_eq!(graph.total_cost("d"), 10);
	}

	#[test]
	fn total_cost_skips_unlocked_and_unknown() {
		let mut graph = diamond();
		graph.unlock("a").unwrap();
		assert_eq!(graph.total_cost("d"), 9);
		assert_eq!(graph.total_cost("ghost"), 0);
		assert_eq!(graph.total_cost("root"), 0);
	}

	#[test]
	fn depth_is_longest_chain() {
		let graph = diamond();
		assert_eq!(graph.depth("root"), 0);
		assert_eq!(graph.depth("a"), 1);
		assert_eq!(graph.depth("d"), 3);
	}

	#[test]
	fn depth_takes_longest_path_through_shared_nodes() {
		// d reaches a both directly and through e; the longer path wins.
		let graph = SkillGraph::new(
			vec![
				SkillSeed::new("a", 0, &[]),
				SkillSeed::new("e", 1, &["a"]),
				SkillSeed::new("d", 1, &["a", "e"]),
			],
			5,
			20,
		)
		.unwrap();
		assert_eq!(graph.depth("d"), 2);
	}

	#[test]
	fn skill_progress_percentages() {
		let mut graph = diamond();
		assert_eq!(graph.skill_progress("root"), 100);
		assert_eq!(graph.skill_progress("d"), 0);
		graph.unlock("a").unwrap();
		graph.unlock("b").unwrap();
		assert_eq!(graph.skill_progress("d"), 50);
		assert_eq!(graph.skill_progress("ghost"), 0);
	}

	#[test]
	fn unlock_all_is_greedy_first_fit() {
		let mut graph = diamond();
		assert_eq!(graph.unlock_all(), 4);
		assert_eq!(graph.available_points(), 10);

		// With 3 points only a(1) and b(2) fit; c and d stay locked.
		let mut tight = SkillGraph::new(
			vec![
				SkillSeed::new("root", 0, &[]),
				SkillSeed::new("a", 1, &["root"]),
				SkillSeed::new("b", 2, &["a"]),
				SkillSeed::new("c", 3, &["a"]),
				SkillSeed::new("d", 4, &["b", "c"]),
			],
			3,
			20,
		)
		.unwrap();
		assert_eq!(tight.unlock_all(), 2);
		assert!(tight.is_unlocked("b"));
		assert!(!tight.is_unlocked("c"));
		assert_eq!(tight.available_points(), 0);
	}

	fn branchy(points: u32) -> SkillGraph {
		SkillGraph::new(
			vec![
				SkillSeed::new("root", 0, &[]).branch("left"),
				SkillSeed::new("l1a", 2, &["root"]).branch("left"),
				SkillSeed::new("l1b", 1, &["root"]).branch("left"),
				SkillSeed::new("l2", 3, &["l1a"]).branch("left"),
				SkillSeed::new("r1", 1, &["root"]).branch("right"),
			],
			points,
			20,
		)
		.unwrap()
	}

	#[test]
	fn unlock_branch_orders_by_depth() {
		let mut graph = branchy(20);
		assert_eq!(graph.unlock_branch("left"), 3);
		assert!(graph.is_unlocked("l2"));
		assert!(!graph.is_unlocked("r1"));
		assert_eq!(graph.available_points(), 14);
	}

	#[test]
	fn unlock_branch_skips_unaffordable_and_continues() {
		// 1 point: l1a (cost 2) is skipped, l1b (cost 1, same depth, later
		// in order) still unlocks. l2 fails on its locked dependency.
		let mut graph = branchy(1);
		assert_eq!(graph.unlock_branch("left"), 1);
		assert!(!graph.is_unlocked("l1a"));
		assert!(graph.is_unlocked("l1b"));
		assert!(!graph.is_unlocked("l2"));
		assert_eq!(graph.available_points(), 0);
	}

	#[test]
	fn export_import_round_trip() {
		let mut graph = diamond();
		graph.unlock("a").unwrap();
		graph.unlock("b").unwrap();
		let snapshot = graph.export_state();
		assert_eq!(snapshot.version, SNAPSHOT_VERSION);

		let mut restored = diamond();
		restored.import_state(&snapshot);
		assert_eq!(restored.available_points(), graph.available_points());
		assert_eq!(restored.export_state(), snapshot);
	}

	#[test]
	fn import_bypasses_gates_and_skips_unknown_ids() {
		let mut graph = diamond();
		graph.import_state(&Snapshot {
			version: SNAPSHOT_VERSION,
			available_points: 7,
			unlocked_skills: vec!["d".into(), "ghost".into()],
		});
		// d unlocked while b and c are not: import trusts the snapshot.
		assert!(graph.is_unlocked("d"));
		assert!(!graph.is_unlocked("b"));
		assert_eq!(graph.available_points(), 7);
	}

	#[test]
	fn snapshot_wire_form_is_camel_case() {
		let snap = Snapshot {
			version: SNAPSHOT_VERSION,
			available_points: 3,
			unlocked_skills: vec!["x".into()],
		};
		let json = snap.to_json();
		assert!(json.contains("\"availablePoints\":3"));
		assert!(json.contains("\"unlockedSkills\":[\"x\"]"));
		assert_eq!(Snapshot::from_json(&json), Ok(snap));
	}

	#[test]
	fn legacy_snapshot_without_version_parses() {
		let snap =
			Snapshot::from_json(r#"{"availablePoints":9,"unlockedSkills":["x","y"]}"#).unwrap();
		assert_eq!(snap.version, 0);
		assert_eq!(snap.available_points, 9);
	}

	#[test]
	fn malformed_snapshot_is_refused() {
		assert_eq!(
			Snapshot::from_json(r#"{"points":1}"#),
			Err(UnlockError::MalformedSnapshot)
		);
		assert_eq!(
			Snapshot::from_json("not json"),
			Err(UnlockError::MalformedSnapshot)
		);
	}

	#[test]
	fn set_position_only_touches_display_metadata() {
		let mut graph = chain();
		graph.set_position("x", 12.0, -3.5);
		assert_eq!(graph.get("x").unwrap().meta.position, (12.0, -3.5));
		assert_eq!(graph.available_points(), 4);
		graph.set_position("ghost", 0.0, 0.0);
	}
}
