use std::collections::{HashMap, HashSet};

use crate::engine::SkillGraph;

use super::types::{NodeStatus, TreeEdge, TreeNode};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Disc color for the root / untagged nodes.
const ROOT_COLOR: &str = "#e0e0e8";

pub const NODE_RADIUS: f64 = 22.0;
pub const HIT_RADIUS: f64 = 26.0;

/// Screen-space movement below this is a click, not a drag.
pub const CLICK_DRAG_THRESHOLD: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	/// Crossed the click/drag threshold at least once.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

pub struct SkillTreeState {
	pub nodes: Vec<TreeNode>,
	pub edges: Vec<TreeEdge>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

fn branch_color(branches: &[String], branch: Option<&str>) -> String {
	match branch {
		None => ROOT_COLOR.to_string(),
		Some(tag) => {
			let i = branches.iter().position(|b| b == tag).unwrap_or(0);
			COLORS[i % COLORS.len()].to_string()
		}
	}
}

fn build_view(graph: &SkillGraph) -> (Vec<TreeNode>, Vec<TreeEdge>) {
	let mut branches: Vec<String> = Vec::new();
	for node in graph.nodes() {
		if let Some(tag) = &node.branch {
			if !branches.iter().any(|b| b == tag) {
				branches.push(tag.clone());
			}
		}
	}

	let index: HashMap<&str, usize> = graph
		.nodes()
		.iter()
		.enumerate()
		.map(|(i, n)| (n.id.as_str(), i))
		.collect();

	let points = graph.available_points();
	let nodes = graph
		.nodes()
		.iter()
		.map(|node| {
			let deps_met = node.dependencies.iter().all(|d| graph.is_unlocked(d));
			let status = if node.unlocked {
				NodeStatus::Unlocked
			} else if deps_met && node.cost <= points {
				NodeStatus::Available
			} else if deps_met {
				NodeStatus::Unaffordable
			} else {
				NodeStatus::Locked
			};
			TreeNode {
				id: node.id.clone(),
				name: node.meta.name.clone(),
				icon: node.meta.icon.clone(),
				cost: node.cost,
				x: node.meta.position.0,
				y: node.meta.position.1,
				color: branch_color(&branches, node.branch.as_deref()),
				status,
			}
		})
		.collect();

	let mut edges = Vec::new();
	for (to, node) in graph.nodes().iter().enumerate() {
		for dep in &node.dependencies {
			if let Some(&from) = index.get(dep.as_str()) {
				edges.push(TreeEdge { from, to });
			}
		}
	}

	(nodes, edges)
}

impl SkillTreeState {
	pub fn new(graph: &SkillGraph, width: f64, height: f64) -> Self {
		let (nodes, edges) = build_view(graph);

		// Center the authored layout in the viewport.
		let (cx, cy) = if nodes.is_empty() {
			(0.0, 0.0)
		} else {
			let (min_x, max_x) = nodes
				.iter()
				.fold((f64::MAX, f64::MIN), |(lo, hi), n| (lo.min(n.x), hi.max(n.x)));
			let (min_y, max_y) = nodes
				.iter()
				.fold((f64::MAX, f64::MIN), |(lo, hi), n| (lo.min(n.y), hi.max(n.y)));
			((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
		};

		Self {
			nodes,
			edges,
			transform: ViewTransform {
				x: width / 2.0 - cx,
				y: height / 2.0 - cy,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	/// Refresh the view-model from the graph, keeping the camera, drag and
	/// hover state. Node order is stable, so indices survive.
	pub fn sync(&mut self, graph: &SkillGraph) {
		let (nodes, edges) = build_view(graph);
		// Keep the in-progress drag position rather than snapping back to
		// the not-yet-committed store coordinate.
		let dragging = self.drag.active.then_some(self.drag.node).flatten();
		let old = dragging.and_then(|i| self.nodes.get(i).map(|n| (n.x, n.y)));
		self.nodes = nodes;
		self.edges = edges;
		if let (Some(i), Some((x, y))) = (dragging, old) {
			if let Some(node) = self.nodes.get_mut(i) {
				node.x = x;
				node.y = y;
			}
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		for (i, node) in self.nodes.iter().enumerate() {
			let (dx, dy) = (node.x - gx, node.y - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(i);
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.from == idx {
					self.hover.neighbors.insert(edge.to);
				} else if edge.to == idx {
					self.hover.neighbors.insert(edge.from);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::SkillSeed;

	fn graph() -> SkillGraph {
		SkillGraph::new(
			vec![
				SkillSeed::new("root", 0, &[]).meta("Root", "", "R", (100.0, 100.0)),
				SkillSeed::new("cheap", 1, &["root"])
					.branch("a")
					.meta("Cheap", "", "c", (200.0, 100.0)),
				SkillSeed::new("pricey", 9, &["root"])
					.branch("b")
					.meta("Pricey", "", "p", (300.0, 100.0)),
				SkillSeed::new("deep", 1, &["cheap"])
					.branch("a")
					.meta("Deep", "", "d", (400.0, 100.0)),
			],
			2,
			20,
		)
		.unwrap()
	}

	#[test]
	fn statuses_reflect_budget_and_dependencies() {
		let state = SkillTreeState::new(&graph(), 800.0, 600.0);
		let statuses: Vec<NodeStatus> = state.nodes.iter().map(|n| n.status).collect();
		assert_eq!(
			statuses,
			[
				NodeStatus::Unlocked,
				NodeStatus::Available,
				NodeStatus::Unaffordable,
				NodeStatus::Locked,
			]
		);
	}

	#[test]
	fn edges_point_from_dependency_to_dependent() {
		let state = SkillTreeState::new(&graph(), 800.0, 600.0);
		let pairs: Vec<(usize, usize)> = state.edges.iter().map(|e| (e.from, e.to)).collect();
		assert_eq!(pairs, [(0, 1), (0, 2), (1, 3)]);
	}

	#[test]
	fn view_starts_centered_on_the_layout() {
		let state = SkillTreeState::new(&graph(), 800.0, 600.0);
		// Layout spans x 100..400, y 100, centre (250, 100).
		assert_eq!(state.transform.x, 150.0);
		assert_eq!(state.transform.y, 200.0);
		assert_eq!(state.transform.k, 1.0);
	}

	#[test]
	fn hit_testing_respects_the_transform() {
		let mut state = SkillTreeState::new(&graph(), 800.0, 600.0);
		// Root sits at world (100, 100) → screen (250, 300).
		assert_eq!(state.node_at_position(250.0, 300.0), Some(0));
		assert_eq!(state.node_at_position(250.0, 360.0), None);
		state.transform.k = 2.0;
		assert_eq!(state.node_at_position(350.0, 400.0), Some(0));
	}

	#[test]
	fn hover_collects_neighbors_across_edge_direction() {
		let mut state = SkillTreeState::new(&graph(), 800.0, 600.0);
		state.set_hover(Some(1));
		assert!(state.hover.neighbors.contains(&0));
		assert!(state.hover.neighbors.contains(&3));
		assert!(!state.hover.neighbors.contains(&2));
		assert!(state.is_highlighted(3));
		state.set_hover(None);
		assert_eq!(state.hover.prev_node, Some(1));
	}

	#[test]
	fn sync_preserves_camera_and_live_drag() {
		let mut g = graph();
		let mut state = SkillTreeState::new(&g, 800.0, 600.0);
		state.transform.k = 1.5;
		state.drag.active = true;
		state.drag.node = Some(1);
		state.nodes[1].x = 999.0;

		g.unlock("cheap").unwrap();
		state.sync(&g);
		assert_eq!(state.transform.k, 1.5);
		assert_eq!(state.nodes[1].x, 999.0);
		assert_eq!(state.nodes[1].status, NodeStatus::Unlocked);
	}
}
