//! Pure skill-graph engine: no web or UI dependencies, natively testable.

mod skill_graph;

pub use skill_graph::{
	GraphError, SkillGraph, SkillMeta, SkillNode, SkillSeed, Snapshot, UnlockError,
	SNAPSHOT_VERSION,
};
