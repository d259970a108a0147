//! The skill tree itself: one programming root fanning out into data
//! science, web, database and devops branches. Positions are authored
//! canvas coordinates.

use crate::engine::SkillSeed;

/// Points available at the start of a session.
pub const STARTING_POINTS: u32 = 5;

/// Budget ceiling restored by a reset.
pub const MAX_POINTS: u32 = 20;

/// Seed records for the shipped tree, in display/iteration order.
pub fn skill_seeds() -> Vec<SkillSeed> {
	vec![
		SkillSeed::new("core_programming", 0, &[]).meta(
			"Programming",
			"Core programming fundamentals",
			"💻",
			(600.0, 400.0),
		),
		// Data science branch
		SkillSeed::new("python", 1, &["core_programming"])
			.branch("data-science")
			.meta(
				"Python",
				"Python programming & data analysis",
				"🐍",
				(450.0, 300.0),
			),
		SkillSeed::new("machine_learning", 2, &["python"])
			.branch("data-science")
			.meta(
				"Machine Learning",
				"ML algorithms & model training",
				"🤖",
				(350.0, 200.0),
			),
		SkillSeed::new("deep_learning", 2, &["machine_learning"])
			.branch("data-science")
			.meta(
				"Deep Learning",
				"Neural networks & deep learning",
				"🧠",
				(250.0, 150.0),
			),
		// Web branch
		SkillSeed::new("javascript", 1, &["core_programming"])
			.branch("web")
			.meta(
				"JavaScript",
				"JavaScript & modern web development",
				"🌐",
				(750.0, 300.0),
			),
		SkillSeed::new("frontend", 2, &["javascript"]).branch("web").meta(
			"Frontend",
			"Frontend frameworks & UI development",
			"🎨",
			(850.0, 200.0),
		),
		SkillSeed::new("backend", 2, &["javascript"]).branch("web").meta(
			"Backend",
			"Backend development & APIs",
			"⚙️",
			(950.0, 150.0),
		),
		// Database branch
		SkillSeed::new("sql", 1, &["core_programming"])
			.branch("databases")
			.meta("SQL", "Relational databases & SQL", "📊", (500.0, 500.0)),
		SkillSeed::new("nosql", 1, &["core_programming"])
			.branch("databases")
			.meta(
				"NoSQL",
				"NoSQL databases & data modeling",
				"🗄️",
				(700.0, 500.0),
			),
		// Devops sits below both database tracks
		SkillSeed::new("devops", 3, &["sql", "nosql"]).branch("devops").meta(
			"DevOps",
			"CI/CD & deployment",
			"🔄",
			(600.0, 600.0),
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::SkillGraph;

	fn shipped() -> SkillGraph {
		SkillGraph::new(skill_seeds(), STARTING_POINTS, MAX_POINTS)
			.expect("shipped tree must construct")
	}

	#[test]
	fn shipped_tree_constructs_and_roots_unlock() {
		let graph = shipped();
		assert!(graph.is_unlocked("core_programming"));
		assert_eq!(graph.unlockable_total(), 9);
		assert_eq!(graph.available_points(), STARTING_POINTS);
	}

	#[test]
	fn devops_costs_both_database_tracks() {
		let graph = shipped();
		// devops(3) + sql(1) + nosql(1)
		assert_eq!(graph.total_cost("devops"), 5);
		assert_eq!(graph.depth("devops"), 2);
	}

	#[test]
	fn starting_budget_cannot_open_the_whole_tree() {
		let mut graph = shipped();
		let opened = graph.unlock_all();
		assert!(opened < graph.unlockable_total());
		// After a reset the full budget can.
		graph.reset();
		assert_eq!(graph.unlock_all(), 9);
	}
}
