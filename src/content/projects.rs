//! Project seed records: three showcase cards plus the classic grid.

use crate::stores::projects::{Project, ProjectLinks, ShowcaseKind};

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

/// The shipped project catalogue.
pub fn projects() -> Vec<Project> {
	vec![
		Project {
			title: "Hamiltonian Parameter Estimation".to_string(),
			showcase: Some(ShowcaseKind::TestTube),
			short_desc: "Scientific research paper".to_string(),
			full_desc: "Improved a model for predicting Hamiltonian parameters with \
				sequential Monte Carlo and Bayesian experimental design."
				.to_string(),
			context: None,
			technologies: strings(&[
				"R&D",
				"Sequential Monte Carlo",
				"Bayesian Design",
				"Python",
			]),
			links: ProjectLinks {
				github: Some("https://github.com/samkeller/hamiltonian-estimation".to_string()),
				demo: None,
			},
		},
		Project {
			title: "VisionAssist Glasses".to_string(),
			showcase: Some(ShowcaseKind::Laser),
			short_desc: "AI-powered vision assistance".to_string(),
			full_desc: "Smart glasses prototype narrating the wearer's surroundings: \
				object detection, depth estimation and a voice interface glued into a \
				single on-device loop."
				.to_string(),
			context: Some("GenAI Hackathon 2023 | Team of 3".to_string()),
			technologies: strings(&[
				"Computer Vision",
				"Speech-to-Text",
				"Depth Estimation",
				"Python",
			]),
			links: ProjectLinks {
				github: Some("https://github.com/samkeller/visionassist".to_string()),
				demo: None,
			},
		},
		Project {
			title: "Transaction Fraud Detection".to_string(),
			showcase: Some(ShowcaseKind::Diffusion),
			short_desc: "Banking fraud detection".to_string(),
			full_desc: "Feature engineering over sparse transaction data that lifted \
				suspicious-activity recall enough to win the hackathon."
				.to_string(),
			context: Some("Winner, Mynk Hackathon | Team of 3".to_string()),
			technologies: strings(&["Machine Learning", "Feature Engineering", "Python"]),
			links: ProjectLinks::default(),
		},
		Project {
			title: "This Portfolio".to_string(),
			showcase: None,
			short_desc: "Skill-tree portfolio SPA".to_string(),
			full_desc: "The site you are looking at: a WASM single-page app whose CV is \
				a playable skill tree."
				.to_string(),
			context: None,
			technologies: strings(&["Rust", "Leptos", "Canvas"]),
			links: ProjectLinks {
				github: Some("https://github.com/samkeller/skilltree-portfolio".to_string()),
				demo: None,
			},
		},
		Project {
			title: "Open Data Pipelines".to_string(),
			showcase: None,
			short_desc: "Public-data ingestion toolkit".to_string(),
			full_desc: "Schedulable ingestion jobs for regional open-data portals with \
				schema drift detection and typed exports."
				.to_string(),
			context: None,
			technologies: strings(&["Python", "SQL", "Airflow"]),
			links: ProjectLinks::default(),
		},
	]
}
