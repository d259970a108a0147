//! Profile and experience seed records.

use crate::stores::experience::ExperienceEntry;
use crate::stores::profile::{Interest, Profile};

/// The profile card contents.
pub fn profile() -> Profile {
	Profile {
		name: "Sam Keller".to_string(),
		title: "Data Scientist & Full-Stack Developer".to_string(),
		portrait: "/images/profile.png".to_string(),
		personal_info: vec![
			("Location".to_string(), "Lyon, France".to_string()),
			("Email".to_string(), "hello@samkeller.dev".to_string()),
			(
				"Specialty".to_string(),
				"Data Science | Web Development".to_string(),
			),
			("Experience".to_string(), "4+ Years".to_string()),
			(
				"Languages".to_string(),
				"French, English, German".to_string(),
			),
		],
		interests: vec![
			Interest {
				name: "Artificial Intelligence".to_string(),
				description: "Model training and the ethics around shipping it".to_string(),
			},
			Interest {
				name: "Open Source".to_string(),
				description: "Maintainer and contributor across the data tooling space"
					.to_string(),
			},
			Interest {
				name: "Tech Innovation".to_string(),
				description: "Early adopter of emerging languages and runtimes".to_string(),
			},
		],
	}
}

/// Timeline entries, most recent first.
pub fn experience_entries() -> Vec<ExperienceEntry> {
	vec![
		ExperienceEntry {
			position: "Data Science Engineer".to_string(),
			company: "Brightline Analytics".to_string(),
			period: "Mar 2024 - Present".to_string(),
			responsibilities: vec![
				"Built churn-prediction models serving three product teams".to_string(),
				"Owns the feature-store ingestion pipelines (Python, SQL)".to_string(),
				"Ships internal dashboards the sales org actually opens".to_string(),
			],
		},
		ExperienceEntry {
			position: "Full-Stack Developer".to_string(),
			company: "Atelier Web".to_string(),
			period: "Jun 2022 - Feb 2024".to_string(),
			responsibilities: vec![
				"Delivered responsive client apps on a component-driven stack".to_string(),
				"Designed and versioned REST APIs for four client projects".to_string(),
				"Tuned database schemas and query plans under real load".to_string(),
			],
		},
	]
}
