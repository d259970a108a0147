use leptos::prelude::*;

use crate::stores::experience::ExperienceStore;
use crate::stores::profile::ProfileStore;
use crate::stores::projects::{Project, ProjectsStore, ShowcaseKind};

fn project_card(project: &Project) -> impl IntoView + use<> {
	let card_class = match project.showcase {
		Some(ShowcaseKind::TestTube) => "project-card showcase-test-tube",
		Some(ShowcaseKind::Laser) => "project-card showcase-laser",
		Some(ShowcaseKind::Diffusion) => "project-card showcase-diffusion",
		None => "project-card",
	};
	let tech = project
		.technologies
		.iter()
		.map(|t| view! { <span class="tech-tag">{t.clone()}</span> })
		.collect_view();
	let github = project.links.github.clone().map(|url| {
		view! {
			<a href=url target="_blank" rel="noopener">
				"GitHub"
			</a>
		}
	});

	view! {
		<article class=card_class>
			<h3>{project.title.clone()}</h3>
			<p class="subtitle">{project.short_desc.clone()}</p>
			<p>{project.full_desc.clone()}</p>
			{project.context.clone().map(|c| view! { <p class="project-context">{c}</p> })}
			<div class="tech-tags">{tech}</div>
			{github}
		</article>
	}
}

/// Profile, experience timeline and project catalogue.
#[component]
pub fn About() -> impl IntoView {
	let profile: ProfileStore = expect_context();
	let experience: ExperienceStore = expect_context();
	let projects: ProjectsStore = expect_context();

	view! {
		<div class="page about">
			<section class="profile-card">
				{move || {
					profile
						.with(|p| {
							view! {
								<img class="portrait" src=p.portrait.clone() alt=p.name.clone() />
								<h1>{p.name.clone()}</h1>
								<p class="subtitle">{p.title.clone()}</p>
								<dl class="personal-info">
									{p
										.personal_info
										.iter()
										.map(|(label, value)| {
											view! {
												<dt>{label.clone()}</dt>
												<dd>{value.clone()}</dd>
											}
										})
										.collect_view()}
								</dl>
							}
						})
				}}
			</section>

			<section class="interests">
				<h2>"Interests"</h2>
				<ul>
					{move || {
						profile
							.with(|p| {
								p.interests
									.iter()
									.map(|i| {
										view! {
											<li>
												<strong>{i.name.clone()}</strong>
												" — "
												{i.description.clone()}
											</li>
										}
									})
									.collect_view()
							})
					}}
				</ul>
			</section>

			<section class="experience">
				<h2>"Experience"</h2>
				{move || {
					experience
						.with(|entries| {
							entries
								.iter()
								.map(|e| {
									view! {
										<article class="experience-entry">
											<h3>{e.position.clone()}</h3>
											<p class="subtitle">
												{e.company.clone()} " · " {e.period.clone()}
											</p>
											<ul>
												{e
													.responsibilities
													.iter()
													.map(|r| view! { <li>{r.clone()}</li> })
													.collect_view()}
											</ul>
										</article>
									}
								})
								.collect_view()
						})
				}}
			</section>

			<section class="projects">
				<h2>"Highlighted projects"</h2>
				<div class="project-grid">
					{move || projects.showcase().iter().map(project_card).collect_view()}
				</div>
				<h2>"More projects"</h2>
				<div class="project-grid">
					{move || projects.classic().iter().map(project_card).collect_view()}
				</div>
			</section>
		</div>
	}
}
