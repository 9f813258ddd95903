//! Static page sections rendered from [`PortfolioContent`].

use leptos::prelude::*;

use super::contact_form::ContactForm;
use super::nav::{Section, TypingSpeed, TypingText};
use crate::content::{ContactConfig, ContactLink, PortfolioContent, Project, Skill};

#[component]
fn Hero(owner: String, role: String, taglines: Vec<String>) -> impl IntoView {
	view! {
		<section id=Section::Home.id() class="section hero">
			<p class="hero-greeting">"// hello world, I'm"</p>
			<h1 class="hero-name">{owner}</h1>
			<h2 class="hero-role">{role}</h2>
			<p class="hero-tagline">
				<span class="prompt">"> "</span>
				<TypingText texts=taglines speed=TypingSpeed::from_millis(80, 40, 1500) />
			</p>
			<div class="hero-actions">
				<a class="code-button" href=format!("#{}", Section::Projects.id())>
					"view_projects()"
				</a>
				<a class="code-button blue" href=format!("#{}", Section::Contact.id())>
					"contact_me()"
				</a>
			</div>
		</section>
	}
}

#[component]
fn About(paragraphs: Vec<String>) -> impl IntoView {
	view! {
		<section id=Section::About.id() class="section about">
			<h2 class="section-title">"<About />"</h2>
			{paragraphs.into_iter().map(|p| view! { <p class="about-text">{p}</p> }).collect_view()}
		</section>
	}
}

#[component]
fn Skills(skills: Vec<Skill>) -> impl IntoView {
	let bars = skills
		.into_iter()
		.map(|skill| {
			let level = skill.level.min(100);
			view! {
				<div class="skill-card">
					<h3 class="skill-name">{skill.name}</h3>
					<div class="skill-track">
						<div
							class="skill-bar"
							style=format!(
								"width: {level}%; background: {c}; box-shadow: 0 0 10px {c}60;",
								c = skill.color,
							)
						></div>
					</div>
					<span class="skill-level">{format!("{level}%")}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id=Section::Skills.id() class="section skills">
			<h2 class="section-title">"<Skills />"</h2>
			<div class="skill-grid">{bars}</div>
		</section>
	}
}

fn project_card(project: Project) -> impl IntoView {
	let image = project
		.image
		.map(|src| view! { <img class="project-image" src=src alt=project.title.clone() loading="lazy" /> });
	let link = project
		.link
		.map(|href| view! { <a class="project-link" href=href target="_blank" rel="noopener">"open()"</a> });

	view! {
		<article
			class="project-card"
			style=format!("box-shadow: 0 0 10px {}10;", project.glow_color)
		>
			{image}
			<h3 class="project-title">{project.title}</h3>
			<p class="project-description">{project.description}</p>
			<ul class="project-tech">
				{project.tech.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
			</ul>
			{link}
		</article>
	}
}

#[component]
fn Projects(projects: Vec<Project>) -> impl IntoView {
	view! {
		<section id=Section::Projects.id() class="section projects">
			<h2 class="section-title">"<Projects />"</h2>
			<div class="project-grid">
				{projects.into_iter().map(project_card).collect_view()}
			</div>
		</section>
	}
}

#[component]
fn Contact(links: Vec<ContactLink>, config: ContactConfig, owner: String) -> impl IntoView {
	view! {
		<section id=Section::Contact.id() class="section contact">
			<h2 class="section-title">"<Contact />"</h2>
			<div class="contact-grid">
				<ul class="contact-links">
					{links
						.into_iter()
						.map(|l| view! { <li><a href=l.href>{l.label}</a></li> })
						.collect_view()}
				</ul>
				<div class="contact-card">
					<h3>"Send Message"</h3>
					<ContactForm config=config site_name=format!("{owner} Portfolio") />
				</div>
			</div>
		</section>
	}
}

#[component]
fn Footer(owner: String) -> impl IntoView {
	view! {
		<footer class="site-footer">
			<p>{format!("© {owner}. Crafted with passion and precision.")}</p>
		</footer>
	}
}

/// Every content section in page order.
#[component]
pub fn Showcase(
	/// Text, skills, projects and contact settings to render.
	content: PortfolioContent,
) -> impl IntoView {
	let PortfolioContent {
		owner,
		role,
		taglines,
		about,
		skills,
		projects,
		links,
		contact,
		..
	} = content;

	view! {
		<main class="showcase">
			<Hero owner=owner.clone() role=role taglines=taglines />
			<About paragraphs=about />
			<Skills skills=skills />
			<Projects projects=projects />
			<Contact links=links config=contact owner=owner.clone() />
		</main>
		<Footer owner=owner />
	}
}
