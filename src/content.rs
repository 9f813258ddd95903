//! Portfolio content and site configuration.
//!
//! Everything here can be overridden from a `<script id="portfolio-data">`
//! element holding JSON. Missing keys fall back to the built-in defaults.

use serde::Deserialize;

/// A skill bar in the skills section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
	/// Label above the bar.
	pub name: String,
	/// Proficiency from 0 to 100.
	pub level: u8,
	/// CSS color for the bar and its glow.
	pub color: String,
}

/// A project card in the projects section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	/// Card heading.
	pub title: String,
	/// Card body text.
	pub description: String,
	#[serde(default)]
	/// Technologies listed under the description.
	pub tech: Vec<String>,
	#[serde(default = "default_glow")]
	/// CSS color for the card glow.
	pub glow_color: String,
	#[serde(default)]
	/// Optional screenshot URL.
	pub image: Option<String>,
	#[serde(default)]
	/// Optional project URL.
	pub link: Option<String>,
}

fn default_glow() -> String {
	"#00ff41".to_string()
}

/// An outbound profile link shown in the contact section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
	/// Link text.
	pub label: String,
	/// Link target.
	pub href: String,
}

/// Contact form behaviour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	/// Address notifications are delivered to.
	pub recipient: String,
	/// How long the simulated sender waits before reporting success.
	pub simulated_delay_ms: u64,
	/// How long a success or error status stays visible before reverting to idle.
	pub status_reset_ms: u64,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			recipient: "Namanbagrecha007@gmail.com".to_string(),
			simulated_delay_ms: 1000,
			status_reset_ms: 5000,
		}
	}
}

/// All content rendered by the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
	/// Name shown in the hero, title and footer.
	pub owner: String,
	/// Job title shown in the hero and page title.
	pub role: String,
	/// Texts cycled by the typewriter brand in the navigation bar.
	pub brand_texts: Vec<String>,
	/// Texts cycled by the typewriter in the hero section, after a `> ` prompt.
	pub taglines: Vec<String>,
	/// Paragraphs of the about section.
	pub about: Vec<String>,
	/// Bars in the skills section.
	pub skills: Vec<Skill>,
	/// Cards in the projects section.
	pub projects: Vec<Project>,
	/// Links listed beside the contact form.
	pub links: Vec<ContactLink>,
	/// Contact form behaviour.
	pub contact: ContactConfig,
}

impl Default for PortfolioContent {
	fn default() -> Self {
		let skill = |name: &str, level: u8, color: &str| Skill {
			name: name.to_string(),
			level,
			color: color.to_string(),
		};
		let project = |title: &str, description: &str, tech: &[&str], glow: &str| Project {
			title: title.to_string(),
			description: description.to_string(),
			tech: tech.iter().map(|t| t.to_string()).collect(),
			glow_color: glow.to_string(),
			image: None,
			link: None,
		};
		let link = |label: &str, href: &str| ContactLink {
			label: label.to_string(),
			href: href.to_string(),
		};

		Self {
			owner: "Naman Bagrecha".to_string(),
			role: "Full Stack Developer".to_string(),
			brand_texts: [
				"<NB.dev/>",
				"<Naman.js/>",
				"<Bagrecha.tsx/>",
				"<FullStack.dev/>",
				"<NB.dev/>",
			]
			.map(String::from)
			.to_vec(),
			taglines: [
				"Specializing in: Django | MongoDB | Python",
				"Building with: HTML | CSS | JavaScript | React ",
				"Crafting: Responsive Design | Modern UI/UX",
				"Creating: Full-Stack Applications | APIs",
				"Other skills : Tailwind CSS | TypeScript | Next.js",
			]
			.map(String::from)
			.to_vec(),
			about: vec![
				"I build responsive, accessible web applications end to end, from the database schema to the last pixel.".to_string(),
				"Most days that means React and Next.js on the front, Django or Node with MongoDB behind it.".to_string(),
			],
			skills: vec![
				skill("HTML5", 95, "#e34c26"),
				skill("CSS3", 92, "#1572b6"),
				skill("JavaScript", 90, "#f7df1e"),
				skill("React", 88, "#61dafb"),
				skill("Next.js", 85, "#68a063"),
				skill("Tailwind CSS", 90, "#06b6d4"),
				skill("MongoDB", 82, "#4db33d"),
				skill("Django", 80, "#00ff41"),
			],
			projects: vec![
				project(
					"E-Commerce Platform",
					"Sustainable e-commerce platform with carbon footprint tracking and eco-friendly product recommendations.",
					&["React", "Django", "MongoDB", "Stripe", "Chart.js"],
					"#00ff41",
				),
				project(
					"Personal Finance Tracker",
					"Finance tracker with AI-driven budgeting, investment insights, and expense categorization with OCR scanning.",
					&["React", "Next.js", "Django", "MongoDB", "Python", "Chart.js"],
					"#0099ff",
				),
				project(
					"Personal Voice Assistant (Aura+)",
					"AI-powered voice assistant for task management, reminders, and smart home control with natural language processing.",
					&["React", "Flask", "FastAPI", "Python"],
					"#00ffff",
				),
			],
			links: vec![
				link("email", "mailto:Namanbagrecha007@gmail.com"),
				link("github", "https://github.com/"),
				link("linkedin", "https://www.linkedin.com/"),
			],
			contact: ContactConfig::default(),
		}
	}
}

impl PortfolioContent {
	/// Parse content JSON. Keys that are absent keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
