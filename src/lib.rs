//! portfolio-site: a single-page developer portfolio.
//!
//! This crate provides a WASM-based portfolio page with an animated code mist
//! background, showcase sections and a validated contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod timer;
pub mod viewport;

pub use components::code_mist::CodeMistBackground;
pub use components::contact_form::{ContactForm, SubmissionResult, validate};
pub use components::nav::NavBar;
pub use components::showcase::Showcase;
pub use content::PortfolioContent;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load page content from a script element with id="portfolio-data".
/// Expected format: JSON matching [`PortfolioContent`]; absent keys keep defaults.
fn load_content() -> Option<PortfolioContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PortfolioContent::from_json(&json_text) {
		Ok(content) => {
			info!(
				"portfolio: loaded content with {} skills, {} projects",
				content.skills.len(),
				content.projects.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("portfolio: failed to parse portfolio data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads content from the DOM and renders the page over the code mist background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_content().unwrap_or_default();
	let title = format!("{} | {}", content.owner, content.role);
	let brand_texts = content.brand_texts.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="portfolio">
			<CodeMistBackground />
			<NavBar brand_texts=brand_texts />
			<Showcase content=content />
		</div>
	}
}
