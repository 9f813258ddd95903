//! Page sections and active-section tracking.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// Offset added to the scroll position so a section counts as active a little
/// before its top edge reaches the top of the viewport.
const ACTIVE_PROBE_OFFSET: f64 = 100.0;

/// The page's top-level sections, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
	/// Hero.
	#[default]
	Home,
	/// About me.
	About,
	/// Skill bars.
	Skills,
	/// Project cards.
	Projects,
	/// Contact form and links.
	Contact,
}

impl Section {
	/// Sections in page order.
	pub const ALL: [Section; 5] = [
		Section::Home,
		Section::About,
		Section::Skills,
		Section::Projects,
		Section::Contact,
	];

	/// Element id and URL fragment.
	pub fn id(self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::About => "about",
			Section::Skills => "skills",
			Section::Projects => "projects",
			Section::Contact => "contact",
		}
	}

	/// Navigation link text.
	pub fn label(self) -> &'static str {
		match self {
			Section::Home => "Home",
			Section::About => "About",
			Section::Skills => "Skills",
			Section::Projects => "Projects",
			Section::Contact => "Contact",
		}
	}
}

/// Vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	/// Which section was measured.
	pub section: Section,
	/// Distance from the document top in pixels.
	pub top: f64,
	/// Rendered height in pixels.
	pub height: f64,
}

/// Pick the section under the probe line at `scroll_y`.
///
/// When sections overlap the last one in page order wins. Returns `None` when
/// the probe falls outside every section, so the caller can keep the previous
/// choice.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
	let probe = scroll_y + ACTIVE_PROBE_OFFSET;
	bounds
		.iter()
		.filter(|b| probe >= b.top && probe < b.top + b.height)
		.map(|b| b.section)
		.last()
}

/// Measure every section currently in the document.
pub fn measure_sections(window: &Window) -> Vec<SectionBounds> {
	let Some(document) = window.document() else {
		return Vec::new();
	};
	Section::ALL
		.iter()
		.filter_map(|&section| {
			let el: HtmlElement = document.get_element_by_id(section.id())?.dyn_into().ok()?;
			Some(SectionBounds {
				section,
				top: el.offset_top() as f64,
				height: el.offset_height() as f64,
			})
		})
		.collect()
}
