//! Window size and scroll helpers shared by the page components.

use web_sys::Window;

/// Inner window size in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// Fraction of the page scrolled, in `[0, 1]`. A page that fits the viewport
/// reports zero.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
	let scrollable = scroll_height - viewport_height;
	if scrollable <= 0.0 {
		return 0.0;
	}
	(scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Current scroll progress of the document.
pub fn read_scroll_progress(window: &Window) -> f64 {
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	let viewport_height = viewport_size(window).map_or(0.0, |(_, h)| h);
	let scroll_height = window
		.document()
		.and_then(|d| d.document_element())
		.map_or(0.0, |el| el.scroll_height() as f64);
	scroll_progress(scroll_y, scroll_height, viewport_height)
}
