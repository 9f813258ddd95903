//! Leptos component wrapping the code mist canvas.
//!
//! The component creates a fixed, full-viewport canvas and wires window
//! listeners for pointer, scroll and resize, plus an intersection observer that
//! pauses stepping while the canvas is off screen. An animation loop runs via
//! `requestAnimationFrame`. When the component is removed the loop stops
//! rescheduling itself and detaches every listener.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, HtmlCanvasElement, IntersectionObserver,
	IntersectionObserverEntry, MouseEvent, Window,
};

use super::render;
use super::state::MistState;
use super::theme::MistTheme;
use crate::viewport::{read_scroll_progress, viewport_size};

/// Window listeners and the visibility observer owned by a running loop.
/// Dropping this detaches all of them.
struct Listeners {
	window: Window,
	handlers: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
	observer: IntersectionObserver,
	_on_intersect: Closure<dyn FnMut(js_sys::Array)>,
}

impl Listeners {
	fn listen(&mut self, event: &'static str, handler: Closure<dyn FnMut(Event)>) {
		if self
			.window
			.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
			.is_err()
		{
			warn!("portfolio: could not listen for {} events", event);
		}
		self.handlers.push((event, handler));
	}
}

impl Drop for Listeners {
	fn drop(&mut self) {
		for (event, handler) in &self.handlers {
			let _ = self
				.window
				.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
		}
		self.observer.disconnect();
	}
}

/// Full-viewport animated background of drifting code glyphs.
///
/// Glyphs drift downwards, lean sideways as the page scrolls, and are drawn
/// towards the pointer when it comes close.
#[component]
pub fn CodeMistBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let theme = MistTheme::default();
	let style = format!(
		"position: fixed; inset: 0; width: 100vw; height: 100vh; z-index: 0; \
		 pointer-events: none; opacity: 0.8; background: {};",
		theme.backdrop
	);

	let alive = Arc::new(AtomicBool::new(true));
	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if start(canvas, theme.clone(), alive.clone()).is_none() {
			warn!("portfolio: code mist background unavailable");
		}
	});

	view! { <canvas node_ref=canvas_ref class="code-mist" style=style aria-hidden="true" /> }
}

/// Size the canvas, seed the particle pool and start the animation loop.
fn start(canvas: HtmlCanvasElement, theme: MistTheme, alive: Arc<AtomicBool>) -> Option<()> {
	let window = web_sys::window()?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

	let state = Rc::new(RefCell::new(MistState::new(
		theme,
		w,
		h,
		js_sys::Date::now() as u64,
	)));
	state.borrow_mut().scroll = read_scroll_progress(&window);

	let state_io = state.clone();
	let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
			let visible = entry.is_intersecting();
			debug!("portfolio: code mist visible = {}", visible);
			state_io.borrow_mut().gate.set_visible(visible);
		}
	});
	let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()).ok()?;
	observer.observe(&canvas);

	let mut listeners = Listeners {
		window: window.clone(),
		handlers: Vec::new(),
		observer,
		_on_intersect: on_intersect,
	};

	let state_mm = state.clone();
	listeners.listen(
		"mousemove",
		Closure::new(move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				state_mm
					.borrow_mut()
					.pointer
					.set_target(ev.client_x() as f64, ev.client_y() as f64);
			}
		}),
	);

	let (state_sc, window_sc) = (state.clone(), window.clone());
	listeners.listen(
		"scroll",
		Closure::new(move |_: Event| {
			state_sc.borrow_mut().scroll = read_scroll_progress(&window_sc);
		}),
	);

	let (state_rs, window_rs, canvas_rs) = (state.clone(), window.clone(), canvas.clone());
	listeners.listen(
		"resize",
		Closure::new(move |_: Event| {
			let Some((nw, nh)) = viewport_size(&window_rs) else {
				return;
			};
			canvas_rs.set_width(nw as u32);
			canvas_rs.set_height(nh as u32);
			state_rs.borrow_mut().field.reset(nw, nh);
		}),
	);

	let listeners = RefCell::new(Some(listeners));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let (state_anim, animate_inner) = (state.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move |now: f64| {
		if !alive.load(Ordering::Relaxed) {
			if listeners.borrow_mut().take().is_some() {
				info!("portfolio: code mist stopped");
			}
			return;
		}

		{
			let mut s = state_anim.borrow_mut();
			if s.frame(now) {
				render::render(&s, &ctx);
			}
		}

		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));

	if let Some(ref cb) = *animate.borrow() {
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()?;
	}
	info!(
		"portfolio: code mist started with {} particles",
		state.borrow().field.slots().len()
	);
	Some(())
}
