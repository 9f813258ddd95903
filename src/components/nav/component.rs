//! Navigation bar, scroll progress bar and typewriter text.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::sections::{Section, active_section, measure_sections};
use super::typing::{CURSOR_BLINK, Typewriter, TypingSpeed};
use crate::timer::sleep;
use crate::viewport::read_scroll_progress;

/// Cycles through `texts` with a typewriter effect and a blinking cursor.
///
/// Both timer loops stop once the component is removed.
#[component]
pub fn TypingText(
	/// Texts typed in order, looping back to the first.
	texts: Vec<String>,
	/// Typing, deleting and pause timing.
	#[prop(default = TypingSpeed::default())]
	speed: TypingSpeed,
) -> impl IntoView {
	let shown = RwSignal::new(String::new());
	let cursor = RwSignal::new(true);
	let alive = Arc::new(AtomicBool::new(true));
	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let mut typewriter = Typewriter::new(&texts, speed);
	let alive_typing = alive.clone();
	spawn_local(async move {
		let mut wait = speed.type_delay;
		loop {
			sleep(wait).await;
			if !alive_typing.load(Ordering::Relaxed) {
				break;
			}
			wait = typewriter.advance();
			if shown.try_set(typewriter.visible()).is_some() {
				break;
			}
		}
	});

	spawn_local(async move {
		loop {
			sleep(CURSOR_BLINK).await;
			if !alive.load(Ordering::Relaxed) || cursor.try_update(|c| *c = !*c).is_none() {
				break;
			}
		}
	});

	view! {
		<span class="typing">
			{move || shown.get()}
			<span class="typing-cursor" class:hidden=move || !cursor.get()>
				"|"
			</span>
		</span>
	}
}

/// Fixed navigation bar with section links and a scroll progress bar.
///
/// The link for the section under the viewport probe line is marked active.
#[component]
pub fn NavBar(
	/// Texts cycled by the brand typewriter.
	brand_texts: Vec<String>,
) -> impl IntoView {
	let active = RwSignal::new(Section::default());
	let progress = RwSignal::new(0.0_f64);

	let handle = window_event_listener(ev::scroll, move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		progress.set(read_scroll_progress(&window));
		let scroll_y = window.scroll_y().unwrap_or(0.0);
		if let Some(section) = active_section(scroll_y, &measure_sections(&window)) {
			if active.get_untracked() != section {
				active.set(section);
			}
		}
	});
	on_cleanup(move || handle.remove());

	let links = Section::ALL
		.iter()
		.map(|&section| {
			view! {
				<li>
					<a
						href=format!("#{}", section.id())
						class="nav-link"
						class:active=move || active.get() == section
					>
						{section.label()}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<div
			class="scroll-progress"
			style=move || format!("transform: scaleX({});", progress.get())
		></div>
		<nav class="site-nav">
			<div class="brand">
				<TypingText texts=brand_texts speed=TypingSpeed::from_millis(150, 100, 3000) />
			</div>
			<ul class="nav-links">{links}</ul>
		</nav>
	}
}
