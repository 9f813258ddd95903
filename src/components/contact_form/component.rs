//! Leptos component for the contact form.
//!
//! Submitting reads the four fields, hands them to the dispatcher on a local
//! task and mirrors the [`FormState`] transitions into the view. The submit
//! button is disabled while a submission is loading.

use std::rc::Rc;
use std::time::Duration;

use leptos::html::Form;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};

use super::dispatch::ContactDispatcher;
use super::status::FormState;
use super::types::{Field, RawSubmission};
use crate::content::ContactConfig;
use crate::timer::sleep;

fn read_form(form: &HtmlFormElement) -> RawSubmission {
	match FormData::new_with_form(form) {
		Ok(data) => RawSubmission::from_lookup(|key| data.get(key).as_string()),
		Err(e) => {
			warn!("portfolio: could not read contact form: {:?}", e);
			RawSubmission::default()
		}
	}
}

/// Contact form wired to the simulated notification sender.
#[component]
pub fn ContactForm(
	/// Recipient and timing configuration.
	config: ContactConfig,
	/// Site name included in the notification footer.
	#[prop(into)]
	site_name: String,
) -> impl IntoView {
	let form_ref = NodeRef::<Form>::new();
	let state = RwSignal::new(FormState::default());
	let dispatcher = Rc::new(ContactDispatcher::simulated(&config, &site_name));
	let reset_after = Duration::from_millis(config.status_reset_ms);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(form) = form_ref.get() else {
			warn!("portfolio: contact form not mounted");
			return;
		};
		let form: HtmlFormElement = form.into();
		let raw = read_form(&form);
		let Some(generation) = state.try_update(|s| s.begin()) else {
			return;
		};

		let dispatcher = Rc::clone(&dispatcher);
		spawn_local(async move {
			let result = dispatcher.submit(&raw).await;
			let sent = result.success;
			let _ = state.try_update(|s| s.complete(generation, result));
			if sent {
				form.reset();
			}

			sleep(reset_after).await;
			let _ = state.try_update(|s| s.expire(generation));
		});
	};

	let loading = move || state.with(|s| s.status.is_loading());

	view! {
		<form id="contact-form" node_ref=form_ref class="contact-form" on:submit=on_submit>
			<div class="form-row">
				<FormField field=Field::Name label="// name" placeholder="Enter your name" state=state />
				<FormField
					field=Field::Email
					label="// email"
					placeholder="your.email@example.com"
					kind="email"
					state=state
				/>
			</div>
			<FormField
				field=Field::Subject
				label="// subject"
				placeholder="Project collaboration, job opportunity, etc."
				state=state
			/>
			<FormField
				field=Field::Message
				label="// message"
				placeholder="Tell me about your project or opportunity..."
				multiline=true
				state=state
			/>

			<div class="form-actions">
				<button type="submit" class="code-button" disabled=loading>
					{move || if loading() { "sending..." } else { "send_message()" }}
				</button>
				<button type="reset" class="code-button blue">"clear_form()"</button>
			</div>

			{move || {
				state
					.with(|s| {
						(!s.status.is_idle())
							.then(|| (s.status.css_class(), s.status.message().to_string()))
					})
					.map(|(class, message)| {
						view! { <div class=format!("form-banner {class}")>{message}</div> }
					})
			}}

			<div class="form-terminal">
				<span class="prompt">"> form.status: "</span>
				<span class=move || state.with(|s| s.status.css_class())>
					{move || state.with(|s| s.status.terminal_label())}
				</span>
			</div>
		</form>
	}
}

/// One labelled input with its validation messages underneath.
#[component]
fn FormField(
	field: Field,
	label: &'static str,
	placeholder: &'static str,
	#[prop(default = "text")] kind: &'static str,
	#[prop(default = false)] multiline: bool,
	state: RwSignal<FormState>,
) -> impl IntoView {
	let errors = move || state.with(|s| s.errors_for(field).to_vec());
	let input = if multiline {
		view! {
			<textarea
				name=field.as_str()
				rows="6"
				required=true
				placeholder=placeholder
				class="form-input"
			></textarea>
		}
		.into_any()
	} else {
		view! {
			<input
				type=kind
				name=field.as_str()
				required=true
				placeholder=placeholder
				class="form-input"
			/>
		}
		.into_any()
	};

	view! {
		<div class="form-field" class:invalid=move || !errors().is_empty()>
			<label class="form-label">{label}</label>
			{input}
			<ul class="field-errors">
				{move || errors().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
			</ul>
		</div>
	}
}
