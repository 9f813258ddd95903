//! Form status state machine.
//!
//! A submission moves the form from `Idle` to `Loading`, then to `Success` or
//! `Error` once the result arrives. After a fixed delay the terminal state
//! reverts to `Idle`. Each submission bumps a generation counter so a revert
//! timer left over from an earlier submission cannot clear a newer status.

use super::types::{Field, FieldErrors, SubmissionResult};

/// Shown while a submission is in flight.
pub const SENDING_MESSAGE: &str = "Sending your message...";

/// Visible status of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
	/// Nothing submitted, or the last outcome has expired.
	#[default]
	Idle,
	/// A submission is in flight.
	Loading,
	/// Delivered; carries the thank-you message.
	Success(String),
	/// Rejected or failed; carries the reason shown to the user.
	Error(String),
}

impl FormStatus {
	/// Whether no banner is shown.
	pub fn is_idle(&self) -> bool {
		matches!(self, FormStatus::Idle)
	}

	/// Whether a submission is in flight.
	pub fn is_loading(&self) -> bool {
		matches!(self, FormStatus::Loading)
	}

	/// Human-readable banner text; empty when idle.
	pub fn message(&self) -> &str {
		match self {
			FormStatus::Idle => "",
			FormStatus::Loading => SENDING_MESSAGE,
			FormStatus::Success(msg) | FormStatus::Error(msg) => msg,
		}
	}

	/// Terminal-style status token.
	pub fn terminal_label(&self) -> &'static str {
		match self {
			FormStatus::Idle => "ready_to_send",
			FormStatus::Loading => "sending_message...",
			FormStatus::Success(_) => "message_sent_successfully",
			FormStatus::Error(_) => "error_occurred",
		}
	}

	/// CSS modifier used by the banner and status line.
	pub fn css_class(&self) -> &'static str {
		match self {
			FormStatus::Idle => "status-idle",
			FormStatus::Loading => "status-loading",
			FormStatus::Success(_) => "status-success",
			FormStatus::Error(_) => "status-error",
		}
	}
}

/// Form status plus the per-field errors of the latest submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
	/// Current banner state.
	pub status: FormStatus,
	/// Messages for fields that failed validation.
	pub field_errors: FieldErrors,
	generation: u64,
}

impl FormState {
	/// Enter `Loading` for a new submission. Returns its generation.
	pub fn begin(&mut self) -> u64 {
		self.generation += 1;
		self.status = FormStatus::Loading;
		self.field_errors.clear();
		self.generation
	}

	/// Record the outcome of the submission started as `generation`.
	///
	/// Results for a submission that has since been superseded are dropped.
	pub fn complete(&mut self, generation: u64, result: SubmissionResult) -> bool {
		if generation != self.generation {
			return false;
		}
		self.field_errors = result.errors.unwrap_or_default();
		self.status = if result.success {
			FormStatus::Success(result.message)
		} else {
			FormStatus::Error(result.message)
		};
		true
	}

	/// Revert to `Idle` if `generation` is still the latest submission and it
	/// has finished. Returns whether the state changed.
	pub fn expire(&mut self, generation: u64) -> bool {
		if generation != self.generation || self.status.is_idle() || self.status.is_loading() {
			return false;
		}
		self.status = FormStatus::Idle;
		self.field_errors.clear();
		true
	}

	/// Errors to show under one field.
	pub fn errors_for(&self, field: Field) -> &[String] {
		self.field_errors
			.get(&field)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::contact_form::types::{DISPATCH_FAILED_MESSAGE, THANK_YOU_MESSAGE};

	#[test]
	fn success_cycle_returns_to_idle() {
		let mut state = FormState::default();
		assert!(state.status.is_idle());
		assert_eq!(state.status.terminal_label(), "ready_to_send");

		let generation = state.begin();
		assert_eq!(state.status, FormStatus::Loading);
		assert_eq!(state.status.message(), SENDING_MESSAGE);
		assert!(!state.expire(generation), "loading must not revert");

		assert!(state.complete(generation, SubmissionResult::sent()));
		assert_eq!(state.status, FormStatus::Success(THANK_YOU_MESSAGE.into()));
		assert_eq!(state.status.terminal_label(), "message_sent_successfully");

		assert!(state.expire(generation));
		assert_eq!(state.status, FormStatus::Idle);
		assert_eq!(state.status.message(), "");
	}

	#[test]
	fn error_cycle_keeps_field_errors_until_idle() {
		let mut state = FormState::default();
		let generation = state.begin();
		let mut errors = FieldErrors::new();
		errors.insert(Field::Name, vec!["Name must be at least 2 characters".into()]);
		state.complete(generation, SubmissionResult::invalid(errors));

		assert!(matches!(state.status, FormStatus::Error(_)));
		assert_eq!(state.status.terminal_label(), "error_occurred");
		assert_eq!(state.errors_for(Field::Name).len(), 1);
		assert!(state.errors_for(Field::Email).is_empty());

		state.expire(generation);
		assert!(state.errors_for(Field::Name).is_empty());
	}

	#[test]
	fn stale_revert_does_not_clear_newer_status() {
		let mut state = FormState::default();
		let first = state.begin();
		state.complete(first, SubmissionResult::failed());

		let second = state.begin();
		assert!(!state.expire(first));
		assert!(state.status.is_loading());

		state.complete(second, SubmissionResult::sent());
		assert!(!state.expire(first));
		assert!(matches!(state.status, FormStatus::Success(_)));
		assert!(state.expire(second));
	}

	#[test]
	fn superseded_result_is_dropped() {
		let mut state = FormState::default();
		let first = state.begin();
		let second = state.begin();
		assert!(!state.complete(first, SubmissionResult::failed()));
		assert!(state.status.is_loading());
		assert!(state.complete(second, SubmissionResult::failed()));
		assert_eq!(state.status.message(), DISPATCH_FAILED_MESSAGE);
	}
}
