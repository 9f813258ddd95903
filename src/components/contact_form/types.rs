//! Data structures flowing through the contact form.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A contact form field. Ordered the way the fields appear in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
	/// Sender name.
	Name,
	/// Reply address.
	Email,
	/// Subject line.
	Subject,
	/// Message body.
	Message,
}

impl Field {
	/// All fields in form order.
	pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

	/// The form control `name` attribute for this field.
	pub fn as_str(self) -> &'static str {
		match self {
			Field::Name => "name",
			Field::Email => "email",
			Field::Subject => "subject",
			Field::Message => "message",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Violated-rule messages keyed by field. Satisfied fields have no entry.
pub type FieldErrors = BTreeMap<Field, Vec<String>>;

/// Unvalidated values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSubmission {
	/// Value of the name control.
	pub name: String,
	/// Value of the email control.
	pub email: String,
	/// Value of the subject control.
	pub subject: String,
	/// Value of the message control.
	pub message: String,
}

impl RawSubmission {
	/// Build from a lookup of form control values. Missing controls read as empty.
	pub fn from_lookup(mut get: impl FnMut(&str) -> Option<String>) -> Self {
		let mut read = |field: Field| get(field.as_str()).unwrap_or_default();
		Self {
			name: read(Field::Name),
			email: read(Field::Email),
			subject: read(Field::Subject),
			message: read(Field::Message),
		}
	}
}

/// A submission that passed every field rule.
///
/// Only [`validate`](super::validate::validate) constructs one, so holding a
/// value means the contents are known-good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
	pub(super) name: String,
	pub(super) email: String,
	pub(super) subject: String,
	pub(super) message: String,
}

impl ContactSubmission {
	/// Sender name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Reply address.
	pub fn email(&self) -> &str {
		&self.email
	}

	/// Subject line.
	pub fn subject(&self) -> &str {
		&self.subject
	}

	/// Message body.
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Outcome of one submission, handed straight to the form view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
	/// Whether the message was accepted.
	pub success: bool,
	/// Text shown to the user.
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	/// Per-field messages, present only when validation failed.
	pub errors: Option<FieldErrors>,
}

/// Shown after a successful dispatch.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
/// Shown when one or more fields fail validation.
pub const INVALID_FORM_MESSAGE: &str = "Please check your form data and try again.";
/// Shown when the notification could not be sent.
pub const DISPATCH_FAILED_MESSAGE: &str =
	"Sorry, there was an error sending your message. Please try again later.";

impl SubmissionResult {
	/// Result for a delivered message.
	pub fn sent() -> Self {
		Self {
			success: true,
			message: THANK_YOU_MESSAGE.to_string(),
			errors: None,
		}
	}

	/// Result for a submission that broke field rules.
	pub fn invalid(errors: FieldErrors) -> Self {
		Self {
			success: false,
			message: INVALID_FORM_MESSAGE.to_string(),
			errors: Some(errors),
		}
	}

	/// Result for a valid submission that could not be delivered.
	pub fn failed() -> Self {
		Self {
			success: false,
			message: DISPATCH_FAILED_MESSAGE.to_string(),
			errors: None,
		}
	}
}
