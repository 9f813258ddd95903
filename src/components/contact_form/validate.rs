//! Field rules for contact submissions.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ContactError;
use super::types::{ContactSubmission, Field, FieldErrors, RawSubmission};

/// Minimum lengths, counted in UTF-16 code units like a browser string length.
const NAME_MIN: usize = 2;
const SUBJECT_MIN: usize = 5;
const MESSAGE_MIN: usize = 10;

/// Local part, `@`, dot-terminated domain labels, alphabetic TLD. ASCII only.
/// Leading dots and `..` are rejected separately since `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
	)
		.expect("email pattern is a valid regex")
});

/// Check an address against the accepted email grammar.
pub fn is_valid_email(email: &str) -> bool {
	!email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

fn min_len(value: &str, min: usize) -> bool {
	value.encode_utf16().count() >= min
}

/// Validate all four fields at once.
///
/// Every violated field gets an entry in the returned errors; satisfied fields
/// get none. On success the values are carried over unchanged.
pub fn validate(raw: &RawSubmission) -> Result<ContactSubmission, ContactError> {
	let mut errors = FieldErrors::new();
	let mut reject = |field: Field, message: &str| {
		errors.entry(field).or_default().push(message.to_string());
	};

	if !min_len(&raw.name, NAME_MIN) {
		reject(Field::Name, "Name must be at least 2 characters");
	}
	if !is_valid_email(&raw.email) {
		reject(Field::Email, "Please enter a valid email address");
	}
	if !min_len(&raw.subject, SUBJECT_MIN) {
		reject(Field::Subject, "Subject must be at least 5 characters");
	}
	if !min_len(&raw.message, MESSAGE_MIN) {
		reject(Field::Message, "Message must be at least 10 characters");
	}

	if !errors.is_empty() {
		return Err(ContactError::Validation(errors));
	}

	Ok(ContactSubmission {
		name: raw.name.clone(),
		email: raw.email.clone(),
		subject: raw.subject.clone(),
		message: raw.message.clone(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw(name: &str, email: &str, subject: &str, message: &str) -> RawSubmission {
		RawSubmission {
			name: name.into(),
			email: email.into(),
			subject: subject.into(),
			message: message.into(),
		}
	}

	fn field_errors(raw: &RawSubmission) -> FieldErrors {
		match validate(raw) {
			Err(ContactError::Validation(errors)) => errors,
			other => panic!("expected validation failure, got {other:?}"),
		}
	}

	#[test]
	fn valid_submission_passes_through_unchanged() {
		let input = raw(
			"Ada Lovelace",
			"ada@example.com",
			"Collaboration",
			"I would like to discuss a project.",
		);
		let submission = validate(&input).unwrap();
		assert_eq!(submission.name(), "Ada Lovelace");
		assert_eq!(submission.email(), "ada@example.com");
		assert_eq!(submission.subject(), "Collaboration");
		assert_eq!(submission.message(), "I would like to discuss a project.");
	}

	#[test]
	fn values_are_not_trimmed() {
		let input = raw("  Ada ", "ada@example.com", " Hello ", " a long message ");
		let submission = validate(&input).unwrap();
		assert_eq!(submission.name(), "  Ada ");
		assert_eq!(submission.subject(), " Hello ");
	}

	#[test]
	fn every_violated_field_is_reported() {
		let errors = field_errors(&raw("A", "bad", "Hi", "short"));
		assert_eq!(errors.len(), 4);
		assert_eq!(errors[&Field::Name], vec!["Name must be at least 2 characters"]);
		assert_eq!(errors[&Field::Email], vec!["Please enter a valid email address"]);
		assert_eq!(
			errors[&Field::Subject],
			vec!["Subject must be at least 5 characters"]
		);
		assert_eq!(
			errors[&Field::Message],
			vec!["Message must be at least 10 characters"]
		);
	}

	#[test]
	fn two_character_name_is_enough() {
		let errors = field_errors(&raw("Al", "bad", "Hi", "short"));
		assert!(!errors.contains_key(&Field::Name));
		assert_eq!(errors.len(), 3);
	}

	#[test]
	fn satisfied_fields_have_no_entry() {
		let errors = field_errors(&raw("Ada", "ada@example.com", "Hey", "Long enough message"));
		assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Subject]);
	}

	#[test]
	fn lengths_count_utf16_units_not_bytes() {
		// "é" is two bytes but one unit.
		let errors = field_errors(&raw("é", "ada@example.com", "Hello", "0123456789"));
		assert!(errors.contains_key(&Field::Name));
		assert!(validate(&raw("éé", "ada@example.com", "Hello", "0123456789")).is_ok());
	}

	#[test]
	fn astral_character_counts_as_two_units() {
		assert!(validate(&raw("\u{1F600}", "ada@example.com", "Hello", "0123456789")).is_ok());
		let errors = field_errors(&raw("Ada", "ada@example.com", "\u{1F600}\u{1F600}", "0123456789"));
		assert!(errors.contains_key(&Field::Subject));
		assert!(validate(&raw("Ada", "ada@example.com", "\u{1F600}\u{1F600}x", "0123456789")).is_ok());
	}

	#[test]
	fn empty_submission_fails_every_rule() {
		let errors = field_errors(&RawSubmission::default());
		assert_eq!(errors.keys().copied().collect::<Vec<_>>(), Field::ALL.to_vec());
	}

	#[test]
	fn email_grammar() {
		for ok in [
			"ada@example.com",
			"first.last@sub.example.org",
			"o'brien+tag@example.io",
			"UPPER@EXAMPLE.COM",
			"a_b-c@my-host.co.uk",
		] {
			assert!(is_valid_email(ok), "{ok} should be accepted");
		}
		for bad in [
			"bad",
			"@example.com",
			"ada@",
			"ada@example",
			".ada@example.com",
			"ada..l@example.com",
			"ada.@example.com",
			"ada@-example.com",
			"ada@example.c",
			"ada@example.123",
			"ada lovelace@example.com",
			"\u{212A}@example.com",
			"ada@example.co\u{17F}",
			"ad\u{e9}@example.com",
			"",
		] {
			assert!(!is_valid_email(bad), "{bad} should be rejected");
		}
	}
}
