//! Error types for the contact submission flow.

use thiserror::Error;

use super::types::{FieldErrors, SubmissionResult};

/// Failure reported by a notification sender.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
	/// The transport could not deliver the notification.
	#[error("transport failure: {0}")]
	Transport(String),

	/// The remote service answered but refused the notification.
	#[error("notification rejected with status {status}")]
	Rejected {
		/// Status code the service answered with.
		status: u16,
	},
}

/// Anything that stops a submission from going through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
	/// One or more fields broke their rule.
	#[error("{} field(s) failed validation", .0.len())]
	Validation(FieldErrors),

	/// The validated message could not be handed off.
	#[error("dispatch failed: {0}")]
	Dispatch(#[from] DispatchError),
}

impl From<ContactError> for SubmissionResult {
	fn from(err: ContactError) -> Self {
		match err {
			ContactError::Validation(errors) => SubmissionResult::invalid(errors),
			ContactError::Dispatch(_) => SubmissionResult::failed(),
		}
	}
}
