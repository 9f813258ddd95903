//! Hands validated submissions to a notification sender.
//!
//! The sender is a trait so the simulated one shipped with the site can be
//! swapped for a real mail transport without touching the form.

use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, error, info};

use super::error::{ContactError, DispatchError};
use super::types::{ContactSubmission, RawSubmission, SubmissionResult};
use super::validate::validate;
use crate::content::ContactConfig;
use crate::timer::sleep;

/// A message ready for delivery to the site owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
	/// Address the notification goes to.
	pub recipient: String,
	/// Subject line.
	pub subject: String,
	/// Plain text body listing every field.
	pub body: String,
}

impl Notification {
	/// Format the owner-facing notification for a validated submission.
	pub fn compose(
		submission: &ContactSubmission,
		recipient: &str,
		site_name: &str,
		sent_at: DateTime<Local>,
	) -> Self {
		let body = format!(
			"New Contact Form Submission from Portfolio\n\
			 \n\
			 Name: {name}\n\
			 Email: {email}\n\
			 Subject: {subject}\n\
			 \n\
			 Message:\n\
			 {message}\n\
			 \n\
			 ---\n\
			 Sent from {site_name} Contact Form\n\
			 Time: {time}\n",
			name = submission.name(),
			email = submission.email(),
			subject = submission.subject(),
			message = submission.message(),
			time = sent_at.format("%Y-%m-%d %H:%M:%S"),
		);

		Self {
			recipient: recipient.to_string(),
			subject: format!("Portfolio Contact: {}", submission.subject()),
			body,
		}
	}
}

/// Something that can deliver a [`Notification`].
#[allow(
	async_fn_in_trait,
	reason = "senders run on the single-threaded browser executor, no Send bound needed"
)]
pub trait NotificationSender {
	/// Deliver one notification, failing on transport errors.
	async fn send(&self, notification: &Notification) -> Result<(), DispatchError>;
}

/// Logs the notification and waits a fixed delay instead of sending mail.
#[derive(Clone, Debug)]
pub struct SimulatedSender {
	/// How long `send` waits before succeeding.
	pub delay: Duration,
}

impl SimulatedSender {
	/// Sender that waits `delay` before succeeding.
	pub fn new(delay: Duration) -> Self {
		Self { delay }
	}
}

impl NotificationSender for SimulatedSender {
	async fn send(&self, notification: &Notification) -> Result<(), DispatchError> {
		info!(
			"portfolio: email would be sent to {}",
			notification.recipient
		);
		debug!("portfolio: email content:\n{}", notification.body);
		sleep(self.delay).await;
		Ok(())
	}
}

/// Validates submissions and forwards them to a sender.
pub struct ContactDispatcher<S> {
	sender: S,
	recipient: String,
	site_name: String,
}

impl ContactDispatcher<SimulatedSender> {
	/// Dispatcher wired to the simulated sender described by `config`.
	pub fn simulated(config: &ContactConfig, site_name: &str) -> Self {
		Self::new(
			SimulatedSender::new(Duration::from_millis(config.simulated_delay_ms)),
			config.recipient.clone(),
			site_name.to_string(),
		)
	}
}

impl<S: NotificationSender> ContactDispatcher<S> {
	/// Dispatcher delivering through `sender`.
	pub fn new(sender: S, recipient: String, site_name: String) -> Self {
		Self {
			sender,
			recipient,
			site_name,
		}
	}

	/// Run one submission end to end. Never fails: every error is folded into
	/// the returned result.
	pub async fn submit(&self, raw: &RawSubmission) -> SubmissionResult {
		match self.try_submit(raw).await {
			Ok(()) => SubmissionResult::sent(),
			Err(err) => {
				match &err {
					ContactError::Validation(errors) => {
						info!("portfolio: submission rejected, {} invalid field(s)", errors.len());
					}
					ContactError::Dispatch(e) => {
						error!("portfolio: error sending email: {}", e);
					}
				}
				err.into()
			}
		}
	}

	async fn try_submit(&self, raw: &RawSubmission) -> Result<(), ContactError> {
		let submission = validate(raw)?;
		let notification =
			Notification::compose(&submission, &self.recipient, &self.site_name, Local::now());
		self.sender.send(&notification).await?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use chrono::TimeZone;
	use futures::executor::block_on;

	use super::*;
	use crate::components::contact_form::types::{
		DISPATCH_FAILED_MESSAGE, Field, INVALID_FORM_MESSAGE, THANK_YOU_MESSAGE,
	};

	#[derive(Default)]
	struct RecordingSender {
		sent: RefCell<Vec<Notification>>,
	}

	impl NotificationSender for &RecordingSender {
		async fn send(&self, notification: &Notification) -> Result<(), DispatchError> {
			self.sent.borrow_mut().push(notification.clone());
			Ok(())
		}
	}

	struct FailingSender(DispatchError);

	impl NotificationSender for FailingSender {
		async fn send(&self, _: &Notification) -> Result<(), DispatchError> {
			Err(self.0.clone())
		}
	}

	fn ada() -> RawSubmission {
		RawSubmission {
			name: "Ada Lovelace".into(),
			email: "ada@example.com".into(),
			subject: "Collaboration".into(),
			message: "I would like to discuss a project.".into(),
		}
	}

	fn dispatcher<S: NotificationSender>(sender: S) -> ContactDispatcher<S> {
		ContactDispatcher::new(sender, "owner@example.com".into(), "Test Portfolio".into())
	}

	#[test]
	fn valid_submission_is_sent_and_thanked() {
		let recorder = RecordingSender::default();
		let result = block_on(dispatcher(&recorder).submit(&ada()));

		assert!(result.success);
		assert_eq!(result.message, THANK_YOU_MESSAGE);
		assert_eq!(result.errors, None);

		let sent = recorder.sent.borrow();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].recipient, "owner@example.com");
		assert_eq!(sent[0].subject, "Portfolio Contact: Collaboration");
		assert!(sent[0].body.contains("Name: Ada Lovelace"));
		assert!(sent[0].body.contains("I would like to discuss a project."));
	}

	#[test]
	fn invalid_submission_never_reaches_sender() {
		let recorder = RecordingSender::default();
		let raw = RawSubmission {
			email: "bad".into(),
			..ada()
		};
		let result = block_on(dispatcher(&recorder).submit(&raw));

		assert!(!result.success);
		assert_eq!(result.message, INVALID_FORM_MESSAGE);
		let errors = result.errors.unwrap();
		assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Email]);
		assert!(recorder.sent.borrow().is_empty());
	}

	#[test]
	fn sender_failure_becomes_generic_error() {
		for err in [
			DispatchError::Transport("connection refused".into()),
			DispatchError::Rejected { status: 503 },
		] {
			let result = block_on(dispatcher(FailingSender(err)).submit(&ada()));
			assert!(!result.success);
			assert_eq!(result.message, DISPATCH_FAILED_MESSAGE);
			assert_eq!(result.errors, None);
		}
	}

	#[test]
	fn rejected_send_keeps_status_in_error() {
		let sender = FailingSender(DispatchError::Rejected { status: 429 });
		let err = block_on(dispatcher(sender).try_submit(&ada())).unwrap_err();
		assert_eq!(
			err,
			ContactError::Dispatch(DispatchError::Rejected { status: 429 })
		);
		assert_eq!(
			err.to_string(),
			"dispatch failed: notification rejected with status 429"
		);
	}

	#[test]
	fn simulated_sender_always_succeeds() {
		let config = ContactConfig {
			simulated_delay_ms: 0,
			..ContactConfig::default()
		};
		let result = block_on(ContactDispatcher::simulated(&config, "Test").submit(&ada()));
		assert!(result.success);
	}

	#[test]
	fn notification_body_lists_every_field_and_time() {
		let submission = validate(&ada()).unwrap();
		let sent_at = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
		let n = Notification::compose(&submission, "me@example.com", "Ada's Site", sent_at);

		assert!(n.body.starts_with("New Contact Form Submission from Portfolio\n"));
		assert!(n.body.contains("Email: ada@example.com\n"));
		assert!(n.body.contains("Subject: Collaboration\n"));
		assert!(n.body.contains("Message:\nI would like to discuss a project.\n"));
		assert!(n.body.contains("Sent from Ada's Site Contact Form\n"));
		assert!(n.body.ends_with("Time: 2025-03-14 09:26:53\n"));
	}
}
