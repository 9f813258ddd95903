//! Contact form: validation, dispatch and status display.
//!
//! The flow for one submission:
//! - the form's four fields are read into a [`RawSubmission`]
//! - [`validate`] checks every field rule at once
//! - a valid submission is formatted into a [`Notification`] and passed to a
//!   [`NotificationSender`]
//! - every outcome, including failures, comes back as a [`SubmissionResult`]
//! - [`FormState`] drives idle → loading → success/error → idle in the view

mod component;
pub mod dispatch;
pub mod error;
pub mod status;
pub mod types;
pub mod validate;

pub use component::ContactForm;
pub use dispatch::{ContactDispatcher, Notification, NotificationSender, SimulatedSender};
pub use error::{ContactError, DispatchError};
pub use status::{FormState, FormStatus};
pub use types::{ContactSubmission, Field, FieldErrors, RawSubmission, SubmissionResult};
pub use validate::validate;
