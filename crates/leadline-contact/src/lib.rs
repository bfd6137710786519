//! Leadline Contact Pipeline
//!
//! Validation and email notification for inbound contact-form submissions.
//! Invalid payloads are rejected with field-level detail; valid ones are
//! rendered into an HTML notification and relayed through the Resend API.
//! When no provider credential is configured the pipeline degrades to
//! log-and-succeed so a misconfigured mailbox never loses a lead.

pub mod error;
pub mod mailer;
pub mod submission;
pub mod template;

pub use error::{ContactError, Result};
pub use mailer::{Mailer, OutboundEmail, ResendMailer, SendReceipt};
pub use submission::{Budget, ContactRequest, ContactSubmission, FieldError, ServiceKind};
pub use template::{notification_email, render_email, subject_line};
