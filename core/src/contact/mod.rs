//! Contact form and on-screen notices

pub mod controller;
pub mod form;
pub mod notification;

pub use controller::{ContactFormController, SUCCESS_MESSAGE};
pub use form::{is_valid_email, ContactForm, ContactSubmission};
pub use notification::{Notice, NoticeKind, NotificationCenter};
