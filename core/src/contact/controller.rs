//! Contact form submission

use super::form::ContactSubmission;
use super::notification::{Notice, NotificationCenter};
use crate::error::FormError;
use crate::view::{FormView, NoticeView};
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Binds the form to the notice area
pub struct ContactFormController<F: FormView, N: NoticeView> {
    form: F,
    notices: NotificationCenter<N>,
}

impl<F: FormView, N: NoticeView> ContactFormController<F, N> {
    pub fn new(form: F, notices: NotificationCenter<N>) -> Self {
        Self { form, notices }
    }

    /// Validate and accept the form. Failures show an error notice and keep
    /// the fields; success shows a thank-you notice and clears them.
    pub async fn submit(&mut self) -> Result<ContactSubmission, FormError> {
        let fields = self.form.read_form();

        if let Err(error) = fields.validate() {
            warn!(%error, "contact form rejected");
            self.notices.show(Notice::error(error.to_string())).await;
            return Err(error);
        }

        let submission = ContactSubmission::new(fields);
        info!(
            id = %submission.id,
            name = %submission.form.name,
            email = %submission.form.email,
            service = %submission.form.service,
            "contact form submitted"
        );

        self.notices.show(Notice::success(SUCCESS_MESSAGE)).await;
        self.form.clear_form();
        Ok(submission)
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn notices(&self) -> &NotificationCenter<N> {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use crate::contact::{ContactForm, NoticeKind};
    use crate::view::{MemoryFormView, MemoryNoticeView};
    use tokio_test::assert_ok;

    fn controller(form: ContactForm) -> ContactFormController<MemoryFormView, MemoryNoticeView> {
        ContactFormController::new(
            MemoryFormView::with_fields(form),
            NotificationCenter::new(&NotificationConfig::default(), MemoryNoticeView::new()),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_email_rejected() {
        let form = ContactForm::new("Ada", "not-an-email", "core", "Tell me more");
        let mut controller = controller(form.clone());

        let result = controller.submit().await;
        assert!(matches!(result, Err(FormError::InvalidEmail { .. })));

        let notice = controller.notices().current().await.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Please enter a valid email address");
        // Nothing cleared, no success notice
        assert_eq!(controller.form().fields, form);
        controller
            .notices()
            .inspect(|view| assert!(view.shown.iter().all(|n| n.kind == NoticeKind::Error)))
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_required_fields_rejected() {
        let mut controller = controller(ContactForm::new("", "", "", ""));
        assert!(controller.submit().await.is_err());

        let notice = controller.notices().current().await.unwrap();
        assert_eq!(notice.message, "Please fill in all required fields");
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_submission_clears_form() {
        let form = ContactForm::new("Ada", "ada@grid.co", "storm", "Outage response pilot");
        let mut controller = controller(form.clone());

        let submission = assert_ok!(controller.submit().await);
        assert_eq!(submission.form, form);

        let notice = controller.notices().current().await.unwrap();
        assert_eq!(notice, Notice::success(SUCCESS_MESSAGE));
        assert_eq!(controller.form().fields, ContactForm::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_fix() {
        let mut controller = controller(ContactForm::new("Ada", "ada", "", "Hi"));
        assert!(controller.submit().await.is_err());

        controller.form_mut().fields.email = "ada@grid.co".to_string();
        assert!(controller.submit().await.is_ok());
        controller
            .notices()
            .inspect(|view| assert_eq!(view.shown.len(), 2))
            .await;
    }
}
