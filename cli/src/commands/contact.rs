//! Contact form command

use crate::output::TerminalNoticeView;
use anyhow::Result;
use nexa_site_core::contact::{ContactForm, ContactFormController, NotificationCenter};
use nexa_site_core::view::MemoryFormView;
use nexa_site_core::SiteConfig;
use tracing::debug;

/// Submit the contact form with the given field values
pub async fn contact_command(form: ContactForm, config: SiteConfig) -> Result<()> {
    let notices = NotificationCenter::new(&config.notifications, TerminalNoticeView);
    let mut controller = ContactFormController::new(MemoryFormView::with_fields(form), notices);

    let submission = controller.submit().await?;
    debug!(
        "Submission {} at {}",
        submission.id,
        submission.submitted_at.to_rfc3339()
    );
    println!("{}", serde_json::to_string_pretty(&submission.form)?);

    Ok(())
}
