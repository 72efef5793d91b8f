use aws_sdk_sesv2::types::{Body as EmailBody, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;

/// A fully rendered inquiry email: HTML and plain-text bodies, reply-to
/// pointed at the submitter.
#[derive(Debug, Clone)]
pub struct ContactEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

pub async fn send_contact_email(client: &SesClient, email: &ContactEmail) -> Result<(), String> {
    let subject = Content::builder()
        .data(email.subject.clone())
        .charset("UTF-8")
        .build()
        .map_err(|e| format!("Failed to build email subject: {}", e))?;

    let html = Content::builder()
        .data(email.html.clone())
        .charset("UTF-8")
        .build()
        .map_err(|e| format!("Failed to build email html body: {}", e))?;

    let text = Content::builder()
        .data(email.text.clone())
        .charset("UTF-8")
        .build()
        .map_err(|e| format!("Failed to build email text body: {}", e))?;

    let message = Message::builder()
        .subject(subject)
        .body(EmailBody::builder().html(html).text(text).build())
        .build();

    client
        .send_email()
        .from_email_address(email.from.clone())
        .destination(
            Destination::builder()
                .to_addresses(email.to.clone())
                .build(),
        )
        .reply_to_addresses(email.reply_to.clone())
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await
        .map_err(|e| format!("SES send_email error: {}", e))?;

    Ok(())
}
