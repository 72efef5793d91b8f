use std::collections::HashMap;

use aws_sdk_sesv2::Client as SesClient;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::email::{send_contact_email, ContactEmail};

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub guests: GuestField,
    #[serde(default)]
    pub message: String,
}

/// The form posts guests as either a number or a string (possibly blank).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GuestField {
    Count(f64),
    Text(String),
}

impl Default for GuestField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub guests: Option<u32>,
    pub message: String,
}

fn valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn validate_guests(field: &GuestField) -> Result<Option<u32>, String> {
    let count = match field {
        GuestField::Count(n) => *n,
        GuestField::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<f64>() {
                Ok(n) => n,
                Err(_) => return Err("Guests must be a number".to_string()),
            }
        }
    };

    if count.fract() != 0.0 {
        return Err("Guests must be a whole number".to_string());
    }
    if !(1.0..=200.0).contains(&count) {
        return Err("Guests must be between 1 and 200".to_string());
    }

    Ok(Some(count as u32))
}

/// Validate and normalize a raw submission. Failures come back as a
/// field-keyed error map for the 422 response.
pub fn validate(request: &ContactRequest) -> Result<ContactSubmission, HashMap<String, String>> {
    let mut errors: HashMap<String, String> = HashMap::new();

    let name = request.name.trim().to_string();
    if name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    } else if name.chars().count() > 120 {
        errors.insert("name".to_string(), "Name must be at most 120 characters".to_string());
    }

    let email = request.email.trim().to_string();
    if !valid_email(&email) {
        errors.insert("email".to_string(), "A valid email address is required".to_string());
    } else if email.chars().count() > 160 {
        errors.insert("email".to_string(), "Email must be at most 160 characters".to_string());
    }

    let phone = request.phone.trim().to_string();
    if phone.chars().count() > 40 {
        errors.insert("phone".to_string(), "Phone must be at most 40 characters".to_string());
    }

    let date = request.date.trim().to_string();
    if date.chars().count() > 60 {
        errors.insert("date".to_string(), "Date must be at most 60 characters".to_string());
    }

    let guests = match validate_guests(&request.guests) {
        Ok(guests) => guests,
        Err(message) => {
            errors.insert("guests".to_string(), message);
            None
        }
    };

    let message = request.message.trim().to_string();
    if message.is_empty() {
        errors.insert("message".to_string(), "Message is required".to_string());
    } else if message.chars().count() > 2000 {
        errors.insert(
            "message".to_string(),
            "Message must be at most 2000 characters".to_string(),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name,
        email,
        phone,
        date,
        guests,
        message,
    })
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn guests_formatted(submission: &ContactSubmission) -> String {
    match submission.guests {
        Some(1) => "1 guest".to_string(),
        Some(n) => format!("{} guests", n),
        None => String::new(),
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn build_html(submission: &ContactSubmission) -> String {
    let guests = guests_formatted(submission);
    let rows = [
        ("Name", submission.name.as_str()),
        ("Email", submission.email.as_str()),
        ("Phone", or_dash(&submission.phone)),
        ("Desired date", or_dash(&submission.date)),
        ("Guests", or_dash(&guests)),
    ];

    let mut body = String::from(
        "<table style=\"border-collapse:collapse;width:100%;max-width:520px;font-family:Arial,sans-serif;\"><tbody>",
    );
    for (label, value) in rows {
        body.push_str(&format!(
            "<tr><td style=\"padding:4px 8px;font-weight:600;\">{}</td><td style=\"padding:4px 8px;\">{}</td></tr>",
            escape_html(label),
            escape_html(value),
        ));
    }
    body.push_str(&format!(
        "<tr><td style=\"padding:4px 8px;font-weight:600;vertical-align:top;\">Message</td><td style=\"padding:4px 8px;white-space:pre-wrap;\">{}</td></tr>",
        escape_html(&submission.message),
    ));
    body.push_str("</tbody></table>");
    body
}

fn build_text(submission: &ContactSubmission) -> String {
    let guests = guests_formatted(submission);
    [
        format!("Name: {}", submission.name),
        format!("Email: {}", submission.email),
        format!("Phone: {}", or_dash(&submission.phone)),
        format!("Date: {}", or_dash(&submission.date)),
        format!("Guests: {}", or_dash(&guests)),
        String::new(),
        "Message:".to_string(),
        submission.message.clone(),
    ]
    .join("\n")
}

/// Handle contact form submission
pub async fn handle_contact(
    ses_client: &SesClient,
    config: &AppConfig,
    body: &Body,
) -> Result<Response<Body>, Error> {
    let body_str = match body {
        Body::Text(text) => text,
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "",
    };

    tracing::info!("Contact form submission received");

    let contact_request: ContactRequest = match serde_json::from_str(body_str) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!("Failed to parse contact request: {}", e);
            return Ok(Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(
                    serde_json::json!({
                        "error": "InvalidRequest",
                        "message": format!("Invalid request body: {}", e),
                    })
                    .to_string()
                    .into(),
                )
                .map_err(Box::new)?);
        }
    };

    let submission = match validate(&contact_request) {
        Ok(submission) => submission,
        Err(errors) => {
            return Ok(Response::builder()
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(
                    serde_json::json!({"success": false, "errors": errors})
                        .to_string()
                        .into(),
                )
                .map_err(Box::new)?);
        }
    };

    let submission_id = uuid::Uuid::new_v4().to_string();

    let Some(from) = config.contact_from_email.as_deref() else {
        tracing::warn!(
            "CONTACT_FROM_EMAIL not configured; inquiry {} accepted but not delivered",
            submission_id
        );
        return Ok(Response::builder()
            .status(StatusCode::ACCEPTED)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(
                serde_json::json!({
                    "success": true,
                    "delivered": false,
                    "submissionId": submission_id,
                    "message": "Your message was received but email delivery is not configured.",
                })
                .to_string()
                .into(),
            )
            .map_err(Box::new)?);
    };

    let to = config.contact_to_email.as_deref().unwrap_or(from);
    let email = ContactEmail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: submission.email.clone(),
        subject: format!("New charter inquiry: {}", submission.name),
        html: build_html(&submission),
        text: build_text(&submission),
    };

    match send_contact_email(ses_client, &email).await {
        Ok(_) => {
            tracing::info!(
                "Contact email sent for inquiry {} from: {}",
                submission_id,
                submission.email
            );
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(
                    serde_json::json!({
                        "success": true,
                        "delivered": true,
                        "submissionId": submission_id,
                    })
                    .to_string()
                    .into(),
                )
                .map_err(Box::new)?)
        }
        Err(e) => {
            tracing::error!("Failed to send contact email for inquiry {}: {}", submission_id, e);
            Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(
                    serde_json::json!({
                        "success": false,
                        "error": "Unable to send your message right now. Please try again later.",
                    })
                    .to_string()
                    .into(),
                )
                .map_err(Box::new)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ContactRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn valid_submission_passes() {
        let req = request(
            r#"{"name":"Ana","email":"ana@example.com","phone":"+1 305 555 0100",
                "date":"2026-09-01","guests":"12","message":"Sunset charter for twelve."}"#,
        );
        let submission = validate(&req).unwrap();
        assert_eq!(submission.guests, Some(12));
        assert_eq!(submission.name, "Ana");
    }

    #[test]
    fn zero_guests_fails_but_blank_is_optional() {
        let zero = request(r#"{"name":"Ana","email":"ana@example.com","guests":0,"message":"hi"}"#);
        let errors = validate(&zero).unwrap_err();
        assert!(errors.contains_key("guests"));

        let blank = request(r#"{"name":"Ana","email":"ana@example.com","guests":"","message":"hi"}"#);
        let submission = validate(&blank).unwrap();
        assert_eq!(submission.guests, None);
    }

    #[test]
    fn missing_required_fields_are_keyed() {
        let req = request(r#"{"email":"not-an-email","message":""}"#);
        let errors = validate(&req).unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("message"));
        assert!(!errors.contains_key("phone"));
    }

    #[test]
    fn overlong_fields_fail() {
        let req = request(&format!(
            r#"{{"name":"Ana","email":"ana@example.com","message":"{}"}}"#,
            "x".repeat(2001)
        ));
        let errors = validate(&req).unwrap_err();
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn non_numeric_guests_fails() {
        let req = request(
            r#"{"name":"Ana","email":"ana@example.com","guests":"a dozen","message":"hi"}"#,
        );
        assert!(validate(&req).unwrap_err().contains_key("guests"));
    }

    #[test]
    fn fields_are_trimmed() {
        let req = request(
            r#"{"name":"  Ana  ","email":" ana@example.com ","message":" hello "}"#,
        );
        let submission = validate(&req).unwrap();
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.message, "hello");
    }

    #[test]
    fn bodies_escape_user_input() {
        let submission = ContactSubmission {
            name: "<script>alert(1)</script>".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            date: String::new(),
            guests: Some(2),
            message: "a & b".to_string(),
        };

        let html = build_html(&submission);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));

        let text = build_text(&submission);
        assert!(text.contains("Guests: 2 guests"));
        assert!(text.contains("Phone: -"));
    }
}
