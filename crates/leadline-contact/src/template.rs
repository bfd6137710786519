//! Notification email rendering
//!
//! Handlebars escapes every interpolated field by default, which is what
//! keeps visitor-controlled content from injecting markup into the email.
//! The message body is escaped first and then gets its newlines turned into
//! `<br>`, so it is the only triple-stash interpolation in the template.

use handlebars::{html_escape, Handlebars};
use serde_json::json;

use crate::error::Result;
use crate::mailer::OutboundEmail;
use crate::submission::ContactSubmission;

const EMAIL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
      .container { max-width: 600px; margin: 0 auto; padding: 20px; }
      .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }
      .content { background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px; }
      .field { margin-bottom: 20px; padding: 15px; background: white; border-radius: 8px; border-left: 4px solid #667eea; }
      .label { font-weight: bold; color: #667eea; margin-bottom: 5px; }
      .value { color: #4b5563; }
      .footer { text-align: center; margin-top: 30px; color: #6b7280; font-size: 14px; }
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1>New Contact Form Submission</h1>
        <p>SHADOW MARKET Website</p>
      </div>

      <div class="content">
        <div class="field">
          <div class="label">Name</div>
          <div class="value">{{name}}</div>
        </div>

        <div class="field">
          <div class="label">Email</div>
          <div class="value"><a href="mailto:{{email}}">{{email}}</a></div>
        </div>

        {{#if phone}}
        <div class="field">
          <div class="label">Phone</div>
          <div class="value"><a href="tel:{{phone}}">{{phone}}</a></div>
        </div>
        {{/if}}

        {{#if company}}
        <div class="field">
          <div class="label">Company</div>
          <div class="value">{{company}}</div>
        </div>
        {{/if}}

        <div class="field">
          <div class="label">Service Interested In</div>
          <div class="value">{{service}}</div>
        </div>

        {{#if budget}}
        <div class="field">
          <div class="label">Budget Range</div>
          <div class="value">{{budget}}</div>
        </div>
        {{/if}}

        <div class="field">
          <div class="label">Message</div>
          <div class="value">{{{message_html}}}</div>
        </div>

        <div class="footer">
          <p>Submitted at: {{submitted_at}}</p>
          <p>Respond within 24 hours for best results!</p>
        </div>
      </div>
    </div>
  </body>
</html>
"#;

/// Subject line for the notification
pub fn subject_line(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form: {} - {}",
        submission.service.as_str(),
        submission.name
    )
}

/// Render the notification HTML for a validated submission
pub fn render_email(submission: &ContactSubmission) -> Result<String> {
    let message_html = html_escape(&submission.message).replace('\n', "<br>");

    let handlebars = Handlebars::new();
    let html = handlebars.render_template(
        EMAIL_TEMPLATE,
        &json!({
            "name": submission.name,
            "email": submission.email,
            "phone": submission.phone,
            "company": submission.company,
            "service": submission.service.as_str(),
            "budget": submission.budget.map(|b| b.as_str()),
            "message_html": message_html,
            "submitted_at": chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }),
    )?;
    Ok(html)
}

/// Build the full outbound notification email
pub fn notification_email(
    from: &str,
    to: &str,
    submission: &ContactSubmission,
) -> Result<OutboundEmail> {
    Ok(OutboundEmail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: Some(submission.email.clone()),
        subject: subject_line(submission),
        html: render_email(submission)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{Budget, ServiceKind};

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Priya S.".to_string(),
            email: "priya@example.com".to_string(),
            phone: Some("+91 44 1234 5678".to_string()),
            company: None,
            service: ServiceKind::WebDevelopment,
            message: "First line\nSecond line".to_string(),
            budget: Some(Budget::OneToFiveLakh),
        }
    }

    #[test]
    fn test_subject_line() {
        assert_eq!(
            subject_line(&submission()),
            "New Contact Form: web-development - Priya S."
        );
    }

    #[test]
    fn test_render_includes_fields() {
        let html = render_email(&submission()).unwrap();
        assert!(html.contains("Priya S."));
        assert!(html.contains("mailto:priya@example.com"));
        assert!(html.contains("tel:"));
        assert!(html.contains("web-development"));
        assert!(html.contains("1-5lakh"));
    }

    #[test]
    fn test_optional_blocks_omitted() {
        let mut sub = submission();
        sub.phone = None;
        sub.budget = None;
        let html = render_email(&sub).unwrap();
        assert!(!html.contains("Phone"));
        assert!(!html.contains("Budget Range"));
    }

    #[test]
    fn test_message_newlines_become_breaks() {
        let html = render_email(&submission()).unwrap();
        assert!(html.contains("First line<br>Second line"));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let mut sub = submission();
        sub.name = "<script>alert(1)</script>".to_string();
        sub.message = "hello <b>there</b>\nbye".to_string();
        let html = render_email(&sub).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>there</b>"));
        assert!(html.contains("&lt;b&gt;there&lt;/b&gt;<br>bye"));
    }

    #[test]
    fn test_reply_to_is_visitor_address() {
        let email = notification_email("Site <noreply@x.ai>", "sales@x.ai", &submission()).unwrap();
        assert_eq!(email.reply_to.as_deref(), Some("priya@example.com"));
        assert_eq!(email.to, "sales@x.ai");
    }
}
