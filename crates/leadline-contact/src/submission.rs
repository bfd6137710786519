//! Contact submission validation
//!
//! The inbound DTO keeps every field as a raw string so a malformed enum
//! value produces a field-level error rather than a deserialization
//! failure. Validation collects all violations before reporting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[\d\s()\-]+$").expect("phone regex is valid"));

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field name
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Service the visitor is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    DigitalMarketing,
    AiDevelopment,
    WebDevelopment,
    MobileApp,
    SaasPlatform,
    AiChatbot,
    MarketingAutomation,
    Other,
}

impl ServiceKind {
    /// Parse the kebab-case wire value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "digital-marketing" => Some(Self::DigitalMarketing),
            "ai-development" => Some(Self::AiDevelopment),
            "web-development" => Some(Self::WebDevelopment),
            "mobile-app" => Some(Self::MobileApp),
            "saas-platform" => Some(Self::SaasPlatform),
            "ai-chatbot" => Some(Self::AiChatbot),
            "marketing-automation" => Some(Self::MarketingAutomation),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Kebab-case wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitalMarketing => "digital-marketing",
            Self::AiDevelopment => "ai-development",
            Self::WebDevelopment => "web-development",
            Self::MobileApp => "mobile-app",
            Self::SaasPlatform => "saas-platform",
            Self::AiChatbot => "ai-chatbot",
            Self::MarketingAutomation => "marketing-automation",
            Self::Other => "other",
        }
    }
}

/// Project budget range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under-1lakh")]
    Under1Lakh,
    #[serde(rename = "1-5lakh")]
    OneToFiveLakh,
    #[serde(rename = "5-10lakh")]
    FiveToTenLakh,
    #[serde(rename = "10lakh-plus")]
    TenLakhPlus,
    #[serde(rename = "not-decided")]
    NotDecided,
}

impl Budget {
    /// Parse the wire value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "under-1lakh" => Some(Self::Under1Lakh),
            "1-5lakh" => Some(Self::OneToFiveLakh),
            "5-10lakh" => Some(Self::FiveToTenLakh),
            "10lakh-plus" => Some(Self::TenLakhPlus),
            "not-decided" => Some(Self::NotDecided),
            _ => None,
        }
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under1Lakh => "under-1lakh",
            Self::OneToFiveLakh => "1-5lakh",
            Self::FiveToTenLakh => "5-10lakh",
            Self::TenLakhPlus => "10lakh-plus",
            Self::NotDecided => "not-decided",
        }
    }
}

/// Raw inbound contact-form payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub budget: Option<String>,
    /// Anti-spam field; humans never fill it
    #[serde(default)]
    pub honeypot: Option<String>,
}

/// A validated contact submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: ServiceKind,
    pub message: String,
    pub budget: Option<Budget>,
}

impl ContactRequest {
    /// Validate every constraint, collecting all field errors
    pub fn validate(&self) -> std::result::Result<ContactSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name_len = self.name.chars().count();
        if name_len < 2 {
            errors.push(FieldError::new("name", "Name must be at least 2 characters"));
        } else if name_len > 100 {
            errors.push(FieldError::new("name", "Name must be at most 100 characters"));
        }

        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Invalid email address"));
        }

        if let Some(phone) = self.phone.as_deref() {
            if !phone.is_empty() && !PHONE_RE.is_match(phone) {
                errors.push(FieldError::new("phone", "Invalid phone number"));
            }
        }

        if let Some(company) = self.company.as_deref() {
            if company.chars().count() > 100 {
                errors.push(FieldError::new(
                    "company",
                    "Company must be at most 100 characters",
                ));
            }
        }

        let service = match ServiceKind::parse(&self.service) {
            Some(service) => Some(service),
            None => {
                errors.push(FieldError::new("service", "Please select a service"));
                None
            }
        };

        let message_len = self.message.chars().count();
        if message_len < 10 {
            errors.push(FieldError::new(
                "message",
                "Message must be at least 10 characters",
            ));
        } else if message_len > 1000 {
            errors.push(FieldError::new(
                "message",
                "Message must be at most 1000 characters",
            ));
        }

        let budget = match self.budget.as_deref() {
            None | Some("") => None,
            Some(raw) => match Budget::parse(raw) {
                Some(budget) => Some(budget),
                None => {
                    errors.push(FieldError::new("budget", "Invalid budget range"));
                    None
                }
            },
        };

        if let Some(honeypot) = self.honeypot.as_deref() {
            if !honeypot.is_empty() {
                errors.push(FieldError::new("honeypot", "Invalid submission"));
            }
        }

        match service {
            Some(service) if errors.is_empty() => Ok(ContactSubmission {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone().filter(|p| !p.is_empty()),
                company: self.company.clone().filter(|c| !c.is_empty()),
                service,
                message: self.message.clone(),
                budget,
            }),
            _ => Err(errors),
        }
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && domain.len() >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            service: "digital-marketing".to_string(),
            message: "I need help".to_string(),
            ..Default::default()
        }
    }

    fn error_fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_minimal_valid_request() {
        let submission = valid_request().validate().unwrap();
        assert_eq!(submission.service, ServiceKind::DigitalMarketing);
        assert_eq!(submission.name, "Al");
        assert!(submission.budget.is_none());
    }

    #[test]
    fn test_name_boundary() {
        // Exactly 2 characters passes
        assert!(valid_request().validate().is_ok());

        let mut request = valid_request();
        request.name = "A".to_string();
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["name"]);
    }

    #[test]
    fn test_message_boundary() {
        let mut request = valid_request();
        request.message = "0123456789".to_string(); // exactly 10
        assert!(request.validate().is_ok());

        request.message = "012345678".to_string(); // 9
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["message"]);

        request.message = "x".repeat(1000);
        assert!(request.validate().is_ok());

        request.message = "x".repeat(1001);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_message_listed_with_valid_boundary_name() {
        // "Al" is exactly 2 chars and valid; only the message is cited
        let request = ContactRequest {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            service: "seo".to_string(),
            message: "short".to_string(),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["service", "message"]);
    }

    #[test]
    fn test_multiple_violations_all_collected() {
        let request = ContactRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            service: "".to_string(),
            message: "hi".to_string(),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            error_fields(&errors),
            vec!["name", "email", "service", "message"]
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user name@b.com"));
    }

    #[test]
    fn test_phone_validation() {
        let mut request = valid_request();
        request.phone = Some("+91 (44) 123-4567".to_string());
        assert!(request.validate().is_ok());

        request.phone = Some("call me".to_string());
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["phone"]);

        // Absent and empty both pass
        request.phone = None;
        assert!(request.validate().is_ok());
        request.phone = Some(String::new());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_service_rejected() {
        let mut request = valid_request();
        request.service = "seo".to_string();
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["service"]);
    }

    #[test]
    fn test_budget_parsing() {
        let mut request = valid_request();
        request.budget = Some("1-5lakh".to_string());
        let submission = request.validate().unwrap();
        assert_eq!(submission.budget, Some(Budget::OneToFiveLakh));

        request.budget = Some("millions".to_string());
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["budget"]);
    }

    #[test]
    fn test_honeypot_rejects_bots() {
        let mut request = valid_request();
        request.honeypot = Some("gotcha".to_string());
        let errors = request.validate().unwrap_err();
        assert_eq!(error_fields(&errors), vec!["honeypot"]);

        request.honeypot = Some(String::new());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_service_round_trip() {
        for raw in [
            "digital-marketing",
            "ai-development",
            "web-development",
            "mobile-app",
            "saas-platform",
            "ai-chatbot",
            "marketing-automation",
            "other",
        ] {
            let service = ServiceKind::parse(raw).unwrap();
            assert_eq!(service.as_str(), raw);
        }
    }
}
