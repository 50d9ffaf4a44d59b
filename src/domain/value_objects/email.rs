use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use super::ValueObjectError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// 소문자로 정규화된 이메일 주소
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ValueObjectError::new("email", "이메일은 필수입니다"));
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(ValueObjectError::new("email", "유효하지 않은 이메일 형식입니다"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_trimmed_and_lowercased() {
        let email = Email::parse("  Maria.Silva@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "maria.silva@example.com");
        assert_eq!(email, Email::parse("maria.silva@example.com").unwrap());
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for raw in ["", "   ", "maria.example.com", "maria@example", "maria@", "@example.com", "ma ria@example.com"] {
            let error = Email::parse(raw).unwrap_err();
            assert_eq!(error.field, "email", "{raw}");
        }
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let ok: Email = serde_json::from_str(r#""JOAO@SNI.ORG""#).unwrap();
        assert_eq!(ok.to_string(), "joao@sni.org");

        assert!(serde_json::from_str::<Email>(r#""not-an-email""#).is_err());
    }
}
