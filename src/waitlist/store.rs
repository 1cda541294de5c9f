use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::utils::referral::generate_referral_code;

/// Channel tag stamped on every signup coming from this site.
pub const SIGNUP_SOURCE: &str = "website";

/// Postgres unique-violation code; the store reports it when the email
/// already has a row on the waitlist.
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// The flat record inserted into the waitlist collection. Built at
/// submit time, sent once, then discarded — nothing is cached locally.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub source: String,
    pub referral_code: String,
    pub referred_by: Option<String>,
    pub user_agent: String,
}

impl SignupRequest {
    /// Builds the payload from raw form values: email trimmed and
    /// lowercased, name trimmed, blank optional fields turned into
    /// NULLs, and a fresh referral code generated for this attempt.
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        country: &str,
        referred_by: Option<String>,
        user_agent: String,
    ) -> Self {
        let name = name.trim().to_string();
        Self {
            email: email.trim().to_lowercase(),
            referral_code: generate_referral_code(&name),
            name,
            phone: none_if_blank(phone),
            country: none_if_blank(country),
            source: SIGNUP_SOURCE.to_string(),
            referred_by,
            user_agent,
        }
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Row echo the store returns for a successful insert. Only loosely
/// typed — the page logs it and moves on.
#[derive(Debug, Clone, Deserialize)]
pub struct WaitlistRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub referral_code: Option<String>,
}

/// Failure reported by the waitlist store: remote errors carry a
/// machine-readable code, transport failures don't.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreError {
    pub code: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code.as_deref() == Some(UNIQUE_VIOLATION_CODE)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// The one capability the submission flow needs from the remote store.
/// Keeping it behind a trait lets the flow run against a test double
/// instead of a live Supabase project.
#[async_trait(?Send)]
pub trait WaitlistStore {
    async fn insert(&self, signup: &SignupRequest) -> Result<Vec<WaitlistRecord>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_the_form_fields() {
        let signup = SignupRequest::new(
            "  Amina  ",
            " Amina@Example.COM ",
            "   ",
            "\t",
            Some("AMIN-7GQ2".to_string()),
            "test-agent".to_string(),
        );
        assert_eq!(signup.email, "amina@example.com");
        assert_eq!(signup.name, "Amina");
        assert_eq!(signup.phone, None);
        assert_eq!(signup.country, None);
        assert_eq!(signup.source, SIGNUP_SOURCE);
        assert_eq!(signup.referred_by.as_deref(), Some("AMIN-7GQ2"));
        assert!(signup.referral_code.starts_with("AMIN-"));
    }

    #[test]
    fn keeps_non_blank_optionals() {
        let signup = SignupRequest::new(
            "Amina",
            "amina@example.com",
            " +44 20 1234 5678 ",
            " United Kingdom ",
            None,
            "test-agent".to_string(),
        );
        assert_eq!(signup.phone.as_deref(), Some("+44 20 1234 5678"));
        assert_eq!(signup.country.as_deref(), Some("United Kingdom"));
    }

    #[test]
    fn generates_a_fresh_code_per_attempt() {
        let a = SignupRequest::new("Amina", "amina@example.com", "", "", None, "ua".to_string());
        let b = SignupRequest::new("Amina", "amina@example.com", "", "", None, "ua".to_string());
        assert_ne!(a.referral_code, b.referral_code);
    }

    #[test]
    fn serializes_blank_optionals_as_null() {
        let signup = SignupRequest::new("Amina", "amina@example.com", "", "", None, "ua".to_string());
        let json = serde_json::to_value(&signup).expect("serializable payload");
        assert_eq!(json["phone"], serde_json::Value::Null);
        assert_eq!(json["referred_by"], serde_json::Value::Null);
        assert_eq!(json["source"], "website");
    }

    #[test]
    fn detects_unique_violations_by_code() {
        let duplicate = StoreError {
            code: Some(UNIQUE_VIOLATION_CODE.to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        };
        assert!(duplicate.is_unique_violation());
        assert!(!StoreError::transport("connection refused").is_unique_violation());
    }
}
