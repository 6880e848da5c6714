//! Wire types for the paste service.
//!
//! Everything here is owned by the remote service; the client only decodes
//! what it receives and encodes what it sends. Field names follow the
//! service's camelCase JSON, and every field the service may omit has a
//! serde default so that partial responses still decode.

use crate::error::{PasteError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_CONTENT_LEN: usize = 1_000_000;
pub const MAX_LANGUAGE_LEN: usize = 50;
pub const MAX_AUTHOR_NAME_LEN: usize = 100;
pub const MAX_AUTHOR_EMAIL_LEN: usize = 200;
pub const MAX_PASSWORD_LEN: usize = 100;
/// One year, in minutes.
pub const MAX_EXPIRATION_MINUTES: u32 = 525_600;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Public => "Public",
            Visibility::Unlisted => "Unlisted",
            Visibility::Private => "Private",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Visibility {
    type Err = PasteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PUBLIC" => Ok(Visibility::Public),
            "UNLISTED" => Ok(Visibility::Unlisted),
            "PRIVATE" => Ok(Visibility::Private),
            _ => Err(PasteError::Validation(format!(
                "Unknown visibility '{}' (expected public, unlisted or private)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paste {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub password_protected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub view_count: u64,
}

/// Pagination envelope. Only `content` is required; the counters default to
/// zero when the service leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// A `[language, count]` pair, encoded by the service as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount(pub String, pub u64);

impl LanguageCount {
    pub fn language(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub total_pastes: u64,
    #[serde(default)]
    pub public_pastes: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub popular_languages: Vec<LanguageCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status == "UP"
    }
}

/// Optional fields accepted when creating a paste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PasteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn author_email(mut self, email: impl Into<String>) -> Self {
        self.author_email = Some(email.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn expires_in(mut self, minutes: u32) -> Self {
        self.expiration_minutes = Some(minutes);
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Body of `POST /api/pastes`: the required fields merged with the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaste {
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub options: PasteOptions,
}

impl NewPaste {
    pub fn new(title: impl Into<String>, content: impl Into<String>, options: PasteOptions) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            options,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PasteError::Validation("Title is required".into()));
        }
        check_len("Title", &self.title, MAX_TITLE_LEN)?;
        if self.content.trim().is_empty() {
            return Err(PasteError::Validation("Content is required".into()));
        }
        check_len("Content", &self.content, MAX_CONTENT_LEN)?;

        let opts = &self.options;
        if let Some(language) = &opts.language {
            check_len("Language", language, MAX_LANGUAGE_LEN)?;
        }
        if let Some(name) = &opts.author_name {
            check_len("Author name", name, MAX_AUTHOR_NAME_LEN)?;
        }
        if let Some(email) = &opts.author_email {
            check_len("Email", email, MAX_AUTHOR_EMAIL_LEN)?;
            if !looks_like_email(email) {
                return Err(PasteError::Validation(format!(
                    "Invalid email format: {}",
                    email
                )));
            }
        }
        if let Some(minutes) = opts.expiration_minutes {
            if minutes == 0 {
                return Err(PasteError::Validation(
                    "Expiration must be at least 1 minute".into(),
                ));
            }
            if minutes > MAX_EXPIRATION_MINUTES {
                return Err(PasteError::Validation(format!(
                    "Expiration must not exceed 1 year ({} minutes)",
                    MAX_EXPIRATION_MINUTES
                )));
            }
        }
        if let Some(password) = &opts.password {
            check_len("Password", password, MAX_PASSWORD_LEN)?;
        }
        Ok(())
    }
}

/// Partial update body for `PUT /api/pastes/{id}`. Unset fields are left
/// untouched by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl PasteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.language.is_none()
            && self.visibility.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(PasteError::Validation("Nothing to update".into()));
        }
        if let Some(title) = &self.title {
            check_len("Title", title, MAX_TITLE_LEN)?;
        }
        if let Some(content) = &self.content {
            check_len("Content", content, MAX_CONTENT_LEN)?;
        }
        if let Some(language) = &self.language {
            check_len("Language", language, MAX_LANGUAGE_LEN)?;
        }
        Ok(())
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(PasteError::Validation(format!(
            "{} must not exceed {} characters",
            field, max
        )));
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_paste_with_missing_optionals() {
        let json = r#"{
            "id": "abc",
            "title": "T",
            "content": "C",
            "visibility": "UNLISTED",
            "createdAt": "2024-03-01T10:15:30"
        }"#;
        let paste: Paste = serde_json::from_str(json).unwrap();
        assert_eq!(paste.visibility, Visibility::Unlisted);
        assert_eq!(paste.view_count, 0);
        assert!(!paste.password_protected);
        assert!(paste.language.is_none());
        assert!(paste.expires_at.is_none());
    }

    #[test]
    fn decodes_statistics_language_pairs() {
        let json = r#"{
            "totalPastes": 4,
            "publicPastes": 3,
            "totalViews": 12,
            "popularLanguages": [["python", 2], ["rust", 1]]
        }"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.popular_languages.len(), 2);
        assert_eq!(stats.popular_languages[0].language(), "python");
        assert_eq!(stats.popular_languages[0].count(), 2);
    }

    #[test]
    fn statistics_default_when_fields_missing() {
        let stats: Statistics = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn page_requires_only_content() {
        let page: Page<Paste> = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn new_paste_omits_unset_options() {
        let body = NewPaste::new(
            "T",
            "C",
            PasteOptions::new()
                .language("rust")
                .visibility(Visibility::Private)
                .expires_in(60),
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "T",
                "content": "C",
                "language": "rust",
                "visibility": "PRIVATE",
                "expirationMinutes": 60
            })
        );
    }

    #[test]
    fn update_serializes_only_changed_fields() {
        let value = serde_json::to_value(PasteUpdate::new().title("New")).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "New" }));
    }

    #[test]
    fn visibility_parses_case_insensitively() {
        assert_eq!("unlisted".parse::<Visibility>().unwrap(), Visibility::Unlisted);
        assert_eq!("PUBLIC".parse::<Visibility>().unwrap(), Visibility::Public);
        assert!("secret".parse::<Visibility>().is_err());
        assert_eq!(Visibility::Private.to_string(), "Private");
    }

    #[test]
    fn rejects_blank_title_and_content() {
        assert!(NewPaste::new("  ", "C", PasteOptions::new()).validate().is_err());
        assert!(NewPaste::new("T", "", PasteOptions::new()).validate().is_err());
        assert!(NewPaste::new("T", "C", PasteOptions::new()).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_expiration() {
        let zero = NewPaste::new("T", "C", PasteOptions::new().expires_in(0));
        let too_long = NewPaste::new(
            "T",
            "C",
            PasteOptions::new().expires_in(MAX_EXPIRATION_MINUTES + 1),
        );
        let max = NewPaste::new("T", "C", PasteOptions::new().expires_in(MAX_EXPIRATION_MINUTES));
        assert!(zero.validate().is_err());
        assert!(too_long.validate().is_err());
        assert!(max.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let bad = NewPaste::new("T", "C", PasteOptions::new().author_email("nobody"));
        let good = NewPaste::new("T", "C", PasteOptions::new().author_email("a@b.org"));
        assert!(bad.validate().is_err());
        assert!(good.validate().is_ok());
    }

    #[test]
    fn rejects_overlong_title() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(NewPaste::new(title.clone(), "C", PasteOptions::new())
            .validate()
            .is_err());
        assert!(PasteUpdate::new().title(title).validate().is_err());
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(PasteUpdate::new().validate().is_err());
    }
}
