// ABOUTME: Serde data models for accounts, config, and publishing API payloads
// ABOUTME: Tolerant parsing with optional fields and defaulted collections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub publication_url: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub sid: String,
    #[serde(default)]
    pub substack_sid: String,
    #[serde(default)]
    pub substack_lli: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStore {
    #[serde(default)]
    pub active: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
}


/// Persisted user defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub send_email: bool,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub output_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishOptions {
    #[serde(rename = "send_to_everyone")]
    pub send_email: bool,
    pub audience: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Byline {
    pub id: u64,
}

/// Body of `POST /drafts/`. `draft_body` holds the serialized document as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    #[serde(rename = "draft_title", skip_serializing_if = "String::is_empty", default)]
    pub title: String,
    #[serde(rename = "draft_subtitle", skip_serializing_if = "String::is_empty", default)]
    pub subtitle: String,
    pub draft_body: String,
    #[serde(default)]
    pub draft_bylines: Vec<Byline>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub audience: String,
    #[serde(rename = "draft_section_id", skip_serializing_if = "String::is_empty", default)]
    pub section: String,
    #[serde(default)]
    pub section_chosen: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftResponse {
    pub id: u64,
    #[serde(rename = "draft_title", default)]
    pub title: Option<String>,
    #[serde(rename = "draft_subtitle", default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(rename = "draft_created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub word_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "draft_created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub post_date: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub word_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationUser {
    pub id: u64,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn test_draft_response_deserialize_minimal() {
        let draft: DraftResponse = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(draft.id, 42);
        assert!(draft.title.is_none());
        assert!(draft.created_at.is_none());
    }

    #[test]
    fn test_draft_response_deserialize_full() {
        let json = r#"{
            "id": 42,
            "draft_title": "Hello",
            "draft_subtitle": "World",
            "slug": "hello",
            "audience": "everyone",
            "draft_created_at": "2025-10-28T15:04:05Z",
            "word_count": 120,
            "extra_field": "ignored"
        }"#;
        let draft: DraftResponse = serde_json::from_str(json).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Hello"));
        assert_eq!(draft.word_count, Some(120));
        assert!(draft.created_at.is_some());
    }

    #[test]
    fn test_post_deserialize_tolerates_nulls() {
        let json = r#"{"id": 9, "title": null, "post_date": "2025-11-01T10:00:00.000Z", "is_published": true}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 9);
        assert!(post.title.is_none());
        assert!(post.is_published);
    }
}
