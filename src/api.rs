// ABOUTME: Blocking HTTP client for the publication drafts/posts API
// ABOUTME: Cookie session auth, JSON bodies, and fail-fast status errors

use crate::model::{
    Account, Byline, DraftRequest, DraftResponse, Post, PublicationUser, PublishOptions,
};
use crate::{Error, Result};
use reqwest::blocking::{Client, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_DRAFT_TYPE: &str = "newsletter";

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.len() <= max_chars {
        return s.to_string();
    }

    // Find a valid UTF-8 boundary at or before max_chars
    let mut boundary = max_chars;
    while boundary > 0 && !s.is_char_boundary(boundary) {
        boundary -= 1;
    }

    if boundary == 0 {
        return String::new();
    }

    format!("{}...", &s[..boundary])
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    cookie: String,
}

impl ApiClient {
    pub fn new(account: &Account) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(ApiClient {
            client,
            base_url: format!("{}/api/v1", account.publication_url.trim_end_matches('/')),
            cookie: format!(
                "substack.sid={}; substack.lli={}; connect.sid={}",
                account.substack_sid, account.substack_lli, account.sid
            ),
        })
    }

    fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "api request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Cookie", &self.cookie)
            .header("Accept", "application/json")
            .header(
                "User-Agent",
                concat!("stackmark/", env!("CARGO_PKG_VERSION"), " (Rust)"),
            );
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                message: truncate_str(&message, 200),
            });
        }

        Ok(response)
    }

    fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, endpoint, body)?;

        // Keep the raw text so a decode failure can show what came back
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(
                endpoint,
                error = %e,
                body = %truncate_str(&body, 500),
                "failed to parse api response"
            );
            Error::Parse(e)
        })
    }

    /// First admin or owner of the publication, else the first user.
    pub fn user_id(&self) -> Result<u64> {
        let users: Vec<PublicationUser> = self.call(Method::GET, "/publication/users", None)?;

        users
            .iter()
            .find(|u| matches!(u.role.as_deref(), Some("admin" | "owner")))
            .or_else(|| users.first())
            .map(|u| u.id)
            .ok_or_else(|| Error::Auth("no users found for publication".into()))
    }

    /// Create a draft, filling bylines from the publication when none are given.
    pub fn create_draft(&self, mut draft: DraftRequest) -> Result<DraftResponse> {
        if draft.draft_bylines.is_empty() {
            draft.draft_bylines = vec![Byline { id: self.user_id()? }];
        }
        if draft.kind.is_empty() {
            draft.kind = DEFAULT_DRAFT_TYPE.into();
        }
        self.call(Method::POST, "/drafts/", Some(serde_json::to_value(&draft)?))
    }

    pub fn get_draft(&self, id: u64) -> Result<DraftResponse> {
        self.call(Method::GET, &format!("/drafts/{}", id), None)
    }

    pub fn list_drafts(&self) -> Result<Vec<DraftResponse>> {
        self.call(Method::GET, "/drafts/", None)
    }

    pub fn delete_draft(&self, id: u64) -> Result<()> {
        self.send(Method::DELETE, &format!("/drafts/{}", id), None)?;
        Ok(())
    }

    pub fn publish_draft(&self, id: u64, options: &PublishOptions) -> Result<Post> {
        self.call(
            Method::PUT,
            &format!("/drafts/{}/publish", id),
            Some(serde_json::to_value(options)?),
        )
    }

    pub fn list_posts(&self) -> Result<Vec<Post>> {
        self.call(Method::GET, "/posts/", None)
    }

    pub fn get_post(&self, id: u64) -> Result<Post> {
        self.call(Method::GET, &format!("/posts/{}", id), None)
    }

    pub fn unpublish_post(&self, id: u64) -> Result<()> {
        self.send(Method::PUT, &format!("/posts/{}/unpublish", id), None)?;
        Ok(())
    }

    /// Partial update of a post's draft fields.
    pub fn update_post(&self, id: u64, updates: Map<String, Value>) -> Result<Post> {
        self.call(
            Method::PUT,
            &format!("/drafts/{}", id),
            Some(Value::Object(updates)),
        )
    }
}
