// ABOUTME: Markdown file to draft workflow
// ABOUTME: Merges config defaults, frontmatter, and CLI overrides before upload

use crate::api::ApiClient;
use crate::markdown::{self, Conversion};
use crate::model::{Config, DraftRequest, DraftResponse, Post, PublishOptions};
use crate::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Values given explicitly on the command line; `None` means not given.
#[derive(Debug, Clone, Default)]
pub struct DraftOverrides {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub audience: Option<String>,
    pub section: Option<String>,
}

/// Resolve the draft request for a converted file.
///
/// Precedence, lowest first: config, non-empty frontmatter values, CLI flags.
pub fn build_draft(
    conversion: &Conversion,
    config: &Config,
    overrides: &DraftOverrides,
) -> Result<DraftRequest> {
    let mut subtitle = String::new();
    let mut audience = config.audience.clone();
    let mut section = config.section.clone();

    if let Some(fm) = &conversion.frontmatter {
        for (target, value) in [
            (&mut subtitle, &fm.subtitle),
            (&mut audience, &fm.audience),
            (&mut section, &fm.section),
        ] {
            if !value.is_empty() {
                *target = value.clone();
            }
        }
    }

    let title = overrides
        .title
        .clone()
        .unwrap_or_else(|| conversion.title.clone());
    if let Some(value) = &overrides.subtitle {
        subtitle = value.clone();
    }
    if let Some(value) = &overrides.audience {
        audience = value.clone();
    }
    if let Some(value) = &overrides.section {
        section = value.clone();
    }

    Ok(DraftRequest {
        title,
        subtitle,
        draft_body: serde_json::to_string(&conversion.body)?,
        draft_bylines: Vec::new(),
        audience,
        section_chosen: !section.is_empty(),
        section,
        kind: String::new(),
    })
}

/// Read and convert a Markdown file into a ready-to-send draft request.
pub fn prepare_draft(
    path: &Path,
    config: &Config,
    overrides: &DraftOverrides,
) -> Result<DraftRequest> {
    let source = fs::read(path)?;
    let conversion = markdown::convert(&source)?;
    debug!(
        path = %path.display(),
        title = %conversion.title,
        blocks = conversion.body.content.len(),
        "converted post source"
    );
    build_draft(&conversion, config, overrides)
}

/// Create the draft and, when `publish` is set, publish it right away.
pub fn create_post(
    client: &ApiClient,
    draft: DraftRequest,
    publish: Option<bool>,
) -> Result<(DraftResponse, Option<Post>)> {
    let audience = draft.audience.clone();
    let created = client.create_draft(draft)?;

    let post = match publish {
        Some(send_email) => Some(client.publish_draft(
            created.id,
            &PublishOptions {
                send_email,
                audience,
            },
        )?),
        None => None,
    };

    Ok((created, post))
}
