//! Deploy resources

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One deploy record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deploy {
    pub id: Option<String>,
    pub site_id: Option<String>,
    pub user_id: Option<String>,
    pub build_id: Option<String>,
    pub state: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub ssl_url: Option<String>,
    pub admin_url: Option<String>,
    pub deploy_url: Option<String>,
    pub deploy_ssl_url: Option<String>,
    pub screenshot_url: Option<String>,
    pub review_id: Option<i64>,
    pub draft: Option<bool>,
    pub required: Option<Vec<String>>,
    pub required_functions: Option<Vec<String>>,
    pub error_message: Option<String>,
    pub branch: Option<String>,
    pub commit_ref: Option<String>,
    pub commit_url: Option<String>,
    pub skipped: Option<bool>,
    pub locked: Option<bool>,
    pub title: Option<String>,
    pub context: Option<String>,
    pub review_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Request body for creating a deploy: content digests keyed by path
///
/// The API answers with the digests it is missing in [`Deploy::required`];
/// uploading the actual content is a separate concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployFiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub run_async: Option<bool>,
}

impl DeployFiles {
    /// Create an empty deploy body
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one file digest (path → SHA1)
    pub fn with_file(mut self, path: impl Into<String>, sha: impl Into<String>) -> Self {
        self.files
            .get_or_insert_with(HashMap::new)
            .insert(path.into(), sha.into());
        self
    }

    /// Mark the deploy as a draft
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }
}
