//! Build configuration resources: repository settings, asset
//! post-processing and build hooks

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository and build configuration attached to a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub id: Option<i64>,
    pub provider: Option<String>,
    pub deploy_key_id: Option<String>,
    pub repo_path: Option<String>,
    pub repo_branch: Option<String>,
    pub dir: Option<String>,
    pub cmd: Option<String>,
    pub allowed_branches: Option<Vec<String>>,
    pub public_repo: Option<bool>,
    pub private_logs: Option<bool>,
    pub installation_id: Option<i64>,
    pub env: Option<HashMap<String, String>>,
}

/// Asset post-processing toggles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    pub skip: Option<bool>,
    pub css: Option<CssProcessingSettings>,
    pub js: Option<JsProcessingSettings>,
    pub html: Option<HtmlProcessingSettings>,
    pub images: Option<ImageProcessingSettings>,
}

// The css/js blocks are absent from the platform's published API
// description; shapes follow observed responses.

/// CSS post-processing toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssProcessingSettings {
    pub bundle: Option<bool>,
    pub minify: Option<bool>,
}

/// JavaScript post-processing toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsProcessingSettings {
    pub bundle: Option<bool>,
    pub minify: Option<bool>,
}

/// HTML post-processing toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlProcessingSettings {
    pub pretty_urls: Option<bool>,
}

/// Image post-processing toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProcessingSettings {
    pub optimize: Option<bool>,
}

/// One build hook record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildHook {
    pub id: Option<String>,
    pub title: Option<String>,
    pub branch: Option<String>,
    pub url: Option<String>,
    pub site_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating or updating a build hook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildHookSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl BuildHookSetup {
    /// Create a setup body for the given title and branch
    pub fn new(title: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            branch: Some(branch.into()),
        }
    }
}
