//! Deployed file resources

use serde::{Deserialize, Serialize};

/// One deployed file record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    pub id: Option<String>,
    pub path: Option<String>,
    pub sha: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
}
