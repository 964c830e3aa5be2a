//! SSL certificate resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// TLS certificate state for a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslCertificate {
    pub state: Option<String>,
    pub domains: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}
