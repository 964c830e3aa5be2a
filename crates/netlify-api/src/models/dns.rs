//! DNS resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One DNS zone managed for a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsZone {
    pub id: Option<String>,
    pub name: Option<String>,
    pub errors: Option<Vec<String>>,
    pub supported_record_types: Option<Vec<String>>,
    pub user_id: Option<String>,
    pub records: Option<Vec<DnsRecord>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One DNS record inside a zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    pub id: Option<String>,
    pub hostname: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub value: Option<String>,
    pub ttl: Option<i64>,
    pub priority: Option<i64>,
    pub dns_zone_id: Option<String>,
    pub site_id: Option<String>,
    pub flag: Option<i64>,
    pub tag: Option<String>,
    pub managed: Option<bool>,
}
