//! Form and submission resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One form record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub id: Option<String>,
    pub site_id: Option<String>,
    pub name: Option<String>,
    pub paths: Option<Vec<String>>,
    pub submission_count: Option<i64>,
    pub fields: Option<Vec<FormField>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// One field definition inside a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
}

/// One form submission record
///
/// `data` carries the submitted field values verbatim; its keys depend on
/// the form definition, so it stays an untyped JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub id: Option<String>,
    pub number: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub data: Option<serde_json::Value>,
    pub site_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
