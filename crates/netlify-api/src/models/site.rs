//! Site resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::build::{BuildSettings, ProcessingSettings};
use super::deploy::Deploy;

/// One site record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub id: Option<String>,
    pub site_id: Option<String>,
    pub state: Option<String>,
    pub plan: Option<String>,
    pub plan_data: Option<PlanData>,
    pub premium: Option<bool>,
    pub claimed: Option<bool>,
    pub name: Option<String>,
    pub custom_domain: Option<String>,
    pub domain_aliases: Option<Vec<String>>,
    pub password: Option<String>,
    pub notification_email: Option<String>,
    pub url: Option<String>,
    pub admin_url: Option<String>,
    pub deploy_url: Option<String>,
    pub screenshot_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub ssl: Option<bool>,
    pub ssl_url: Option<String>,
    pub force_ssl: Option<bool>,
    pub managed_dns: Option<bool>,
    pub deploy_hook: Option<String>,
    pub build_settings: Option<BuildSettings>,
    pub processing_settings: Option<ProcessingSettings>,
    pub published_deploy: Option<Deploy>,
}

/// Plan details nested inside a site record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanData {
    pub id: Option<String>,
    pub title: Option<String>,
    pub asset_acceleration: Option<bool>,
    pub form_processing: Option<bool>,
    pub cdn_propagation: Option<String>,
    pub build_gc_exchange: Option<String>,
    pub build_node_pool: Option<String>,
    pub domain_aliases: Option<bool>,
    pub secure_site: Option<bool>,
    pub prerendering: Option<bool>,
    pub proxying: Option<bool>,
    pub ssl: Option<String>,
    pub rate_cents: Option<i64>,
    pub yearly_rate_cents: Option<i64>,
    pub cdn_network: Option<String>,
    pub branch_deploy: Option<bool>,
    pub managed_dns: Option<bool>,
    pub geo_ip: Option<bool>,
    pub split_testing: Option<bool>,
}

/// Request body for creating or updating a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_aliases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_dns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_settings: Option<BuildSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_settings: Option<ProcessingSettings>,
}

impl SiteSetup {
    /// Create an empty setup body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the site name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the custom domain
    pub fn with_custom_domain(mut self, domain: impl Into<String>) -> Self {
        self.custom_domain = Some(domain.into());
        self
    }

    /// Set the asset post-processing configuration
    pub fn with_processing_settings(mut self, settings: ProcessingSettings) -> Self {
        self.processing_settings = Some(settings);
        self
    }
}
