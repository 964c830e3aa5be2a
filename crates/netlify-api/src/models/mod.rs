//! Plain data records mirroring Netlify API resource shapes
//!
//! Response models keep every field optional: the API omits or nulls fields
//! freely depending on plan, resource age and account type. Request-body
//! models skip unset fields during serialization so a partial update only
//! sends what the caller set.

mod build;
mod deploy;
mod dns;
mod file;
mod form;
mod site;
mod ssl;

pub use build::{
    BuildHook, BuildHookSetup, BuildSettings, CssProcessingSettings, HtmlProcessingSettings,
    ImageProcessingSettings, JsProcessingSettings, ProcessingSettings,
};
pub use deploy::{Deploy, DeployFiles};
pub use dns::{DnsRecord, DnsZone};
pub use file::SiteFile;
pub use form::{Form, FormField, Submission};
pub use site::{PlanData, Site, SiteSetup};
pub use ssl::SslCertificate;
