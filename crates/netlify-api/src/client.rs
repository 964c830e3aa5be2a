//! API client and per-operation factory methods
//!
//! `NetlifyClient` owns configuration, the injected HTTP transport and
//! optional client-level request/response handlers. Each factory method
//! returns a pre-populated [`Operation`]; the caller adds query parameters
//! or handlers as needed and triggers the exchange with `send`.

use std::sync::Arc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::models::{
    BuildHook, BuildHookSetup, Deploy, DeployFiles, DnsZone, Form, Site, SiteFile, SiteSetup,
    SslCertificate, Submission,
};
use crate::operation::{NoContent, Operation};
use crate::transport::{
    ApiRequest, ApiResponse, ApiTransport, Method, RequestHandler, ResponseHandler,
};

/// Client for the Netlify REST API
///
/// Cloning is cheap: configuration, transport and handlers are shared and
/// immutable. Independent operations built from clones are fully
/// independent.
#[derive(Clone)]
pub struct NetlifyClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn ApiTransport>,
    request_handler: Option<Arc<RequestHandler>>,
    response_handler: Option<Arc<ResponseHandler>>,
}

impl std::fmt::Debug for NetlifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetlifyClient")
            .field("config", &self.config)
            .finish()
    }
}

impl NetlifyClient {
    /// Create a client from validated configuration and a transport
    pub fn new(config: ClientConfig, transport: Arc<dyn ApiTransport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
            request_handler: None,
            response_handler: None,
        })
    }

    /// Install a client-level pre-send handler
    ///
    /// Runs before any operation-level handler, with mutable access to the
    /// outgoing request.
    pub fn with_request_handler(
        mut self,
        handler: impl Fn(&mut ApiRequest) + Send + Sync + 'static,
    ) -> Self {
        self.request_handler = Some(Arc::new(handler));
        self
    }

    /// Install a client-level post-receive handler
    ///
    /// Runs before any operation-level handler, on success responses only.
    pub fn with_response_handler(
        mut self,
        handler: impl Fn(&ApiResponse) + Send + Sync + 'static,
    ) -> Self {
        self.response_handler = Some(Arc::new(handler));
        self
    }

    /// The client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &dyn ApiTransport {
        self.transport.as_ref()
    }

    pub(crate) fn request_handler(&self) -> Option<&RequestHandler> {
        self.request_handler.as_deref()
    }

    pub(crate) fn response_handler(&self) -> Option<&ResponseHandler> {
        self.response_handler.as_deref()
    }

    /// Build an operation carrying a JSON body
    fn with_body<T, B: Serialize>(
        &self,
        endpoint: Endpoint,
        method: Method,
        body: &B,
    ) -> Result<Operation<T>> {
        Ok(Operation::new(self.clone(), endpoint, method)
            .with_body_value(serde_json::to_value(body)?))
    }

    // ---- Sites ------------------------------------------------------------

    /// Fetch all sites the token can see
    pub fn list_sites(&self) -> Operation<Vec<Site>> {
        Operation::new(self.clone(), Endpoint::new("sites"), Method::Get)
    }

    /// Fetch one site by id
    pub fn get_site(&self, site_id: &str) -> Operation<Site> {
        Operation::new(self.clone(), Endpoint::new("sites").join(site_id), Method::Get)
    }

    /// Create a site
    pub fn create_site(&self, setup: &SiteSetup) -> Result<Operation<Site>> {
        self.with_body(Endpoint::new("sites"), Method::Post, setup)
    }

    /// Update a site
    pub fn update_site(&self, site_id: &str, setup: &SiteSetup) -> Result<Operation<Site>> {
        self.with_body(Endpoint::new("sites").join(site_id), Method::Patch, setup)
    }

    /// Delete a site
    pub fn delete_site(&self, site_id: &str) -> Operation<NoContent> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id),
            Method::Delete,
        )
    }

    // ---- Files ------------------------------------------------------------

    /// Fetch the files of a site's published deploy
    pub fn list_site_files(&self, site_id: &str) -> Operation<Vec<SiteFile>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("files"),
            Method::Get,
        )
    }

    /// Fetch one deployed file record by path
    pub fn get_site_file(&self, site_id: &str, file_path: &str) -> Operation<SiteFile> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("files").join(file_path),
            Method::Get,
        )
    }

    // ---- Deploys ----------------------------------------------------------

    /// Fetch the deploys of a site
    pub fn list_site_deploys(&self, site_id: &str) -> Operation<Vec<Deploy>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("deploys"),
            Method::Get,
        )
    }

    /// Fetch one deploy of a site
    pub fn get_site_deploy(&self, site_id: &str, deploy_id: &str) -> Operation<Deploy> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("deploys").join(deploy_id),
            Method::Get,
        )
    }

    /// Create a deploy from content digests
    pub fn create_site_deploy(&self, site_id: &str, files: &DeployFiles) -> Result<Operation<Deploy>> {
        self.with_body(
            Endpoint::new("sites").join(site_id).join("deploys"),
            Method::Post,
            files,
        )
    }

    /// Restore (publish again) an older deploy
    pub fn restore_site_deploy(&self, site_id: &str, deploy_id: &str) -> Operation<Deploy> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites")
                .join(site_id)
                .join("deploys")
                .join(deploy_id)
                .join("restore"),
            Method::Post,
        )
    }

    /// Cancel a running deploy
    pub fn cancel_site_deploy(&self, deploy_id: &str) -> Operation<Deploy> {
        Operation::new(
            self.clone(),
            Endpoint::new("deploys").join(deploy_id).join("cancel"),
            Method::Post,
        )
    }

    // ---- Forms ------------------------------------------------------------

    /// Fetch the forms of a site
    pub fn list_site_forms(&self, site_id: &str) -> Operation<Vec<Form>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("forms"),
            Method::Get,
        )
    }

    /// Fetch every submission across a site's forms
    pub fn list_site_submissions(&self, site_id: &str) -> Operation<Vec<Submission>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("submissions"),
            Method::Get,
        )
    }

    /// Fetch the submissions of one form
    pub fn list_form_submissions(&self, form_id: &str) -> Operation<Vec<Submission>> {
        Operation::new(
            self.clone(),
            Endpoint::new("forms").join(form_id).join("submissions"),
            Method::Get,
        )
    }

    // ---- DNS --------------------------------------------------------------

    /// Fetch the DNS zones configured for a site
    pub fn get_site_dns(&self, site_id: &str) -> Operation<Vec<DnsZone>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("dns"),
            Method::Get,
        )
    }

    /// Put the site's domain under managed DNS
    pub fn configure_site_dns(&self, site_id: &str) -> Operation<Vec<DnsZone>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("dns"),
            Method::Put,
        )
    }

    // ---- SSL --------------------------------------------------------------

    /// Fetch the TLS certificate state of a site
    pub fn get_site_ssl(&self, site_id: &str) -> Operation<SslCertificate> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("ssl"),
            Method::Get,
        )
    }

    /// Provision a TLS certificate for a site
    ///
    /// For a custom certificate, add `certificate`, `key` and
    /// `ca_certificates` query parameters with
    /// [`with_query`](Operation::with_query); without them the platform
    /// issues one.
    pub fn provision_site_ssl(&self, site_id: &str) -> Operation<SslCertificate> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("ssl"),
            Method::Post,
        )
    }

    // ---- Build hooks -------------------------------------------------------

    /// Fetch the build hooks of a site
    pub fn list_site_build_hooks(&self, site_id: &str) -> Operation<Vec<BuildHook>> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("build_hooks"),
            Method::Get,
        )
    }

    /// Fetch one build hook
    pub fn get_site_build_hook(&self, site_id: &str, hook_id: &str) -> Operation<BuildHook> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("build_hooks").join(hook_id),
            Method::Get,
        )
    }

    /// Create a build hook
    pub fn create_site_build_hook(
        &self,
        site_id: &str,
        setup: &BuildHookSetup,
    ) -> Result<Operation<BuildHook>> {
        self.with_body(
            Endpoint::new("sites").join(site_id).join("build_hooks"),
            Method::Post,
            setup,
        )
    }

    /// Update a build hook
    pub fn update_site_build_hook(
        &self,
        site_id: &str,
        hook_id: &str,
        setup: &BuildHookSetup,
    ) -> Result<Operation<BuildHook>> {
        self.with_body(
            Endpoint::new("sites").join(site_id).join("build_hooks").join(hook_id),
            Method::Put,
            setup,
        )
    }

    /// Delete a build hook
    pub fn delete_site_build_hook(&self, site_id: &str, hook_id: &str) -> Operation<NoContent> {
        Operation::new(
            self.clone(),
            Endpoint::new("sites").join(site_id).join("build_hooks").join(hook_id),
            Method::Delete,
        )
    }
}
