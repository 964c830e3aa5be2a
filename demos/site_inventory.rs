// # Site Inventory Tool
//
// Lists the sites a personal access token can see, with their recent
// deploys and DNS/SSL state. Useful for validating credentials against the
// real API.
//
// ## Usage
//
// ```bash
// NETLIFY_AUTH_TOKEN=your_token \
// cargo run --bin site_inventory
//
// # Detail for a single site
// NETLIFY_AUTH_TOKEN=your_token \
// NETLIFY_SITE_ID=3970e52d-c93b-4b4c-8e8a-b4b0e6e54f33 \
// cargo run --bin site_inventory
// ```
//
// ## Environment Variables
//
// Required:
// - `NETLIFY_AUTH_TOKEN`: personal access token
//
// Optional:
// - `NETLIFY_SITE_ID`: limit output to one site, including deploys and SSL

use std::env;
use std::sync::Arc;

use netlify_api::{ClientConfig, NetlifyClient};
use netlify_transport_reqwest::ReqwestTransport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let access_token = env::var("NETLIFY_AUTH_TOKEN").unwrap_or_else(|_| {
        tracing::error!("NETLIFY_AUTH_TOKEN environment variable is required");
        std::process::exit(1);
    });

    let transport = Arc::new(ReqwestTransport::new()?);
    let client = NetlifyClient::new(ClientConfig::new(access_token), transport)?;

    match env::var("NETLIFY_SITE_ID").ok() {
        Some(site_id) => inspect_site(&client, &site_id).await?,
        None => list_sites(&client).await?,
    }

    Ok(())
}

async fn list_sites(client: &NetlifyClient) -> netlify_api::Result<()> {
    let sites = client.list_sites().send().await?;
    tracing::info!("Token can see {} site(s)", sites.len());

    for site in sites {
        tracing::info!(
            "  {} ({}) state={} url={}",
            site.name.as_deref().unwrap_or("<unnamed>"),
            site.id.as_deref().unwrap_or("-"),
            site.state.as_deref().unwrap_or("-"),
            site.url.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

async fn inspect_site(client: &NetlifyClient, site_id: &str) -> netlify_api::Result<()> {
    let site = client.get_site(site_id).send().await?;
    tracing::info!(
        "Site {} ({})",
        site.name.as_deref().unwrap_or("<unnamed>"),
        site_id
    );

    let deploys = client.list_site_deploys(site_id).send().await?;
    tracing::info!("Deploys: {}", deploys.len());
    for deploy in deploys.iter().take(5) {
        tracing::info!(
            "  {} state={} branch={} published={}",
            deploy.id.as_deref().unwrap_or("-"),
            deploy.state.as_deref().unwrap_or("-"),
            deploy.branch.as_deref().unwrap_or("-"),
            deploy
                .published_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    match client.get_site_ssl(site_id).send().await {
        Ok(certificate) => tracing::info!(
            "SSL: state={} domains={:?}",
            certificate.state.as_deref().unwrap_or("-"),
            certificate.domains.unwrap_or_default(),
        ),
        Err(err) => tracing::warn!("SSL state unavailable: {}", err),
    }

    match client.get_site_dns(site_id).send().await {
        Ok(zones) => {
            for zone in zones {
                tracing::info!(
                    "DNS zone {} with {} record(s)",
                    zone.name.as_deref().unwrap_or("-"),
                    zone.records.map(|records| records.len()).unwrap_or(0),
                );
            }
        }
        Err(err) => tracing::warn!("DNS state unavailable: {}", err),
    }

    Ok(())
}
