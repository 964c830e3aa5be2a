//! Client contract tests: site and file operations
//!
//! Verifies that each factory method produces the documented verb and path,
//! that fixtures decode field-for-field into the typed models, and that
//! non-success responses map to the typed API error.

mod common;

use chrono::SecondsFormat;
use common::*;
use netlify_api::models::{Site, SiteSetup};
use netlify_api::{Error, Method};

const SITE_ID: &str = "3970e52d-c93b-4b4c-8e8a-b4b0e6e54f33";
const SITE_FIXTURE: &str = include_str!("fixtures/site.json");

fn verify_site(site: &Site) {
    assert_eq!(site.id.as_deref(), Some(SITE_ID));
    assert_eq!(site.site_id.as_deref(), Some(SITE_ID));
    assert_eq!(site.plan.as_deref(), Some("nf_open_source"));

    let plan = site.plan_data.as_ref().expect("plan_data present");
    assert_eq!(plan.id.as_deref(), Some("nf_team_dev"));
    assert_eq!(plan.title.as_deref(), Some("Netlify Team Free"));
    assert_eq!(plan.asset_acceleration, Some(true));
    assert_eq!(plan.form_processing, Some(true));
    assert_eq!(plan.cdn_propagation.as_deref(), Some("partial"));
    assert_eq!(plan.build_gc_exchange.as_deref(), Some("buildbot-gc"));
    assert_eq!(plan.build_node_pool.as_deref(), Some("buildbot-ssd"));
    assert_eq!(plan.domain_aliases, Some(true));
    assert_eq!(plan.secure_site, Some(false));
    assert_eq!(plan.prerendering, Some(true));
    assert_eq!(plan.proxying, Some(true));
    assert_eq!(plan.ssl.as_deref(), Some("custom"));
    assert_eq!(plan.rate_cents, Some(0));
    assert_eq!(plan.yearly_rate_cents, Some(0));
    assert_eq!(plan.cdn_network.as_deref(), Some("free_cdn_network"));
    assert_eq!(plan.branch_deploy, Some(true));
    assert_eq!(plan.managed_dns, Some(true));
    assert_eq!(plan.geo_ip, Some(true));
    assert_eq!(plan.split_testing, Some(true));

    assert_eq!(site.premium, Some(false));
    assert_eq!(site.claimed, Some(true));
    assert_eq!(site.name.as_deref(), Some("oakmoss"));
    assert_eq!(site.custom_domain.as_deref(), Some("oakmoss.dev"));
    assert_eq!(site.notification_email, None);
    assert_eq!(site.url.as_deref(), Some("https://oakmoss.dev"));
    assert_eq!(
        site.admin_url.as_deref(),
        Some("https://app.netlify.com/sites/oakmoss")
    );
    assert_eq!(
        site.screenshot_url.as_deref(),
        Some("https://cdn.example.net/5a00dfb80b79b731343d0c65/screenshot.png")
    );
    assert_eq!(
        site.created_at
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Some("2016-12-20T20:07:56.305Z".to_string())
    );
    assert_eq!(
        site.updated_at
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Some("2017-11-06T22:19:20.128Z".to_string())
    );
    assert_eq!(site.user_id.as_deref(), Some("58543cf0c4d9cc4e6d4bf27a"));

    let processing = site.processing_settings.as_ref().expect("processing present");
    assert_eq!(processing.skip, Some(false));
    assert_eq!(processing.css.unwrap().bundle, Some(true));
    assert_eq!(processing.css.unwrap().minify, Some(true));
    assert_eq!(processing.js.unwrap().bundle, Some(false));
    assert_eq!(processing.js.unwrap().minify, Some(true));
    assert_eq!(processing.html.unwrap().pretty_urls, Some(true));
    assert_eq!(processing.images.unwrap().optimize, Some(false));
}

#[tokio::test]
async fn get_site_uses_correct_endpoint() {
    let (client, transport) = test_client();

    client.get_site(SITE_ID).send().await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, api_url(&format!("sites/{}", SITE_ID)));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn get_site_parses_json() {
    let (client, transport) = test_client();
    transport.queue(200, SITE_FIXTURE);

    let site = client.get_site(SITE_ID).send().await.unwrap();

    verify_site(&site);
}

#[tokio::test]
async fn list_sites_uses_correct_endpoint() {
    let (client, transport) = test_client();
    transport.queue(200, "[]");

    let sites = client.list_sites().send().await.unwrap();

    assert!(sites.is_empty());
    let request = transport.single_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, api_url("sites"));
}

#[tokio::test]
async fn list_sites_with_filter_query() {
    let (client, transport) = test_client();
    transport.queue(200, "[]");

    client
        .list_sites()
        .with_query("filter", "owner")
        .send()
        .await
        .unwrap();

    assert_eq!(transport.single_request().url, api_url("sites?filter=owner"));
}

#[tokio::test]
async fn create_site_posts_sparse_body() {
    let (client, transport) = test_client();

    let setup = SiteSetup::new()
        .with_name("oakmoss")
        .with_custom_domain("oakmoss.dev");
    client.create_site(&setup).unwrap().send().await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, api_url("sites"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body: serde_json::Value =
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "oakmoss");
    assert_eq!(body["custom_domain"], "oakmoss.dev");
    // Unset fields are not serialized
    assert!(body.get("password").is_none());
    assert!(body.get("force_ssl").is_none());
}

#[tokio::test]
async fn update_site_uses_patch() {
    let (client, transport) = test_client();

    let setup = SiteSetup::new().with_name("renamed");
    client
        .update_site(SITE_ID, &setup)
        .unwrap()
        .send()
        .await
        .unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.url, api_url(&format!("sites/{}", SITE_ID)));
}

#[tokio::test]
async fn delete_site_uses_delete_and_accepts_empty_body() {
    let (client, transport) = test_client();
    transport.queue(204, "");

    client.delete_site(SITE_ID).send().await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.url, api_url(&format!("sites/{}", SITE_ID)));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn list_site_files_uses_correct_endpoint() {
    let (client, transport) = test_client();
    transport.queue(200, "[]");

    client.list_site_files(SITE_ID).send().await.unwrap();

    assert_eq!(
        transport.single_request().url,
        api_url(&format!("sites/{}/files", SITE_ID))
    );
}

#[tokio::test]
async fn get_site_file_addresses_nested_paths() {
    let (client, transport) = test_client();

    client
        .get_site_file(SITE_ID, "css/main.css")
        .send()
        .await
        .unwrap();

    assert_eq!(
        transport.single_request().url,
        api_url(&format!("sites/{}/files/css/main.css", SITE_ID))
    );
}

#[tokio::test]
async fn requests_carry_bearer_token_and_user_agent() {
    let (client, transport) = test_client();

    client.get_site(SITE_ID).send().await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.header("authorization"), Some("Bearer test-token"));
    assert!(request.header("user-agent").unwrap().starts_with("netlify-api/"));
}

#[tokio::test]
async fn non_success_maps_to_api_error() {
    let (client, transport) = test_client();
    transport.queue(404, r#"{"code":404,"message":"Not Found"}"#);

    let err = client.get_site("missing").send().await.unwrap_err();

    match err {
        Error::Api { status, payload } => {
            assert_eq!(status, 404);
            assert_eq!(payload.code, Some(404));
            assert_eq!(payload.message.as_deref(), Some("Not Found"));
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_error_body_is_carried_verbatim() {
    let (client, transport) = test_client();
    transport.queue(502, "upstream exploded");

    let err = client.list_sites().send().await.unwrap_err();

    match err {
        Error::Api { status, payload } => {
            assert_eq!(status, 502);
            assert_eq!(payload.code, None);
            assert_eq!(payload.message.as_deref(), Some("upstream exploded"));
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}
