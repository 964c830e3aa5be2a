//! Client contract tests: form and submission operations

mod common;

use common::*;
use netlify_api::Method;

const SITE_ID: &str = "3970e52d-c93b-4b4c-8e8a-b4b0e6e54f33";
const FORM_ID: &str = "5b0e4b2a9c1d2e3f4a5b6c7d";
const FORMS_FIXTURE: &str = include_str!("fixtures/forms.json");
const SUBMISSIONS_FIXTURE: &str = include_str!("fixtures/submissions.json");

#[tokio::test]
async fn list_site_forms_parses_json() {
    let (client, transport) = test_client();
    transport.queue(200, FORMS_FIXTURE);

    let forms = client.list_site_forms(SITE_ID).send().await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, api_url(&format!("sites/{}/forms", SITE_ID)));

    assert_eq!(forms.len(), 1);
    let form = &forms[0];
    assert_eq!(form.id.as_deref(), Some(FORM_ID));
    assert_eq!(form.name.as_deref(), Some("contact"));
    assert_eq!(form.paths.as_deref(), Some(&["/contact".to_string()][..]));
    assert_eq!(form.submission_count, Some(42));

    let fields = form.fields.as_ref().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name.as_deref(), Some("email"));
    assert_eq!(fields[0].field_type.as_deref(), Some("email"));
    assert_eq!(fields[1].field_type.as_deref(), Some("textarea"));
}

#[tokio::test]
async fn list_form_submissions_parses_json() {
    let (client, transport) = test_client();
    transport.queue(200, SUBMISSIONS_FIXTURE);

    let submissions = client
        .list_form_submissions(FORM_ID)
        .send()
        .await
        .unwrap();

    assert_eq!(
        transport.single_request().url,
        api_url(&format!("forms/{}/submissions", FORM_ID))
    );

    assert_eq!(submissions.len(), 1);
    let submission = &submissions[0];
    assert_eq!(submission.number, Some(17));
    assert_eq!(submission.email.as_deref(), Some("visitor@example.net"));
    assert_eq!(submission.company, None);
    assert_eq!(
        submission.data.as_ref().unwrap()["message"],
        "Hello there, great site!"
    );
}

#[tokio::test]
async fn list_site_submissions_uses_correct_endpoint() {
    let (client, transport) = test_client();
    transport.queue(200, "[]");

    client.list_site_submissions(SITE_ID).send().await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(
        request.url,
        api_url(&format!("sites/{}/submissions", SITE_ID))
    );
}
