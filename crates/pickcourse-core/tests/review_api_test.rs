//! Review API client tests.
//!
//! These tests use wiremock to stand in for the review collection API.

use std::time::Duration;

use pickcourse_core::{
    BotConfig, FormSubmitter, HttpReviewApi, ProfanityFilter, RawFormFields, SubmissionResult,
};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submitter_for(server: &MockServer, timeout: Duration) -> FormSubmitter {
    let config = BotConfig::default()
        .with_api_url(&server.uri())
        .unwrap()
        .with_timeout(timeout);
    let api = HttpReviewApi::new(&config).unwrap();
    FormSubmitter::new(Arc::new(api), ProfanityFilter::default())
}

fn valid_form() -> RawFormFields {
    RawFormFields::new("IFT2255", "Jane Doe", "3.0", "4", "great course")
}

#[tokio::test]
async fn test_transmits_normalized_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/avis"))
        .and(body_json(serde_json::json!({
            "sigleCours": "IFT2255",
            "professeur": "Jane Doe",
            "noteDifficulte": 3,
            "noteCharge": 4,
            "commentaire": "great course"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Avis enregistré avec succès"))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, Duration::from_secs(5));
    let result = submitter.submit(&valid_form()).await;

    assert!(result.is_success(), "unexpected result: {result:?}");
}

#[tokio::test]
async fn test_lowercase_code_is_sent_uppercased() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/avis"))
        .and(body_json(serde_json::json!({
            "sigleCours": "MAT1400",
            "professeur": "",
            "noteDifficulte": 5,
            "noteCharge": 0,
            "commentaire": ""
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, Duration::from_secs(5));
    let result = submitter
        .submit(&RawFormFields::new("mat1400", "", "4.5", "0.2", ""))
        .await;

    assert!(result.is_success(), "unexpected result: {result:?}");
}

#[tokio::test]
async fn test_server_error_is_rejection_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/avis"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, Duration::from_secs(5));
    let result = submitter.submit(&valid_form()).await;

    assert_eq!(result, SubmissionResult::RemoteRejected("server error".to_string()));
    assert_eq!(result.user_message(), "Erreur côté serveur : server error");
}

#[tokio::test]
async fn test_non_200_success_status_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/avis"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, Duration::from_secs(5));
    let result = submitter.submit(&valid_form()).await;

    assert_eq!(result, SubmissionResult::RemoteRejected("created".to_string()));
}

#[tokio::test]
async fn test_timeout_is_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/avis"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, Duration::from_millis(200));
    let result = submitter.submit(&valid_form()).await;

    assert_eq!(result, SubmissionResult::RemoteUnreachable);
}

#[tokio::test]
async fn test_refused_connection_is_unreachable() {
    let api = HttpReviewApi::with_endpoint("http://127.0.0.1:1/avis", Duration::from_secs(1)).unwrap();
    let submitter = FormSubmitter::new(Arc::new(api), ProfanityFilter::default());

    let result = submitter.submit(&valid_form()).await;

    assert_eq!(result, SubmissionResult::RemoteUnreachable);
    assert_eq!(result.user_message(), "Erreur : impossible de contacter le serveur.");
}

#[tokio::test]
async fn test_invalid_form_never_reaches_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, Duration::from_secs(5));
    for raw in [
        RawFormFields::new("IFT22", "Jane Doe", "3", "4", "ok"),
        RawFormFields::new("IFT2255", "Jane Doe", "7", "4", "ok"),
        RawFormFields::new("IFT2255", "Jane Doe", "3", "four", "ok"),
        RawFormFields::new("IFT2255", "Jane Doe", "3", "4", "what a shit course"),
    ] {
        assert!(!submitter.submit(&raw).await.is_success());
    }
}
