//
//  freshdesk-cli
//  tests/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use freshdesk_cli::api::common::Fields;
use freshdesk_cli::api::{ApiError, FreshdeskClient, ListParams};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const API_KEY: &str = "test-key";
// base64("test-key:X")
const BASIC_AUTH: &str = "Basic dGVzdC1rZXk6WA==";

fn client(server: &ServerGuard) -> FreshdeskClient {
    FreshdeskClient::new(&server.url(), API_KEY).unwrap()
}

fn fields(value: serde_json::Value) -> Fields {
    value.as_object().unwrap().clone()
}

fn deleted_query(email: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("state".into(), "deleted".into()),
        Matcher::UrlEncoded("query".into(), format!("email is {}", email)),
    ])
}

// --- requests ---

#[tokio::test]
async fn requests_carry_basic_auth_and_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/contacts/7.json")
        .match_header("authorization", BASIC_AUTH)
        .match_header("user-agent", Matcher::Regex("^fdesk/".into()))
        .with_body(r#"{"user": {"id": 7}}"#)
        .create_async()
        .await;

    let contact = client(&server).contacts().get(7u64).await.unwrap();

    assert_eq!(contact["id"], 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_wraps_fields_in_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/customers.json")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "customer": {"name": "Acme", "domains": "acme.com"}
        })))
        .with_status(201)
        .with_body(r#"{"customer": {"id": 3, "name": "Acme", "domains": "acme.com"}}"#)
        .create_async()
        .await;

    let customer = client(&server)
        .customers()
        .create("Acme", &fields(json!({"domains": "acme.com"})))
        .await
        .unwrap();

    assert_eq!(customer["id"], 3);
    assert_eq!(customer["name"], "Acme");
    mock.assert_async().await;
}

#[tokio::test]
async fn nested_article_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/solution/categories/1/folders/2/articles/3.json")
        .with_body(r#"{"solution_article": {"id": 3, "title": "Reset password"}}"#)
        .create_async()
        .await;

    let article = client(&server)
        .solution_articles(1u64, 2u64)
        .get(3u64)
        .await
        .unwrap();

    assert_eq!(article["title"], "Reset password");
    mock.assert_async().await;
}

#[tokio::test]
async fn ticket_path_has_helpdesk_prefix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/helpdesk/tickets/12.json")
        .with_body(r#"{"helpdesk_ticket": {"display_id": 12, "subject": "Printer on fire"}}"#)
        .create_async()
        .await;

    let ticket = client(&server).tickets().get(12u64).await.unwrap();

    assert_eq!(ticket["subject"], "Printer on fire");
    mock.assert_async().await;
}

// --- envelopes ---

#[tokio::test]
async fn unwrap_falls_back_to_short_key() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/solution/categories/4.json")
        .with_body(r#"{"category": {"id": 4, "name": "General"}}"#)
        .create_async()
        .await;

    let category = client(&server)
        .solution_categories()
        .get(4u64)
        .await
        .unwrap();

    assert_eq!(category["name"], "General");
}

#[tokio::test]
async fn missing_envelope_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/contacts/1.json")
        .with_body(r#"{"agent": {"id": 1}}"#)
        .create_async()
        .await;

    let err = client(&server).contacts().get(1u64).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingEnvelope { .. }));
}

// --- update and delete ---

#[tokio::test]
async fn update_returns_literal_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/customers/3.json")
        .match_body(Matcher::Json(json!({"customer": {"note": "vip"}})))
        .with_body(" ")
        .create_async()
        .await;

    let body = client(&server)
        .customers()
        .update(3u64, &fields(json!({"note": "vip"})))
        .await
        .unwrap();

    assert_eq!(body, " ");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_returns_literal_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/helpdesk/tickets/12.json")
        .with_body("")
        .create_async()
        .await;

    let body = client(&server).tickets().delete(12u64).await.unwrap();

    assert_eq!(body, "");
    mock.assert_async().await;
}

// --- errors ---

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/helpdesk/tickets/5.json")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = client(&server).tickets().get(5u64).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some("boom"));
    assert_eq!(err.to_string(), "HTTP 500: boom");
}

#[tokio::test]
async fn last_response_tracks_most_recent_call() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/contacts/1.json")
        .with_body(r#"{"user": {"id": 1}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/contacts/2.json")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let client = client(&server);
    client.contacts().get(1u64).await.unwrap();
    assert_eq!(client.last_response().unwrap().status, 200);

    client.contacts().get(2u64).await.unwrap_err();
    let last = client.last_response().unwrap();
    assert_eq!(last.method, "GET");
    assert_eq!(last.status, 404);
    assert_eq!(last.body, "not here");
    assert!(last.url.ends_with("/contacts/2.json"));
}

// --- pagination ---

#[tokio::test]
async fn fetch_all_walks_pages_until_empty() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/contacts.json")
        .match_query(Matcher::Exact("state=all".into()))
        .with_body(r#"[{"user": {"id": 1}}, {"user": {"id": 2}}]"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/contacts.json")
        .match_query(Matcher::Exact("state=all&page=2".into()))
        .with_body(r#"[{"user": {"id": 3}}]"#)
        .expect(1)
        .create_async()
        .await;
    let third = server
        .mock("GET", "/contacts.json")
        .match_query(Matcher::Exact("state=all&page=3".into()))
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let params = ListParams::new().with("state", "all");
    let contacts = client(&server).contacts().list(&params, true).await.unwrap();

    let ids: Vec<i64> = contacts.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn fetch_all_two_records_two_requests() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/customers.json")
        .match_query(Matcher::Missing)
        .with_body(r#"[{"customer": {"id": 1}}, {"customer": {"id": 2}}]"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/customers.json")
        .match_query(Matcher::Exact("page=2".into()))
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let customers = client(&server)
        .customers()
        .list(&ListParams::new(), true)
        .await
        .unwrap();

    assert_eq!(customers.len(), 2);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn fetch_all_starts_after_given_page() {
    let mut server = Server::new_async().await;
    let start = server
        .mock("GET", "/customers.json")
        .match_query(Matcher::Exact("page=4".into()))
        .with_body(r#"[{"customer": {"id": 40}}]"#)
        .expect(1)
        .create_async()
        .await;
    let next = server
        .mock("GET", "/customers.json")
        .match_query(Matcher::Exact("page=5".into()))
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let params = ListParams::new().with_page(4);
    let customers = client(&server).customers().list(&params, true).await.unwrap();

    assert_eq!(customers.len(), 1);
    start.assert_async().await;
    next.assert_async().await;
}

#[tokio::test]
async fn fetch_all_stops_at_last_page_number() {
    let mut server = Server::new_async().await;
    let only = server
        .mock("GET", "/customers.json")
        .match_query(Matcher::Any)
        .with_body(r#"[{"customer": {"id": 1}}]"#)
        .expect(1)
        .create_async()
        .await;

    let params = ListParams::new().with("page", u32::MAX.to_string());
    let customers = client(&server).customers().list(&params, true).await.unwrap();

    assert_eq!(customers.len(), 1);
    only.assert_async().await;
}

#[tokio::test]
async fn single_page_without_fetch_all() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/helpdesk/tickets.json")
        .match_query(Matcher::Missing)
        .with_body(r#"[{"helpdesk_ticket": {"display_id": 1}}]"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/helpdesk/tickets.json")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .expect(0)
        .create_async()
        .await;

    let tickets = client(&server)
        .tickets()
        .list(&ListParams::new(), false)
        .await
        .unwrap();

    assert_eq!(tickets.len(), 1);
    first.assert_async().await;
    second.assert_async().await;
}

// --- contact recovery ---

#[tokio::test]
async fn create_or_enable_restores_deleted_contact() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/contacts.json")
        .with_status(422)
        .with_body(r#"{"errors": {"error": "Email has already been taken"}}"#)
        .create_async()
        .await;
    let search = server
        .mock("GET", "/contacts.json")
        .match_query(deleted_query("jane@example.com"))
        .with_body(
            r#"[{"user": {"id": 9, "name": "Old Name", "email": "jane@example.com", "deleted": true}}]"#,
        )
        .create_async()
        .await;
    let restore = server
        .mock("PUT", "/contacts/9.json")
        .match_body(Matcher::Json(json!({
            "user": {"name": "Jane", "deleted": false, "phone": "555"}
        })))
        .with_body("")
        .create_async()
        .await;

    let contact = client(&server)
        .contacts()
        .create_or_enable("Jane", "jane@example.com", &fields(json!({"phone": "555"})))
        .await
        .unwrap();

    assert_eq!(contact["id"], 9);
    assert_eq!(contact["name"], "Jane");
    assert_eq!(contact["phone"], "555");
    assert_eq!(contact["deleted"], false);
    create.assert_async().await;
    search.assert_async().await;
    restore.assert_async().await;
}

#[tokio::test]
async fn create_or_enable_keeps_conflict_without_deleted_match() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contacts.json")
        .with_status(422)
        .with_body("taken")
        .create_async()
        .await;
    server
        .mock("GET", "/contacts.json")
        .match_query(deleted_query("jane@example.com"))
        .with_body("[]")
        .create_async()
        .await;

    let err = client(&server)
        .contacts()
        .create_or_enable("Jane", "jane@example.com", &Fields::new())
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(err.body(), Some("taken"));
}

#[tokio::test]
async fn create_or_enable_passes_other_errors_through() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contacts.json")
        .with_status(400)
        .with_body("bad email")
        .create_async()
        .await;
    let search = server
        .mock("GET", "/contacts.json")
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .contacts()
        .create_or_enable("Jane", "not-an-email", &Fields::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    search.assert_async().await;
}

#[tokio::test]
async fn get_or_create_reports_new_contact() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contacts.json")
        .match_body(Matcher::Json(json!({
            "user": {"name": "Jane", "email": "jane@example.com"}
        })))
        .with_body(r#"{"user": {"id": 11, "name": "Jane", "email": "jane@example.com"}}"#)
        .create_async()
        .await;

    let (created, contact) = client(&server)
        .contacts()
        .get_or_create("Jane", "jane@example.com", &Fields::new())
        .await
        .unwrap();

    assert!(created);
    assert_eq!(contact["id"], 11);
}

#[tokio::test]
async fn get_or_create_returns_existing_contact() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contacts.json")
        .with_status(422)
        .with_body("taken")
        .create_async()
        .await;
    server
        .mock("GET", "/contacts.json")
        .match_query(deleted_query("jane@example.com"))
        .with_body("[]")
        .create_async()
        .await;
    let lookup = server
        .mock("GET", "/contacts.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), "all".into()),
            Matcher::UrlEncoded("query".into(), "email is jane@example.com".into()),
        ]))
        .with_body(r#"[{"user": {"id": 5, "name": "Jane", "email": "jane@example.com"}}]"#)
        .expect(1)
        .create_async()
        .await;

    let (created, contact) = client(&server)
        .contacts()
        .get_or_create("Jane", "jane@example.com", &Fields::new())
        .await
        .unwrap();

    assert!(!created);
    assert_eq!(contact["id"], 5);
    lookup.assert_async().await;
}

#[tokio::test]
async fn get_or_create_restores_deleted_contact_as_created() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contacts.json")
        .with_status(422)
        .with_body("taken")
        .create_async()
        .await;
    server
        .mock("GET", "/contacts.json")
        .match_query(deleted_query("jane@example.com"))
        .with_body(r#"[{"user": {"id": 9, "name": "Old Name", "email": "jane@example.com", "deleted": true}}]"#)
        .create_async()
        .await;
    let restore = server
        .mock("PUT", "/contacts/9.json")
        .with_body("")
        .expect(1)
        .create_async()
        .await;

    let (created, contact) = client(&server)
        .contacts()
        .get_or_create("Jane", "jane@example.com", &Fields::new())
        .await
        .unwrap();

    assert!(created);
    assert_eq!(contact["id"], 9);
    assert_eq!(contact["name"], "Jane");
    assert_eq!(contact["deleted"], false);
    restore.assert_async().await;
}

#[tokio::test]
async fn get_or_create_passes_other_errors_through() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contacts.json")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;
    let search = server
        .mock("GET", "/contacts.json")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .contacts()
        .get_or_create("Jane", "jane@example.com", &Fields::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some("boom"));
    search.assert_async().await;
}
