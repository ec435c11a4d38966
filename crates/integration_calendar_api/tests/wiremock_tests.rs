//! Integration tests for the calendar API client (wiremock-based)

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{
    CalendarTypeDraft, CommutePlace, EventDraft, EventId, EventUpdate, GeoLocation, ReminderKind,
};
use integration_calendar_api::{
    ApiError, CalendarApiClient, CalendarApiConfig, EventQuery, FileUpload, LegacyApiClient,
    LegacyApiConfig, MemoryTokenStore, TokenStore,
};
use secrecy::ExposeSecret;
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_exists, method, path, query_param,
};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const TOKEN: &str = "4b8d5a0e-2d6b-4d43-a7f5-7d0e4f6f9c11";
const EVENT_ID: &str = "0f3c1f7e-9f4e-4f6c-8f1a-2b3c4d5e6f70";

fn client_for(server: &MockServer) -> CalendarApiClient {
    let config = CalendarApiConfig::for_testing().with_base_url(format!("{}/api/v1", server.uri()));
    CalendarApiClient::new(&config).unwrap()
}

fn login_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "access_token": TOKEN,
            "expires_in": 604_800,
            "is_new_user": false,
            "user": {
                "account_id": "kai",
                "home_address": "1 Home Rd",
                "school_address": "2 School Ln",
                "current_location": null,
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-01T00:00:00Z"
            }
        },
        "server_time": "2026-03-14T08:00:00+00:00"
    })
}

fn event_json() -> serde_json::Value {
    json!({
        "id": EVENT_ID,
        "title": "Therapy",
        "date": "2026-03-14",
        "is_all_day": false,
        "start_time": "15:00:00",
        "end_time": "17:00:00",
        "location": "Clinic",
        "description": "",
        "type_id": "routine",
        "color": "#EC4899",
        "completed": false,
        "completed_at": null,
        "expanded": false,
        "links": [],
        "attachment": null,
        "created_at": "2026-03-01T10:00:00Z",
        "updated_at": "2026-03-01T10:00:00Z"
    })
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "account_id": "kai" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(server)
        .await;
}

// ============================================================================
// Token lifecycle
// ============================================================================

#[tokio::test]
async fn login_stores_token_and_later_requests_carry_it() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": login_body()["data"]["user"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.has_access_token());

    let response = client.auth().login("kai").await.unwrap();
    assert!(response.success);
    assert_eq!(client.access_token().unwrap().expose_secret(), TOKEN);

    let user = client.user().get().await.unwrap().into_data("/user").unwrap();
    assert_eq!(user.account_id, "kai");
    assert!(user.has_commute_addresses());
}

#[tokio::test]
async fn login_without_success_keeps_previous_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.auth().login("kai").await.unwrap();
    assert!(!response.success);
    assert!(!client.has_access_token());
}

#[tokio::test]
async fn login_with_empty_token_is_not_stored() {
    let server = MockServer::start().await;
    let mut body = login_body();
    body["data"]["access_token"] = json!("");
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let config = CalendarApiConfig::for_testing().with_base_url(format!("{}/api/v1", server.uri()));
    let client = CalendarApiClient::with_token_store(&config, store.clone()).unwrap();

    let response = client.auth().login("kai").await.unwrap();
    assert!(response.success);
    assert!(!client.has_access_token());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn login_writes_through_to_token_store() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let store = Arc::new(MemoryTokenStore::new());
    let config = CalendarApiConfig::for_testing().with_base_url(format!("{}/api/v1", server.uri()));
    let client = CalendarApiClient::with_token_store(&config, store.clone()).unwrap();

    client.auth().login("kai").await.unwrap();
    assert_eq!(store.load().unwrap().expose_secret(), TOKEN);
}

#[tokio::test]
async fn logout_clears_token_on_success() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Logged out successfully"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.auth().login("kai").await.unwrap();

    let response = client.auth().logout().await.unwrap();
    assert_eq!(response.message.as_deref(), Some("Logged out successfully"));
    assert!(!client.has_access_token());
}

#[tokio::test]
async fn logout_clears_token_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid token"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("expired"));
    let config = CalendarApiConfig::for_testing().with_base_url(format!("{}/api/v1", server.uri()));
    let client = CalendarApiClient::with_token_store(&config, store.clone()).unwrap();
    assert!(client.has_access_token());

    let err = client.auth().logout().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!client.has_access_token());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/time"))
        .respond_with(|req: &Request| {
            let status = if req.headers.contains_key("authorization") { 400 } else { 200 };
            ResponseTemplate::new(status).set_body_json(json!({
                "success": true,
                "data": {
                    "server_time": "2026-03-14T08:00:00+00:00",
                    "timezone": "UTC",
                    "date": "2026-03-14",
                    "timestamp": 1_773_475_200_000_i64
                }
            }))
        })
        .mount(&server)
        .await;

    let client = client_for(&server);
    let time = client.time().server_time().await.unwrap().into_data("/time").unwrap();
    assert_eq!(time.timezone, "UTC");
    assert_eq!(time.timestamp, 1_773_475_200_000);
}

// ============================================================================
// Request building
// ============================================================================

#[tokio::test]
async fn events_list_sends_only_present_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(query_param("start_date", "2026-03-01"))
        .and(query_param("end_date", "2026-04-04"))
        .and(query_param("completed", "false"))
        .respond_with(|req: &Request| {
            let keys: Vec<String> = req.url.query_pairs().map(|(k, _)| k.into_owned()).collect();
            let status = if keys == ["start_date", "end_date", "completed"] { 200 } else { 400 };
            ResponseTemplate::new(status).set_body_json(json!({
                "success": true,
                "data": { "events": [event_json()], "total": 1 }
            }))
        })
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = EventQuery::for_range(
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 4, 4).unwrap(),
    )
    .with_completed(false);

    let list = client.events().list(&query).await.unwrap().into_data("/events").unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.events[0].title, "Therapy");
    assert_eq!(list.events[0].time_range_label(), "3PM to 5PM");
}

#[tokio::test]
async fn events_list_without_filters_has_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .respond_with(|req: &Request| {
            let status = if req.url.query().is_none() { 200 } else { 400 };
            ResponseTemplate::new(status).set_body_json(json!({
                "success": true,
                "data": { "events": [], "total": 0 }
            }))
        })
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = client
        .events()
        .list(&EventQuery::new().with_type(""))
        .await
        .unwrap()
        .into_data("/events")
        .unwrap();
    assert!(list.events.is_empty());
}

#[tokio::test]
async fn calendar_type_path_segment_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/calendar-types/my%20type/visibility"))
        .and(body_json(json!({ "is_visible": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "type_id": "my type",
                "name": "My Type",
                "color": "#3B82F6",
                "is_visible": false,
                "is_deletable": true,
                "event_count": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ty = client
        .calendar_types()
        .set_visibility("my type", false)
        .await
        .unwrap()
        .into_data("/calendar-types")
        .unwrap();
    assert!(!ty.is_visible);
}

#[tokio::test]
async fn reminders_and_commute_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/reminders"))
        .and(query_param("date", "2026-03-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": "rem_weather",
                "type": "weather",
                "title": "Weather",
                "subtitle": "Cloudy, 18°C - 25°C",
                "icon": "cloud",
                "bg_color": "#EAF2FD",
                "icon_bg": "#3B82F6",
                "data": { "temp_min": 18, "temp_max": 25 }
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/location/commute"))
        .and(query_param("from", "school"))
        .and(query_param("to", "home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "from": { "type": "school", "address": "2 School Ln", "coordinates": { "lat": 22.4196, "lng": 114.2068 } },
                "to": { "type": "home", "address": "1 Home Rd", "coordinates": { "lat": 22.3964, "lng": 114.1095 } },
                "routes": [{ "mode": "driving", "duration_minutes": 25, "distance_km": 8.5 }],
                "maps_url": "https://www.google.com/maps/dir/"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reminders = client
        .reminders()
        .list(NaiveDate::from_ymd_opt(2026, 3, 14))
        .await
        .unwrap()
        .into_data("/reminders")
        .unwrap();
    assert_eq!(reminders[0].kind, ReminderKind::Weather);

    let commute = client
        .commute()
        .get(CommutePlace::School, CommutePlace::Home)
        .await
        .unwrap()
        .into_data("/location/commute")
        .unwrap();
    assert_eq!(commute.fastest_route().unwrap().duration_minutes, 25);
}

#[tokio::test]
async fn location_report_sends_null_accuracy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/location"))
        .and(body_json(json!({ "latitude": 22.3964, "longitude": 114.1095, "accuracy": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "location_id": "9c1f",
                "latitude": 22.3964,
                "longitude": 114.1095,
                "accuracy": null,
                "timestamp": "2026-03-14T08:00:00+00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let position = GeoLocation::new(22.3964, 114.1095).unwrap();
    let location = client
        .user()
        .update_location(position, None)
        .await
        .unwrap()
        .into_data("/user/location")
        .unwrap();
    assert_eq!(location.location_id.as_deref(), Some("9c1f"));
}

#[tokio::test]
async fn missing_location_is_absent_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/location"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": null })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.user().location().await.unwrap();
    assert!(response.success);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn event_update_and_completion() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/events/{EVENT_ID}")))
        .and(body_json(json!({ "title": "Therapy (moved)", "attachment_id": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": event_json()
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/events/{EVENT_ID}/complete")))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": EVENT_ID, "completed": true, "completed_at": "2026-03-14T09:00:00Z" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = EventId::parse(EVENT_ID).unwrap();
    let update = EventUpdate {
        title: Some("Therapy (moved)".to_string()),
        attachment_id: Some(None),
        ..EventUpdate::default()
    };
    client.events().update(id, &update).await.unwrap();

    let state = client
        .events()
        .set_completed(id, true)
        .await
        .unwrap()
        .into_data("complete")
        .unwrap();
    assert!(state.completed);
    assert!(state.completed_at.is_some());
}

#[tokio::test]
async fn remove_link_sends_delete_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/events/{EVENT_ID}/links")))
        .and(body_json(json!({ "url": "https://example.com/a" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "links": ["https://example.com/b"] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let links = client
        .events()
        .remove_link(EventId::parse(EVENT_ID).unwrap(), "https://example.com/a")
        .await
        .unwrap()
        .into_data("links")
        .unwrap();
    assert_eq!(links.links, ["https://example.com/b"]);
}

#[tokio::test]
async fn invalid_drafts_never_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let err = client
        .events()
        .create(&EventDraft::all_day("", date, "general"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));

    let err = client
        .calendar_types()
        .create(&CalendarTypeDraft::new("Gym", "#".repeat(30)))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn error_status_carries_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/events/{EVENT_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": { "code": "NOT_FOUND", "message": "Event not found" },
            "server_time": "2026-03-14T08:00:00+00:00"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .events()
        .get(EventId::parse(EVENT_ID).unwrap())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error_code(), Some("NOT_FOUND"));
    assert_eq!(err.error_message(), Some("Event not found"));
}

#[tokio::test]
async fn non_json_error_body_becomes_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/time"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.time().server_time().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.body(), Some(&json!("Bad Gateway")));
}

#[tokio::test]
async fn non_json_success_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.time().server_time().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn unreachable_backend_is_connection_failure() {
    let config = CalendarApiConfig::for_testing().with_base_url("http://127.0.0.1:9/api/v1");
    let client = CalendarApiClient::new(&config).unwrap();
    let err = client.time().server_time().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::ConnectionFailed(_) | ApiError::Timeout { .. }
    ));
}

// ============================================================================
// Upload
// ============================================================================

#[tokio::test]
async fn upload_sends_multipart_file_part_with_bearer() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/files/upload"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_string_contains("name=\"file\"; filename=\"Docs.pdf\""))
        .and(body_string_contains("%PDF-1.7"))
        .respond_with(|req: &Request| {
            let content_type = req
                .headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let status = if content_type.starts_with("multipart/form-data") { 201 } else { 400 };
            ResponseTemplate::new(status).set_body_json(json!({
                "success": true,
                "data": {
                    "id": "7d1e5c2a-3b4f-4a6e-9c8d-1f2e3d4c5b6a",
                    "name": "Docs.pdf",
                    "url": "http://localhost:8000/media/uploads/Docs.pdf",
                    "size": 8,
                    "mime_type": "application/pdf",
                    "created_at": "2026-03-14T08:00:00Z"
                }
            }))
        })
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.auth().login("kai").await.unwrap();

    let upload = FileUpload::new("Docs.pdf", b"%PDF-1.7".to_vec()).with_mime_type("application/pdf");
    let file = client
        .files()
        .upload(upload)
        .await
        .unwrap()
        .into_data("/files/upload")
        .unwrap();
    assert_eq!(file.name, "Docs.pdf");
    assert_eq!(file.size, 8);
}

#[tokio::test]
async fn oversized_upload_rejection_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/files/upload"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({
            "success": false,
            "error": { "code": "FILE_TOO_LARGE", "message": "File size exceeds 10MB limit" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .files()
        .upload(FileUpload::new("big.bin", vec![1u8; 16]))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(413));
    assert_eq!(err.error_code(), Some("FILE_TOO_LARGE"));
}

// ============================================================================
// Legacy client
// ============================================================================

#[tokio::test]
async fn legacy_client_returns_raw_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "title": "Therapy" }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/calendar-types"))
        .and(body_json(json!({ "name": "Gym", "color": "#F59E0B" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 6, "name": "Gym" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reminders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let config = LegacyApiConfig {
        base_url: format!("{}/api/", server.uri()),
        ..LegacyApiConfig::default()
    };
    let client = LegacyApiClient::new(&config).unwrap();

    let events = client.get_events().await.unwrap();
    assert_eq!(events[0]["title"], "Therapy");

    let created = client
        .create_calendar_type(&json!({ "name": "Gym", "color": "#F59E0B" }))
        .await
        .unwrap();
    assert_eq!(created["id"], 6);

    let err = client.get_reminders().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.error_message(), Some("boom"));
}
