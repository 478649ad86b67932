mod common;

use common::TestApp;
use http::StatusCode;
use shared::models::Role;
use serde_json::json;

fn report() -> serde_json::Value {
    json!({
        "title": "Leaking tap",
        "description": "Bathroom tap drips all night",
        "category": "maintenance",
        "priority": "high",
    })
}

/// Staff files a report, admin resolves it without naming a resolver
#[tokio::test]
async fn resolving_records_the_caller_end_to_end() {
    let app = TestApp::new().await;
    let (admin, admin_id) = app.admin().await;
    let (staff, staff_id) = app.staff().await;

    let (status, created) = app.post("/api/reports", &staff, report()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["category"], "maintenance");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["staff_id"]["id"], staff_id);
    assert!(created["resolved_by"].is_null());

    let uri = format!("/api/reports/{}", created["id"].as_str().unwrap());
    let (status, resolved) = app
        .patch(&uri, &admin, Some(json!({ "status": "resolved" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolved["status"], "resolved");
    assert_eq!(resolved["resolved_by"]["id"], admin_id);
    assert!(resolved["resolved_at"].as_i64().is_some());
    assert!(resolved["updated_at"].as_i64().unwrap() >= created["updated_at"].as_i64().unwrap());
}

#[tokio::test]
async fn original_resolver_is_never_overwritten() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff, staff_id) = app.staff().await;

    let (_, created) = app.post("/api/reports", &staff, report()).await;
    let uri = format!("/api/reports/{}", created["id"].as_str().unwrap());

    let (_, first) = app
        .patch(&uri, &staff, Some(json!({ "status": "resolved" })))
        .await;
    assert_eq!(first["resolved_by"]["id"], staff_id);

    let (status, second) = app
        .patch(
            &uri,
            &admin,
            Some(json!({ "status": "resolved", "priority": "low" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["priority"], "low");
    assert_eq!(second["resolved_by"]["id"], staff_id);
    assert_eq!(second["resolved_at"], first["resolved_at"]);
}

#[tokio::test]
async fn explicit_resolver_is_honoured() {
    let app = TestApp::new().await;
    let (admin, admin_id) = app.admin().await;
    let (staff, _) = app.staff().await;

    let (_, created) = app.post("/api/reports", &admin, report()).await;
    let uri = format!("/api/reports/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .patch(
            &uri,
            &staff,
            Some(json!({ "status": "resolved", "resolved_by": admin_id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resolved_by"]["id"], admin_id);
}

#[tokio::test]
async fn unknown_resolver_is_not_found() {
    let app = TestApp::new().await;
    let (staff, _) = app.staff().await;

    let (_, created) = app.post("/api/reports", &staff, report()).await;
    let uri = format!("/api/reports/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .patch(
            &uri,
            &staff,
            Some(json!({ "status": "resolved", "resolved_by": "user:nobody" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    // nothing was written
    let (_, list) = app.get("/api/reports", &staff).await;
    assert_eq!(list[0]["status"], "pending");
    assert!(list[0]["resolved_by"].is_null());
}

#[tokio::test]
async fn closed_reports_cannot_reopen() {
    let app = TestApp::new().await;
    let (staff, _) = app.staff().await;

    let (_, created) = app.post("/api/reports", &staff, report()).await;
    let uri = format!("/api/reports/{}", created["id"].as_str().unwrap());

    let (status, _) = app
        .patch(&uri, &staff, Some(json!({ "status": "closed" })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .patch(&uri, &staff, Some(json!({ "status": "in_progress" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn staff_list_only_their_own_reports() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff_a, staff_a_id) = app.staff().await;
    let (staff_b, _) = app.user_with_role("second@restin.test", Role::Staff).await;

    app.post("/api/reports", &staff_a, report()).await;
    app.post("/api/reports", &staff_b, report()).await;
    app.post("/api/reports", &staff_b, report()).await;

    let (status, own) = app.get("/api/reports", &staff_a).await;
    assert_eq!(status, StatusCode::OK);
    let own = own.as_array().unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["staff_id"]["id"], staff_a_id);

    let (_, all) = app.get("/api/reports", &admin).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn report_can_reference_a_room() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff, _) = app.staff().await;
    let restaurant = app.create_restaurant(&admin, "R").await;
    let room = app.create_room(&admin, &restaurant, json!({ "name": "Suite" })).await;

    let mut payload = report();
    payload["room_id"] = room["id"].clone();
    let (status, created) = app.post("/api/reports", &staff, payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["room_id"]["name"], "Suite");

    let mut payload = report();
    payload["room_id"] = json!("room:missing");
    let (status, _) = app.post("/api/reports", &staff, payload).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_admin_deletes_reports() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff, _) = app.staff().await;

    let (_, created) = app.post("/api/reports", &staff, report()).await;
    let uri = format!("/api/reports/{}", created["id"].as_str().unwrap());

    let (status, _) = app.delete(&uri, &staff).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.delete(&uri, &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Report deleted successfully");

    let (status, _) = app.delete(&uri, &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
