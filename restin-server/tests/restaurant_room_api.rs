mod common;

use common::TestApp;
use http::StatusCode;
use restin_server::db::repository::{RoomRepository, parse_record_id};
use serde_json::json;

#[tokio::test]
async fn restaurant_create_applies_defaults() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;

    let (status, body) = app
        .post(
            "/api/restaurants",
            &admin,
            json!({ "name": "Seaside", "description": "Fresh fish", "location": "Pier 1" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["phone"], "+1 (555) 000-0000");
    assert_eq!(body["openingHours"], "9:00 AM - 11:00 PM");
    assert_eq!(body["rating"], 4.5);
    assert_eq!(body["cuisine"], json!(["International"]));
    assert_eq!(body["facilities"], json!(["Free WiFi", "Restaurant", "Parking"]));
    assert!(body["id"].as_str().unwrap().starts_with("restaurant:"));
}

#[tokio::test]
async fn restaurant_list_counts_rooms_and_detail_embeds_them() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (customer, _) = app.customer("guest@restin.test").await;
    let r1 = app.create_restaurant(&admin, "One").await;
    let r2 = app.create_restaurant(&admin, "Two").await;
    app.create_room(&admin, &r1, json!({ "name": "A" })).await;
    app.create_room(&admin, &r1, json!({ "name": "B" })).await;

    let (status, list) = app.get("/api/restaurants", &customer).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    let count_of = |id: &str| {
        list.iter()
            .find(|r| r["id"] == id)
            .map(|r| r["roomCount"].as_u64().unwrap())
    };
    assert_eq!(count_of(&r1), Some(2));
    assert_eq!(count_of(&r2), Some(0));

    let (status, detail) = app.get(&format!("/api/restaurants/{r1}"), &customer).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "One");
    assert_eq!(detail["rooms"].as_array().unwrap().len(), 2);
    assert_eq!(detail["rooms"][0]["restaurant"]["name"], "One");
}

#[tokio::test]
async fn deleting_a_restaurant_removes_its_rooms() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let doomed = app.create_restaurant(&admin, "Doomed").await;
    let kept = app.create_restaurant(&admin, "Kept").await;
    app.create_room(&admin, &doomed, json!({ "name": "A" })).await;
    app.create_room(&admin, &doomed, json!({ "name": "B" })).await;
    app.create_room(&admin, &kept, json!({ "name": "C" })).await;

    let (status, body) = app.delete(&format!("/api/restaurants/{doomed}"), &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Restaurant deleted successfully");

    let rooms = RoomRepository::new(app.state.get_db());
    let doomed_id = parse_record_id("restaurant", &doomed).unwrap();
    assert!(rooms.find_all(Some(&doomed_id)).await.unwrap().is_empty());
    assert_eq!(rooms.find_all(None).await.unwrap().len(), 1);

    let (status, _) = app.get(&format!("/api/restaurants/{doomed}"), &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_create_requires_an_existing_restaurant() {
    let app = TestApp::new().await;
    let (staff, _) = app.staff().await;

    let (status, body) = app
        .post(
            "/api/rooms",
            &staff,
            json!({ "name": "Ghost", "restaurant": "restaurant:missing", "capacity": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Restaurant not found");

    let (status, _) = app
        .post(
            "/api/rooms",
            &staff,
            json!({ "name": "Ghost", "restaurant": "booking:wrong", "capacity": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn staff_manage_rooms_but_only_admin_deletes() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff, _) = app.staff().await;
    let restaurant = app.create_restaurant(&admin, "Main").await;

    let room = app.create_room(&staff, &restaurant, json!({})).await;
    assert_eq!(room["type"], "shared");
    assert_eq!(room["isAvailable"], true);
    let id = room["id"].as_str().unwrap();

    let (status, updated) = app
        .patch(
            &format!("/api/rooms/{id}"),
            &staff,
            Some(json!({ "isAvailable": false, "capacity": 6 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isAvailable"], false);
    assert_eq!(updated["capacity"], 6);
    assert_eq!(updated["needsMaintenance"], false);

    let (status, _) = app.delete(&format!("/api/rooms/{id}"), &staff).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.delete(&format!("/api/rooms/{id}"), &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Room deleted successfully");

    let (status, _) = app.get(&format!("/api/rooms/{id}"), &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_list_filters_by_restaurant() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (customer, _) = app.customer("guest@restin.test").await;
    let r1 = app.create_restaurant(&admin, "One").await;
    let r2 = app.create_restaurant(&admin, "Two").await;
    app.create_room(&admin, &r1, json!({ "name": "A" })).await;
    app.create_room(&admin, &r2, json!({ "name": "B" })).await;

    let (_, all) = app.get("/api/rooms", &customer).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, by_query) = app.get(&format!("/api/rooms?restaurant={r1}"), &customer).await;
    let (_, by_path) = app.get(&format!("/api/rooms/restaurant/{r1}"), &customer).await;
    assert_eq!(by_query, by_path);
    assert_eq!(by_query.as_array().unwrap().len(), 1);
    assert_eq!(by_query[0]["name"], "A");
}

#[tokio::test]
async fn clean_reopens_room_regardless_of_maintenance() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let restaurant = app.create_restaurant(&admin, "Main").await;
    let room = app.create_room(&admin, &restaurant, json!({})).await;
    let id = room["id"].as_str().unwrap();

    let (status, maintained) = app
        .patch(&format!("/api/rooms/{id}/maintenance"), &admin, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(maintained["isAvailable"], false);
    assert_eq!(maintained["needsMaintenance"], true);
    assert_eq!(maintained["maintenanceReason"], "Scheduled maintenance");

    app.patch(
        &format!("/api/rooms/{id}"),
        &admin,
        Some(json!({ "needsCleaning": true })),
    )
    .await;

    let before = shared::util::now_millis();
    let (status, cleaned) = app
        .patch(&format!("/api/rooms/{id}/clean"), &admin, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleaned["needsCleaning"], false);
    assert_eq!(cleaned["isAvailable"], true);
    assert_eq!(cleaned["needsMaintenance"], true);
    assert!(cleaned["lastCleaned"].as_i64().unwrap() >= before);
}

#[tokio::test]
async fn maintenance_keeps_supplied_reason() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff, _) = app.staff().await;
    let restaurant = app.create_restaurant(&admin, "Main").await;
    let room = app.create_room(&admin, &restaurant, json!({})).await;
    let id = room["id"].as_str().unwrap();

    let (status, body) = app
        .patch(
            &format!("/api/rooms/{id}/maintenance"),
            &staff,
            Some(json!({ "reason": "Broken projector" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maintenanceReason"], "Broken projector");
    assert_eq!(body["isAvailable"], false);
}
