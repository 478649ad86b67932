mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn admin_manages_users() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;

    let (status, created) = app
        .post(
            "/api/users",
            &admin,
            json!({ "name": "Sam", "email": "sam@restin.test", "password": "hunter22", "role": "staff" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "staff");
    assert!(created.get("password").is_none());
    let uri = format!("/api/users/{}", created["id"].as_str().unwrap());

    let (status, _) = app
        .post(
            "/api/users",
            &admin,
            json!({ "name": "Dup", "email": "SAM@restin.test", "password": "hunter22", "role": "customer" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = app
        .put(&uri, &admin, json!({ "name": "Samantha", "password": "newpass1" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Samantha");

    // re-hashed password works for login
    let (status, _) = app
        .request(
            http::Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "sam@restin.test", "password": "newpass1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.get("/api/users", &admin).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert!(list.as_array().unwrap().iter().all(|u| u.get("password").is_none()));

    let (status, body) = app.delete(&uri, &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, _) = app.get(&uri, &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_cannot_delete_self() {
    let app = TestApp::new().await;
    let (admin, admin_id) = app.admin().await;

    let (status, _) = app.delete(&format!("/api/users/{admin_id}"), &admin).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get(&format!("/api/users/{admin_id}"), &admin).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn stats_reduce_current_data() {
    let app = TestApp::new().await;
    let (admin, _) = app.admin().await;
    let (staff, _) = app.staff().await;
    let (customer, _) = app.customer("guest@restin.test").await;

    let restaurant = app.create_restaurant(&admin, "R").await;
    let open = app
        .create_room(&admin, &restaurant, json!({ "name": "Open", "capacity": 4, "pricePerHour": 80.0 }))
        .await;
    let closed = app
        .create_room(&admin, &restaurant, json!({ "name": "Closed" }))
        .await;
    app.patch(
        &format!("/api/rooms/{}/maintenance", closed["id"].as_str().unwrap()),
        &staff,
        None,
    )
    .await;

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let open_id = open["id"].as_str().unwrap();
    let (_, kept) = app
        .post(
            "/api/bookings",
            &customer,
            json!({ "room": open_id, "date": today, "time": "12:00", "guests": 2, "duration": 1 }),
        )
        .await;
    let (_, dropped) = app
        .post(
            "/api/bookings",
            &customer,
            json!({ "room": open_id, "date": "2030-01-01", "time": "12:00", "guests": 2 }),
        )
        .await;
    app.delete(&format!("/api/bookings/{}", dropped["id"].as_str().unwrap()), &customer)
        .await;
    app.post(
        "/api/reports",
        &staff,
        json!({ "title": "t", "description": "d", "category": "cleaning" }),
    )
    .await;
    assert_eq!(kept["status"], "pending");

    let (status, overview) = app.get("/api/stats/overview", &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(overview["totalRevenue"], 80.0);
    assert_eq!(overview["totalBookings"], 2);
    assert_eq!(overview["totalUsers"], 3);
    assert_eq!(overview["occupancyRate"], 50);
    assert_eq!(overview["bookingsByStatus"]["pending"], 1);
    assert_eq!(overview["bookingsByStatus"]["cancelled"], 1);
    assert_eq!(overview["reportsByStatus"]["pending"], 1);

    let (status, ops) = app.get("/api/stats/operations", &staff).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ops["totalRooms"], 2);
    assert_eq!(ops["availableRooms"], 1);
    assert_eq!(ops["pendingBookings"], 1);
    assert_eq!(ops["todayCheckIns"], 1);
    assert_eq!(ops["roomsNeedingMaintenance"], 1);

    let (status, _) = app.get("/api/stats/overview", &staff).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.get("/api/stats/operations", &customer).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
