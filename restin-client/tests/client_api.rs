//! Client against a real server bound on an ephemeral port

use restin_client::{
    ClientConfig, ClientError, Dashboard, DashboardView, RestinClient, Role, RoleDashboard,
    Session,
};
use restin_server::auth::{JwtConfig, password};
use restin_server::db::DbService;
use restin_server::db::models::User;
use restin_server::db::repository::UserRepository;
use restin_server::{Config, ServerState};
use shared::models::{BookingCreate, ReportCategory, ReportCreate, ReportPriority, RestaurantCreate, RoomCreate};
use tokio::net::TcpListener;

const PASSWORD: &str = "secret123";

async fn spawn_server() -> (RestinClient, ServerState) {
    let config = Config::in_memory(JwtConfig::with_secret(
        "client-test-secret-0123456789abcdefghij",
    ));
    let db = DbService::memory().await.unwrap();
    let state = ServerState::new(config, db.db);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(restin_server::core::serve(
        listener,
        state.clone(),
        std::future::pending(),
    ));

    let client = RestinClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap();
    (client, state)
}

async fn seed_user(state: &ServerState, email: &str, role: Role) {
    UserRepository::new(state.get_db())
        .create(User {
            id: None,
            name: email.to_string(),
            email: email.to_string(),
            password: password::hash_password(PASSWORD).unwrap(),
            role,
            created_at: 0,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn health_needs_no_session() {
    let (client, _) = spawn_server().await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn unauthorized_response_clears_the_session() {
    let (client, _) = spawn_server().await;
    let mut session = Session::new();
    client
        .register(&mut session, "Guest", "guest@restin.test", PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.role(), Some(Role::Customer));

    let profile = client.profile(&mut session).await.unwrap();
    assert_eq!(profile.email, "guest@restin.test");

    // 403 keeps the session
    let err = client.list_users(&mut session).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert!(session.is_authenticated());

    // a forged token is rejected and forgets the identity
    let mut forged = Session::new();
    forged.establish(shared::models::LoginResponse {
        token: "forged".into(),
        user: profile,
    });
    let err = client.list_bookings(&mut forged).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!forged.is_authenticated());
    assert!(forged.user().is_none());
}

#[tokio::test]
async fn errors_carry_the_server_message() {
    let (client, state) = spawn_server().await;
    seed_user(&state, "admin@restin.test", Role::Admin).await;
    let mut session = Session::new();

    let err = client
        .login(&mut session, "admin@restin.test", "wrong-password")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "Invalid email or password"));

    client
        .login(&mut session, "admin@restin.test", PASSWORD)
        .await
        .unwrap();
    let err = client.get_room(&mut session, "room:missing").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "Room not found"));
}

#[tokio::test]
async fn dashboards_refresh_after_mutations() {
    let (client, state) = spawn_server().await;
    seed_user(&state, "admin@restin.test", Role::Admin).await;
    seed_user(&state, "staff@restin.test", Role::Staff).await;

    let mut admin = Session::new();
    client
        .login(&mut admin, "admin@restin.test", PASSWORD)
        .await
        .unwrap();
    let restaurant = client
        .create_restaurant(
            &mut admin,
            &RestaurantCreate {
                name: "Harbour".into(),
                description: "Seafood".into(),
                location: "Pier 2".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let room = client
        .create_room(
            &mut admin,
            &RoomCreate {
                name: "Deck".into(),
                restaurant: restaurant.id.clone(),
                capacity: 4,
                price_per_hour: Some(60.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // customer books from their dashboard
    let mut customer = Session::new();
    client
        .register(&mut customer, "Guest", "guest@restin.test", PASSWORD)
        .await
        .unwrap();
    let customer_board = match RoleDashboard::for_session(&customer) {
        Some(RoleDashboard::Customer(board)) => board,
        other => panic!("unexpected dashboard: {other:?}"),
    };
    let view = customer_board
        .book(
            &client,
            &mut customer,
            &BookingCreate {
                room: room.id.clone(),
                date: "2030-06-01".into(),
                time: "20:00".into(),
                guests: 3,
                duration: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(view.restaurants.len(), 1);
    assert_eq!(view.restaurants[0].room_count, 1);
    assert_eq!(view.bookings.len(), 1);
    assert_eq!(view.bookings[0].total_amount, 120.0);
    let booking_id = view.bookings[0].id.clone();

    // staff confirms and files a report
    let mut staff = Session::new();
    client
        .login(&mut staff, "staff@restin.test", PASSWORD)
        .await
        .unwrap();
    let staff_board = match RoleDashboard::for_session(&staff) {
        Some(RoleDashboard::Staff(board)) => board,
        other => panic!("unexpected dashboard: {other:?}"),
    };
    let view = staff_board
        .confirm_booking(&client, &mut staff, &booking_id)
        .await
        .unwrap();
    assert_eq!(view.operations.pending_bookings, 0);
    assert_eq!(
        view.bookings[0].status,
        shared::models::BookingStatus::Confirmed
    );

    let view = staff_board
        .file_report(
            &client,
            &mut staff,
            &ReportCreate {
                title: "Wobbly table".into(),
                description: "Table 4 on the deck".into(),
                category: ReportCategory::Maintenance,
                priority: Some(ReportPriority::Low),
                room_id: Some(room.id.clone()),
            },
        )
        .await
        .unwrap();
    assert_eq!(view.reports.len(), 1);
    let report_id = view.reports[0].id.clone();

    // admin resolves from the overview
    let board = RoleDashboard::for_session(&admin).unwrap();
    let DashboardView::Admin(before) = board.load(&client, &mut admin).await.unwrap() else {
        panic!("admin session must load the admin view");
    };
    assert_eq!(before.overview.reports_by_status.pending, 1);
    assert_eq!(before.overview.total_revenue, 120.0);

    let RoleDashboard::Admin(admin_board) = board else {
        panic!("admin session must map to the admin dashboard");
    };
    let after = admin_board
        .set_report_status(&client, &mut admin, &report_id, shared::models::ReportStatus::Resolved)
        .await
        .unwrap();
    assert_eq!(after.overview.reports_by_status.resolved, 1);
    let resolved = &after.reports[0];
    assert_eq!(
        resolved.resolved_by.as_ref().map(|u| u.id.as_str()),
        admin.user().map(|u| u.id.as_str())
    );
}
