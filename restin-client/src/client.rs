//! Typed Restin API client
//!
//! Every authenticated call takes the caller's [`Session`] explicitly. A 401
//! from any endpoint clears that session.

use shared::models::{
    Booking, BookingCreate, BookingStatus, BookingStatusUpdate, LoginRequest, LoginResponse,
    MaintenanceRequest, RegisterRequest, Report, ReportCreate, ReportStatus, ReportUpdate,
    Restaurant, RestaurantCreate, RestaurantDetail, RestaurantListItem, RestaurantUpdate, Room,
    RoomCreate, RoomUpdate, User, UserCreate, UserUpdate,
};
use shared::stats::{OperationsStats, OverviewStats};
use shared::{HealthResponse, MessageResponse};

use crate::{ClientConfig, ClientResult, HttpClient, Session};

#[derive(Debug, Clone)]
pub struct RestinClient {
    http: HttpClient,
}

impl RestinClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========== Health ==========

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.http.get("/api/health", None).await
    }

    // ========== Auth ==========

    /// Login and populate `session`
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> ClientResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.http.post("/api/auth/login", None, &request).await?;
        let user = response.user.clone();
        session.establish(response);
        tracing::info!(user_id = %user.id, role = %user.role, "Logged in");
        Ok(user)
    }

    /// Self-registration as a customer; populates `session`
    pub async fn register(
        &self,
        session: &mut Session,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<User> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .http
            .post("/api/auth/register", None, &request)
            .await?;
        let user = response.user.clone();
        session.establish(response);
        Ok(user)
    }

    /// Re-read the caller and refresh the session's user
    pub async fn profile(&self, session: &mut Session) -> ClientResult<User> {
        let result = self.http.get("/api/auth/profile", session.token()).await;
        let user: User = session.observe(result)?;
        session.set_user(user.clone());
        Ok(user)
    }

    /// Tokens are stateless; logout only forgets the session
    pub fn logout(&self, session: &mut Session) {
        session.clear();
    }

    // ========== Restaurants ==========

    pub async fn list_restaurants(
        &self,
        session: &mut Session,
    ) -> ClientResult<Vec<RestaurantListItem>> {
        let result = self.http.get("/api/restaurants", session.token()).await;
        session.observe(result)
    }

    pub async fn get_restaurant(
        &self,
        session: &mut Session,
        id: &str,
    ) -> ClientResult<RestaurantDetail> {
        let result = self
            .http
            .get(&format!("/api/restaurants/{id}"), session.token())
            .await;
        session.observe(result)
    }

    pub async fn create_restaurant(
        &self,
        session: &mut Session,
        payload: &RestaurantCreate,
    ) -> ClientResult<Restaurant> {
        let result = self
            .http
            .post("/api/restaurants", session.token(), payload)
            .await;
        session.observe(result)
    }

    pub async fn update_restaurant(
        &self,
        session: &mut Session,
        id: &str,
        payload: &RestaurantUpdate,
    ) -> ClientResult<Restaurant> {
        let result = self
            .http
            .put(&format!("/api/restaurants/{id}"), session.token(), payload)
            .await;
        session.observe(result)
    }

    /// Also removes every room of the restaurant
    pub async fn delete_restaurant(
        &self,
        session: &mut Session,
        id: &str,
    ) -> ClientResult<MessageResponse> {
        let result = self
            .http
            .delete(&format!("/api/restaurants/{id}"), session.token())
            .await;
        session.observe(result)
    }

    // ========== Rooms ==========

    pub async fn list_rooms(
        &self,
        session: &mut Session,
        restaurant: Option<&str>,
    ) -> ClientResult<Vec<Room>> {
        let path = match restaurant {
            Some(id) => format!("/api/rooms/restaurant/{id}"),
            None => "/api/rooms".to_string(),
        };
        let result = self.http.get(&path, session.token()).await;
        session.observe(result)
    }

    pub async fn get_room(&self, session: &mut Session, id: &str) -> ClientResult<Room> {
        let result = self
            .http
            .get(&format!("/api/rooms/{id}"), session.token())
            .await;
        session.observe(result)
    }

    pub async fn create_room(
        &self,
        session: &mut Session,
        payload: &RoomCreate,
    ) -> ClientResult<Room> {
        let result = self.http.post("/api/rooms", session.token(), payload).await;
        session.observe(result)
    }

    /// Partial update (`PATCH`)
    pub async fn update_room(
        &self,
        session: &mut Session,
        id: &str,
        payload: &RoomUpdate,
    ) -> ClientResult<Room> {
        let result = self
            .http
            .patch(&format!("/api/rooms/{id}"), session.token(), Some(payload))
            .await;
        session.observe(result)
    }

    pub async fn delete_room(
        &self,
        session: &mut Session,
        id: &str,
    ) -> ClientResult<MessageResponse> {
        let result = self
            .http
            .delete(&format!("/api/rooms/{id}"), session.token())
            .await;
        session.observe(result)
    }

    pub async fn mark_room_cleaned(&self, session: &mut Session, id: &str) -> ClientResult<Room> {
        let result = self
            .http
            .patch(&format!("/api/rooms/{id}/clean"), session.token(), None::<&()>)
            .await;
        session.observe(result)
    }

    pub async fn mark_room_maintenance(
        &self,
        session: &mut Session,
        id: &str,
        reason: Option<&str>,
    ) -> ClientResult<Room> {
        let body = MaintenanceRequest {
            reason: reason.map(str::to_string),
        };
        let result = self
            .http
            .patch(
                &format!("/api/rooms/{id}/maintenance"),
                session.token(),
                Some(&body),
            )
            .await;
        session.observe(result)
    }

    // ========== Bookings ==========

    pub async fn create_booking(
        &self,
        session: &mut Session,
        payload: &BookingCreate,
    ) -> ClientResult<Booking> {
        let result = self
            .http
            .post("/api/bookings", session.token(), payload)
            .await;
        session.observe(result)
    }

    /// Customers receive only their own bookings
    pub async fn list_bookings(&self, session: &mut Session) -> ClientResult<Vec<Booking>> {
        let result = self.http.get("/api/bookings", session.token()).await;
        session.observe(result)
    }

    pub async fn get_booking(&self, session: &mut Session, id: &str) -> ClientResult<Booking> {
        let result = self
            .http
            .get(&format!("/api/bookings/{id}"), session.token())
            .await;
        session.observe(result)
    }

    pub async fn update_booking_status(
        &self,
        session: &mut Session,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<Booking> {
        let body = BookingStatusUpdate { status };
        let result = self
            .http
            .patch(&format!("/api/bookings/{id}"), session.token(), Some(&body))
            .await;
        session.observe(result)
    }

    pub async fn cancel_booking(
        &self,
        session: &mut Session,
        id: &str,
    ) -> ClientResult<MessageResponse> {
        let result = self
            .http
            .delete(&format!("/api/bookings/{id}"), session.token())
            .await;
        session.observe(result)
    }

    // ========== Reports ==========

    pub async fn create_report(
        &self,
        session: &mut Session,
        payload: &ReportCreate,
    ) -> ClientResult<Report> {
        let result = self.http.post("/api/reports", session.token(), payload).await;
        session.observe(result)
    }

    /// Staff receive only their own reports
    pub async fn list_reports(&self, session: &mut Session) -> ClientResult<Vec<Report>> {
        let result = self.http.get("/api/reports", session.token()).await;
        session.observe(result)
    }

    pub async fn update_report(
        &self,
        session: &mut Session,
        id: &str,
        payload: &ReportUpdate,
    ) -> ClientResult<Report> {
        let result = self
            .http
            .patch(&format!("/api/reports/{id}"), session.token(), Some(payload))
            .await;
        session.observe(result)
    }

    pub async fn set_report_status(
        &self,
        session: &mut Session,
        id: &str,
        status: ReportStatus,
    ) -> ClientResult<Report> {
        let payload = ReportUpdate {
            status: Some(status),
            ..Default::default()
        };
        self.update_report(session, id, &payload).await
    }

    pub async fn delete_report(
        &self,
        session: &mut Session,
        id: &str,
    ) -> ClientResult<MessageResponse> {
        let result = self
            .http
            .delete(&format!("/api/reports/{id}"), session.token())
            .await;
        session.observe(result)
    }

    // ========== Users (admin) ==========

    pub async fn list_users(&self, session: &mut Session) -> ClientResult<Vec<User>> {
        let result = self.http.get("/api/users", session.token()).await;
        session.observe(result)
    }

    pub async fn get_user(&self, session: &mut Session, id: &str) -> ClientResult<User> {
        let result = self
            .http
            .get(&format!("/api/users/{id}"), session.token())
            .await;
        session.observe(result)
    }

    pub async fn create_user(
        &self,
        session: &mut Session,
        payload: &UserCreate,
    ) -> ClientResult<User> {
        let result = self.http.post("/api/users", session.token(), payload).await;
        session.observe(result)
    }

    pub async fn update_user(
        &self,
        session: &mut Session,
        id: &str,
        payload: &UserUpdate,
    ) -> ClientResult<User> {
        let result = self
            .http
            .put(&format!("/api/users/{id}"), session.token(), payload)
            .await;
        session.observe(result)
    }

    pub async fn delete_user(
        &self,
        session: &mut Session,
        id: &str,
    ) -> ClientResult<MessageResponse> {
        let result = self
            .http
            .delete(&format!("/api/users/{id}"), session.token())
            .await;
        session.observe(result)
    }

    // ========== Stats ==========

    pub async fn overview_stats(&self, session: &mut Session) -> ClientResult<OverviewStats> {
        let result = self.http.get("/api/stats/overview", session.token()).await;
        session.observe(result)
    }

    pub async fn operations_stats(&self, session: &mut Session) -> ClientResult<OperationsStats> {
        let result = self.http.get("/api/stats/operations", session.token()).await;
        session.observe(result)
    }
}
