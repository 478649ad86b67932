//! 按角色划分的仪表盘
//!
//! [`RoleDashboard`] 由会话中的角色决定，三种变体各自实现 [`Dashboard`]。
//! 仪表盘上的写操作完成后总会重新加载视图。

use shared::models::{
    Booking, BookingCreate, BookingStatus, Report, ReportCreate, ReportStatus, RestaurantListItem,
    Role,
};
use shared::stats::{OperationsStats, OverviewStats};

use crate::{ClientResult, RestinClient, Session};

/// 仪表盘策略: 加载该角色的视图数据
#[allow(async_fn_in_trait)]
pub trait Dashboard {
    type View;

    async fn load(&self, client: &RestinClient, session: &mut Session) -> ClientResult<Self::View>;
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct AdminDashboard;

#[derive(Debug, Clone)]
pub struct AdminView {
    pub overview: OverviewStats,
    pub reports: Vec<Report>,
}

impl Dashboard for AdminDashboard {
    type View = AdminView;

    async fn load(&self, client: &RestinClient, session: &mut Session) -> ClientResult<AdminView> {
        let overview = client.overview_stats(session).await?;
        let reports = client.list_reports(session).await?;
        Ok(AdminView { overview, reports })
    }
}

impl AdminDashboard {
    /// 推进报告状态后刷新
    pub async fn set_report_status(
        &self,
        client: &RestinClient,
        session: &mut Session,
        report_id: &str,
        status: ReportStatus,
    ) -> ClientResult<AdminView> {
        client.set_report_status(session, report_id, status).await?;
        self.load(client, session).await
    }
}

// ============================================================================
// Staff
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct StaffDashboard;

#[derive(Debug, Clone)]
pub struct StaffView {
    pub operations: OperationsStats,
    pub bookings: Vec<Booking>,
    /// 本人提交的报告
    pub reports: Vec<Report>,
}

impl Dashboard for StaffDashboard {
    type View = StaffView;

    async fn load(&self, client: &RestinClient, session: &mut Session) -> ClientResult<StaffView> {
        let operations = client.operations_stats(session).await?;
        let bookings = client.list_bookings(session).await?;
        let reports = client.list_reports(session).await?;
        Ok(StaffView {
            operations,
            bookings,
            reports,
        })
    }
}

impl StaffDashboard {
    pub async fn confirm_booking(
        &self,
        client: &RestinClient,
        session: &mut Session,
        booking_id: &str,
    ) -> ClientResult<StaffView> {
        client
            .update_booking_status(session, booking_id, BookingStatus::Confirmed)
            .await?;
        self.load(client, session).await
    }

    pub async fn mark_room_cleaned(
        &self,
        client: &RestinClient,
        session: &mut Session,
        room_id: &str,
    ) -> ClientResult<StaffView> {
        client.mark_room_cleaned(session, room_id).await?;
        self.load(client, session).await
    }

    pub async fn mark_room_maintenance(
        &self,
        client: &RestinClient,
        session: &mut Session,
        room_id: &str,
        reason: Option<&str>,
    ) -> ClientResult<StaffView> {
        client.mark_room_maintenance(session, room_id, reason).await?;
        self.load(client, session).await
    }

    pub async fn file_report(
        &self,
        client: &RestinClient,
        session: &mut Session,
        report: &ReportCreate,
    ) -> ClientResult<StaffView> {
        client.create_report(session, report).await?;
        self.load(client, session).await
    }
}

// ============================================================================
// Customer
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerDashboard;

#[derive(Debug, Clone)]
pub struct CustomerView {
    pub restaurants: Vec<RestaurantListItem>,
    pub bookings: Vec<Booking>,
}

impl Dashboard for CustomerDashboard {
    type View = CustomerView;

    async fn load(
        &self,
        client: &RestinClient,
        session: &mut Session,
    ) -> ClientResult<CustomerView> {
        let restaurants = client.list_restaurants(session).await?;
        let bookings = client.list_bookings(session).await?;
        Ok(CustomerView {
            restaurants,
            bookings,
        })
    }
}

impl CustomerDashboard {
    pub async fn book(
        &self,
        client: &RestinClient,
        session: &mut Session,
        booking: &BookingCreate,
    ) -> ClientResult<CustomerView> {
        client.create_booking(session, booking).await?;
        self.load(client, session).await
    }

    pub async fn cancel(
        &self,
        client: &RestinClient,
        session: &mut Session,
        booking_id: &str,
    ) -> ClientResult<CustomerView> {
        client.cancel_booking(session, booking_id).await?;
        self.load(client, session).await
    }
}

// ============================================================================
// Role dispatch
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum RoleDashboard {
    Admin(AdminDashboard),
    Staff(StaffDashboard),
    Customer(CustomerDashboard),
}

#[derive(Debug, Clone)]
pub enum DashboardView {
    Admin(AdminView),
    Staff(StaffView),
    Customer(CustomerView),
}

impl RoleDashboard {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => RoleDashboard::Admin(AdminDashboard),
            Role::Staff => RoleDashboard::Staff(StaffDashboard),
            Role::Customer => RoleDashboard::Customer(CustomerDashboard),
        }
    }

    /// 未登录时为 `None`
    pub fn for_session(session: &Session) -> Option<Self> {
        session.role().map(Self::for_role)
    }

    pub fn role(&self) -> Role {
        match self {
            RoleDashboard::Admin(_) => Role::Admin,
            RoleDashboard::Staff(_) => Role::Staff,
            RoleDashboard::Customer(_) => Role::Customer,
        }
    }
}

impl Dashboard for RoleDashboard {
    type View = DashboardView;

    async fn load(
        &self,
        client: &RestinClient,
        session: &mut Session,
    ) -> ClientResult<DashboardView> {
        Ok(match self {
            RoleDashboard::Admin(d) => DashboardView::Admin(d.load(client, session).await?),
            RoleDashboard::Staff(d) => DashboardView::Staff(d.load(client, session).await?),
            RoleDashboard::Customer(d) => {
                DashboardView::Customer(d.load(client, session).await?)
            }
        })
    }
}
