//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)。
//! 关联记录已被删除时，摘要只保留 id。

use surrealdb::RecordId;

use crate::db::models as db;
use shared::models as api;

// ============ Helper ============

pub fn record_id_to_string(id: &RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(record_id_to_string).unwrap_or_default()
}

fn user_summary(id: &RecordId, name: Option<String>, email: Option<String>) -> api::UserSummary {
    api::UserSummary {
        id: record_id_to_string(id),
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
    }
}

fn restaurant_summary(
    id: &RecordId,
    name: Option<String>,
    location: Option<String>,
) -> api::RestaurantSummary {
    api::RestaurantSummary {
        id: record_id_to_string(id),
        name: name.unwrap_or_default(),
        location: location.unwrap_or_default(),
    }
}

fn room_summary(id: &RecordId, name: Option<String>, kind: Option<String>) -> api::RoomSummary {
    api::RoomSummary {
        id: record_id_to_string(id),
        name: name.unwrap_or_default(),
        room_type: kind.unwrap_or_default(),
    }
}

// ============ User ============

impl From<db::User> for api::User {
    fn from(u: db::User) -> Self {
        Self {
            id: option_record_id_to_string(&u.id),
            name: u.name,
            email: u.email,
            role: u.role,
            created_at: u.created_at,
        }
    }
}

// ============ Restaurant ============

impl From<db::Restaurant> for api::Restaurant {
    fn from(r: db::Restaurant) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            name: r.name,
            description: r.description,
            location: r.location,
            phone: r.phone,
            email: r.email,
            image_url: r.image_url,
            facilities: r.facilities,
            cuisine: r.cuisine,
            rating: r.rating,
            opening_hours: r.opening_hours,
            contact_number: r.contact_number,
            created_at: r.created_at,
        }
    }
}

// ============ Room ============

impl From<db::Room> for api::Room {
    fn from(r: db::Room) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            name: r.name,
            restaurant: restaurant_summary(
                &r.restaurant,
                r.restaurant_name,
                r.restaurant_location,
            ),
            capacity: r.capacity,
            room_type: r.room_type,
            amenities: r.amenities,
            image_url: r.image_url,
            price_per_hour: r.price_per_hour,
            is_available: r.is_available,
            needs_cleaning: r.needs_cleaning,
            needs_maintenance: r.needs_maintenance,
            maintenance_reason: r.maintenance_reason,
            last_cleaned: r.last_cleaned,
            created_at: r.created_at,
        }
    }
}

// ============ Booking ============

impl From<db::Booking> for api::Booking {
    fn from(b: db::Booking) -> Self {
        Self {
            id: option_record_id_to_string(&b.id),
            customer: user_summary(&b.customer, b.customer_name, b.customer_email),
            restaurant: restaurant_summary(
                &b.restaurant,
                b.restaurant_name,
                b.restaurant_location,
            ),
            room: room_summary(&b.room, b.room_name, b.room_kind),
            date: b.date,
            time: b.time,
            guests: b.guests,
            duration: b.duration,
            status: b.status,
            special_requests: b.special_requests,
            total_amount: b.total_amount,
            created_at: b.created_at,
        }
    }
}

// ============ Report ============

impl From<db::Report> for api::Report {
    fn from(r: db::Report) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            title: r.title,
            description: r.description,
            category: r.category,
            priority: r.priority,
            status: r.status,
            staff_id: user_summary(&r.staff_id, r.staff_name, r.staff_email),
            room_id: r
                .room_id
                .as_ref()
                .map(|id| room_summary(id, r.room_name, r.room_kind)),
            resolved_by: r
                .resolved_by
                .as_ref()
                .map(|id| user_summary(id, r.resolver_name, r.resolver_email)),
            resolved_at: r.resolved_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// 批量转换
pub fn convert_all<D, A: From<D>>(items: Vec<D>) -> Vec<A> {
    items.into_iter().map(A::from).collect()
}
