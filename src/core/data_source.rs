use crate::api::models::{ApiEnvelope, AuthResponse, PropertyFilters};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// The operation surface shared by the live and mock backends. The
/// facade binds one implementation at construction time, so nothing
/// above this trait branches on the active mode.
#[async_trait]
pub trait DataSource: Send + Sync {
    // Auth
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<AuthResponse, ApiError>;

    // Restaurant
    async fn get_bookings(&self) -> Result<ApiEnvelope, ApiError>;
    async fn get_booking_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError>;
    async fn create_booking(&self, data: Value) -> Result<ApiEnvelope, ApiError>;
    async fn get_available_tables(&self, date: &str, time: &str)
    -> Result<ApiEnvelope, ApiError>;

    // Hotel
    async fn get_rooms(&self) -> Result<ApiEnvelope, ApiError>;
    async fn get_room_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError>;
    async fn get_available_rooms(
        &self,
        check_in: &str,
        check_out: &str,
    ) -> Result<ApiEnvelope, ApiError>;
    async fn create_hotel_booking(&self, data: Value) -> Result<ApiEnvelope, ApiError>;
    async fn get_hotel_bookings(&self) -> Result<ApiEnvelope, ApiError>;

    // Property
    async fn get_featured_properties(&self) -> Result<ApiEnvelope, ApiError>;
    async fn get_properties(&self, filters: &PropertyFilters) -> Result<ApiEnvelope, ApiError>;
    async fn get_property_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError>;
    async fn create_property_listing(&self, data: Value) -> Result<ApiEnvelope, ApiError>;
}
