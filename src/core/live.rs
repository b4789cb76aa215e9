use crate::api::client::{ApiClient, RequestConfig};
use crate::api::models::{ApiEnvelope, AuthResponse, LoginRequest, PropertyFilters, SignupRequest};
use crate::core::data_source::DataSource;
use crate::error::ApiError;
use crate::storage::session::SessionStore;
use crate::utils::retry::{RetryConfig, RetryExecutor};
use async_trait::async_trait;
use serde_json::Value;

/// HTTP-backed data source. Every call goes through the retry executor
/// with the session token injected from the store at request time.
pub struct LiveDataSource {
    client: ApiClient,
    store: SessionStore,
    retry: RetryExecutor,
}

impl LiveDataSource {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self::with_retry_config(client, store, RetryConfig::default())
    }

    pub fn with_retry_config(client: ApiClient, store: SessionStore, retry: RetryConfig) -> Self {
        Self {
            client,
            store,
            retry: RetryExecutor::new(retry),
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let token = self.store.token();
        let timeout = self.client.default_timeout();
        self.retry
            .execute(|| {
                self.client.execute(
                    RequestConfig::get(path).with_timeout(timeout),
                    token.as_deref(),
                )
            })
            .await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let token = self.store.token();
        let timeout = self.client.default_timeout();
        self.retry
            .execute(|| {
                self.client.execute(
                    RequestConfig::post(path, body.clone()).with_timeout(timeout),
                    token.as_deref(),
                )
            })
            .await
    }

    async fn get_envelope(&self, path: &str) -> Result<ApiEnvelope, ApiError> {
        parse_envelope(self.get_json(path).await?, path)
    }

    async fn post_envelope(&self, path: &str, body: &Value) -> Result<ApiEnvelope, ApiError> {
        parse_envelope(self.post_json(path, body).await?, path)
    }
}

fn parse_envelope(value: Value, endpoint: &str) -> Result<ApiEnvelope, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        ApiError::from_message(format!("Failed to parse response from {}: {}", endpoint, e))
    })
}

fn parse_auth(value: Value, endpoint: &str) -> Result<AuthResponse, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        ApiError::from_message(format!("Failed to parse response from {}: {}", endpoint, e))
    })
}

#[async_trait]
impl DataSource for LiveDataSource {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::from_message(e.to_string()))?;
        parse_auth(self.post_json("/auth/login", &body).await?, "/auth/login")
    }

    async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(SignupRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
        })
        .map_err(|e| ApiError::from_message(e.to_string()))?;
        parse_auth(self.post_json("/auth/signup", &body).await?, "/auth/signup")
    }

    async fn get_bookings(&self) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope("/restaurant/").await
    }

    async fn get_booking_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope(&format!("/restaurant/{}", id)).await
    }

    async fn create_booking(&self, data: Value) -> Result<ApiEnvelope, ApiError> {
        self.post_envelope("/restaurant/", &data).await
    }

    async fn get_available_tables(
        &self,
        date: &str,
        time: &str,
    ) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope(&format!(
            "/restaurant/available-tables?date={}&time={}",
            date, time
        ))
        .await
    }

    async fn get_rooms(&self) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope("/hotel/rooms/").await
    }

    async fn get_room_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope(&format!("/hotel/rooms/{}", id)).await
    }

    async fn get_available_rooms(
        &self,
        check_in: &str,
        check_out: &str,
    ) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope(&format!(
            "/hotel/rooms/available?checkIn={}&checkOut={}",
            check_in, check_out
        ))
        .await
    }

    async fn create_hotel_booking(&self, data: Value) -> Result<ApiEnvelope, ApiError> {
        self.post_envelope("/hotel/bookings/", &data).await
    }

    async fn get_hotel_bookings(&self) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope("/hotel/bookings/").await
    }

    async fn get_featured_properties(&self) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope("/properties/featured").await
    }

    async fn get_properties(&self, filters: &PropertyFilters) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope(&format!("/properties/{}", filters.to_query_string()))
            .await
    }

    async fn get_property_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError> {
        self.get_envelope(&format!("/properties/{}", id)).await
    }

    async fn create_property_listing(&self, data: Value) -> Result<ApiEnvelope, ApiError> {
        self.post_envelope("/property-listings/", &data).await
    }
}
