use crate::api::client::ApiClient;
use crate::api::models::{ApiEnvelope, AuthResponse, PropertyFilters, UserProfile};
use crate::core::data_source::DataSource;
use crate::core::fixtures;
use crate::core::live::LiveDataSource;
use crate::core::mock::MockDataSource;
use crate::error::AppError;
use crate::storage::session::SessionStore;
use crate::utils::retry::RetryConfig;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which backend the facade binds to. Resolved once, when the facade
/// is constructed; switching requires building a new facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    #[default]
    Live,
    Mock,
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(ApiMode::Live),
            "mock" => Ok(ApiMode::Mock),
            other => Err(format!("Unknown API mode '{}' (expected live|mock)", other)),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Live => f.write_str("live"),
            ApiMode::Mock => f.write_str("mock"),
        }
    }
}

/// The single entry point screens and CLI handlers talk to. Delegates
/// every operation to the bound data source; the six outage-masked
/// read operations return `ApiEnvelope` infallibly, everything else
/// propagates the classified error.
pub struct BookingApi {
    source: Box<dyn DataSource>,
    store: SessionStore,
    mode: ApiMode,
}

impl BookingApi {
    pub fn new(mode: ApiMode, client: ApiClient, store: SessionStore) -> Self {
        Self::with_retry_config(mode, client, store, RetryConfig::default())
    }

    pub fn with_retry_config(
        mode: ApiMode,
        client: ApiClient,
        store: SessionStore,
        retry: RetryConfig,
    ) -> Self {
        let source: Box<dyn DataSource> = match mode {
            ApiMode::Live => Box::new(LiveDataSource::with_retry_config(
                client,
                store.clone(),
                retry,
            )),
            ApiMode::Mock => Box::new(MockDataSource::new()),
        };
        Self { source, store, mode }
    }

    /// Mock-mode facade without HTTP plumbing, mainly for tests.
    pub fn mock(store: SessionStore) -> Self {
        Self {
            source: Box::new(MockDataSource::with_latency(std::time::Duration::ZERO)),
            store,
            mode: ApiMode::Mock,
        }
    }

    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    // ==== Auth ====

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let response = self.source.login(email, password).await?;
        self.persist_session(&response);
        Ok(response)
    }

    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<AuthResponse, AppError> {
        let response = self.source.signup(full_name, email, password, phone).await?;
        self.persist_session(&response);
        Ok(response)
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.store.clear()?;
        Ok(())
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn stored_user(&self) -> Option<UserProfile> {
        self.store.user()
    }

    fn persist_session(&self, response: &AuthResponse) {
        if response.success {
            if let Some(token) = &response.token {
                self.store.store_session(token, response.user.as_ref());
            }
        }
    }

    // ==== Restaurant ====

    pub async fn get_bookings(&self) -> ApiEnvelope {
        or_fixture(
            "get_bookings",
            self.source.get_bookings().await,
            fixtures::fallback_bookings,
        )
    }

    pub async fn get_booking_by_id(&self, id: u64) -> ApiEnvelope {
        or_fixture(
            "get_booking_by_id",
            self.source.get_booking_by_id(id).await,
            || fixtures::first_of(fixtures::demo_bookings()),
        )
    }

    pub async fn create_booking(&self, data: Value) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.create_booking(data).await?)
    }

    pub async fn get_available_tables(
        &self,
        date: &str,
        time: &str,
    ) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.get_available_tables(date, time).await?)
    }

    // ==== Hotel ====

    pub async fn get_rooms(&self) -> ApiEnvelope {
        or_fixture("get_rooms", self.source.get_rooms().await, fixtures::demo_hotels)
    }

    pub async fn get_room_by_id(&self, id: u64) -> ApiEnvelope {
        or_fixture(
            "get_room_by_id",
            self.source.get_room_by_id(id).await,
            || fixtures::first_of(fixtures::demo_hotels()),
        )
    }

    pub async fn get_available_rooms(
        &self,
        check_in: &str,
        check_out: &str,
    ) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.get_available_rooms(check_in, check_out).await?)
    }

    pub async fn create_hotel_booking(&self, data: Value) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.create_hotel_booking(data).await?)
    }

    pub async fn get_hotel_bookings(&self) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.get_hotel_bookings().await?)
    }

    // ==== Property ====

    pub async fn get_featured_properties(&self) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.get_featured_properties().await?)
    }

    pub async fn get_properties(&self, filters: &PropertyFilters) -> ApiEnvelope {
        or_fixture(
            "get_properties",
            self.source.get_properties(filters).await,
            fixtures::demo_properties,
        )
    }

    pub async fn get_property_by_id(&self, id: u64) -> ApiEnvelope {
        or_fixture(
            "get_property_by_id",
            self.source.get_property_by_id(id).await,
            || fixtures::first_of(fixtures::demo_properties()),
        )
    }

    pub async fn create_property_listing(&self, data: Value) -> Result<ApiEnvelope, AppError> {
        Ok(self.source.create_property_listing(data).await?)
    }
}

/// Availability-over-correctness fallback: swallow the classified
/// failure and serve fixture data so list/detail screens stay
/// populated during backend outages. Applied only at the call sites
/// above; write operations always propagate.
fn or_fixture(
    operation: &str,
    result: Result<ApiEnvelope, crate::error::ApiError>,
    fixture: impl FnOnce() -> Value,
) -> ApiEnvelope {
    match result {
        Ok(envelope) => envelope,
        Err(error) => {
            log::warn!(
                "{} failed ({}), masking with fixture data",
                operation,
                error
            );
            ApiEnvelope::ok("Retrieved successfully", fixture())
        }
    }
}
