use crate::api::models::{ApiEnvelope, AuthResponse, PropertyFilters, UserProfile};
use crate::core::data_source::DataSource;
use crate::core::fixtures::{self, DEMO_PASSWORD};
use crate::error::ApiError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde_json::{Value, json};
use std::time::Duration;

/// Fixture-backed data source. Never performs network I/O; a short
/// sleep stands in for backend latency so mock mode feels like the
/// real thing in the UI.
pub struct MockDataSource {
    latency: Duration,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(300),
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn demo_token(user_id: u64) -> String {
        format!("demo_token_{}_{}", user_id, Utc::now().timestamp_millis())
    }
}

fn filter_bookings(service_type: &str) -> Value {
    let bookings = fixtures::demo_bookings();
    let filtered: Vec<Value> = bookings
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|b| b["serviceType"] == service_type)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Value::Array(filtered)
}

fn find_by_id(collection: Value, id: u64) -> Value {
    collection
        .as_array()
        .and_then(|items| items.iter().find(|item| item["id"] == id).cloned())
        .unwrap_or(Value::Null)
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.simulate_delay().await;

        let Some(user) = fixtures::demo_users().into_iter().find(|u| u.email == email) else {
            return Ok(AuthResponse {
                success: false,
                message: Some("User not found".to_string()),
                token: None,
                user: None,
            });
        };

        if password != DEMO_PASSWORD {
            return Ok(AuthResponse {
                success: false,
                message: Some("Invalid password".to_string()),
                token: None,
                user: None,
            });
        }

        let profile = UserProfile {
            id: user.id,
            full_name: user.full_name.to_string(),
            email: user.email.to_string(),
            phone: user.phone.to_string(),
            roles: vec!["customer".to_string()],
        };
        Ok(AuthResponse {
            success: true,
            message: Some("Login successful".to_string()),
            token: Some(Self::demo_token(user.id)),
            user: Some(profile),
        })
    }

    async fn signup(
        &self,
        full_name: &str,
        email: &str,
        _password: &str,
        phone: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.simulate_delay().await;

        let users = fixtures::demo_users();
        if users.iter().any(|u| u.email == email) {
            return Ok(AuthResponse {
                success: false,
                message: Some("User with this email already exists".to_string()),
                token: None,
                user: None,
            });
        }

        let id = users.len() as u64 + 1;
        let profile = UserProfile {
            id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            roles: vec!["customer".to_string()],
        };
        Ok(AuthResponse {
            success: true,
            message: Some("Account created successfully".to_string()),
            token: Some(Self::demo_token(id)),
            user: Some(profile),
        })
    }

    async fn get_bookings(&self) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Bookings retrieved successfully",
            filter_bookings("restaurant"),
        ))
    }

    async fn get_booking_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Booking retrieved successfully",
            find_by_id(filter_bookings("restaurant"), id),
        ))
    }

    async fn create_booking(&self, data: Value) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;

        let restaurant_id = data["restaurantId"].as_u64().unwrap_or(1);
        let restaurant = find_by_id(fixtures::demo_restaurants(), restaurant_id);
        let party_size = data["partySize"].as_u64().unwrap_or(1);

        let booking = json!({
            "id": Utc::now().timestamp_millis(),
            "userId": 1,
            "serviceType": "restaurant",
            "serviceId": restaurant_id,
            "serviceName": restaurant["name"].as_str().unwrap_or("Restaurant"),
            "date": data["bookingDate"],
            "time": data["bookingTime"],
            "guests": party_size,
            "status": "pending",
            "totalAmount": party_size * 500,
            "bookingDetails": {
                "tableType": data["tableType"].as_str().unwrap_or("Standard"),
                "specialRequests": data["specialRequests"].as_str().unwrap_or("")
            }
        });
        Ok(ApiEnvelope::ok("Booking created successfully", booking))
    }

    async fn get_available_tables(
        &self,
        date: &str,
        time: &str,
    ) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Available tables retrieved successfully",
            json!({
                "date": date,
                "time": time,
                "availableTables": ["1", "3", "5", "7", "9"],
                "bookedTables": ["2", "4", "6", "8"],
                "totalAvailable": 5
            }),
        ))
    }

    async fn get_rooms(&self) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Hotel rooms retrieved successfully",
            fixtures::demo_hotels(),
        ))
    }

    async fn get_room_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Hotel room retrieved successfully",
            find_by_id(fixtures::demo_hotels(), id),
        ))
    }

    async fn get_available_rooms(
        &self,
        _check_in: &str,
        _check_out: &str,
    ) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;

        // Flatten rooms across hotels, tagging each with its hotel.
        let hotels = fixtures::demo_hotels();
        let mut rooms: Vec<Value> = Vec::new();
        if let Some(hotel_list) = hotels.as_array() {
            for hotel in hotel_list {
                if let Some(hotel_rooms) = hotel["rooms"].as_array() {
                    for room in hotel_rooms {
                        let mut entry = room.clone();
                        entry["hotelId"] = hotel["id"].clone();
                        entry["hotelName"] = hotel["name"].clone();
                        rooms.push(entry);
                    }
                }
            }
        }
        Ok(ApiEnvelope::ok(
            "Available rooms retrieved successfully",
            Value::Array(rooms),
        ))
    }

    async fn create_hotel_booking(&self, data: Value) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;

        let hotel_id = data["hotelId"].as_u64().unwrap_or(1);
        let hotel = find_by_id(fixtures::demo_hotels(), hotel_id);
        let room = data["roomId"]
            .as_u64()
            .map(|room_id| find_by_id(hotel["rooms"].clone(), room_id))
            .unwrap_or(Value::Null);

        let nights = nights_between(
            data["checkInDate"].as_str().unwrap_or_default(),
            data["checkOutDate"].as_str().unwrap_or_default(),
        );
        let nightly_rate = room["price"].as_u64().unwrap_or(5000);

        let booking = json!({
            "id": Utc::now().timestamp_millis(),
            "userId": 1,
            "serviceType": "hotel",
            "serviceId": hotel_id,
            "serviceName": hotel["name"].as_str().unwrap_or("Hotel"),
            "checkIn": data["checkInDate"],
            "checkOut": data["checkOutDate"],
            "guests": data["numberOfGuests"],
            "rooms": 1,
            "status": "pending",
            "totalAmount": nightly_rate * nights,
            "bookingDetails": {
                "roomType": room["type"].as_str().unwrap_or("Standard Room"),
                "specialRequests": data["specialRequests"].as_str().unwrap_or(""),
                "guestName": data["guestName"],
                "guestEmail": data["guestEmail"],
                "guestPhone": data["guestPhone"]
            }
        });
        Ok(ApiEnvelope::ok("Hotel booking created successfully", booking))
    }

    async fn get_hotel_bookings(&self) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Bookings retrieved successfully",
            filter_bookings("hotel"),
        ))
    }

    async fn get_featured_properties(&self) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;

        let properties = fixtures::demo_properties();
        let featured: Vec<Value> = properties
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter(|p| p["price"].as_u64().unwrap_or(0) > 10_000_000)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(ApiEnvelope::ok(
            "Featured properties retrieved successfully",
            Value::Array(featured),
        ))
    }

    async fn get_properties(&self, filters: &PropertyFilters) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;

        let properties = fixtures::demo_properties();
        let filtered: Vec<Value> = properties
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter(|p| matches_filters(p, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(ApiEnvelope::ok(
            "Properties retrieved successfully",
            Value::Array(filtered),
        ))
    }

    async fn get_property_by_id(&self, id: u64) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;
        Ok(ApiEnvelope::ok(
            "Property retrieved successfully",
            find_by_id(fixtures::demo_properties(), id),
        ))
    }

    async fn create_property_listing(&self, data: Value) -> Result<ApiEnvelope, ApiError> {
        self.simulate_delay().await;

        let listing = json!({
            "id": Utc::now().timestamp_millis(),
            "propertyId": data["propertyId"],
            "customerId": 1,
            "listingType": data["listingType"].as_str().unwrap_or("inquiry"),
            "status": "pending",
            "customerInfo": data["customerInfo"],
            "offerPrice": data["offerPrice"],
            "notes": data["notes"],
            "createdAt": Utc::now().to_rfc3339()
        });
        Ok(ApiEnvelope::ok(
            "Property listing created successfully",
            listing,
        ))
    }
}

fn matches_filters(property: &Value, filters: &PropertyFilters) -> bool {
    if let Some(property_type) = &filters.property_type {
        if property["type"].as_str() != Some(property_type.as_str()) {
            return false;
        }
    }
    if let Some(listing_type) = &filters.listing_type {
        let wanted_status = match listing_type.as_str() {
            "sale" => "For Sale",
            "rent" => "For Rent",
            other => other,
        };
        if property["status"].as_str() != Some(wanted_status) {
            return false;
        }
    }
    if let Some(city) = &filters.city {
        let location = property["location"].as_str().unwrap_or_default();
        if !location.to_lowercase().contains(&city.to_lowercase()) {
            return false;
        }
    }
    if let Some(min_price) = filters.min_price {
        if property["price"].as_u64().unwrap_or(0) < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if property["price"].as_u64().unwrap_or(u64::MAX) > max_price {
            return false;
        }
    }
    true
}

fn nights_between(check_in: &str, check_out: &str) -> u64 {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(check_in), parse(check_out)) {
        (Some(start), Some(end)) if end > start => (end - start).num_days() as u64,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MockDataSource {
        MockDataSource::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_with_demo_account() {
        let response = source().login("john@example.com", DEMO_PASSWORD).await.unwrap();
        assert!(response.success);
        assert!(response.token.unwrap().starts_with("demo_token_1_"));
        assert_eq!(response.user.unwrap().full_name, "John Doe");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let response = source().login("john@example.com", "nope").await.unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid password"));
        assert!(response.token.is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let response = source().login("ghost@example.com", DEMO_PASSWORD).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_signup_rejects_existing_email() {
        let response = source()
            .signup("Another John", "john@example.com", "pw", "+100")
            .await
            .unwrap();
        assert!(!response.success);
    }

    #[tokio::test]
    async fn test_signup_creates_account_with_token() {
        let response = source()
            .signup("New User", "new@example.com", "pw", "+100")
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.token.is_some());
        assert_eq!(response.user.unwrap().roles, vec!["customer".to_string()]);
    }

    #[tokio::test]
    async fn test_get_bookings_filters_restaurant_records() {
        let envelope = source().get_bookings().await.unwrap();
        let items = envelope.data.as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|b| b["serviceType"] == "restaurant"));
    }

    #[tokio::test]
    async fn test_get_properties_unfiltered_returns_catalog() {
        let envelope = source()
            .get_properties(&PropertyFilters::default())
            .await
            .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_properties_applies_filters() {
        let filters = PropertyFilters {
            listing_type: Some("rent".to_string()),
            ..Default::default()
        };
        let envelope = source().get_properties(&filters).await.unwrap();
        let items = envelope.data.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["status"], "For Rent");

        let filters = PropertyFilters {
            city: Some("mumbai".to_string()),
            min_price: Some(10_000_000),
            ..Default::default()
        };
        let envelope = source().get_properties(&filters).await.unwrap();
        let items = envelope.data.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 2);
    }

    #[tokio::test]
    async fn test_create_booking_synthesizes_record() {
        let envelope = source()
            .create_booking(json!({
                "restaurantId": 2,
                "bookingDate": "2024-05-01",
                "bookingTime": "20:00",
                "partySize": 3
            }))
            .await
            .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data["serviceName"], "Ocean Breeze Seafood");
        assert_eq!(envelope.data["status"], "pending");
        assert_eq!(envelope.data["totalAmount"], 1500);
    }

    #[tokio::test]
    async fn test_create_hotel_booking_prices_by_nights() {
        let envelope = source()
            .create_hotel_booking(json!({
                "hotelId": 2,
                "roomId": 1,
                "checkInDate": "2024-03-10",
                "checkOutDate": "2024-03-13",
                "numberOfGuests": 2,
                "guestName": "John Doe"
            }))
            .await
            .unwrap();
        // Mountain View Room at 12000 for 3 nights.
        assert_eq!(envelope.data["totalAmount"], 36000);
        assert_eq!(envelope.data["bookingDetails"]["roomType"], "Mountain View Room");
    }

    #[tokio::test]
    async fn test_create_hotel_booking_resolves_room_within_hotel() {
        // Room id 2 exists in every hotel; the hotelId decides which one.
        let envelope = source()
            .create_hotel_booking(json!({
                "hotelId": 3,
                "roomId": 2,
                "checkInDate": "2024-04-01",
                "checkOutDate": "2024-04-03",
                "numberOfGuests": 2
            }))
            .await
            .unwrap();
        assert_eq!(envelope.data["serviceName"], "Beachside Paradise");
        assert_eq!(envelope.data["bookingDetails"]["roomType"], "Deluxe Beach View");
        // Deluxe Beach View at 9500 for 2 nights.
        assert_eq!(envelope.data["totalAmount"], 19000);
    }

    #[tokio::test]
    async fn test_featured_properties_are_high_value() {
        let envelope = source().get_featured_properties().await.unwrap();
        let items = envelope.data.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(
            items
                .iter()
                .all(|p| p["price"].as_u64().unwrap() > 10_000_000)
        );
    }

    #[tokio::test]
    async fn test_get_room_by_id_missing_gives_null_data() {
        let envelope = source().get_room_by_id(99).await.unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_null());
    }
}
