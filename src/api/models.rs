use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response envelope used by every booking endpoint. The
/// `data` payload is passed through opaque; screens and display code
/// destructure it defensively.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl ApiEnvelope {
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

// Authentication models
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "phoneNo")]
    pub phone: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Immutable profile snapshot written at login time; not refreshed
/// automatically.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Persisted session record. Serialized as a single JSON document so
/// the token and the user snapshot can never diverge.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Filter set for property searches; maps onto the query string of
/// `GET /properties/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

impl PropertyFilters {
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.listing_type.is_none()
            && self.city.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Render as a form-encoded query string ("?k=v&k=v"), empty when
    /// no filter is set.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(property_type) = &self.property_type {
            params.push(("propertyType", property_type.clone()));
        }
        if let Some(listing_type) = &self.listing_type {
            params.push(("listingType", listing_type.clone()));
        }
        if let Some(city) = &self.city {
            params.push(("city", city.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("maxPrice", max_price.to_string()));
        }
        if params.is_empty() {
            return String::new();
        }

        // Filter values come straight from CLI flags; encoding keeps
        // spaces and separators from corrupting the request path.
        let mut url = match reqwest::Url::parse("http://localhost/") {
            Ok(url) => url,
            // The literal base always parses.
            Err(_) => return String::new(),
        };
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &params {
                pairs.append_pair(key, value);
            }
        }
        format!("?{}", url.query().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(!envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_null());
    }

    #[test]
    fn test_envelope_passes_data_through() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "success": true,
            "message": "Bookings retrieved successfully",
            "data": [{"id": 1, "status": "pending"}]
        }))
        .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data[0]["status"], "pending");
    }

    #[test]
    fn test_auth_response_deserialization() {
        let response: AuthResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Login successful",
            "token": "abc123",
            "user": {
                "id": 1,
                "fullName": "Priya Sharma",
                "email": "priya@example.com",
                "phone": "+91 98765 43210",
                "roles": ["customer"]
            }
        }))
        .unwrap();
        assert_eq!(response.token.as_deref(), Some("abc123"));
        let user = response.user.unwrap();
        assert_eq!(user.full_name, "Priya Sharma");
        assert_eq!(user.roles, vec!["customer".to_string()]);
    }

    #[test]
    fn test_signup_request_wire_names() {
        let request = SignupRequest {
            full_name: "Test User".to_string(),
            email: "t@example.com".to_string(),
            password: "secret".to_string(),
            phone: "+91 90000 00000".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fullName"], "Test User");
        assert_eq!(value["phoneNo"], "+91 90000 00000");
    }

    #[test]
    fn test_property_filters_query_string() {
        assert_eq!(PropertyFilters::default().to_query_string(), "");

        let filters = PropertyFilters {
            property_type: Some("villa".to_string()),
            listing_type: Some("sale".to_string()),
            city: Some("Goa".to_string()),
            min_price: Some(1_000_000),
            max_price: None,
        };
        assert_eq!(
            filters.to_query_string(),
            "?propertyType=villa&listingType=sale&city=Goa&minPrice=1000000"
        );
    }

    #[test]
    fn test_property_filters_encode_reserved_characters() {
        let filters = PropertyFilters {
            city: Some("New Delhi".to_string()),
            listing_type: Some("sale&rent=no".to_string()),
            ..PropertyFilters::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "?listingType=sale%26rent%3Dno&city=New+Delhi"
        );
    }
}
