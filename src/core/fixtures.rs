//! Static demo catalog backing the mock data source and the fixture
//! fallbacks of the facade.

use serde_json::{Value, json};

/// Demo accounts accepted by the mock auth endpoints.
pub struct DemoUser {
    pub id: u64,
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const DEMO_PASSWORD: &str = "password123";

pub fn demo_users() -> Vec<DemoUser> {
    vec![
        DemoUser {
            id: 1,
            full_name: "John Doe",
            email: "john@example.com",
            phone: "+1234567890",
        },
        DemoUser {
            id: 2,
            full_name: "Jane Smith",
            email: "jane@example.com",
            phone: "+1987654321",
        },
    ]
}

pub fn demo_restaurants() -> Value {
    json!([
        {
            "id": 1,
            "name": "The Grand Palace",
            "cuisine": "Indian, Chinese, Continental",
            "rating": 4.5,
            "reviews": 1247,
            "priceRange": "$$$",
            "address": "123 MG Road, Bangalore",
            "openingHours": "11:00 AM - 11:00 PM",
            "menu": [
                { "id": 1, "name": "Butter Chicken", "price": 350, "category": "Main Course" },
                { "id": 2, "name": "Paneer Tikka", "price": 280, "category": "Appetizer" },
                { "id": 3, "name": "Biryani", "price": 320, "category": "Main Course" }
            ]
        },
        {
            "id": 2,
            "name": "Ocean Breeze Seafood",
            "cuisine": "Seafood, Mediterranean",
            "rating": 4.7,
            "reviews": 892,
            "priceRange": "$$$$",
            "address": "456 Beach Road, Goa",
            "openingHours": "12:00 PM - 10:00 PM",
            "menu": [
                { "id": 1, "name": "Grilled Lobster", "price": 1200, "category": "Seafood" },
                { "id": 2, "name": "Fish & Chips", "price": 450, "category": "Appetizer" }
            ]
        },
        {
            "id": 3,
            "name": "Urban Bistro",
            "cuisine": "Italian, Fusion",
            "rating": 4.3,
            "reviews": 654,
            "priceRange": "$$",
            "address": "789 IT Park, Hyderabad",
            "openingHours": "10:00 AM - 11:00 PM",
            "menu": [
                { "id": 1, "name": "Margherita Pizza", "price": 380, "category": "Pizza" },
                { "id": 2, "name": "Pasta Carbonara", "price": 420, "category": "Pasta" }
            ]
        }
    ])
}

pub fn demo_hotels() -> Value {
    json!([
        {
            "id": 1,
            "name": "Luxury Grand Hotel",
            "type": "5 Star",
            "rating": 4.8,
            "reviews": 2156,
            "pricePerNight": 8500,
            "address": "78 MG Road, Mumbai",
            "amenities": ["Swimming Pool", "Spa", "Gym", "Restaurant", "Free Wifi"],
            "rooms": [
                { "id": 1, "type": "Deluxe Room", "price": 8500, "maxGuests": 2, "available": 5 },
                { "id": 2, "type": "Executive Suite", "price": 15000, "maxGuests": 4, "available": 3 },
                { "id": 3, "type": "Presidential Suite", "price": 35000, "maxGuests": 6, "available": 1 }
            ]
        },
        {
            "id": 2,
            "name": "Himalayan Retreat Resort",
            "type": "Resort",
            "rating": 4.6,
            "reviews": 987,
            "pricePerNight": 12000,
            "address": "Kullu Manali Highway, Himachal Pradesh",
            "amenities": ["Mountain View", "Skiing", "Spa", "Restaurant", "Free Wifi"],
            "rooms": [
                { "id": 1, "type": "Mountain View Room", "price": 12000, "maxGuests": 2, "available": 8 },
                { "id": 2, "type": "Luxury Cabin", "price": 18000, "maxGuests": 4, "available": 4 }
            ]
        },
        {
            "id": 3,
            "name": "Beachside Paradise",
            "type": "Boutique Hotel",
            "rating": 4.4,
            "reviews": 756,
            "pricePerNight": 6500,
            "address": "Calangute Beach, Goa",
            "amenities": ["Beach Access", "Pool", "Restaurant", "Free Wifi", "Water Sports"],
            "rooms": [
                { "id": 1, "type": "Standard Room", "price": 6500, "maxGuests": 2, "available": 12 },
                { "id": 2, "type": "Deluxe Beach View", "price": 9500, "maxGuests": 3, "available": 6 }
            ]
        }
    ])
}

pub fn demo_properties() -> Value {
    json!([
        {
            "id": 1,
            "title": "Luxury Villa in South Bangalore",
            "type": "Villa",
            "price": 25000000u64,
            "area": "4500 sq.ft",
            "bedrooms": 5,
            "bathrooms": 4,
            "location": "Electronic City, Bangalore",
            "features": ["Swimming Pool", "Garden", "Parking", "Security"],
            "status": "For Sale"
        },
        {
            "id": 2,
            "title": "2BHK Apartment in Central Mumbai",
            "type": "Apartment",
            "price": 15000000u64,
            "area": "1200 sq.ft",
            "bedrooms": 2,
            "bathrooms": 2,
            "location": "Andheri West, Mumbai",
            "features": ["Gym", "Swimming Pool", "Security", "Parking"],
            "status": "For Sale"
        },
        {
            "id": 3,
            "title": "Commercial Space in IT Hub",
            "type": "Commercial",
            "price": 8000000u64,
            "area": "2500 sq.ft",
            "bedrooms": 0,
            "bathrooms": 3,
            "location": "HITEC City, Hyderabad",
            "features": ["Parking", "Security", "Conference Room"],
            "status": "For Rent"
        }
    ])
}

/// Booking history shared by the restaurant, hotel and property mock
/// endpoints; records carry a `serviceType` discriminator.
pub fn demo_bookings() -> Value {
    json!([
        {
            "id": 1,
            "userId": 1,
            "serviceType": "restaurant",
            "serviceId": 1,
            "serviceName": "The Grand Palace",
            "date": "2024-02-15",
            "time": "19:30",
            "guests": 4,
            "status": "confirmed",
            "totalAmount": 1800,
            "bookingDetails": { "tableType": "AC Seating", "specialRequests": "Birthday celebration" }
        },
        {
            "id": 2,
            "userId": 1,
            "serviceType": "hotel",
            "serviceId": 2,
            "serviceName": "Himalayan Retreat Resort",
            "checkIn": "2024-03-10",
            "checkOut": "2024-03-15",
            "guests": 2,
            "rooms": 1,
            "status": "confirmed",
            "totalAmount": 60000,
            "bookingDetails": { "roomType": "Mountain View Room", "mealPlan": "Breakfast Included" }
        },
        {
            "id": 3,
            "userId": 2,
            "serviceType": "property",
            "serviceId": 1,
            "serviceName": "Luxury Villa in South Bangalore",
            "visitDate": "2024-02-20",
            "visitTime": "15:00",
            "status": "scheduled",
            "totalAmount": 5000,
            "bookingDetails": { "purpose": "Property Viewing", "agent": "Mr. Rajesh Kumar" }
        }
    ])
}

/// Canned list returned when a booking fetch fails against the live
/// backend. Kept to two entries so outage screens stay plausible.
pub fn fallback_bookings() -> Value {
    json!([
        {
            "id": 1,
            "serviceType": "restaurant",
            "serviceName": "The Grand Palace",
            "date": "2024-02-15",
            "time": "19:30",
            "guests": 4,
            "status": "confirmed",
            "totalAmount": 2500
        },
        {
            "id": 2,
            "serviceType": "hotel",
            "serviceName": "Luxury Grand Hotel",
            "checkIn": "2024-02-20",
            "checkOut": "2024-02-25",
            "guests": 2,
            "status": "confirmed",
            "totalAmount": 12000
        }
    ])
}

/// First element of an array fixture, for detail-view fallbacks.
pub fn first_of(fixture: Value) -> Value {
    match fixture {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty() {
        assert!(!demo_restaurants().as_array().unwrap().is_empty());
        assert!(!demo_hotels().as_array().unwrap().is_empty());
        assert!(!demo_properties().as_array().unwrap().is_empty());
        assert!(!demo_bookings().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_fallback_bookings_has_two_items() {
        assert_eq!(fallback_bookings().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_first_of_picks_head() {
        let first = first_of(demo_properties());
        assert_eq!(first["id"], 1);
        assert_eq!(first_of(json!([])), Value::Null);
    }
}
