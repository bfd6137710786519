//! Place-details data model and fallback dataset

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business place details, mirroring the Places API result shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A single customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_time_description: Option<String>,
}

/// Opening-hours block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

impl PlaceDetails {
    /// Hardcoded substitute dataset for when the Places API is unavailable
    pub fn fallback() -> Self {
        Self {
            name: "SHADOW MARKET".to_string(),
            rating: Some(4.9),
            user_ratings_total: Some(127),
            reviews: Vec::new(),
            opening_hours: Some(OpeningHours {
                open_now: None,
                weekday_text: vec![
                    "Monday: 9:00 AM – 7:00 PM".to_string(),
                    "Tuesday: 9:00 AM – 7:00 PM".to_string(),
                    "Wednesday: 9:00 AM – 7:00 PM".to_string(),
                    "Thursday: 9:00 AM – 7:00 PM".to_string(),
                    "Friday: 9:00 AM – 7:00 PM".to_string(),
                    "Saturday: 9:00 AM – 7:00 PM".to_string(),
                    "Sunday: Closed".to_string(),
                ],
            }),
            formatted_address: Some(
                "DOOR NO 10, HAPPY HOME, SHREE RAM AVENUE, RM Gardens, Veerapandi, \
                 Tamil Nadu 641019, India"
                    .to_string(),
            ),
            formatted_phone_number: Some("+91 99527 79992".to_string()),
            website: Some("https://shadowmarket.ai".to_string()),
        }
    }
}

/// Whether a business-data response requires the fallback dataset
///
/// Checks the `fallback` flag and the presence of `opening_hours`. The
/// double check is deliberate: a response can be well-formed yet missing
/// the fields the widgets need.
pub fn needs_fallback(data: &Value) -> bool {
    data.get("fallback").and_then(Value::as_bool).unwrap_or(false)
        || data.get("opening_hours").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_dataset_is_complete() {
        let fallback = PlaceDetails::fallback();
        let hours = fallback.opening_hours.unwrap();
        assert_eq!(hours.weekday_text.len(), 7);
        assert_eq!(hours.weekday_text[6], "Sunday: Closed");
        assert_eq!(fallback.rating, Some(4.9));
    }

    #[test]
    fn test_needs_fallback_on_flag() {
        let data = json!({ "error": "Failed to fetch business data", "fallback": true });
        assert!(needs_fallback(&data));
    }

    #[test]
    fn test_needs_fallback_on_missing_hours() {
        // Well-formed response without the expected field still falls back
        let data = json!({ "name": "SHADOW MARKET", "rating": 4.9 });
        assert!(needs_fallback(&data));
    }

    #[test]
    fn test_complete_response_does_not_fall_back() {
        let data = serde_json::to_value(PlaceDetails::fallback()).unwrap();
        assert!(!needs_fallback(&data));
    }

    #[test]
    fn test_deserializes_places_result() {
        let data = json!({
            "name": "SHADOW MARKET",
            "rating": 4.8,
            "user_ratings_total": 120,
            "reviews": [{
                "author_name": "Raj Kumar",
                "rating": 5,
                "text": "Great team",
                "relative_time_description": "a week ago"
            }],
            "opening_hours": { "open_now": true, "weekday_text": [] },
            "formatted_address": "Coimbatore",
            "formatted_phone_number": "+91 99527 79992",
            "website": "https://shadowmarket.ai"
        });
        let details: PlaceDetails = serde_json::from_value(data).unwrap();
        assert_eq!(details.reviews.len(), 1);
        assert_eq!(details.reviews[0].rating, Some(5.0));
        assert_eq!(details.opening_hours.unwrap().open_now, Some(true));
    }
}
