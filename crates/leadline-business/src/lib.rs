//! Leadline Business Data
//!
//! Read-through proxy for the business's Google Places listing: rating,
//! reviews, opening hours, and contact details. Any upstream failure or
//! missing configuration resolves to a uniform fallback signal, and a
//! hardcoded default dataset stands in so the widgets never render blank.

pub mod client;
pub mod error;
pub mod model;

pub use client::{GooglePlacesClient, PlacesClient};
pub use error::{BusinessError, Result};
pub use model::{needs_fallback, OpeningHours, PlaceDetails, Review};
