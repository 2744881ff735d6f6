//! Listing row type as stored in the warehouse

use serde::{Deserialize, Serialize};

/// One property record from the warehouse table.
///
/// The application treats listings as read-only: the full table is reloaded
/// on every render pass and never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    /// Sale price in CHF (positive; non-positive rows are filtered at load)
    pub price: f64,
    /// Categorical house type (e.g. "detached-house", "flat")
    pub house_type: String,
    /// Living space in square meters
    pub living_space: f64,
    /// Number of rooms (Swiss listings use half-room counts, hence f64)
    pub number_of_rooms: f64,
    /// Construction year
    pub year_built: i32,
    /// Locality (town/village) name
    pub locality: String,
}

#[cfg(test)]
impl Listing {
    /// Test helper: a listing with the given price and locality,
    /// neutral values everywhere else.
    pub fn priced(price: f64, locality: &str) -> Self {
        Self {
            price,
            house_type: "flat".to_string(),
            living_space: 80.0,
            number_of_rooms: 3.5,
            year_built: 1990,
            locality: locality.to_string(),
        }
    }
}
