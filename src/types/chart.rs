//! Chart-ready tables derived from the Listing set
//!
//! Each type feeds exactly one chart on the dashboard page. All of them are
//! pure functions of the current Listing set, built fresh per render pass
//! and discarded after the response is sent.

use serde::Serialize;

/// One equal-width price bucket of the histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBucket {
    /// Inclusive lower bound (CHF)
    pub lower: f64,
    /// Exclusive upper bound (CHF); the last bucket includes its upper bound
    pub upper: f64,
    pub count: u64,
}

/// Row count for one house type (pie chart slice).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    pub house_type: String,
    pub count: u64,
}

/// One point of a pass-through scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Mean price for one locality (bar chart row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalityPrice {
    pub locality: String,
    /// Mean listing price in CHF, rounded to two decimals
    pub mean_price: f64,
}

/// Combined payload for one dashboard render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub price_histogram: Vec<PriceBucket>,
    pub house_types: Vec<TypeShare>,
    pub space_vs_rooms: Vec<ScatterPoint>,
    pub year_vs_price: Vec<ScatterPoint>,
    pub top_localities: Vec<LocalityPrice>,
    pub bottom_localities: Vec<LocalityPrice>,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.price_histogram.is_empty()
            && self.house_types.is_empty()
            && self.space_vs_rooms.is_empty()
            && self.year_vs_price.is_empty()
            && self.top_localities.is_empty()
            && self.bottom_localities.is_empty()
    }
}
