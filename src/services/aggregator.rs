//! Aggregator service: the six chart derivations
//!
//! Every derivation is a pure function of the Listing slice. Nothing here
//! touches the warehouse or mutates its input; all ordering is deterministic
//! with ties broken by first-seen input order.

use std::collections::HashMap;

use crate::types::{Dashboard, Listing, LocalityPrice, PriceBucket, ScatterPoint, TypeShare};

/// Number of equal-width buckets in the price histogram.
pub const PRICE_BINS: usize = 20;

/// How many localities the top/bottom bar charts show.
pub const LOCALITY_LIMIT: usize = 5;

/// Aggregator for computing the dashboard chart tables
pub struct Aggregator;

impl Aggregator {
    /// Build all six chart tables for one render pass.
    pub fn dashboard(listings: &[Listing]) -> Dashboard {
        Dashboard {
            price_histogram: Self::price_histogram(listings, PRICE_BINS),
            house_types: Self::house_type_counts(listings),
            space_vs_rooms: Self::space_vs_rooms(listings),
            year_vs_price: Self::year_vs_price(listings),
            top_localities: Self::top_localities(listings, LOCALITY_LIMIT),
            bottom_localities: Self::bottom_localities(listings, LOCALITY_LIMIT),
        }
    }

    /// Bucket prices into `bins` equal-width buckets over [min, max].
    ///
    /// The maximum price lands in the last bucket. When every listing has the
    /// same price the range is degenerate and a single bucket holds all rows.
    pub fn price_histogram(listings: &[Listing], bins: usize) -> Vec<PriceBucket> {
        if listings.is_empty() || bins == 0 {
            return Vec::new();
        }

        let min = listings.iter().map(|l| l.price).fold(f64::INFINITY, f64::min);
        let max = listings
            .iter()
            .map(|l| l.price)
            .fold(f64::NEG_INFINITY, f64::max);

        if max <= min {
            return vec![PriceBucket {
                lower: min,
                upper: max,
                count: listings.len() as u64,
            }];
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0u64; bins];
        for listing in listings {
            let idx = ((listing.price - min) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| PriceBucket {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count,
            })
            .collect()
    }

    /// Row count per house type, largest share first.
    pub fn house_type_counts(listings: &[Listing]) -> Vec<TypeShare> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u64> = HashMap::new();

        for listing in listings {
            let entry = counts.entry(listing.house_type.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(listing.house_type.as_str());
            }
            *entry += 1;
        }

        let mut shares: Vec<TypeShare> = order
            .into_iter()
            .map(|house_type| TypeShare {
                house_type: house_type.to_string(),
                count: counts[house_type],
            })
            .collect();
        // Stable sort keeps first-seen order among equal counts
        shares.sort_by(|a, b| b.count.cmp(&a.count));
        shares
    }

    /// Pass-through (living_space, number_of_rooms), one point per row.
    pub fn space_vs_rooms(listings: &[Listing]) -> Vec<ScatterPoint> {
        listings
            .iter()
            .map(|l| ScatterPoint {
                x: l.living_space,
                y: l.number_of_rooms,
            })
            .collect()
    }

    /// Pass-through (year_built, price), one point per row.
    pub fn year_vs_price(listings: &[Listing]) -> Vec<ScatterPoint> {
        listings
            .iter()
            .map(|l| ScatterPoint {
                x: l.year_built as f64,
                y: l.price,
            })
            .collect()
    }

    /// Up to `limit` most expensive localities by mean price, descending.
    pub fn top_localities(listings: &[Listing], limit: usize) -> Vec<LocalityPrice> {
        let mut means = Self::locality_means(listings);
        means.sort_by(|a, b| b.mean_price.total_cmp(&a.mean_price));
        means.truncate(limit);
        means
    }

    /// Up to `limit` cheapest localities by mean price, ascending.
    pub fn bottom_localities(listings: &[Listing], limit: usize) -> Vec<LocalityPrice> {
        let mut means = Self::locality_means(listings);
        means.sort_by(|a, b| a.mean_price.total_cmp(&b.mean_price));
        means.truncate(limit);
        means
    }

    /// Mean price per locality in first-seen order, rounded to two decimals.
    ///
    /// Rounding happens before ranking, so localities whose means differ only
    /// past the second decimal tie and keep their first-seen order.
    fn locality_means(listings: &[Listing]) -> Vec<LocalityPrice> {
        let mut order: Vec<&str> = Vec::new();
        let mut sums: HashMap<&str, (f64, u64)> = HashMap::new();

        for listing in listings {
            let entry = sums.entry(listing.locality.as_str()).or_insert((0.0, 0));
            if entry.1 == 0 {
                order.push(listing.locality.as_str());
            }
            entry.0 += listing.price;
            entry.1 += 1;
        }

        order
            .into_iter()
            .map(|locality| {
                let (sum, n) = sums[locality];
                LocalityPrice {
                    locality: locality.to_string(),
                    mean_price: round2(sum / n as f64),
                }
            })
            .collect()
    }
}

/// Round to two decimal places (CHF cents).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
