//! Search and rating helpers over the in-memory listing collection.

use crate::models::{Listing, Review};

/// Label shown in place of an average when a listing has no reviews yet
pub const NO_RATING_LABEL: &str = "Nuevo";

/// Result of filtering the catalog with a search term
#[derive(Debug)]
pub struct SearchResults<'a> {
    pub listings: Vec<&'a Listing>,
    /// True when nothing matched; the view offers a "clear search" button
    pub offer_clear: bool,
}

/// Case-insensitive substring match against title or location.
///
/// An empty query matches every listing.
pub fn matches(listing: &Listing, query: &str) -> bool {
    let query = query.to_lowercase();
    listing.title.to_lowercase().contains(&query)
        || listing.location.to_lowercase().contains(&query)
}

pub fn search<'a>(listings: &'a [Listing], query: &str) -> SearchResults<'a> {
    let listings: Vec<&Listing> = listings.iter().filter(|l| matches(l, query)).collect();
    let offer_clear = listings.is_empty();
    SearchResults {
        listings,
        offer_clear,
    }
}

/// Mean rating rounded to one decimal, `None` for an empty list
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    let mean = total as f64 / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Average formatted with one decimal, or the placeholder label
pub fn rating_label(reviews: &[Review]) -> String {
    match average_rating(reviews) {
        Some(avg) => format!("{:.1}", avg),
        None => NO_RATING_LABEL.to_string(),
    }
}
