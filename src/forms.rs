//! Form drafts and the checks applied when they are submitted.

use crate::error::{FormError, Result};
use crate::models::{new_id, Listing, PlatformReview, Review};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const ANONYMOUS_OWNER: &str = "Anónimo";
const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";

/// Roles offered by the platform review form
pub const PLATFORM_ROLES: [&str; 3] = ["Inquilino", "Propietario", "Estudiante"];

fn required(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

/// Split a comma-separated amenity list, dropping blank entries
pub fn parse_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Short Spanish-locale date, e.g. "15/3/2024"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Contents of the publish form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    /// Comma-separated
    pub amenities: String,
    pub owner_name: String,
    pub phone: String,
    /// Data URL of the selected photo
    pub image: Option<String>,
}

impl ListingDraft {
    pub fn into_listing(self) -> Result<Listing> {
        required(&self.phone, "phone")?;
        required(&self.title, "title")?;
        required(&self.price, "price")?;
        required(&self.location, "location")?;
        required(&self.description, "description")?;

        let image = self.image.ok_or(FormError::MissingPhoto)?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidPrice(self.price.clone()))?;
        if !price.is_finite() {
            return Err(FormError::InvalidPrice(self.price));
        }

        let owner_name = if self.owner_name.trim().is_empty() {
            ANONYMOUS_OWNER.to_string()
        } else {
            self.owner_name
        };

        Ok(Listing {
            id: new_id(),
            title: self.title,
            description: self.description,
            price,
            location: self.location,
            image,
            amenities: parse_amenities(&self.amenities),
            owner_name,
            phone: self.phone,
            reviews: Vec::new(),
        })
    }
}

/// Contents of the per-listing review form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            rating: 5,
            comment: String::new(),
        }
    }
}

impl ReviewDraft {
    pub fn into_review(self) -> Result<Review> {
        self.into_review_dated(Local::now().date_naive())
    }

    pub fn into_review_dated(self, date: NaiveDate) -> Result<Review> {
        required(&self.user_name, "user_name")?;
        required(&self.comment, "comment")?;

        Ok(Review {
            id: new_id(),
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            date: display_date(date),
        })
    }
}

/// Contents of the "add my opinion" form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformReviewDraft {
    pub user_name: String,
    pub user_role: String,
    pub rating: i32,
    pub comment: String,
}

impl Default for PlatformReviewDraft {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            user_role: PLATFORM_ROLES[0].to_string(),
            rating: 5,
            comment: String::new(),
        }
    }
}

impl PlatformReviewDraft {
    pub fn into_platform_review(self) -> Result<PlatformReview> {
        required(&self.user_name, "user_name")?;
        required(&self.comment, "comment")?;

        let avatar = format!("{}{}", AVATAR_BASE_URL, self.user_name);
        Ok(PlatformReview {
            id: new_id(),
            user_name: self.user_name,
            user_role: self.user_role,
            rating: self.rating,
            comment: self.comment,
            avatar,
        })
    }
}

/// Cosmetic login: the display name is whatever precedes the first '@'
pub fn login_name(email: &str, password: &str) -> Result<String> {
    required(email, "email")?;
    required(password, "password")?;

    let name = email.split('@').next().unwrap_or_default();
    Ok(name.to_string())
}
