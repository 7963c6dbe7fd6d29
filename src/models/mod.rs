use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fresh identifier for anything created at runtime
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A review left on a single listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    /// Nominally 1 to 5, not enforced
    pub rating: i32,
    pub comment: String,
    /// Display-formatted date, e.g. "15/3/2024"
    pub date: String,
}

/// A testimonial about the marketplace itself
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformReview {
    pub id: String,
    pub user_name: String,
    /// Free-text label such as "Inquilino" or "Propietario"
    pub user_role: String,
    pub rating: i32,
    pub comment: String,
    pub avatar: String,
}

/// Core room-rental listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Monthly price
    pub price: f64,
    pub location: String,
    /// URL or inline data URL
    pub image: String,
    pub amenities: Vec<String>,
    pub owner_name: String,
    pub phone: String,
    /// Newest first
    pub reviews: Vec<Review>,
}

/// Who produced a chat turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Logged-in user; only the display name is kept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
}
