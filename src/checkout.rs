//! Simulated checkout. No money moves; paying just waits and confirms.

use crate::models::{new_id, Listing};
use std::time::Duration;
use tracing::info;

/// Flat fee added to the first month
pub const SERVICE_FEE: f64 = 15.0;

/// How long the fake payment "processes"
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Review,
    Processing,
    Confirmed,
}

#[derive(Debug, Clone)]
pub struct Checkout {
    id: String,
    listing_id: String,
    total: f64,
    step: CheckoutStep,
}

/// Token for a payment in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTicket {
    pub checkout_id: String,
}

impl PaymentTicket {
    /// Wait out the simulated processing time
    pub async fn process(self, delay: Duration) -> Self {
        tokio::time::sleep(delay).await;
        self
    }
}

impl Checkout {
    pub fn open(listing: &Listing) -> Self {
        let checkout = Self {
            id: new_id(),
            listing_id: listing.id.clone(),
            total: listing.price + SERVICE_FEE,
            step: CheckoutStep::Review,
        };
        info!(
            "💳 Checkout opened for listing {} (total {:.2})",
            checkout.listing_id, checkout.total
        );
        checkout
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    /// Monthly price plus the service fee
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Start paying; `None` if a payment already started
    pub fn pay(&mut self) -> Option<PaymentTicket> {
        if self.step != CheckoutStep::Review {
            return None;
        }
        self.step = CheckoutStep::Processing;
        Some(PaymentTicket {
            checkout_id: self.id.clone(),
        })
    }

    /// Finish a payment started by `pay`; false for a foreign ticket
    pub fn complete(&mut self, ticket: &PaymentTicket) -> bool {
        if ticket.checkout_id != self.id || self.step != CheckoutStep::Processing {
            return false;
        }
        self.step = CheckoutStep::Confirmed;
        info!("✅ Payment confirmed for listing {}", self.listing_id);
        true
    }
}
