//! Application state and the command dispatcher that mutates it.

use crate::assistant::Persona;
use crate::catalog::{self, SearchResults};
use crate::chat::{AssistantReply, ChatSession, PendingReply};
use crate::checkout::{Checkout, PaymentTicket};
use crate::error::{FormError, Result};
use crate::forms::{self, ListingDraft, PlatformReviewDraft, ReviewDraft};
use crate::models::{Listing, PlatformReview, User};
use crate::seed;
use tracing::{debug, info, warn};

/// Which chat a message is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTarget {
    /// Floating help widget
    Help,
    /// Owner of the listing in detail view
    Host,
}

/// User actions
#[derive(Debug, Clone)]
pub enum Command {
    Search(String),
    ClearSearch,
    OpenListing(String),
    CloseListing,
    PublishListing(ListingDraft),
    AddReview {
        listing_id: String,
        draft: ReviewDraft,
    },
    AddPlatformReview(PlatformReviewDraft),
    Login {
        email: String,
        password: String,
    },
    Logout,
    OpenChat(ChatTarget),
    CloseChat(ChatTarget),
    SendChat {
        target: ChatTarget,
        text: String,
    },
    OpenCheckout,
    Pay,
    CloseCheckout,
}

/// Asynchronous work a command asks the caller to carry out
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Resolve, then hand the reply to `AppState::deliver_reply`
    AskAssistant(PendingReply),
    /// Wait, then hand the ticket to `AppState::complete_payment`
    ProcessPayment(PaymentTicket),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    listings: Vec<Listing>,
    platform_reviews: Vec<PlatformReview>,
    selected: Option<String>,
    search_term: String,
    user: Option<User>,
    help_chat: Option<ChatSession>,
    host_chat: Option<ChatSession>,
    checkout: Option<Checkout>,
}

impl AppState {
    pub fn new(listings: Vec<Listing>, platform_reviews: Vec<PlatformReview>) -> Self {
        Self {
            listings,
            platform_reviews,
            ..Self::default()
        }
    }

    /// State with the built-in listings and testimonials
    pub fn seeded() -> Self {
        Self::new(seed::initial_listings(), seed::initial_platform_reviews())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn platform_reviews(&self) -> &[PlatformReview] {
        &self.platform_reviews
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Listings matching the current search term
    pub fn visible_listings(&self) -> SearchResults<'_> {
        catalog::search(&self.listings, &self.search_term)
    }

    /// Listing open in detail view, read from the shared collection
    pub fn selected_listing(&self) -> Option<&Listing> {
        let id = self.selected.as_deref()?;
        self.listing(id)
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn chat(&self, target: ChatTarget) -> Option<&ChatSession> {
        match target {
            ChatTarget::Help => self.help_chat.as_ref(),
            ChatTarget::Host => self.host_chat.as_ref(),
        }
    }

    pub fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    fn chat_mut(&mut self, target: ChatTarget) -> &mut Option<ChatSession> {
        match target {
            ChatTarget::Help => &mut self.help_chat,
            ChatTarget::Host => &mut self.host_chat,
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Effect> {
        debug!("Dispatching {:?}", command);

        match command {
            Command::Search(term) => {
                self.search_term = term;
            }
            Command::ClearSearch => {
                self.search_term.clear();
            }
            Command::OpenListing(id) => {
                if self.listing(&id).is_none() {
                    return Err(FormError::ListingNotFound(id));
                }
                if self.selected.as_deref() != Some(id.as_str()) {
                    self.close_detail();
                }
                self.selected = Some(id);
            }
            Command::CloseListing => {
                self.close_detail();
            }
            Command::PublishListing(draft) => {
                let listing = draft.into_listing()?;
                info!("🏠 Published listing {} ({})", listing.id, listing.title);
                self.listings.insert(0, listing);
            }
            Command::AddReview { listing_id, draft } => {
                let listing = self
                    .listings
                    .iter_mut()
                    .find(|l| l.id == listing_id)
                    .ok_or_else(|| FormError::ListingNotFound(listing_id.clone()))?;
                let review = draft.into_review()?;
                info!("⭐ Review {} added to listing {}", review.id, listing.id);
                listing.reviews.insert(0, review);
            }
            Command::AddPlatformReview(draft) => {
                let review = draft.into_platform_review()?;
                info!("⭐ Platform review {} added", review.id);
                self.platform_reviews.insert(0, review);
            }
            Command::Login { email, password } => {
                let name = forms::login_name(&email, &password)?;
                info!("👤 Logged in as {}", name);
                self.user = Some(User { name });
            }
            Command::Logout => {
                self.user = None;
            }
            Command::OpenChat(target) => {
                if self.chat(target).is_none() {
                    let persona = match target {
                        ChatTarget::Help => Persona::Help,
                        ChatTarget::Host => Persona::Host(
                            self.selected_listing()
                                .cloned()
                                .ok_or(FormError::NoListingOpen)?,
                        ),
                    };
                    *self.chat_mut(target) = Some(ChatSession::open(persona));
                }
            }
            Command::CloseChat(target) => {
                if self.chat_mut(target).take().is_some() {
                    info!("💬 {:?} chat closed", target);
                }
            }
            Command::SendChat { target, text } => {
                let session = self
                    .chat_mut(target)
                    .as_mut()
                    .ok_or(FormError::ChatClosed)?;
                if let Some(pending) = session.send(&text) {
                    return Ok(Effect::AskAssistant(pending));
                }
            }
            Command::OpenCheckout => {
                let checkout = Checkout::open(
                    self.selected_listing().ok_or(FormError::NoListingOpen)?,
                );
                self.checkout = Some(checkout);
            }
            Command::Pay => {
                let checkout = self.checkout.as_mut().ok_or(FormError::NoCheckout)?;
                if let Some(ticket) = checkout.pay() {
                    return Ok(Effect::ProcessPayment(ticket));
                }
            }
            Command::CloseCheckout => {
                self.checkout = None;
            }
        }

        Ok(Effect::None)
    }

    /// Hand back an assistant reply; dropped if its chat has closed since
    pub fn deliver_reply(&mut self, reply: AssistantReply) -> bool {
        for session in [&mut self.help_chat, &mut self.host_chat]
            .into_iter()
            .flatten()
        {
            if session.id() == reply.session_id {
                return session.deliver(reply);
            }
        }
        warn!(
            "Discarding reply for closed chat session {}",
            reply.session_id
        );
        false
    }

    /// Finish a simulated payment; ignored if the checkout was closed
    pub fn complete_payment(&mut self, ticket: &PaymentTicket) -> bool {
        match self.checkout.as_mut() {
            Some(checkout) => checkout.complete(ticket),
            None => {
                warn!("Discarding payment for closed checkout {}", ticket.checkout_id);
                false
            }
        }
    }

    /// Leaving the detail view also closes its host chat and checkout
    fn close_detail(&mut self) {
        self.selected = None;
        self.host_chat = None;
        self.checkout = None;
    }
}
