//! # Command Layer
//!
//! The business logic of juzzt. Each command is a plain function over domain
//! types (a [`CartStore`], a record slice, a [`Session`]) that returns a
//! structured [`CmdResult`].
//!
//! Commands never print, never parse arguments and never pick exit codes.
//! They hand data back and the UI layer decides how it looks.
//!
//! ## What a CmdResult Carries
//!
//! - `page`: one page of the catalog query pipeline, with the `criteria`
//!   that produced it (`records`)
//! - `listed_records`: a flat record list (`sale`)
//! - `record`: a single record (`record <id>`)
//! - `genres`: genre names with catalog counts
//! - `cart`: a snapshot of the cart after the command ran
//! - `notifications`: whatever the cart store queued during the command
//! - `profile`: the logged-in account
//! - `messages`: leveled text for everything else
//!
//! ## Testing
//!
//! Command tests use [`crate::store::MemBackend`] and
//! [`crate::remote::InMemoryRemote`], so no filesystem or network is touched.
//!
//! ## Modules
//!
//! - [`cart`]: show and mutate the cart
//! - [`catalog`]: browse, sale listing, genres, record detail
//! - [`auth`]: register, login, logout, profile
//!
//! [`CartStore`]: crate::cart::CartStore
//! [`Session`]: crate::session::Session

use crate::cart::{Cart, Notification};
use crate::catalog::{CatalogPage, CatalogState};
use crate::model::Record;
use crate::remote::Profile;
use serde::Serialize;

pub mod auth;
pub mod cart;
pub mod catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub page: Option<CatalogPage>,
    pub criteria: Option<CatalogState>,
    pub listed_records: Vec<Record>,
    pub record: Option<Record>,
    pub genres: Vec<GenreCount>,
    pub cart: Option<Cart>,
    pub notifications: Vec<Notification>,
    pub profile: Option<Profile>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: CatalogPage, criteria: CatalogState) -> Self {
        self.page = Some(page);
        self.criteria = Some(criteria);
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_genres(mut self, genres: Vec<GenreCount>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }
}
