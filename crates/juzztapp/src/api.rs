//! # API Facade
//!
//! [`JuzztApi`] is the single entry point for every juzzt operation, whatever
//! the UI. It owns the collaborators and dispatches to `commands/*.rs`:
//!
//! - a [`CartStore`] and a [`Session`], both over the same storage backend
//! - a remote implementing [`CatalogSource`] and [`AuthService`]
//! - the session's record cache
//!
//! The facade holds no business logic and does no I/O of its own. It returns
//! `Result<CmdResult>` and leaves rendering to the caller.
//!
//! ## Record Cache
//!
//! The catalog is fetched once, on the first operation that needs it, and
//! reused for the rest of the session. [`JuzztApi::refresh_catalog`] drops it.
//! A failed fetch leaves the cache empty so the next call retries.
//!
//! ## Record Lookup
//!
//! `record <id>` and `cart add <id>` resolve ids against the cached catalog
//! when it is loaded. Otherwise only that one record is requested.
//!
//! ## Generic Over Backends
//!
//! - Production: `JuzztApi<FsBackend, ApiClient>`
//! - Testing: `JuzztApi<MemBackend, InMemoryRemote>`

use crate::cart::CartStore;
use crate::catalog::CatalogState;
use crate::commands::{self, CmdResult};
use crate::config::JuzztConfig;
use crate::error::{JuzztError, Result};
use crate::model::{Record, RecordId};
use crate::remote::{AuthService, CatalogSource, Credentials, Registration};
use crate::session::Session;
use crate::store::StorageBackend;

pub struct JuzztApi<B: StorageBackend + Clone, R: CatalogSource + AuthService> {
    cart: CartStore<B>,
    session: Session<B>,
    remote: R,
    config: JuzztConfig,
    records: Option<Vec<Record>>,
}

impl<B: StorageBackend + Clone, R: CatalogSource + AuthService> JuzztApi<B, R> {
    pub fn new(backend: B, remote: R, config: JuzztConfig) -> Self {
        Self {
            cart: CartStore::open(backend.clone()),
            session: Session::new(backend),
            remote,
            config,
            records: None,
        }
    }

    pub fn config(&self) -> &JuzztConfig {
        &self.config
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn cart_store(&self) -> &CartStore<B> {
        &self.cart
    }

    /// A catalog state with the configured page size and price cap.
    pub fn catalog_state(&self) -> CatalogState {
        self.config.catalog_state()
    }

    pub fn refresh_catalog(&mut self) {
        self.records = None;
    }

    fn records(&mut self) -> Result<&[Record]> {
        if self.records.is_none() {
            let fetched = self.remote.fetch_records()?;
            tracing::debug!(count = fetched.len(), "catalog loaded");
            self.records = Some(fetched);
        } else {
            tracing::debug!("catalog served from cache");
        }
        Ok(self.records.as_deref().unwrap_or_default())
    }

    fn find_record(&self, id: RecordId) -> Result<Record> {
        if let Some(records) = &self.records {
            return records
                .iter()
                .find(|record| record.id == id)
                .cloned()
                .ok_or(JuzztError::RecordNotFound(id));
        }
        self.remote
            .fetch_record(id)?
            .ok_or(JuzztError::RecordNotFound(id))
    }

    pub fn browse(&mut self, state: &CatalogState) -> Result<CmdResult> {
        let records = self.records()?;
        Ok(commands::catalog::browse(records, state))
    }

    pub fn sale(&mut self) -> Result<CmdResult> {
        let threshold = self.config.sale_threshold;
        let records = self.records()?;
        Ok(commands::catalog::sale(records, threshold))
    }

    pub fn genres(&mut self) -> Result<CmdResult> {
        let records = self.records()?;
        Ok(commands::catalog::genres(records))
    }

    pub fn record(&self, id: RecordId) -> Result<CmdResult> {
        let record = self.find_record(id)?;
        Ok(commands::catalog::detail(record))
    }

    pub fn cart(&self) -> CmdResult {
        commands::cart::show(&self.cart)
    }

    pub fn add_to_cart(&mut self, id: RecordId) -> Result<CmdResult> {
        let record = self.find_record(id)?;
        commands::cart::add(&mut self.cart, &record)
    }

    pub fn remove_from_cart(&mut self, id: RecordId) -> Result<CmdResult> {
        commands::cart::remove(&mut self.cart, id)
    }

    pub fn update_quantity(&mut self, id: RecordId, quantity: i64) -> Result<CmdResult> {
        commands::cart::update_quantity(&mut self.cart, id, quantity)
    }

    pub fn clear_cart(&mut self) -> Result<CmdResult> {
        commands::cart::clear(&mut self.cart)
    }

    pub fn register(&self, registration: &Registration) -> Result<CmdResult> {
        commands::auth::register(&self.remote, registration)
    }

    pub fn login(&self, credentials: &Credentials) -> Result<CmdResult> {
        commands::auth::login(&self.session, &self.remote, credentials)
    }

    pub fn logout(&self) -> Result<CmdResult> {
        commands::auth::logout(&self.session)
    }

    pub fn profile(&self) -> Result<CmdResult> {
        commands::auth::profile(&self.session, &self.remote)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}
