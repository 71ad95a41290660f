//! # Juzzt Architecture
//!
//! Juzzt is a client for a vinyl-record storefront: browse and filter the
//! catalog, keep a shopping cart, and log in to an account. This crate is the
//! UI-agnostic core. The `juzzt` binary is one UI on top of it.
//!
//! ## Layers
//!
//! ```text
//! UI (juzzt CLI)           parses input, renders CmdResult, owns exit codes
//! API (api.rs)             JuzztApi: single entry point, record cache
//! Commands (commands/)     business logic returning CmdResult
//! Core (cart/, catalog/)   Cart Store and Catalog Query Pipeline
//! Storage (store/)         key-value slots: FsBackend, MemBackend
//! Remote (remote/)         storefront REST API: ApiClient, InMemoryRemote
//! ```
//!
//! Each layer only talks to the one below it. UIs never touch the cart store
//! or the HTTP client directly.
//!
//! ## The Two Cores
//!
//! - [`cart::CartStore`] owns the cart, persists it after every change and
//!   queues [`cart::Notification`]s for the UI to show.
//! - [`catalog::query`] is a pure filter, sort and paginate pass over the
//!   record list.
//!
//! ## Testing
//!
//! Commands and the facade are tested against [`store::MemBackend`] and
//! [`remote::InMemoryRemote`]. The filesystem backend has its own tests with
//! temporary directories, and the CLI crate runs end-to-end tests against the
//! built binary.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod remote;
pub mod session;
pub mod store;
