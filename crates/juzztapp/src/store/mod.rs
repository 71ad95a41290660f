//! # Storage Layer
//!
//! Juzzt keeps two pieces of durable client state, both in a flat key-value
//! slot store:
//!
//! | Key                | Value                                   |
//! |--------------------|-----------------------------------------|
//! | [`CART_KEY`]       | JSON array of [`crate::model::CartEntry`] |
//! | [`TOKEN_KEY`]      | Opaque session token (presence = logged in) |
//!
//! The [`backend::StorageBackend`] trait is the only contract the rest of the
//! crate relies on. It deals in raw strings: parsing, validation and fallback
//! to defaults are the callers' business (see [`crate::cart::CartStore::open`]).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key inside a data directory, written
//!   atomically (temp file + rename).
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! Both are cheap to clone and clones share the same underlying slots, so the
//! cart store and the session store can each own a handle to one backend.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── cart        # Cart entries (JSON)
//! ├── token       # Session token
//! └── juzzt.toml  # Optional configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

/// Slot holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Slot holding the session token.
pub const TOKEN_KEY: &str = "token";
