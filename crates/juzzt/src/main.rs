//! # Juzzt CLI
//!
//! The binary is deliberately thin. Argument parsing, dispatch and rendering
//! live in `src/cli/`; this file runs the CLI and turns an error into an exit
//! code.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI (crates/juzzt/src/cli/)                             │
//! │  - clap parsing and logging setup (setup.rs)             │
//! │  - dispatch and `config` handling (commands.rs)          │
//! │  - terminal text with console styles (render.rs)         │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  API (crates/juzztapp/src/api.rs)                        │
//! │  - record cache, id lookup, dispatch to commands         │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Commands, cart store, catalog pipeline, storage, remote │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing-subscriber`. The filter comes
//! from `JUZZT_LOG` (for example `JUZZT_LOG=juzztapp=debug`); without it only
//! warnings are shown, or debug output for juzzt's own crates with `-v`.
//!
//! ## Testing
//!
//! - Rendering is tested with canned values and styling forced off.
//! - Dispatch is tested against `MemBackend` and `InMemoryRemote`.
//! - `tests/` runs the built binary for commands that need no server.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
