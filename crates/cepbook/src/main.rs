//! # Cepbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/cepbook/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command dispatch + logging setup (commands.rs)           │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  cepbookapp (crates/cepbookapp/)                            │
//! │  - API facade, commands, repository, lookup, storage        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors from any layer bubble up here, are printed as `Error: <message>` on stderr,
//! and exit with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
