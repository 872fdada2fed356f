//! # CLI Behavior
//!
//! This is **one possible UI client** for cepbook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the `cepbookapp` crate documentation.
//!
//! ### Naked Execution (`cepbook`)
//!
//! Running `cepbook` with no arguments defaults to `cepbook list`: the greeting followed
//! by every saved address, newest first.
//!
//! ### Indexes
//!
//! The number in front of each row is its position in the full list. Filtering keeps
//! those numbers, so `cepbook list rio` followed by `cepbook delete 4` deletes the
//! address shown as `4.` in the filtered view.
//!
//! ### Data Location
//!
//! `--data-dir` beats the `CEPBOOK_DATA` environment variable, which beats the OS data
//! directory.

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
