//! # Cepbook Architecture
//!
//! Cepbook keeps a personal list of Brazilian addresses, each one resolved from its
//! postal code (CEP). Like any tool in this family it is a **UI-agnostic library** with
//! a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cepbook crate)                                  │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, busy guard for lookups        │
//! │  - Parses selectors (indexes, ranges, UUIDs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, view, delete, clear                           │
//! │  - Return CmdResult, no I/O assumptions                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - In-memory collection kept in lock-step with the store    │
//! │  - Rolls back on persistence failure, notifies listeners    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over a StorageBackend                    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups sit beside the stack: [`lookup::resolve`] turns a postal code into a new
//! [`model::Address`] through a [`lookup::CepResolver`], and the `add` command hands it
//! to the repository.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and repository**: unit tests over `InMemoryStore` and `StaticResolver`.
//! 2. **Store**: the filesystem backend is tested against temp directories.
//! 3. **CLI**: end-to-end tests run the binary against a temp data directory, offline.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`repository`]: The address collection and its persistence policy
//! - [`lookup`]: Postal code resolution and the ViaCEP client
//! - [`filter`]: Query matching
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Address` record
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration
//! - [`session`]: Greeting identity
//! - [`init`]: Wiring for UIs
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod init;
pub mod lookup;
pub mod model;
pub mod repository;
pub mod session;
pub mod store;
