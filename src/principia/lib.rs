//! # Principia Architecture
//!
//! Principia is a pair of small, runnable demonstrations of object-oriented
//! design principles, packaged as a library with a thin CLI client:
//!
//! - **Specifications and filters** (open/closed): criteria over a product
//!   catalog are values implementing [`specs::Specification`], composed with
//!   `and`, and applied by one generic [`specs::Filter`]. Adding a criterion
//!   never means writing another filter.
//! - **Journal and persistence** (single responsibility): [`journal::Journal`]
//!   only holds and renders entries; saving is behind the
//!   [`store::JournalStore`] trait, whose default backend is a stub.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints results, owns the exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses text into domain values, applies config           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs the demonstrations, returns CmdResult               │
//! │  - No I/O                                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (model, specs, journal) and Storage (store/)        │
//! │  - Pure types and predicates                                │
//! │  - JournalStore trait: StubStore, InMemoryStore (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Progress and outcomes travel as leveled [`commands::CmdMessage`]s that the
//! CLI decides how to show.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Filter, journal and config flows
//! - [`specs`]: Specification trait, conjunction, filter
//! - [`journal`]: The journal
//! - [`store`]: Journal persistence abstraction and backends
//! - [`model`]: `Product`, `Color`, `Size`
//! - [`catalog`]: The fixed demo catalog
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod model;
pub mod specs;
pub mod store;
