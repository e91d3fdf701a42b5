//! # Saarthi Architecture
//!
//! Saarthi is a **UI-agnostic property search library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client, and the same core could back a web UI or an
//! HTTP API without changes.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! │  - Gates favorite mutations on the login session            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: search pipeline, favorite ops       │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources & Storage (catalog.rs, favorites/)                 │
//! │  - PropertyCatalog trait: StaticCatalog today, fetched later│
//! │  - FavoritesBackend trait: FileBackend (production),        │
//! │    MemoryBackend (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The search pipeline
//!
//! `commands::search` is a pure function of (catalog, filter state, sort
//! key): an order-preserving filter scan followed by a stable sort. Every
//! filter field is an explicit `Option`, so an unset field never excludes a
//! record, and malformed numeric input degrades to "unconstrained" instead
//! of erroring. See [`filter`] and [`sort`] for the exact per-field policy.
//!
//! ## Favorites
//!
//! [`favorites::FavoritesStore`] owns the persistent favorite set: idempotent
//! add/remove, toggle returning the post-mutation state, and a write-through
//! persistence contract (every mutation is stored before the call returns).
//! Rehydration from missing or corrupt storage fails soft to an empty set.
//! The store performs **no** authentication check — gating is the caller's
//! job, consulted via [`auth::AuthSignal`]. That keeps the store
//! independently testable and the policy in one place.
//!
//! ## Testing Strategy
//!
//! 1. **Core & commands** (`filter`, `sort`, `favorites`, `commands/*`):
//!    thorough unit tests of the predicates, ordering, and persistence
//!    invariants. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests against the in-memory backend.
//! 3. **CLI**: `assert_cmd` integration tests against the binary with a
//!    temporary data home.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for search, view, and favorites
//! - [`catalog`]: Property source trait, seed data, reference lists
//! - [`filter`]: Filter state and predicate evaluation
//! - [`sort`]: Sort keys and the stable sort stage
//! - [`favorites`]: Persistent favorites store and backends
//! - [`model`]: Core data types (`PropertyRecord` and friends)
//! - [`auth`]: Session signal and instrumentation sink boundary
//! - [`config`]: Local configuration (session persistence)
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod model;
pub mod sort;
