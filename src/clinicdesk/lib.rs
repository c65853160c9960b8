//! # Clinicdesk Architecture
//!
//! Clinicdesk is a **UI-agnostic scheduling core** for a small clinic: patients,
//! providers, clinics and appointments. The terminal client is one consumer of
//! the library; a web front-end could be another.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates forms, prints tables         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!               │ reads & writes                 │ reads
//!               ▼                                ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Gateway (gateway.rs)        │  │  Views (views/*.rs)      │
//! │  - Mock of the clinic API    │  │  - Pure projections      │
//! │  - Simulated latency         │  │  - Joins, filters, sorts │
//! │  - Envelope results          │  │  - Placeholder labels    │
//! └──────────────────────────────┘  └──────────────────────────┘
//!               │ owns                           │ borrows
//!               ▼                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, Collection, InMemoryStore               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Mutation Path
//!
//! The gateway owns the store. Creating records, cancelling appointments and
//! bulk loads all go through it; views only ever see a shared borrow. There is
//! no global state.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/`): collection semantics, identifier counters, seed files.
//! 2. **Gateway** (`gateway.rs`): envelopes, identifier assignment, latency
//!    (with paused tokio time), concurrent creates.
//! 3. **Views** (`views/*.rs`): the lion's share, built on `StoreFixture`.
//! 4. **CLI** (`tests/`): the binary end to end, including shell sessions.
//!
//! ## Module Overview
//!
//! - [`gateway`]: The mock API, entry point for all reads and writes
//! - [`envelope`]: The `{success, data | message}` result type
//! - [`views`]: Dashboard counters, listings and lookups
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Entities and creation payloads
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing and the interactive shell for the binary (not part of the lib API)

pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod model;
pub mod store;
pub mod views;
