//! # Pillbox Architecture
//!
//! Pillbox is a **UI-agnostic medicine inventory library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
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
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Domain
//!
//! The inventory is two collections: a **ledger** of medicine records (name,
//! per-unit weight, quantity, cost, assigned drawer) and a **registry** of
//! storage drawers (identifier, current load, weight capacity). An addition
//! only goes through when the item's total mass fits into the target drawer's
//! remaining free space — that decision lives in [`alloc`], a 0/1
//! subset-selection routine kept general over an item list even though the
//! add path offers it a single candidate at a time.
//!
//! Every mutating operation updates both collections in memory and rewrites
//! them to the store in full. There is no partial commit: validation and the
//! capacity check run before the first write.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Medicine`, `Drawer`, `DrawerId`)
//! - [`alloc`]: The drawer capacity allocator
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod alloc;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
