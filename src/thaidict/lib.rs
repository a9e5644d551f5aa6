//! # Thaidict Architecture
//!
//! Thaidict is an English → Thai vocabulary dictionary. Words are identified by
//! their **normalized key** (trimmed, whitespace-collapsed, lowercased english),
//! stored in a single JSON document, and can be listed, searched, sorted and
//! quizzed against ("is this the right Thai translation?").
//!
//! Like any client-agnostic library, the core never prints and never exits;
//! the bundled CLI is one client, a web transport would be another.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, localized messages, bulk import              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DictionaryStore: keys, ordering, write-through           │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The dictionary store and its backends
//! - [`normalize`]: Key and text normalization
//! - [`validation`]: Entry validation
//! - [`model`]: Core data types (`Entry`, `WordData`, `SortField`)
//! - [`config`]: Configuration management
//! - [`messages`]: Thai user-facing messages
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod normalize;
pub mod store;
pub mod validation;
