//! Sales Pop Core - Shared types library.
//!
//! This crate provides common types used across all Sales Pop components:
//! - `server` - REST API backend (admin API + storefront widget endpoint)
//! - `cli` - Command-line tools for migrations, shop registration, and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shop identifiers, notification records, and shop settings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
