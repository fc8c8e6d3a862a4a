//! Sales Pop server library.
//!
//! The API backend for a Shopify "sales pop" app: it syncs recent orders
//! into per-shop notification documents, stores popup display settings,
//! and serves both to the embedded admin UI and the storefront script-tag
//! widget.
//!
//! # Architecture
//!
//! - Axum web framework
//! - `PostgreSQL` document tables behind injected store traits
//! - Shopify Admin GraphQL API for the order sync
//! - tracing + optional Sentry for observability

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;
pub mod store;
