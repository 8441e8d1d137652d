//! Craigmont Core - Shared types library.
//!
//! This crate provides common types used across all Craigmont Reviews
//! components:
//! - `api` - Mock GraphQL review service
//! - `merchant` - Merchant-facing review dashboard
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no GraphQL
//! machinery. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, ratings, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
