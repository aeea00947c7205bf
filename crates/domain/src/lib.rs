//! # Dealflow Domain
//!
//! Business domain types for the Dealflow CRM client.
//!
//! This crate contains:
//! - Entity types returned by the CRM API (companies, contacts, deals, ...)
//! - Write payloads for create and partial-update calls
//! - The paginated list envelope shared by every collection endpoint
//!
//! ## Architecture
//! - No dependencies on other Dealflow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod types;

// Re-export commonly used items
pub use types::*;
