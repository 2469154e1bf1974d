//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define the storage contract the staffing service depends on.
//! - Keep the service independent of how entities are held.
//!
//! # Invariants
//! - Repositories store and return entities; they never enforce staffing rules.

pub mod staff_repo;
