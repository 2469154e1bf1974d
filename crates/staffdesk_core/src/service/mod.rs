//! Core use-case services.
//!
//! # Responsibility
//! - Apply staffing rules on top of repository storage.
//! - Keep display/CLI layers decoupled from entity internals.

pub mod staffing_service;
pub mod summary;
