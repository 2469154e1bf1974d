//! Domain model for employees, roles and projects.
//!
//! # Responsibility
//! - Define the entities the staffing rules operate on.
//! - Keep salary and viability arithmetic next to the data it reads.
//!
//! # Invariants
//! - Every entity is identified by an id from an injected `IdSequence`.
//! - Cross-entity references are ids, resolved through `EmployeeLookup`.
//! - Rosters, teams and assignments only grow; there is no removal.

pub mod employee;
pub mod id;
pub mod project;
pub mod role;
pub mod validation;
