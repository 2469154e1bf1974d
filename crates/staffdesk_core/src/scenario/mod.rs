//! Declarative staffing scenarios.
//!
//! # Responsibility
//! - Describe a set of employees, projects and staffing steps as data.
//! - Run that description against a `StaffingService` and report per-step results.

pub mod plan;
pub mod runner;
