//! Core staffing rules for StaffDesk.
//! This crate is the single source of truth for salary, staffing and
//! viability invariants; display and input collection live in callers.

pub mod logging;
pub mod model;
pub mod repo;
pub mod scenario;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::employee::{Employee, EmployeeLookup, MANAGER_TEAM_BONUS_PERCENT};
pub use model::id::{EmployeeId, IdSequence, ProjectId};
pub use model::project::{Project, ViabilityReport, VIABLE_COST_PERCENT};
pub use model::role::{
    Designer, Developer, Manager, Role, RoleKind, Seniority, DESIGNER_PROJECT_LIMIT,
    DEVELOPER_PROJECT_LIMIT, MANAGER_PROJECT_LIMIT,
};
pub use model::validation::ModelValidationError;
pub use repo::staff_repo::{InMemoryStaffRepository, RepoError, RepoResult, StaffRepository};
pub use scenario::plan::{EmployeeEntry, ProjectEntry, RoleEntry, ScenarioPlan, ScenarioStep};
pub use scenario::runner::{
    run_plan, ScenarioError, ScenarioOutcome, StepAction, StepOutcome, StepRecord,
};
pub use service::staffing_service::{
    NewEmployee, RoleSpec, StaffingError, StaffingResult, StaffingService,
};
pub use service::summary::{DetailLine, EmployeeSummary, ProjectSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
