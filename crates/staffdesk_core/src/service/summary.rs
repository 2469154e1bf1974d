//! Read-only projections handed to display layers.

use crate::model::id::{EmployeeId, ProjectId};
use crate::model::project::ViabilityReport;
use crate::model::role::RoleKind;
use serde::Serialize;

/// One labelled role-specific value, e.g. `Tools: Figma, Photoshop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: String,
    pub value: String,
}

/// Snapshot of one employee with derived salary and resolved names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub name: String,
    pub role: RoleKind,
    /// Human label such as `Developer (Senior)`.
    pub role_label: String,
    pub details: Vec<DetailLine>,
    pub base_salary: f64,
    pub salary: f64,
    pub project_limit: usize,
    /// Assigned project names in assignment order.
    pub projects: Vec<String>,
    /// Direct report names; empty for non-managers.
    pub team: Vec<String>,
}

/// Snapshot of one project with resolved member names and viability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub members: Vec<String>,
    pub viability: ViabilityReport,
}
