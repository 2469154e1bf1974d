//! Employee entity.
//!
//! # Responsibility
//! - Hold identity, base salary, role and current project assignments.
//! - Compute the monthly salary polymorphically over the role.
//!
//! # Invariants
//! - `id` never changes after construction.
//! - `base_salary` is finite and non-negative.
//! - `assigned_projects` has no duplicates and never exceeds the role limit.
//! - Salary is recomputed on every call; nothing is cached.

use crate::model::id::{EmployeeId, ProjectId};
use crate::model::role::{Role, RoleKind};
use crate::model::validation::{normalize_name, ModelValidationError};
use serde::Serialize;

/// Share of the team's salaries a manager earns as bonus, in percent.
pub const MANAGER_TEAM_BONUS_PERCENT: f64 = 15.0;

/// Read access to employees by id.
///
/// Manager salaries and project costs need to resolve other employees; any
/// store that can do so implements this.
pub trait EmployeeLookup {
    fn employee(&self, id: EmployeeId) -> Option<&Employee>;
}

/// One employee of any role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    base_salary: f64,
    role: Role,
    assigned_projects: Vec<ProjectId>,
}

impl Employee {
    /// Creates an employee with no project assignments.
    ///
    /// # Errors
    /// - `BlankName` when `name` is empty after trimming.
    /// - `InvalidBaseSalary` when `base_salary` is negative or not finite.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        base_salary: f64,
        role: Role,
    ) -> Result<Self, ModelValidationError> {
        let name = normalize_name(name.into())?;
        if !base_salary.is_finite() || base_salary < 0.0 {
            return Err(ModelValidationError::InvalidBaseSalary(base_salary));
        }
        Ok(Self {
            id,
            name,
            base_salary,
            role,
            assigned_projects: Vec::new(),
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn role_kind(&self) -> RoleKind {
        self.role.kind()
    }

    /// Projects in assignment order.
    pub fn assigned_projects(&self) -> &[ProjectId] {
        &self.assigned_projects
    }

    pub fn project_limit(&self) -> usize {
        self.role.project_limit()
    }

    /// Whether one more project fits under the role limit.
    pub fn can_take_project(&self) -> bool {
        self.assigned_projects.len() < self.project_limit()
    }

    pub fn is_assigned_to(&self, project: ProjectId) -> bool {
        self.assigned_projects.contains(&project)
    }

    /// Monthly salary including the role bonus.
    ///
    /// Developers and designers depend only on their own fields. Managers add
    /// 15% of the sum of their direct reports' current salaries, resolved
    /// through `directory`; reports the directory cannot resolve count as 0.
    pub fn calculate_salary<L: EmployeeLookup + ?Sized>(&self, directory: &L) -> f64 {
        let bonus = match &self.role {
            Role::Developer(dev) => dev.bonus(),
            Role::Designer(designer) => designer.bonus(),
            Role::Manager(manager) => {
                let team_total: f64 = manager
                    .direct_reports()
                    .iter()
                    .filter_map(|id| directory.employee(*id))
                    // Reports are never managers, so this does not recurse further.
                    .map(|report| report.calculate_salary(directory))
                    .sum();
                team_total * MANAGER_TEAM_BONUS_PERCENT / 100.0
            }
        };
        self.base_salary + bonus
    }

    pub(crate) fn set_base_salary(&mut self, amount: f64) -> Result<(), ModelValidationError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ModelValidationError::InvalidBaseSalary(amount));
        }
        self.base_salary = amount;
        Ok(())
    }

    pub(crate) fn push_project(&mut self, project: ProjectId) {
        self.assigned_projects.push(project);
    }

    pub(crate) fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }
}
