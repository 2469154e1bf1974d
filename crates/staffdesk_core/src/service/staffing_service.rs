//! Staffing use-case service.
//!
//! # Responsibility
//! - Create employees and projects with ids from injected sequences.
//! - Enforce project staffing and manager team rules.
//! - Answer salary, cost and viability queries.
//!
//! # Invariants
//! - A rejected operation leaves every entity unchanged.
//! - Project assignment checks run in a fixed order: manager restriction,
//!   then role limit, then duplicate membership.
//! - Team additions check: manager role, then report role, then duplicate.
//! - Derived values (salary, cost, viability) are recomputed per call.

use crate::model::employee::Employee;
use crate::model::id::{EmployeeId, IdSequence, ProjectId};
use crate::model::project::{Project, ViabilityReport};
use crate::model::role::{Designer, Developer, Manager, Role, RoleKind, Seniority};
use crate::model::validation::ModelValidationError;
use crate::repo::staff_repo::{RepoError, StaffRepository};
use crate::service::summary::{DetailLine, EmployeeSummary, ProjectSummary};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StaffingResult<T> = Result<T, StaffingError>;

/// Errors from staffing operations.
///
/// The first four variants are business-rule rejections: expected, local and
/// non-fatal. The rest signal bad ids or bad input.
#[derive(Debug, Clone, PartialEq)]
pub enum StaffingError {
    /// Employee is already on the project roster or the manager's team.
    DuplicateAssignment { employee: String, target: String },
    /// Employee already holds as many projects as the role allows.
    LimitExceeded { employee: String, limit: usize },
    /// Role may not join the target (manager on a project, non-IC on a team).
    RoleNotEligible {
        employee: String,
        role: RoleKind,
        target: String,
    },
    /// Team operation addressed an employee who is not a manager.
    NotAManager { employee: String },
    EmployeeNotFound(EmployeeId),
    ProjectNotFound(ProjectId),
    InvalidEmployee(ModelValidationError),
    InvalidProject(ModelValidationError),
    Repo(RepoError),
}

impl StaffingError {
    /// Stable machine-readable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateAssignment { .. } => "duplicate_assignment",
            Self::LimitExceeded { .. } => "limit_exceeded",
            Self::RoleNotEligible { .. } => "role_not_eligible",
            Self::NotAManager { .. } => "not_a_manager",
            Self::EmployeeNotFound(_) => "employee_not_found",
            Self::ProjectNotFound(_) => "project_not_found",
            Self::InvalidEmployee(_) => "invalid_employee",
            Self::InvalidProject(_) => "invalid_project",
            Self::Repo(_) => "repo_error",
        }
    }

    /// Whether this is an expected staffing-rule rejection.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAssignment { .. }
                | Self::LimitExceeded { .. }
                | Self::RoleNotEligible { .. }
                | Self::NotAManager { .. }
        )
    }
}

impl Display for StaffingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAssignment { employee, target } => {
                write!(f, "{employee} is already assigned to {target}")
            }
            Self::LimitExceeded { employee, limit } => {
                write!(f, "{employee} is already at the limit of {limit} active projects")
            }
            Self::RoleNotEligible {
                employee,
                role,
                target,
            } => write!(f, "{employee} ({role}) cannot be added to {target}"),
            Self::NotAManager { employee } => write!(f, "{employee} is not a manager"),
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::InvalidEmployee(err) => write!(f, "invalid employee: {err}"),
            Self::InvalidProject(err) => write!(f, "invalid project: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StaffingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEmployee(err) | Self::InvalidProject(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StaffingError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Role-specific input for hiring.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleSpec {
    Developer {
        seniority: Option<Seniority>,
        languages: Vec<String>,
    },
    Designer {
        tools: Vec<String>,
        specialty: Option<String>,
    },
    Manager {
        department: String,
    },
}

impl RoleSpec {
    fn into_role(self) -> Role {
        match self {
            Self::Developer {
                seniority,
                languages,
            } => Role::Developer(Developer::new(seniority, languages)),
            Self::Designer { tools, specialty } => Role::Designer(Designer::new(tools, specialty)),
            Self::Manager { department } => Role::Manager(Manager::new(department)),
        }
    }
}

/// Request model for hiring one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub base_salary: f64,
    pub role: RoleSpec,
}

impl NewEmployee {
    pub fn developer(
        name: impl Into<String>,
        base_salary: f64,
        seniority: Option<Seniority>,
        languages: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_salary,
            role: RoleSpec::Developer {
                seniority,
                languages,
            },
        }
    }

    pub fn designer(
        name: impl Into<String>,
        base_salary: f64,
        tools: Vec<String>,
        specialty: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_salary,
            role: RoleSpec::Designer { tools, specialty },
        }
    }

    pub fn manager(
        name: impl Into<String>,
        base_salary: f64,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_salary,
            role: RoleSpec::Manager {
                department: department.into(),
            },
        }
    }
}

/// Staffing service facade over a repository implementation.
pub struct StaffingService<R: StaffRepository> {
    repo: R,
    employee_ids: IdSequence,
    project_ids: IdSequence,
}

impl<R: StaffRepository> StaffingService<R> {
    /// Creates a service whose employee and project ids both start at 1.
    pub fn new(repo: R) -> Self {
        Self::with_id_sequence(repo, IdSequence::new())
    }

    /// Creates a service drawing employee ids from `employee_ids`.
    pub fn with_id_sequence(repo: R, employee_ids: IdSequence) -> Self {
        Self {
            repo,
            employee_ids,
            project_ids: IdSequence::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Hires one employee and returns the assigned id.
    ///
    /// An id is consumed only when validation succeeds.
    pub fn hire(&mut self, request: NewEmployee) -> StaffingResult<EmployeeId> {
        let id = EmployeeId(self.employee_ids.peek());
        let employee = Employee::new(
            id,
            request.name,
            request.base_salary,
            request.role.into_role(),
        )
        .map_err(StaffingError::InvalidEmployee)
        .inspect_err(|err| log_rejected("employee_hire", err))?;
        let kind = employee.role_kind();

        self.repo
            .insert_employee(employee)
            .map_err(StaffingError::from)
            .inspect_err(|err| log_rejected("employee_hire", err))?;
        self.employee_ids.next_value();

        info!(
            "event=employee_hire module=staffing status=ok id={} role={}",
            id, kind
        );
        Ok(id)
    }

    /// Creates one empty project and returns its id.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        budget: f64,
    ) -> StaffingResult<ProjectId> {
        let id = ProjectId(self.project_ids.peek());
        let project = Project::new(id, name, budget)
            .map_err(StaffingError::InvalidProject)
            .inspect_err(|err| log_rejected("project_create", err))?;

        self.repo
            .insert_project(project)
            .map_err(StaffingError::from)
            .inspect_err(|err| log_rejected("project_create", err))?;
        self.project_ids.next_value();

        info!("event=project_create module=staffing status=ok id={id}");
        Ok(id)
    }

    /// Adds `employee` to the roster of `project`.
    ///
    /// # Errors
    /// - `RoleNotEligible` when the employee is a manager.
    /// - `LimitExceeded` when the employee is at the role's project limit.
    /// - `DuplicateAssignment` when the employee is already on the roster.
    /// - `ProjectNotFound` / `EmployeeNotFound` for unknown ids.
    pub fn add_employee(&mut self, project: ProjectId, employee: EmployeeId) -> StaffingResult<()> {
        self.check_project_assignment(project, employee)
            .inspect_err(|err| log_rejected("project_assign", err))?;

        self.repo
            .project_mut(project)
            .ok_or(StaffingError::ProjectNotFound(project))?
            .push_member(employee);
        self.repo
            .employee_mut(employee)
            .ok_or(StaffingError::EmployeeNotFound(employee))?
            .push_project(project);

        info!(
            "event=project_assign module=staffing status=ok project={} employee={}",
            project, employee
        );
        Ok(())
    }

    /// Adds `member` to the direct reports of `manager`.
    ///
    /// # Errors
    /// - `NotAManager` when `manager` does not hold the manager role.
    /// - `RoleNotEligible` when `member` is not a developer or designer.
    /// - `DuplicateAssignment` when `member` is already on the team.
    /// - `EmployeeNotFound` for unknown ids.
    pub fn add_to_team(&mut self, manager: EmployeeId, member: EmployeeId) -> StaffingResult<()> {
        self.check_team_addition(manager, member)
            .inspect_err(|err| log_rejected("team_add", err))?;

        self.repo
            .employee_mut(manager)
            .and_then(|employee| employee.role_mut().as_manager_mut())
            .ok_or(StaffingError::EmployeeNotFound(manager))?
            .push_report(member);

        info!(
            "event=team_add module=staffing status=ok manager={} member={}",
            manager, member
        );
        Ok(())
    }

    /// Replaces the base salary of one employee.
    ///
    /// Managers supervising this employee see the change on their next
    /// salary computation.
    ///
    /// # Errors
    /// - `InvalidEmployee` when `amount` is zero, negative or not finite.
    pub fn set_base_salary(&mut self, id: EmployeeId, amount: f64) -> StaffingResult<()> {
        let employee = self
            .repo
            .employee_mut(id)
            .ok_or(StaffingError::EmployeeNotFound(id))?;
        if amount <= 0.0 {
            let err =
                StaffingError::InvalidEmployee(ModelValidationError::InvalidBaseSalary(amount));
            log_rejected("salary_update", &err);
            return Err(err);
        }
        employee
            .set_base_salary(amount)
            .map_err(StaffingError::InvalidEmployee)
            .inspect_err(|err| log_rejected("salary_update", err))?;

        info!("event=salary_update module=staffing status=ok employee={id}");
        Ok(())
    }

    /// Sets or clears the seniority level of a developer.
    ///
    /// # Errors
    /// - `RoleNotEligible` when the employee is not a developer.
    pub fn set_seniority(
        &mut self,
        id: EmployeeId,
        level: Option<Seniority>,
    ) -> StaffingResult<()> {
        let employee = self
            .repo
            .employee_mut(id)
            .ok_or(StaffingError::EmployeeNotFound(id))?;
        let role = employee.role_kind();
        let name = employee.name().to_string();
        match employee.role_mut() {
            Role::Developer(dev) => dev.seniority = level,
            _ => {
                let err = StaffingError::RoleNotEligible {
                    employee: name,
                    role,
                    target: "a seniority level".to_string(),
                };
                log_rejected("seniority_update", &err);
                return Err(err);
            }
        }

        info!(
            "event=seniority_update module=staffing status=ok employee={} level={}",
            id,
            level.map_or("none", Seniority::as_str)
        );
        Ok(())
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.repo.employee(id)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.repo.project(id)
    }

    /// All employees in creation order.
    pub fn employees(&self) -> Vec<&Employee> {
        self.repo.list_employees()
    }

    /// All projects in creation order.
    pub fn projects(&self) -> Vec<&Project> {
        self.repo.list_projects()
    }

    /// Current monthly salary of one employee.
    pub fn calculate_salary(&self, id: EmployeeId) -> StaffingResult<f64> {
        let employee = self.require_employee(id)?;
        Ok(employee.calculate_salary(&self.repo))
    }

    pub fn cost_total(&self, id: ProjectId) -> StaffingResult<f64> {
        Ok(self.require_project(id)?.cost_total(&self.repo))
    }

    pub fn is_viable(&self, id: ProjectId) -> StaffingResult<bool> {
        Ok(self.require_project(id)?.is_viable(&self.repo))
    }

    pub fn viability(&self, id: ProjectId) -> StaffingResult<ViabilityReport> {
        Ok(self.require_project(id)?.viability(&self.repo))
    }

    /// Builds a display snapshot with resolved project and team names.
    pub fn employee_summary(&self, id: EmployeeId) -> StaffingResult<EmployeeSummary> {
        let employee = self.require_employee(id)?;
        Ok(self.summarize_employee(employee))
    }

    pub fn employee_summaries(&self) -> Vec<EmployeeSummary> {
        self.repo
            .list_employees()
            .into_iter()
            .map(|employee| self.summarize_employee(employee))
            .collect()
    }

    pub fn project_summaries(&self) -> Vec<ProjectSummary> {
        self.repo
            .list_projects()
            .into_iter()
            .map(|project| ProjectSummary {
                id: project.id(),
                name: project.name().to_string(),
                members: project
                    .roster()
                    .iter()
                    .filter_map(|id| self.repo.employee(*id))
                    .map(|employee| employee.name().to_string())
                    .collect(),
                viability: project.viability(&self.repo),
            })
            .collect()
    }

    fn summarize_employee(&self, employee: &Employee) -> EmployeeSummary {
        let role = employee.role();
        let details = role
            .display_fields()
            .into_iter()
            .map(|(label, value)| DetailLine {
                label: label.to_string(),
                value,
            })
            .collect();
        let projects = employee
            .assigned_projects()
            .iter()
            .filter_map(|id| self.repo.project(*id))
            .map(|project| project.name().to_string())
            .collect();
        let team = role
            .as_manager()
            .map(|manager| {
                manager
                    .direct_reports()
                    .iter()
                    .filter_map(|id| self.repo.employee(*id))
                    .map(|report| report.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        EmployeeSummary {
            id: employee.id(),
            name: employee.name().to_string(),
            role: employee.role_kind(),
            role_label: role.label(),
            details,
            base_salary: employee.base_salary(),
            salary: employee.calculate_salary(&self.repo),
            project_limit: employee.project_limit(),
            projects,
            team,
        }
    }

    fn check_project_assignment(
        &self,
        project_id: ProjectId,
        employee_id: EmployeeId,
    ) -> StaffingResult<()> {
        let project = self.require_project(project_id)?;
        let employee = self.require_employee(employee_id)?;

        if employee.role_kind() == RoleKind::Manager {
            return Err(StaffingError::RoleNotEligible {
                employee: employee.name().to_string(),
                role: RoleKind::Manager,
                target: format!("project '{}' as a member", project.name()),
            });
        }
        if !employee.can_take_project() {
            return Err(StaffingError::LimitExceeded {
                employee: employee.name().to_string(),
                limit: employee.project_limit(),
            });
        }
        if project.has_member(employee_id) || employee.is_assigned_to(project_id) {
            return Err(StaffingError::DuplicateAssignment {
                employee: employee.name().to_string(),
                target: format!("project '{}'", project.name()),
            });
        }
        Ok(())
    }

    fn check_team_addition(
        &self,
        manager_id: EmployeeId,
        member_id: EmployeeId,
    ) -> StaffingResult<()> {
        let manager_employee = self.require_employee(manager_id)?;
        let member = self.require_employee(member_id)?;

        let Some(manager) = manager_employee.role().as_manager() else {
            return Err(StaffingError::NotAManager {
                employee: manager_employee.name().to_string(),
            });
        };
        let team = format!("the team of {}", manager_employee.name());

        if !member.role_kind().can_report_to_manager() {
            return Err(StaffingError::RoleNotEligible {
                employee: member.name().to_string(),
                role: member.role_kind(),
                target: team,
            });
        }
        if manager.has_report(member_id) {
            return Err(StaffingError::DuplicateAssignment {
                employee: member.name().to_string(),
                target: team,
            });
        }
        Ok(())
    }

    fn require_employee(&self, id: EmployeeId) -> StaffingResult<&Employee> {
        self.repo
            .employee(id)
            .ok_or(StaffingError::EmployeeNotFound(id))
    }

    fn require_project(&self, id: ProjectId) -> StaffingResult<&Project> {
        self.repo
            .project(id)
            .ok_or(StaffingError::ProjectNotFound(id))
    }
}

fn log_rejected(event: &str, err: &StaffingError) {
    warn!(
        "event={} module=staffing status=rejected reason={}",
        event,
        err.code()
    );
}
