//! Applies a `ScenarioPlan` to a staffing service.
//!
//! # Invariants
//! - Entities are created in plan order, so ids follow plan order.
//! - Staffing rule rejections are recorded and the run continues.
//! - Any other failure (bad key, bad entity data) aborts the run.

use crate::model::id::{EmployeeId, ProjectId};
use crate::model::role::Seniority;
use crate::repo::staff_repo::StaffRepository;
use crate::scenario::plan::{EmployeeEntry, RoleEntry, ScenarioPlan, ScenarioStep};
use crate::service::staffing_service::{NewEmployee, StaffingError, StaffingService};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fatal scenario errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    DuplicateEmployeeKey(String),
    DuplicateProjectKey(String),
    UnknownEmployeeKey(String),
    UnknownProjectKey(String),
    UnknownSeniority { key: String, value: String },
    /// Creating or mutating an entity failed for a reason other than a
    /// staffing rule.
    Staffing { key: String, source: StaffingError },
}

impl Display for ScenarioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmployeeKey(key) => write!(f, "employee key declared twice: `{key}`"),
            Self::DuplicateProjectKey(key) => write!(f, "project key declared twice: `{key}`"),
            Self::UnknownEmployeeKey(key) => write!(f, "unknown employee key: `{key}`"),
            Self::UnknownProjectKey(key) => write!(f, "unknown project key: `{key}`"),
            Self::UnknownSeniority { key, value } => write!(
                f,
                "employee `{key}` has unknown seniority `{value}`; expected Junior|SemiSenior|Senior"
            ),
            Self::Staffing { key, source } => write!(f, "`{key}`: {source}"),
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Staffing { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    AddToTeam,
    AddEmployee,
}

/// Result of one staffing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Applied,
    Rejected { code: String, message: String },
}

/// One executed step with resolved names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub action: StepAction,
    /// Manager name or project name.
    pub target: String,
    /// Name of the employee being added.
    pub subject: String,
    pub outcome: StepOutcome,
}

impl StepRecord {
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, StepOutcome::Applied)
    }
}

/// What a run created and how each step went.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub employee_ids: BTreeMap<String, EmployeeId>,
    pub project_ids: BTreeMap<String, ProjectId>,
    pub steps: Vec<StepRecord>,
}

impl ScenarioOutcome {
    pub fn employee(&self, key: &str) -> Option<EmployeeId> {
        self.employee_ids.get(key).copied()
    }

    pub fn project(&self, key: &str) -> Option<ProjectId> {
        self.project_ids.get(key).copied()
    }

    pub fn rejected_count(&self) -> usize {
        self.steps.iter().filter(|step| !step.is_applied()).count()
    }
}

/// Creates every entity in `plan`, then applies its steps in order.
pub fn run_plan<R: StaffRepository>(
    service: &mut StaffingService<R>,
    plan: &ScenarioPlan,
) -> Result<ScenarioOutcome, ScenarioError> {
    let mut outcome = ScenarioOutcome::default();

    for entry in &plan.employees {
        if outcome.employee_ids.contains_key(&entry.key) {
            return Err(ScenarioError::DuplicateEmployeeKey(entry.key.clone()));
        }
        let request = new_employee_from_entry(entry)?;
        let id = service
            .hire(request)
            .map_err(|source| ScenarioError::Staffing {
                key: entry.key.clone(),
                source,
            })?;
        outcome.employee_ids.insert(entry.key.clone(), id);
    }

    for entry in &plan.projects {
        if outcome.project_ids.contains_key(&entry.key) {
            return Err(ScenarioError::DuplicateProjectKey(entry.key.clone()));
        }
        let id = service
            .create_project(entry.name.clone(), entry.budget)
            .map_err(|source| ScenarioError::Staffing {
                key: entry.key.clone(),
                source,
            })?;
        outcome.project_ids.insert(entry.key.clone(), id);
    }

    for step in &plan.steps {
        let record = apply_step(service, &outcome, step)?;
        outcome.steps.push(record);
    }

    info!(
        "event=scenario_run module=scenario status=ok employees={} projects={} steps={} rejected={}",
        outcome.employee_ids.len(),
        outcome.project_ids.len(),
        outcome.steps.len(),
        outcome.rejected_count()
    );
    Ok(outcome)
}

fn apply_step<R: StaffRepository>(
    service: &mut StaffingService<R>,
    outcome: &ScenarioOutcome,
    step: &ScenarioStep,
) -> Result<StepRecord, ScenarioError> {
    let (action, step_key, target, subject, result) = match step {
        ScenarioStep::AddToTeam { manager, member } => {
            let manager_id = resolve_employee(outcome, manager)?;
            let member_id = resolve_employee(outcome, member)?;
            (
                StepAction::AddToTeam,
                member,
                employee_name(service, manager_id),
                employee_name(service, member_id),
                service.add_to_team(manager_id, member_id),
            )
        }
        ScenarioStep::AddEmployee { project, employee } => {
            let project_id = outcome
                .project(project)
                .ok_or_else(|| ScenarioError::UnknownProjectKey(project.clone()))?;
            let employee_id = resolve_employee(outcome, employee)?;
            (
                StepAction::AddEmployee,
                employee,
                service
                    .project(project_id)
                    .map(|p| p.name().to_string())
                    .unwrap_or_default(),
                employee_name(service, employee_id),
                service.add_employee(project_id, employee_id),
            )
        }
    };

    let step_outcome = match result {
        Ok(()) => StepOutcome::Applied,
        Err(err) if err.is_rule_violation() => StepOutcome::Rejected {
            code: err.code().to_string(),
            message: err.to_string(),
        },
        Err(source) => {
            return Err(ScenarioError::Staffing {
                key: step_key.clone(),
                source,
            })
        }
    };

    Ok(StepRecord {
        action,
        target,
        subject,
        outcome: step_outcome,
    })
}

fn new_employee_from_entry(entry: &EmployeeEntry) -> Result<NewEmployee, ScenarioError> {
    let name = entry.name.clone();
    let request = match &entry.role {
        RoleEntry::Developer {
            seniority,
            languages,
        } => {
            let level = match seniority.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(value) => Some(Seniority::parse(value).ok_or_else(|| {
                    ScenarioError::UnknownSeniority {
                        key: entry.key.clone(),
                        value: value.to_string(),
                    }
                })?),
            };
            NewEmployee::developer(name, entry.base_salary, level, languages.clone())
        }
        RoleEntry::Designer { tools, specialty } => {
            NewEmployee::designer(name, entry.base_salary, tools.clone(), specialty.clone())
        }
        RoleEntry::Manager { department } => {
            NewEmployee::manager(name, entry.base_salary, department.clone())
        }
    };
    Ok(request)
}

fn resolve_employee(outcome: &ScenarioOutcome, key: &str) -> Result<EmployeeId, ScenarioError> {
    outcome
        .employee(key)
        .ok_or_else(|| ScenarioError::UnknownEmployeeKey(key.to_string()))
}

fn employee_name<R: StaffRepository>(service: &StaffingService<R>, id: EmployeeId) -> String {
    service
        .employee(id)
        .map(|employee| employee.name().to_string())
        .unwrap_or_default()
}
