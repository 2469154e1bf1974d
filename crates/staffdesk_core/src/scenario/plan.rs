//! Serializable scenario plan.
//!
//! A plan names every entity by a caller-chosen `key` and refers to entities
//! by key in its steps, so it can be written by hand as JSON.

use serde::{Deserialize, Serialize};

/// Full scenario: who exists, which projects exist, and what to attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPlan {
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Staffing actions applied in order after all entities are created.
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeEntry {
    pub key: String,
    pub name: String,
    pub base_salary: f64,
    #[serde(flatten)]
    pub role: RoleEntry,
}

/// Role fields as written in a plan, tagged by `role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleEntry {
    Developer {
        /// Free text parsed with `Seniority::parse`; absent means no level.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seniority: Option<String>,
        #[serde(default)]
        languages: Vec<String>,
    },
    Designer {
        #[serde(default)]
        tools: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specialty: Option<String>,
    },
    Manager {
        department: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub key: String,
    pub name: String,
    pub budget: f64,
}

/// One staffing action, referencing entities by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    AddToTeam { manager: String, member: String },
    AddEmployee { project: String, employee: String },
}

impl ScenarioPlan {
    /// Appends an `add_to_team` step for each member, in order.
    pub fn team(mut self, manager: &str, members: &[&str]) -> Self {
        for member in members {
            self.steps.push(ScenarioStep::AddToTeam {
                manager: manager.to_string(),
                member: member.to_string(),
            });
        }
        self
    }

    /// Appends an `add_employee` step for each project, in order.
    pub fn assign(mut self, employee: &str, projects: &[&str]) -> Self {
        for project in projects {
            self.steps.push(ScenarioStep::AddEmployee {
                project: project.to_string(),
                employee: employee.to_string(),
            });
        }
        self
    }
}
