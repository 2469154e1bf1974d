//! Project entity and cost viability.
//!
//! # Invariants
//! - `budget` is finite and strictly positive.
//! - `roster` has no duplicates and only grows.
//! - Cost and viability are recomputed on every call.

use crate::model::employee::EmployeeLookup;
use crate::model::id::{EmployeeId, ProjectId};
use crate::model::validation::{normalize_name, ModelValidationError};
use serde::Serialize;

/// Share of the budget the monthly roster cost may reach, in percent.
pub const VIABLE_COST_PERCENT: f64 = 70.0;

/// Cost breakdown of one project at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViabilityReport {
    pub budget: f64,
    /// `budget` scaled by [`VIABLE_COST_PERCENT`].
    pub cost_limit: f64,
    pub cost_total: f64,
    /// `cost_total <= cost_limit`; the boundary counts as viable.
    pub viable: bool,
}

/// One project with a budget and a staffed roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    budget: f64,
    roster: Vec<EmployeeId>,
}

impl Project {
    /// Creates an empty project.
    ///
    /// # Errors
    /// - `BlankName` when `name` is empty after trimming.
    /// - `InvalidBudget` when `budget` is not a finite positive amount.
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        budget: f64,
    ) -> Result<Self, ModelValidationError> {
        let name = normalize_name(name.into())?;
        if !budget.is_finite() || budget <= 0.0 {
            return Err(ModelValidationError::InvalidBudget(budget));
        }
        Ok(Self {
            id,
            name,
            budget,
            roster: Vec::new(),
        })
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Members in assignment order.
    pub fn roster(&self) -> &[EmployeeId] {
        &self.roster
    }

    pub fn has_member(&self, employee: EmployeeId) -> bool {
        self.roster.contains(&employee)
    }

    /// Sum of the current salaries of every roster member.
    pub fn cost_total<L: EmployeeLookup + ?Sized>(&self, directory: &L) -> f64 {
        self.roster
            .iter()
            .filter_map(|id| directory.employee(*id))
            .map(|employee| employee.calculate_salary(directory))
            .sum()
    }

    pub fn cost_limit(&self) -> f64 {
        self.budget * VIABLE_COST_PERCENT / 100.0
    }

    pub fn is_viable<L: EmployeeLookup + ?Sized>(&self, directory: &L) -> bool {
        self.viability(directory).viable
    }

    pub fn viability<L: EmployeeLookup + ?Sized>(&self, directory: &L) -> ViabilityReport {
        let cost_total = self.cost_total(directory);
        // Compare scaled values so whole-number amounts stay exact at the boundary.
        let viable = cost_total * 100.0 <= self.budget * VIABLE_COST_PERCENT;
        ViabilityReport {
            budget: self.budget,
            cost_limit: self.cost_limit(),
            cost_total,
            viable,
        }
    }

    pub(crate) fn push_member(&mut self, employee: EmployeeId) {
        self.roster.push(employee);
    }
}
