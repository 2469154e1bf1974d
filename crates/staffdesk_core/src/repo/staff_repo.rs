//! Staff repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store employees and projects keyed by id.
//! - Hand out references for the staffing service to read and mutate.
//!
//! # Invariants
//! - Ids are unique per entity kind; inserting an existing id is rejected.
//! - Listing order is ascending id, which equals creation order.
//! - The repository applies no business rules.

use crate::model::employee::{Employee, EmployeeLookup};
use crate::model::id::{EmployeeId, ProjectId};
use crate::model::project::Project;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateEmployeeId(EmployeeId),
    DuplicateProjectId(ProjectId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmployeeId(id) => write!(f, "employee id already stored: {id}"),
            Self::DuplicateProjectId(id) => write!(f, "project id already stored: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for employees and projects.
pub trait StaffRepository: EmployeeLookup {
    fn insert_employee(&mut self, employee: Employee) -> RepoResult<EmployeeId>;
    fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee>;
    fn list_employees(&self) -> Vec<&Employee>;

    fn insert_project(&mut self, project: Project) -> RepoResult<ProjectId>;
    fn project(&self, id: ProjectId) -> Option<&Project>;
    fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project>;
    fn list_projects(&self) -> Vec<&Project>;
}

/// Process-lifetime store backed by ordered maps.
#[derive(Debug, Default)]
pub struct InMemoryStaffRepository {
    employees: BTreeMap<EmployeeId, Employee>,
    projects: BTreeMap<ProjectId, Project>,
}

impl InMemoryStaffRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeLookup for InMemoryStaffRepository {
    fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }
}

impl StaffRepository for InMemoryStaffRepository {
    fn insert_employee(&mut self, employee: Employee) -> RepoResult<EmployeeId> {
        let id = employee.id();
        if self.employees.contains_key(&id) {
            return Err(RepoError::DuplicateEmployeeId(id));
        }
        self.employees.insert(id, employee);
        Ok(id)
    }

    fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    fn list_employees(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    fn insert_project(&mut self, project: Project) -> RepoResult<ProjectId> {
        let id = project.id();
        if self.projects.contains_key(&id) {
            return Err(RepoError::DuplicateProjectId(id));
        }
        self.projects.insert(id, project);
        Ok(id)
    }

    fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.get_mut(&id)
    }

    fn list_projects(&self) -> Vec<&Project> {
        self.projects.values().collect()
    }
}
