//! Role variants and their compensation rules.
//!
//! # Responsibility
//! - Model the closed set of roles an employee can hold.
//! - Own the per-role bonus and project-limit rules.
//!
//! # Invariants
//! - Every employee holds exactly one role for its whole lifetime.
//! - Designer tools are stored normalized and deduplicated.
//! - Manager `direct_reports` only contains developers or designers; the
//!   staffing service is the only writer.

use crate::model::id::EmployeeId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Maximum concurrent projects for a developer.
pub const DEVELOPER_PROJECT_LIMIT: usize = 3;
/// Maximum concurrent projects for a designer.
pub const DESIGNER_PROJECT_LIMIT: usize = 2;
/// Managers supervise and never join a project roster.
pub const MANAGER_PROJECT_LIMIT: usize = 0;

const FIGMA_BONUS: f64 = 300.0;
const RASTER_VECTOR_BONUS: f64 = 200.0;
const TOOLBELT_BONUS: f64 = 400.0;
const TOOLBELT_MIN_TOOLS: usize = 3;

static SENIORITY_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_\-]+").expect("valid separator regex"));

/// Developer seniority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    SemiSenior,
    Senior,
}

impl Seniority {
    /// Monthly bonus added on top of base salary.
    pub fn bonus(self) -> f64 {
        match self {
            Self::Junior => 200.0,
            Self::SemiSenior => 500.0,
            Self::Senior => 1000.0,
        }
    }

    /// Parses free-form input such as `senior`, `Semi-Senior` or `SEMI SENIOR`.
    ///
    /// Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let compact = SENIORITY_SEPARATOR_RE
            .replace_all(value.trim(), "")
            .to_ascii_lowercase();
        match compact.as_str() {
            "junior" => Some(Self::Junior),
            "semisenior" => Some(Self::SemiSenior),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::SemiSenior => "SemiSenior",
            Self::Senior => "Senior",
        }
    }
}

impl Display for Seniority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-less discriminant of [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    Developer,
    Designer,
    Manager,
}

impl RoleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Designer => "designer",
            Self::Manager => "manager",
        }
    }

    /// Whether this role may be placed under a manager.
    pub fn can_report_to_manager(self) -> bool {
        matches!(self, Self::Developer | Self::Designer)
    }
}

impl Display for RoleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Developer-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Developer {
    /// `None` when the level was not recognized; earns no level bonus.
    pub seniority: Option<Seniority>,
    pub languages: Vec<String>,
}

impl Developer {
    pub fn new(seniority: Option<Seniority>, languages: Vec<String>) -> Self {
        let languages = languages
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        Self {
            seniority,
            languages,
        }
    }

    pub fn bonus(&self) -> f64 {
        self.seniority.map(Seniority::bonus).unwrap_or(0.0)
    }
}

/// Designer-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Designer {
    tools: Vec<String>,
    pub specialty: Option<String>,
}

impl Designer {
    /// Creates a designer profile, normalizing tool names.
    ///
    /// `" figma"` and `"FIGMA"` both become `"Figma"`; blanks and repeats are
    /// dropped while keeping first-seen order.
    pub fn new(tools: Vec<String>, specialty: Option<String>) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(tools.len());
        for tool in tools {
            if let Some(name) = normalize_tool_name(tool.as_str()) {
                if !normalized.contains(&name) {
                    normalized.push(name);
                }
            }
        }
        let specialty = specialty
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            tools: normalized,
            specialty,
        }
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool == name)
    }

    /// Tool bonus.
    ///
    /// Figma earns 300. Without Figma, Photoshop or Illustrator earns 200.
    /// Three or more tools add 400 on top of either.
    pub fn bonus(&self) -> f64 {
        let mut bonus = 0.0;
        if self.has_tool("Figma") {
            bonus += FIGMA_BONUS;
        } else if self.has_tool("Photoshop") || self.has_tool("Illustrator") {
            bonus += RASTER_VECTOR_BONUS;
        }
        if self.tools.len() >= TOOLBELT_MIN_TOOLS {
            bonus += TOOLBELT_BONUS;
        }
        bonus
    }
}

/// Manager-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manager {
    pub department: String,
    direct_reports: Vec<EmployeeId>,
}

impl Manager {
    pub fn new(department: impl Into<String>) -> Self {
        Self {
            department: department.into().trim().to_string(),
            direct_reports: Vec::new(),
        }
    }

    /// Team members in the order they were added.
    pub fn direct_reports(&self) -> &[EmployeeId] {
        &self.direct_reports
    }

    pub fn has_report(&self, id: EmployeeId) -> bool {
        self.direct_reports.contains(&id)
    }

    pub(crate) fn push_report(&mut self, id: EmployeeId) {
        self.direct_reports.push(id);
    }
}

/// Closed set of roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    Developer(Developer),
    Designer(Designer),
    Manager(Manager),
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Developer(_) => RoleKind::Developer,
            Self::Designer(_) => RoleKind::Designer,
            Self::Manager(_) => RoleKind::Manager,
        }
    }

    /// Maximum number of concurrent project assignments for this role.
    pub fn project_limit(&self) -> usize {
        match self {
            Self::Developer(_) => DEVELOPER_PROJECT_LIMIT,
            Self::Designer(_) => DESIGNER_PROJECT_LIMIT,
            Self::Manager(_) => MANAGER_PROJECT_LIMIT,
        }
    }

    /// One-line role label for display, e.g. `Developer (Senior)`.
    pub fn label(&self) -> String {
        match self {
            Self::Developer(dev) => match dev.seniority {
                Some(level) => format!("Developer ({level})"),
                None => "Developer".to_string(),
            },
            Self::Designer(designer) => match designer.specialty.as_deref() {
                Some(specialty) => format!("Designer ({specialty})"),
                None => "Designer".to_string(),
            },
            Self::Manager(manager) => format!("Manager ({})", manager.department),
        }
    }

    /// Role-specific `(label, value)` pairs that need no directory lookup.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Developer(dev) => vec![("Languages", join_or_none(&dev.languages))],
            Self::Designer(designer) => vec![("Tools", join_or_none(designer.tools()))],
            Self::Manager(manager) => vec![("Department", manager.department.clone())],
        }
    }

    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            Self::Manager(manager) => Some(manager),
            _ => None,
        }
    }

    pub(crate) fn as_manager_mut(&mut self) -> Option<&mut Manager> {
        match self {
            Self::Manager(manager) => Some(manager),
            _ => None,
        }
    }
}

fn normalize_tool_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let mut name: String = first.to_uppercase().collect();
    name.push_str(chars.as_str().to_lowercase().as_str());
    Some(name)
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{Designer, Developer, Role, RoleKind, Seniority};

    fn tools(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn seniority_parse_tolerates_case_and_separators() {
        assert_eq!(Seniority::parse("junior"), Some(Seniority::Junior));
        assert_eq!(Seniority::parse("Semi-Senior"), Some(Seniority::SemiSenior));
        assert_eq!(Seniority::parse(" SEMI SENIOR "), Some(Seniority::SemiSenior));
        assert_eq!(Seniority::parse("semi_senior"), Some(Seniority::SemiSenior));
        assert_eq!(Seniority::parse("Senior"), Some(Seniority::Senior));
        assert_eq!(Seniority::parse("principal"), None);
        assert_eq!(Seniority::parse(""), None);
    }

    #[test]
    fn developer_without_level_has_no_bonus() {
        assert_eq!(Developer::new(None, vec![]).bonus(), 0.0);
    }

    #[test]
    fn designer_tools_are_normalized_and_deduplicated() {
        let designer = Designer::new(tools(&["figma", " FIGMA ", "", "photoshop"]), None);
        assert_eq!(designer.tools(), &["Figma".to_string(), "Photoshop".to_string()]);
    }

    #[test]
    fn designer_bonus_prefers_figma_over_raster_tools() {
        let designer = Designer::new(tools(&["Figma", "Photoshop"]), None);
        assert_eq!(designer.bonus(), 300.0);

        let designer = Designer::new(tools(&["Illustrator"]), None);
        assert_eq!(designer.bonus(), 200.0);

        let designer = Designer::new(tools(&["Sketch"]), None);
        assert_eq!(designer.bonus(), 0.0);
    }

    #[test]
    fn designer_toolbelt_bonus_stacks() {
        let designer = Designer::new(tools(&["Photoshop", "Illustrator", "Sketch"]), None);
        assert_eq!(designer.bonus(), 600.0);

        let designer = Designer::new(tools(&["Sketch", "Blender", "Krita"]), None);
        assert_eq!(designer.bonus(), 400.0);
    }

    #[test]
    fn project_limits_follow_role() {
        let dev = Role::Developer(Developer::new(Some(Seniority::Junior), vec![]));
        let designer = Role::Designer(Designer::new(vec![], None));
        let manager = Role::Manager(super::Manager::new("IT"));
        assert_eq!(dev.project_limit(), 3);
        assert_eq!(designer.project_limit(), 2);
        assert_eq!(manager.project_limit(), 0);
        assert!(!RoleKind::Manager.can_report_to_manager());
        assert!(RoleKind::Designer.can_report_to_manager());
    }

    #[test]
    fn labels_include_role_detail() {
        let dev = Role::Developer(Developer::new(Some(Seniority::SemiSenior), vec![]));
        assert_eq!(dev.label(), "Developer (SemiSenior)");
        let manager = Role::Manager(super::Manager::new(" IT "));
        assert_eq!(manager.label(), "Manager (IT)");
    }
}
