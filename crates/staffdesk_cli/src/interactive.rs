//! Prompt-driven scenario builder.
//!
//! Collects one manager, two developers, one designer and three projects,
//! then lays out the fixed staffing sequence including three attempts that
//! are expected to be rejected.

use crate::prompt::Prompter;
use anyhow::Result;
use staffdesk_core::{EmployeeEntry, ProjectEntry, RoleEntry, ScenarioPlan};
use std::io::{BufRead, Write};

const OVERFLOW_PROJECT_KEY: &str = "overflow";
const OVERFLOW_PROJECT_NAME: &str = "PROJECT 4 (expected to fail)";
const OVERFLOW_PROJECT_BUDGET: f64 = 1000.0;

#[derive(Debug, Clone, Copy)]
enum RolePrompt {
    Developer,
    Designer,
    Manager,
}

impl RolePrompt {
    fn title(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }
}

pub fn build_plan<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<ScenarioPlan> {
    prompter.say("")?;
    prompter.say("STAFFDESK (INTERACTIVE MODE)")?;
    prompter.say("")?;
    prompter.say("--- 1. Manager and team ---")?;

    let mut plan = ScenarioPlan::default();
    plan.employees
        .push(prompt_employee(prompter, "manager", RolePrompt::Manager)?);
    plan.employees
        .push(prompt_employee(prompter, "dev1", RolePrompt::Developer)?);
    plan.employees
        .push(prompt_employee(prompter, "dev2", RolePrompt::Developer)?);
    plan.employees
        .push(prompt_employee(prompter, "designer", RolePrompt::Designer)?);

    prompter.say("")?;
    prompter.say("--- 2. Projects ---")?;
    for key in ["project1", "project2", "project3"] {
        plan.projects.push(prompt_project(prompter, key)?);
    }
    plan.projects.push(ProjectEntry {
        key: OVERFLOW_PROJECT_KEY.to_string(),
        name: OVERFLOW_PROJECT_NAME.to_string(),
        budget: OVERFLOW_PROJECT_BUDGET,
    });

    Ok(plan
        .team("manager", &["dev1", "dev2", "designer"])
        .assign("dev1", &["project1", "project2", "project3"])
        .assign("dev2", &["project1", "project2"])
        .assign("designer", &["project1", "project2"])
        // Each of these is rejected: developer over 3, designer over 2,
        // manager as a roster member.
        .assign("dev1", &[OVERFLOW_PROJECT_KEY])
        .assign("designer", &[OVERFLOW_PROJECT_KEY])
        .assign("manager", &["project1"]))
}

fn prompt_employee<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    key: &str,
    role: RolePrompt,
) -> Result<EmployeeEntry> {
    let title = role.title();
    prompter.say("")?;
    prompter.say(&format!("--- New {title} ---"))?;
    let name = prompter.line(&format!("{title} name: "))?;
    let base_salary =
        prompter.positive_amount(&format!("Base salary for {name} (e.g. 3500.00): $"))?;

    let role = match role {
        RolePrompt::Developer => {
            let languages = prompter.list("Languages (comma separated, e.g. Python,Java): ")?;
            let level = prompter.seniority("Level (Junior/SemiSenior/Senior): ")?;
            RoleEntry::Developer {
                seniority: Some(level.as_str().to_string()),
                languages,
            }
        }
        RolePrompt::Designer => {
            let tools = prompter.list("Tools (comma separated, e.g. Figma,Photoshop): ")?;
            let specialty = prompter.line("Specialty (UI/UX/Graphic): ")?;
            RoleEntry::Designer {
                tools,
                specialty: Some(specialty).filter(|value| !value.is_empty()),
            }
        }
        RolePrompt::Manager => RoleEntry::Manager {
            department: prompter.line("Department: ")?,
        },
    };

    Ok(EmployeeEntry {
        key: key.to_string(),
        name,
        base_salary,
        role,
    })
}

fn prompt_project<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    key: &str,
) -> Result<ProjectEntry> {
    let name = prompter.line("Project name: ")?;
    let budget = prompter.positive_amount(&format!("Budget for '{name}' (e.g. 20000.00): $"))?;
    Ok(ProjectEntry {
        key: key.to_string(),
        name,
        budget,
    })
}
