//! Text and JSON rendering of scenario results.

use serde::Serialize;
use staffdesk_core::{
    EmployeeSummary, ProjectSummary, RoleKind, StepAction, StepOutcome, StepRecord,
    VIABLE_COST_PERCENT,
};
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Everything the CLI prints, in one serializable envelope.
#[derive(Debug, Serialize)]
pub struct Report {
    pub title: String,
    pub steps: Vec<StepRecord>,
    pub employees: Vec<EmployeeSummary>,
    pub projects: Vec<ProjectSummary>,
}

pub fn write_text<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out)?;
    writeln!(out, "--- Staffing steps ---")?;
    for step in &report.steps {
        writeln!(out, "{}", step_line(step))?;
    }

    writeln!(out)?;
    writeln!(out, "--- Employees ---")?;
    for employee in &report.employees {
        write_employee(out, employee)?;
    }

    writeln!(out)?;
    writeln!(out, "--- Project viability ---")?;
    for project in &report.projects {
        write_project(out, project)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn step_line(step: &StepRecord) -> String {
    match (&step.outcome, step.action) {
        (StepOutcome::Applied, StepAction::AddToTeam) => {
            format!("✅ {} added to the team of {}.", step.subject, step.target)
        }
        (StepOutcome::Applied, StepAction::AddEmployee) => {
            format!("✅ {} added to project '{}'.", step.subject, step.target)
        }
        (StepOutcome::Rejected { message, .. }, _) => format!("⚠️ Error: {message}."),
    }
}

fn write_employee<W: Write>(out: &mut W, employee: &EmployeeSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "   > Name: {}", employee.name)?;
    writeln!(out, "   > ID: {}", employee.id)?;
    writeln!(out, "   > Base salary: {}", format_money(employee.base_salary))?;
    if employee.role == RoleKind::Manager {
        writeln!(out, "   > Team bonus: {}", format_money(team_bonus(employee)))?;
    }
    writeln!(out, "   > Computed salary: {}", format_money(employee.salary))?;
    writeln!(out, "   > Role: {}", employee.role_label)?;
    for detail in &employee.details {
        writeln!(out, "   > {}: {}", detail.label, detail.value)?;
    }
    if !employee.team.is_empty() || employee.role == RoleKind::Manager {
        writeln!(
            out,
            "   > Team ({} members): {}",
            employee.team.len(),
            join_or(&employee.team, "N/A")
        )?;
    }
    writeln!(
        out,
        "   > Projects ({}/{}): {}",
        employee.projects.len(),
        employee.project_limit,
        join_or(&employee.projects, "none")
    )
}

/// Share of a manager's salary that comes from the team.
fn team_bonus(employee: &EmployeeSummary) -> f64 {
    employee.salary - employee.base_salary
}

fn write_project<W: Write>(out: &mut W, project: &ProjectSummary) -> io::Result<()> {
    let viability = &project.viability;
    writeln!(out)?;
    writeln!(out, "Project '{}'", project.name)?;
    writeln!(out, "   > Members: {}", join_or(&project.members, "none"))?;
    writeln!(out, "   > Budget: {}", format_money(viability.budget))?;
    writeln!(
        out,
        "   > Cost limit ({}%): {}",
        VIABLE_COST_PERCENT,
        format_money(viability.cost_limit)
    )?;
    writeln!(out, "   > Monthly cost: {}", format_money(viability.cost_total))?;
    writeln!(
        out,
        "   > Viable: {}",
        if viability.viable { "✅ Yes" } else { "❌ No" }
    )
}

fn join_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}

/// Formats an amount as `$12,345.67`.
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
