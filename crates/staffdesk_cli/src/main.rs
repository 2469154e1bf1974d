//! StaffDesk command-line entry point.
//!
//! # Responsibility
//! - Collect a scenario (bundled, file, or prompts) and run it through core.
//! - Render the outcome as text or JSON.
//! - Keep all console I/O out of `staffdesk_core`.

mod cli;
mod interactive;
mod prompt;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use prompt::Prompter;
use report::Report;
use staffdesk_core::{
    core_version, default_log_level, init_logging, run_plan, InMemoryStaffRepository, LogConfig,
    ScenarioPlan, StaffingService,
};
use std::io::{self, Write};
use std::path::Path;

const DEMO_PLAN: &str = include_str!("../scenarios/demo.json");

fn main() -> Result<()> {
    let cli = Cli::parse();
    start_logging(&cli)?;

    let (title, plan) = match &cli.command {
        Command::Version => {
            println!("staffdesk_core version={}", core_version());
            return Ok(());
        }
        Command::Demo => ("STAFFDESK DEMO".to_string(), demo_plan()?),
        Command::Run { file } => (format!("SCENARIO {}", file.display()), load_plan(file)?),
        Command::Interactive => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            ("STAFFDESK (INTERACTIVE)".to_string(), interactive::build_plan(&mut prompter)?)
        }
    };

    let report = run_scenario(title, &plan)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report::write_json(&mut out, &report).context("failed to write JSON report")?;
    } else {
        report::write_text(&mut out, &report).context("failed to write report")?;
    }
    out.flush().context("failed to flush stdout")
}

fn start_logging(cli: &Cli) -> Result<()> {
    let Some(dir) = cli.log_dir.as_deref() else {
        return Ok(());
    };
    let dir = dir
        .to_str()
        .with_context(|| format!("log directory is not valid UTF-8: {}", dir.display()))?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().as_str().to_string());

    let config = LogConfig::new(&level, dir)?.with_echo_warnings(true);
    init_logging(&config)?;
    info!("event=cli_start module=cli status=ok version={}", core_version());
    Ok(())
}

fn demo_plan() -> Result<ScenarioPlan> {
    serde_json::from_str(DEMO_PLAN).context("bundled demo scenario is malformed")
}

fn load_plan(path: &Path) -> Result<ScenarioPlan> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario `{}`", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse scenario `{}`", path.display()))
}

fn run_scenario(title: String, plan: &ScenarioPlan) -> Result<Report> {
    let mut service = StaffingService::new(InMemoryStaffRepository::new());
    let outcome = run_plan(&mut service, plan).context("scenario aborted")?;

    Ok(Report {
        title,
        steps: outcome.steps,
        employees: service.employee_summaries(),
        projects: service.project_summaries(),
    })
}
