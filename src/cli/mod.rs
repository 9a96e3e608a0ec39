//! Command-line host for the projection dashboard.

mod args;
pub mod output;

pub use args::{parse_command, Command, FlowArg, ProjectArgs, USAGE};

use std::{env, path::PathBuf, sync::Arc};

use tracing::{debug, info};

use networth_config::{Config, ConfigManager};
use networth_core::{NoiseSource, ProjectionEngine, SeededNoise, SystemClock, ThreadNoise};
use networth_domain::FlowKind;

use crate::{
    currency::{format_currency_value, parse_amount},
    dashboard::{DashboardSession, ProjectionView},
    errors::DashboardError,
    utils::build_info,
};

use output::OutputPreferences;

/// Overrides the directory holding `config/config.json`.
pub const HOME_ENV: &str = "NETWORTH_HOME";

/// Parses `args` (without the program name) and executes the command.
pub fn run<I>(args: I) -> Result<(), DashboardError>
where
    I: IntoIterator<Item = String>,
{
    let command = parse_command(args)?;
    debug!(?command, "dispatching command");
    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Version => {
            println!("{}", build_info::current().describe());
            Ok(())
        }
        Command::Project(project) => {
            let manager = config_manager()?;
            let config = manager.load()?;
            run_project(&config, project)
        }
        Command::ConfigShow => {
            let manager = config_manager()?;
            let config = manager.load()?;
            apply_preferences(&config, false);
            show_config(&manager, &config)
        }
        Command::ConfigSet { key, value } => {
            let manager = config_manager()?;
            let mut config = manager.load()?;
            config.set_value(&key, &value)?;
            manager.save(&config)?;
            apply_preferences(&config, false);
            info!(%key, %value, "config updated");
            output::success(format!("{key} = {value}"));
            Ok(())
        }
        Command::ConfigBackup { note } => {
            let manager = config_manager()?;
            let config = manager.load()?;
            apply_preferences(&config, false);
            let name = manager.backup(&config, note.as_deref())?;
            output::success(format!("Backup created: {name}"));
            Ok(())
        }
        Command::ConfigBackups => {
            let manager = config_manager()?;
            let config = manager.load()?;
            apply_preferences(&config, false);
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                output::info("No backups found.");
            }
            for name in backups {
                println!("{name}");
            }
            Ok(())
        }
        Command::ConfigRestore { name } => {
            let manager = config_manager()?;
            let restored = manager.restore(&name)?;
            apply_preferences(&restored, false);
            info!(backup = %name, "config restored");
            output::success(format!("Restored configuration from {name}"));
            Ok(())
        }
    }
}

fn config_manager() -> Result<ConfigManager, DashboardError> {
    let manager = match env::var_os(HOME_ENV) {
        Some(base) => ConfigManager::with_base_dir(PathBuf::from(base))?,
        None => ConfigManager::from_default_location()?,
    };
    debug!(path = %manager.config_path().display(), "using config");
    Ok(manager)
}

fn apply_preferences(config: &Config, plain: bool) {
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && !plain,
        plain_labels: plain,
    });
}

fn show_config(manager: &ConfigManager, config: &Config) -> Result<(), DashboardError> {
    output::section("Configuration");
    output::info(format!("File: {}", manager.config_path().display()));
    let values = serde_json::to_value(config)?;
    for key in Config::keys() {
        if let Some(value) = values.get(*key) {
            println!("{key} = {value}");
        }
    }
    Ok(())
}

fn build_engine(seed: Option<u64>) -> ProjectionEngine {
    let noise: Box<dyn NoiseSource> = match seed {
        Some(seed) => Box::new(SeededNoise::new(seed)),
        None => Box::new(ThreadNoise),
    };
    ProjectionEngine::new(Arc::new(SystemClock), noise)
}

/// Session built from stored config with command-line overrides applied.
pub fn build_session(config: &Config, project: &ProjectArgs) -> Result<DashboardSession, DashboardError> {
    let mut session = DashboardSession::from_config(config, build_engine(project.seed))?;
    if let Some(balance) = &project.balance {
        session.set_balance_from_text(balance)?;
    }
    if !project.flows.is_empty() {
        for kind in FlowKind::ALL {
            session.clear_flows(kind);
        }
        for flow in &project.flows {
            session.add_flow(flow.kind, &flow.label, &flow.amount)?;
        }
    }
    if let Some(years) = project.years {
        session.set_horizon_years(years);
    }
    if let Some(goal) = &project.goal {
        let parsed = parse_amount(goal).ok_or_else(|| DashboardError::InvalidAmount(goal.clone()))?;
        session.set_goal(parsed);
    }
    if let Some(range) = &project.range {
        session.set_range(range)?;
    }
    Ok(session)
}

fn run_project(config: &Config, project: ProjectArgs) -> Result<(), DashboardError> {
    apply_preferences(config, project.plain);
    let mut session = build_session(config, &project)?;
    let view = session.refresh();
    if project.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&session, &view);
    }
    Ok(())
}

fn print_view(session: &DashboardSession, view: &ProjectionView) {
    let money = |amount: f64| format_currency_value(amount, session.currency(), session.locale());

    output::section("Net worth projection");
    output::info(format!("Starting balance: {}", session.formatted_balance()));
    output::info(format!(
        "Monthly: income {} | expenses {} | investments {} | net {}",
        money(view.totals.income),
        money(view.totals.expense),
        money(view.totals.investment),
        money(view.totals.net)
    ));
    if let Some(rate) = view.totals.savings_rate_pct() {
        output::info(format!("Savings rate: {rate:.1}%"));
    }
    output::info(format!(
        "Horizon: {} years ({} points)",
        session.horizon_years(),
        view.series.len()
    ));
    if let Some(last) = view.final_net_worth() {
        output::info(format!("Projected net worth: {}", money(last)));
    }

    output::section(&view.goal_marker);
    match &view.eta_label {
        Some(label) => output::success(format!("Goal reached in {label}")),
        None => output::warning("Goal not reached within the horizon"),
    }
    output::info(format!(
        "Zoom {}: {:.2}% - {:.2}%",
        view.range, view.zoom.start_pct, view.zoom.end_pct
    ));
}
