use networth_domain::FlowKind;

use crate::errors::DashboardError;

pub const USAGE: &str = "Usage: networth_cli <command>\n\
Commands:\n  \
project [--balance N] [--income LABEL=N]... [--expense LABEL=N]...\n          \
[--investment LABEL=N]... [--years N] [--goal N] [--range 1A|3A|5A|Todo]\n          \
[--seed N] [--json] [--plain]\n  \
config show\n  \
config set <key> <value>\n  \
config backup [note]\n  \
config backups\n  \
config restore <name>\n  \
version";

/// One `--income Salary=1000` style flag, still as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowArg {
    pub kind: FlowKind,
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectArgs {
    pub balance: Option<String>,
    pub flows: Vec<FlowArg>,
    pub years: Option<i32>,
    pub goal: Option<String>,
    pub range: Option<String>,
    pub seed: Option<u64>,
    pub json: bool,
    pub plain: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Project(ProjectArgs),
    ConfigShow,
    ConfigSet { key: String, value: String },
    ConfigBackup { note: Option<String> },
    ConfigBackups,
    ConfigRestore { name: String },
    Version,
    Help,
}

fn usage(detail: impl Into<String>) -> DashboardError {
    DashboardError::Usage(detail.into())
}

/// Parses arguments after the program name.
pub fn parse_command<I>(args: I) -> Result<Command, DashboardError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };
    match command.as_str() {
        "project" => parse_project(args).map(Command::Project),
        "config" => parse_config(args),
        "version" | "--version" => Ok(Command::Version),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(usage(format!("unknown command `{other}`"))),
    }
}

fn parse_config(mut args: impl Iterator<Item = String>) -> Result<Command, DashboardError> {
    match args.next().as_deref() {
        Some("show") | None => Ok(Command::ConfigShow),
        Some("set") => {
            let key = args.next().ok_or_else(|| usage("config set needs a key"))?;
            let value = args
                .next()
                .ok_or_else(|| usage(format!("config set {key} needs a value")))?;
            Ok(Command::ConfigSet { key, value })
        }
        Some("backup") => {
            let rest: Vec<String> = args.collect();
            let note = (!rest.is_empty()).then(|| rest.join(" "));
            Ok(Command::ConfigBackup { note })
        }
        Some("backups") => Ok(Command::ConfigBackups),
        Some("restore") => {
            let name = args
                .next()
                .ok_or_else(|| usage("config restore needs a backup name"))?;
            Ok(Command::ConfigRestore { name })
        }
        Some(other) => Err(usage(format!("unknown config command `{other}`"))),
    }
}

fn parse_project(mut args: impl Iterator<Item = String>) -> Result<ProjectArgs, DashboardError> {
    let mut parsed = ProjectArgs::default();
    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| usage(format!("{name} needs a value")))
        };
        match flag.as_str() {
            "--balance" => parsed.balance = Some(value("--balance")?),
            "--income" => parsed
                .flows
                .push(parse_flow(FlowKind::Income, &value("--income")?)?),
            "--expense" => parsed
                .flows
                .push(parse_flow(FlowKind::Expense, &value("--expense")?)?),
            "--investment" => parsed
                .flows
                .push(parse_flow(FlowKind::Investment, &value("--investment")?)?),
            "--years" => {
                let raw = value("--years")?;
                let years = raw
                    .parse()
                    .map_err(|_| usage(format!("--years expects a whole number, got `{raw}`")))?;
                parsed.years = Some(years);
            }
            "--goal" => parsed.goal = Some(value("--goal")?),
            "--range" => parsed.range = Some(value("--range")?),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse()
                    .map_err(|_| usage(format!("--seed expects an unsigned integer, got `{raw}`")))?;
                parsed.seed = Some(seed);
            }
            "--json" => parsed.json = true,
            "--plain" => parsed.plain = true,
            other => return Err(usage(format!("unknown flag `{other}`"))),
        }
    }
    Ok(parsed)
}

fn parse_flow(kind: FlowKind, raw: &str) -> Result<FlowArg, DashboardError> {
    let (label, amount) = raw
        .rsplit_once('=')
        .ok_or_else(|| usage(format!("expected LABEL=AMOUNT, got `{raw}`")))?;
    Ok(FlowArg {
        kind,
        label: label.to_string(),
        amount: amount.to_string(),
    })
}
