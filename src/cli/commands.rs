use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::RouterConfig;
use crate::gate::{FileResolver, SystemConfiguration};
use crate::navigator::{Navigation, Navigator};
use crate::router::{dump_table, Resolution, RouteMatch, Router, TableKind};
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for the transaction view router
#[derive(Parser)]
#[command(name = "txroute")]
#[command(about = "Resolve transaction dashboard URLs", long_about = None)]
pub struct Cli {
    /// Router configuration file (YAML or JSON); defaults apply when omitted
    #[arg(short, long, global = true, env = "TXROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a path and print the result as JSON
    ///
    /// Without --table the path is a full application path whose first
    /// segment is the table mount. With --table it is relative to that
    /// table's root.
    Resolve {
        /// Path to resolve, e.g. /transactionDetail/t1/1000/a1/s1
        path: String,

        /// Resolve relative to this table
        #[arg(short, long, value_enum)]
        table: Option<TableArg>,
    },
    /// Print the route tables
    Routes {
        /// Only print this table
        #[arg(short, long, value_enum)]
        table: Option<TableArg>,
    },
    /// Run a full navigation, including the configuration gate
    Navigate {
        /// Full application path
        path: String,

        /// JSON system configuration document read by the gate
        #[arg(short, long)]
        system_config: PathBuf,
    },
}

/// Table selector for `--table`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    /// Transaction detail table
    Detail,
    /// Transaction list table
    List,
}

impl From<TableArg> for TableKind {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Detail => TableKind::TransactionDetail,
            TableArg::List => TableKind::TransactionList,
        }
    }
}

/// JSON shape printed by `resolve` and `navigate`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl ResolutionReport {
    fn not_found() -> Self {
        Self {
            outcome: "notFound",
            table: None,
            pattern: None,
            page: None,
            view: None,
            redirect_to: None,
            params: BTreeMap::new(),
        }
    }

    fn from_match(outcome: &'static str, m: &RouteMatch) -> Self {
        Self {
            outcome,
            table: Some(m.table.to_string()),
            pattern: Some(m.entry.pattern.to_string()),
            page: Some(m.page.to_string()),
            view: m.view().map(|v| v.to_string()),
            redirect_to: m.redirect_target().map(str::to_string),
            params: m
                .params
                .iter()
                .map(|(id, value)| (id.to_string(), value.clone()))
                .collect(),
        }
    }
}

impl From<&Resolution> for ResolutionReport {
    fn from(resolution: &Resolution) -> Self {
        match resolution {
            Resolution::Render(m) => Self::from_match("render", m),
            Resolution::Redirect(m) => Self::from_match("redirect", m),
            Resolution::NotFound => Self::not_found(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NavigationReport {
    #[serde(flatten)]
    resolution: ResolutionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration: Option<Arc<SystemConfiguration>>,
}

/// Router configuration from `--config` (or defaults) with environment overrides
///
/// # Errors
///
/// Fails when the file cannot be loaded or the merged result does not validate.
pub fn load_router_config(path: Option<&Path>) -> anyhow::Result<RouterConfig> {
    let config = match path {
        Some(path) => RouterConfig::load(path)?,
        None => RouterConfig::default(),
    };
    let config = config.apply_runtime(&RuntimeConfig::from_env());
    config
        .validate()
        .context("validating router config with environment overrides")?;
    Ok(config)
}

/// Execute a parsed command
///
/// # Errors
///
/// Returns an error if:
/// - The router configuration cannot be loaded
/// - A route table fails validation
/// - The navigation's configuration gate fails, times out, or the path does not match
pub async fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = load_router_config(cli.config.as_deref())?;
    let router = Arc::new(Router::new(&config).context("building route tables")?);

    match cli.command {
        Commands::Resolve { path, table } => {
            let resolution = match table {
                Some(table) => router.resolve_in(table.into(), &path),
                None => router.resolve(&path),
            };
            let report = ResolutionReport::from(&resolution);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Routes { table } => {
            match table {
                Some(table) => dump_table(router.table(table.into())),
                None => router.dump_routes(),
            }
            Ok(())
        }
        Commands::Navigate {
            path,
            system_config,
        } => {
            let navigator = Navigator::new(
                Arc::clone(&router),
                FileResolver::new(system_config),
                config.gate_timeout(),
            );
            let report = match navigator.navigate(&path).await? {
                Navigation::Rendered(rendered) => NavigationReport {
                    resolution: ResolutionReport::from_match("render", &rendered.matched),
                    configuration: rendered.configuration,
                },
                Navigation::Redirected { matched, .. } => NavigationReport {
                    resolution: ResolutionReport::from_match("redirect", &matched),
                    configuration: None,
                },
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
