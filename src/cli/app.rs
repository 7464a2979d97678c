//! Main CLI application

use crate::config::{load_config, validate_config, Config};
use crate::device::{CliExecutor, Context, ShellExecutor};
use crate::error::XcvrError;
use crate::sprom::{render_single_report, RuleTable};
use crate::status::run_status;
use crate::ui;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `-h`, `--help` or `?`
    Help,
    /// A report that needs the switch
    Report(Report),
}

/// Reports the app can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// `status`
    Status,
    /// `<interface_name> [details]`
    Interface { name: String, details: bool },
}

/// CLI application
pub struct App {
    /// Loaded configuration (defaults when no file was found)
    config: Config,
    /// Where the configuration came from, if a file was used
    config_path: Option<PathBuf>,
    /// Rules built from the configuration
    rules: RuleTable,
    /// Console context
    ctx: Context,
    /// Bridge to the switch CLI
    executor: Box<dyn CliExecutor>,
}

impl App {
    /// Create an app that talks to the switch through the configured interpreter
    pub fn new(config: Config, config_path: Option<PathBuf>, ctx: Context) -> Result<Self, XcvrError> {
        let executor = ShellExecutor::new(config.interpreter.clone());
        Self::with_executor(config, config_path, ctx, Box::new(executor))
    }

    /// Create an app with a specific executor
    pub fn with_executor(
        config: Config,
        config_path: Option<PathBuf>,
        ctx: Context,
        executor: Box<dyn CliExecutor>,
    ) -> Result<Self, XcvrError> {
        validate_config(&config)?;

        let rules = RuleTable::with_extra_rules(config.rules.clone());

        Ok(App {
            config,
            config_path,
            rules,
            ctx,
            executor,
        })
    }

    /// Produce one report
    pub fn execute(&self, report: &Report) -> Result<(), XcvrError> {
        if let Some(path) = &self.config_path {
            self.ctx
                .print_debug(&format!("Using configuration from {}", path.display()));
        }

        match report {
            Report::Status => run_status(
                self.executor.as_ref(),
                &self.ctx,
                &self.rules,
                self.config.max_workers,
            ),
            Report::Interface { name, details } => {
                let report = self.interface_report(name, *details);
                println!("\n{}", ui::banner("Collected and Modified Transceiver Information"));
                println!("{}", report);
                Ok(())
            }
        }
    }

    /// Single-interface report text
    pub fn interface_report(&self, name: &str, details: bool) -> String {
        render_single_report(self.executor.as_ref(), &self.ctx, &self.rules, name, details)
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("type-check")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show transceiver SPROM data with breakout-aware transceiver types")
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("Show usage information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .help("Enable debug output for detailed execution information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to type-check.yml config file"),
        )
        .arg(
            Arg::new("target")
                .value_name("INTERFACE|status")
                .help("Full interface name (e.g. Ethernet1/57/1) or 'status'"),
        )
        .arg(
            Arg::new("extra")
                .value_name("details")
                .help("Append 'transceiver details' output for the interface"),
        )
}

/// Turn parsed arguments into an [`Invocation`]
pub fn parse_invocation(matches: &ArgMatches) -> Result<Invocation, XcvrError> {
    let target = matches.get_one::<String>("target");

    if matches.get_flag("help") || target.map(String::as_str) == Some("?") {
        return Ok(Invocation::Help);
    }

    let target = target.ok_or_else(|| {
        XcvrError::Usage("Missing required argument <interface_name> or 'status'.".to_string())
    })?;
    let extra = matches.get_one::<String>("extra");

    if target.eq_ignore_ascii_case("status") {
        if extra.is_some() {
            return Err(XcvrError::Usage(
                "'status' command does not accept additional arguments.".to_string(),
            ));
        }
        return Ok(Invocation::Report(Report::Status));
    }

    let details = match extra {
        None => false,
        Some(arg) if arg.eq_ignore_ascii_case("details") => true,
        Some(arg) => {
            return Err(XcvrError::Usage(format!(
                "Unknown argument '{}'. Did you mean 'details'?",
                arg
            )))
        }
    };

    Ok(Invocation::Report(Report::Interface {
        name: target.clone(),
        details,
    }))
}

/// Usage text shown for help and after argument errors
pub fn usage_text() -> String {
    "\
--- type-check usage ---
Collects transceiver SPROM information from the switch and rewrites
breakout transceiver types. Can optionally append 'transceiver details' output.

Usage:
  type-check [-D] [-f FILE] <interface_name> [details]
  type-check [-D] [-f FILE] status

Arguments:
  -D               : Enable debug output for detailed execution information.
  -f, --file FILE  : Read configuration from FILE instead of searching for type-check.yml.
  <interface_name> : Full name of the Ethernet interface (e.g., Ethernet1/57/1).
  details          : Also append the 'transceiver details' lane output for the interface.
  status           : Show 'show interface status' with modified transceiver types for all
                     Ethernet ports. Ports in 'xcvrAbsent' state are not queried; SPROM of
                     parent ports (Ethernet1/X) or first sub-ports (Ethernet1/X/1) is read
                     concurrently.

Examples:
  type-check Ethernet1/57/1
  type-check -D Ethernet1/57/1 details
  type-check status
  type-check -D status"
        .to_string()
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), XcvrError> {
    run_from(std::env::args_os())
}

/// Run the CLI application with provided arguments
pub fn run_from<I, T>(args: I) -> Result<(), XcvrError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().get_matches_from(args);
    let report = match parse_invocation(&matches)? {
        Invocation::Help => {
            println!("{}", usage_text());
            return Ok(());
        }
        Invocation::Report(report) => report,
    };

    let ctx = Context::new().with_debug(matches.get_flag("debug"));
    let explicit = matches.get_one::<PathBuf>("file");
    let (config, config_path) = load_config(explicit.map(PathBuf::as_path))?;

    let app = App::new(config, config_path, ctx)?;
    app.execute(&report)
}
